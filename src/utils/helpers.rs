//! Helpers for kommander.
//!
//! - Color parsing from names or hex codes into crossterm colors.
//! - Displaying the home directory as `~` in the path line.
//! - Clamping the feedback delay to sane values.

use crossterm::style::Color;
use std::path::{Path, MAIN_SEPARATOR};

/// Lower bound for the configured feedback delay.
pub const MIN_FEEDBACK_DELAY_MS: u64 = 100;
/// Delay used when the config does not set one.
pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 800;
/// Upper bound for the configured feedback delay.
pub const MAX_FEEDBACK_DELAY_MS: u64 = 5000;

/// Parses a string (color name or hex) into a crossterm color.
///
/// Supports the standard names (red, green, etc.) as well as hex values
/// (#RRGGBB or #RGB). Unknown strings fall back to the terminal default.
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "grey" | "gray" => Color::Grey,
        "darkgrey" | "darkgray" => Color::DarkGrey,
        "darkred" => Color::DarkRed,
        "darkgreen" => Color::DarkGreen,
        "darkyellow" => Color::DarkYellow,
        "darkblue" => Color::DarkBlue,
        "darkmagenta" => Color::DarkMagenta,
        "darkcyan" => Color::DarkCyan,
        _ => {
            if let Some(hex) = s.strip_prefix('#') {
                match hex.len() {
                    6 => {
                        if let Ok(rgb) = u32::from_str_radix(hex, 16) {
                            return rgb_color(rgb);
                        }
                    }
                    3 => {
                        let expanded = hex
                            .chars()
                            .map(|c| format!("{c}{c}"))
                            .collect::<String>();
                        if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                            return rgb_color(rgb);
                        }
                    }
                    _ => {}
                }
            }
            // fallback
            Color::Reset
        }
    }
}

fn rgb_color(rgb: u32) -> Color {
    Color::Rgb {
        r: ((rgb >> 16) & 0xFF) as u8,
        g: ((rgb >> 8) & 0xFF) as u8,
        b: (rgb & 0xFF) as u8,
    }
}

/// Shortens the home directory prefix of a path to `~` for the path line.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        let mut short = stripped.display().to_string();
        if short.starts_with(MAIN_SEPARATOR) {
            short.remove(0);
        }
        return format!("~{}{}", MAIN_SEPARATOR, short);
    }
    path.display().to_string()
}

/// Clamps the configured feedback delay, warning when the value was out of
/// range.
pub fn clamp_feedback_delay(value: u64) -> u64 {
    let clamped = value.clamp(MIN_FEEDBACK_DELAY_MS, MAX_FEEDBACK_DELAY_MS);
    if clamped != value {
        eprintln!(
            "[Warning] feedback_delay_ms={} out of range ({}..={}), clamped to {}",
            value, MIN_FEEDBACK_DELAY_MS, MAX_FEEDBACK_DELAY_MS, clamped
        );
    }
    clamped
}
