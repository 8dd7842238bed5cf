//! Theme configuration for kommander.
//!
//! Colors are read as strings from the `[theme]` section of kommander.toml
//! (names or hex codes) and converted into crossterm colors. The defaults
//! reproduce the classic console palette of the original commander: cyan
//! borders, yellow title, green directories, red executables.
//!
//! # Examples
//! ```toml
//! [theme]
//! directory = "blue"
//! size = "#d7af5f"
//! ```

use crate::ui::render::Tag;
use crate::utils::helpers::parse_color;

use crossterm::style::Color;
use serde::Deserialize;

/// Raw `[theme]` section, all fields optional color strings.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct RawTheme {
    border: String,
    title: String,
    text: String,
    path: String,
    hint: String,
    directory: String,
    executable: String,
    source: String,
    document: String,
    image: String,
    file: String,
    size: String,
    success: String,
    error: String,
}

impl Default for RawTheme {
    fn default() -> Self {
        RawTheme {
            border: "cyan".into(),
            title: "yellow".into(),
            text: "white".into(),
            path: "green".into(),
            hint: "darkgrey".into(),
            directory: "green".into(),
            executable: "red".into(),
            source: "cyan".into(),
            document: "white".into(),
            image: "magenta".into(),
            file: "grey".into(),
            size: "yellow".into(),
            success: "green".into(),
            error: "red".into(),
        }
    }
}

/// Resolved theme used by the output adapter.
#[derive(Debug, Clone)]
pub struct Theme {
    border: Color,
    title: Color,
    text: Color,
    path: Color,
    hint: Color,
    directory: Color,
    executable: Color,
    source: Color,
    document: Color,
    image: Color,
    file: Color,
    size: Color,
    success: Color,
    error: Color,
}

impl From<RawTheme> for Theme {
    fn from(raw: RawTheme) -> Self {
        Theme {
            border: parse_color(&raw.border),
            title: parse_color(&raw.title),
            text: parse_color(&raw.text),
            path: parse_color(&raw.path),
            hint: parse_color(&raw.hint),
            directory: parse_color(&raw.directory),
            executable: parse_color(&raw.executable),
            source: parse_color(&raw.source),
            document: parse_color(&raw.document),
            image: parse_color(&raw.image),
            file: parse_color(&raw.file),
            size: parse_color(&raw.size),
            success: parse_color(&raw.success),
            error: parse_color(&raw.error),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        RawTheme::default().into()
    }
}

impl Theme {
    /// Resolves a semantic render tag to its configured color.
    pub fn color(&self, tag: Tag) -> Color {
        match tag {
            Tag::Border => self.border,
            Tag::Title => self.title,
            Tag::Text => self.text,
            Tag::Path => self.path,
            Tag::Hint => self.hint,
            Tag::Dir | Tag::DirMarker => self.directory,
            Tag::Executable => self.executable,
            Tag::Source => self.source,
            Tag::Document => self.document,
            Tag::Image => self.image,
            Tag::File => self.file,
            Tag::Size => self.size,
            Tag::Success => self.success,
            Tag::Error => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_the_classic_console() {
        let theme = Theme::default();
        assert_eq!(theme.color(Tag::Border), Color::Cyan);
        assert_eq!(theme.color(Tag::Dir), Color::Green);
        assert_eq!(theme.color(Tag::DirMarker), Color::Green);
        assert_eq!(theme.color(Tag::Executable), Color::Red);
        assert_eq!(theme.color(Tag::Error), Color::Red);
    }

    #[test]
    fn overrides_apply_per_field() -> Result<(), Box<dyn std::error::Error>> {
        let raw: RawTheme = toml::from_str(
            r##"
            directory = "blue"
            size = "#102030"
            "##,
        )?;
        let theme = Theme::from(raw);
        assert_eq!(theme.color(Tag::Dir), Color::Blue);
        assert_eq!(
            theme.color(Tag::Size),
            Color::Rgb {
                r: 0x10,
                g: 0x20,
                b: 0x30
            }
        );
        // Untouched fields keep their defaults.
        assert_eq!(theme.color(Tag::Border), Color::Cyan);
        Ok(())
    }
}
