//! Config loading for kommander.
//!
//! Handles loading and deserializing settings from `kommander.toml`, falling
//! back to internal defaults when the file is missing or invalid. Also
//! generates the commented default file for `--init`.
//!
//! The config affects rendering and the *initial* session state only;
//! session state itself is never persisted.

use crate::config::general::{General, InternalGeneral};
use crate::config::theme::{RawTheme, Theme};

use serde::Deserialize;

use std::path::PathBuf;
use std::{fs, io};

const DEFAULT_CONFIG: &str = r#"# kommander.toml — configuration for kommander
# Colors accept names (cyan, darkgrey, ...) or hex (#RRGGBB / #RGB).

[general]
# Initial sort order: name | size | date | type
sort_key = "name"
# Show dotfiles on startup
show_hidden = false
# How long success/failure messages stay on screen (milliseconds)
feedback_delay_ms = 800

[theme]
# border = "cyan"
# title = "yellow"
# path = "green"
# directory = "green"
# executable = "red"
# source = "cyan"
# document = "white"
# image = "magenta"
# file = "grey"
# size = "yellow"
# success = "green"
# error = "red"
"#;

/// Raw configuration as read from the toml file, converted into [Config].
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: RawTheme,
}

/// Processed configuration used throughout the application.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    theme: Theme,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            theme: Theme::from(raw.theme),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

impl Config {
    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// `<config_dir>/kommander/kommander.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kommander")
            .join("kommander.toml")
    }

    /// Loads the configuration from the default path.
    ///
    /// A missing file silently yields the defaults; an unparsable file warns
    /// on stderr and yields the defaults.
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Writes the commented default config for `--init`. Refuses to clobber
    /// an existing file.
    pub fn generate_default(path: &std::path::Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        println!("Config written to {}", path.display());
        Ok(())
    }
}
