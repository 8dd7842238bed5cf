//! The general configuration settings for kommander.
//!
//! [General] is the raw `[general]` section as deserialized from
//! kommander.toml; [InternalGeneral] is the validated form used by the
//! application (parsed sort key, clamped delay).

use crate::core::formatter::SortKey;
use crate::utils::helpers::{clamp_feedback_delay, DEFAULT_FEEDBACK_DELAY_MS};

use serde::Deserialize;

use std::time::Duration;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    sort_key: String,
    show_hidden: bool,
    feedback_delay_ms: u64,
}

impl Default for General {
    fn default() -> Self {
        General {
            sort_key: "name".into(),
            show_hidden: false,
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    sort_key: SortKey,
    show_hidden: bool,
    feedback_delay: Duration,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let sort_key = match g.sort_key.parse::<SortKey>() {
            Ok(key) => key,
            Err(()) => {
                eprintln!(
                    "[Warning] unknown sort_key '{}' in config, using 'name'",
                    g.sort_key
                );
                SortKey::Name
            }
        };
        Self {
            sort_key,
            show_hidden: g.show_hidden,
            feedback_delay: Duration::from_millis(clamp_feedback_delay(g.feedback_delay_ms)),
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_session_contract() {
        let general = InternalGeneral::from(General::default());
        assert_eq!(general.sort_key(), SortKey::Name);
        assert!(!general.show_hidden());
        assert_eq!(general.feedback_delay(), Duration::from_millis(800));
    }

    #[test]
    fn invalid_sort_key_falls_back() {
        let raw = General {
            sort_key: "speed".into(),
            show_hidden: true,
            feedback_delay_ms: 200,
        };
        let general = InternalGeneral::from(raw);
        assert_eq!(general.sort_key(), SortKey::Name);
        assert!(general.show_hidden());
        assert_eq!(general.feedback_delay(), Duration::from_millis(200));
    }
}
