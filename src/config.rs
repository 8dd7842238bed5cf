//! Configuration for kommander, loaded from `kommander.toml`.
//!
//! - [load]: file loading, raw → processed conversion, `--init` generation.
//! - [general]: the `[general]` section (initial sort key, hidden flag,
//!   feedback delay).
//! - [theme]: the `[theme]` section (semantic tag colors).

pub mod general;
pub mod load;
pub mod theme;

pub use general::{General, InternalGeneral};
pub use load::{Config, RawConfig};
pub use theme::{RawTheme, Theme};
