//! Rendering for kommander, split per the design into a pure layer and a
//! terminal adapter:
//! - [render]: screens as lines of semantically tagged spans, no I/O.
//! - [screen]: crossterm adapter mapping tags to theme colors.

pub mod render;
pub mod screen;

pub use render::{Span, StyledLine, Tag};
pub use screen::Screen;
