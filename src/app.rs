//! Session Controller for kommander.
//!
//! - [state]: the [SessionState] tuple and the read-render-parse-dispatch loop.
//! - [command]: one-line command parsing (tail-destination rule).
//! - [handlers]: dispatch of parsed commands to navigation or mutators.
//! - [prompt]: the blocking line-input seam ([Prompter]).

pub mod command;
pub mod handlers;
pub mod prompt;
pub mod state;

pub use command::Command;
pub use prompt::{Prompter, ReadlinePrompter};
pub use state::{Feedback, FeedbackKind, Outcome, SessionState};
