//! Session state and main controller loop for kommander.
//!
//! [SessionState] holds the mutable session tuple driving everything:
//! - the current directory (always an existing directory at the start of
//!   each loop iteration; failed navigations keep the previous value),
//! - the active sort key,
//! - the hidden-file visibility flag.
//!
//! `run` is the read-render-parse-dispatch loop: clear, render the listing,
//! read one line, parse it into a [Command], dispatch, report, repeat until
//! the exit command (or end of input).

use crate::app::command::Command;
use crate::app::prompt::Prompter;
use crate::config::Config;
use crate::core::formatter::SortKey;
use crate::core::list_directory;
use crate::ui::render;
use crate::ui::screen::Screen;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

const PROMPT: &str = "> ";
const HELP_CONTINUE: &str = "Нажми Enter чтобы продолжить...";

/// What the dispatcher decided the loop should do next.
pub enum Outcome {
    /// Terminal state; the loop ends.
    Quit,
    /// Nothing to report, just render the next frame.
    Redraw,
    /// Show the help screen and wait for Enter.
    Help,
    /// Show a message, pause so it stays readable, then render.
    Report(Feedback),
}

/// A user-facing success/failure message produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Feedback {
            text: text.into(),
            kind: FeedbackKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Feedback {
            text: text.into(),
            kind: FeedbackKind::Error,
        }
    }
}

/// The mutable session tuple. Only the dispatcher mutates it; the Listing
/// Engine and renderer read it.
pub struct SessionState {
    current_dir: PathBuf,
    sort_key: SortKey,
    show_hidden: bool,
}

impl SessionState {
    /// Starts a session in the process working directory.
    pub fn new(config: &Config) -> io::Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::from_dir(config, &current_dir)
    }

    /// Starts a session in `initial_path`, falling back to the process
    /// working directory when it is not a directory.
    pub fn from_dir(config: &Config, initial_path: &Path) -> io::Result<Self> {
        let current_dir = if initial_path.is_dir() {
            initial_path.to_path_buf()
        } else {
            std::env::current_dir()?
        };

        Ok(Self {
            current_dir,
            sort_key: config.general().sort_key(),
            show_hidden: config.general().show_hidden(),
        })
    }

    // Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    // State transitions, used by the dispatcher.

    pub(crate) fn set_current_dir(&mut self, path: PathBuf) {
        self.current_dir = path;
    }

    pub(crate) fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub(crate) fn set_show_hidden(&mut self, show: bool) {
        self.show_hidden = show;
    }

    /// The main session loop. Blocks until `exit`/`q` or end of input.
    pub fn run<W: Write>(
        &mut self,
        prompter: &mut dyn Prompter,
        screen: &mut Screen<W>,
    ) -> io::Result<()> {
        loop {
            screen.clear()?;
            let entries = list_directory(&self.current_dir, self.sort_key, self.show_hidden);
            screen.paint(&render::session_screen(self, &entries))?;

            let Some(line) = prompter.read_line(PROMPT)? else {
                screen.paint(&render::farewell_screen())?;
                break;
            };

            match self.dispatch(Command::parse(&line), prompter) {
                Outcome::Quit => {
                    screen.paint(&render::farewell_screen())?;
                    break;
                }
                Outcome::Redraw => {}
                Outcome::Help => {
                    screen.paint(&render::help_screen())?;
                    if prompter.read_line(HELP_CONTINUE)?.is_none() {
                        break;
                    }
                }
                Outcome::Report(feedback) => {
                    screen.paint(&render::feedback_screen(&feedback))?;
                    screen.pause();
                }
            }
        }
        Ok(())
    }
}
