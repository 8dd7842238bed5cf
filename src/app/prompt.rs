//! Blocking line input for the session loop.
//!
//! The [Prompter] trait is the only seam through which the controller reads
//! the terminal, so tests can drive the loop with scripted input. The real
//! implementation wraps rustyline and keeps an in-memory history for line
//! editing; nothing is written to disk.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use std::io;

/// Blocking line reader used for both the command prompt and the delete
/// confirmation. `Ok(None)` means end of input (Ctrl-C/Ctrl-D); the session
/// loop treats it like an exit command.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Terminal-backed prompter on top of rustyline.
pub struct ReadlinePrompter {
    editor: DefaultEditor,
}

impl ReadlinePrompter {
    pub fn new() -> io::Result<Self> {
        let editor = DefaultEditor::new().map_err(io::Error::other)?;
        Ok(Self { editor })
    }
}

impl Prompter for ReadlinePrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(io::Error::other(err)),
        }
    }
}
