//! Terminal output adapter for kommander.
//!
//! The [Screen] applies the theme to tagged lines from [crate::ui::render]
//! and writes them through crossterm. It is generic over the underlying
//! writer so the session loop can be exercised against a buffer in tests.

use crate::config::Theme;
use crate::ui::render::StyledLine;

use crossterm::cursor::MoveTo;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};

use std::io::{self, Write};
use std::time::Duration;

/// Thin output boundary: clear, paint tagged lines, pause after feedback.
pub struct Screen<'a, W: Write> {
    out: W,
    theme: &'a Theme,
    feedback_delay: Duration,
}

impl<'a, W: Write> Screen<'a, W> {
    pub fn new(out: W, theme: &'a Theme, feedback_delay: Duration) -> Self {
        Self {
            out,
            theme,
            feedback_delay,
        }
    }

    /// Clears the terminal and homes the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Writes the lines, resolving each span's tag to a theme color.
    pub fn paint(&mut self, lines: &[StyledLine]) -> io::Result<()> {
        for line in lines {
            for span in line {
                queue!(
                    self.out,
                    SetForegroundColor(self.theme.color(span.tag)),
                    Print(span.text.as_str())
                )?;
            }
            queue!(self.out, ResetColor, Print("\n"))?;
        }
        self.out.flush()
    }

    /// Keeps a reported message on screen for a perceptible interval before
    /// the next redraw wipes it.
    pub fn pause(&self) {
        if !self.feedback_delay.is_zero() {
            std::thread::sleep(self.feedback_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Feedback;
    use crate::ui::render;

    #[test]
    fn paint_writes_text_and_ansi_reset() -> Result<(), Box<dyn std::error::Error>> {
        let theme = Theme::default();
        let mut buf: Vec<u8> = Vec::new();
        let mut screen = Screen::new(&mut buf, &theme, Duration::ZERO);

        screen.paint(&render::feedback_screen(&Feedback::success("Папка создана")))?;

        let text = String::from_utf8(buf)?;
        assert!(text.contains("Папка создана"));
        assert!(text.contains("\u{1b}["), "expected ANSI styling");
        Ok(())
    }
}
