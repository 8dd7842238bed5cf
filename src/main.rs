//! main.rs
//! Entry point for kommander

use kommander::app::{ReadlinePrompter, SessionState};
use kommander::config::Config;
use kommander::ui::Screen;
use kommander::utils::cli::{handle_args, CliAction};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        // Leave the terminal colors sane whatever happened mid-paint.
        let _ = crossterm::execute!(std::io::stdout(), crossterm::style::ResetColor);
        eprintln!("\n[kommander] Error occurred: {}", info);
    }));

    let action = handle_args();

    let initial_path = match action {
        CliAction::Exit => return Ok(()),
        CliAction::RunApp => None,
        CliAction::RunAppAtPath(path) => Some(path),
    };

    let config = Config::load();

    let mut session = match initial_path {
        Some(path) => SessionState::from_dir(&config, &path)?,
        None => SessionState::new(&config)?,
    };

    let mut prompter = ReadlinePrompter::new()?;
    let mut screen = Screen::new(
        std::io::stdout(),
        config.theme(),
        config.general().feedback_delay(),
    );

    session.run(&mut prompter, &mut screen)
}
