//! Command-line argument handling for kommander.
//!
//! The binary takes at most one argument: a flag (`--help`, `--version`,
//! `--init`) or a starting directory. With no arguments the browser starts
//! in the process working directory.

use crate::config::Config;

use std::path::PathBuf;

pub enum CliAction {
    RunApp,
    RunAppAtPath(PathBuf),
    Exit,
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        return CliAction::RunApp;
    }

    if args.len() > 2 {
        eprintln!("Error: kommander accepts only one argument at a time.");
        eprintln!("Usage: km [PATH] or km [OPTION]");
        return CliAction::Exit;
    }

    match args[1].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--init" => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAppAtPath(resolve_initial_dir(arg))
        }
        other => {
            eprintln!("Error: unknown option '{}'.", other);
            eprintln!("Usage: km [PATH] or km [OPTION]");
            CliAction::Exit
        }
    }
}

/// Expands a leading `~` and canonicalizes where possible; the session falls
/// back to the working directory if the result is not a directory.
pub fn resolve_initial_dir(arg: &str) -> PathBuf {
    let expanded = if arg == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(arg))
    } else if let Some(rest) = arg.strip_prefix("~/") {
        match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(arg),
        }
    } else {
        PathBuf::from(arg)
    };
    expanded.canonicalize().unwrap_or(expanded)
}

fn print_version() {
    println!("kommander v{}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!("kommander — консольный файловый командир");
    println!();
    println!("Usage:");
    println!("  km            start in the current directory");
    println!("  km PATH       start in PATH");
    println!("  km --init     write the default kommander.toml");
    println!("  km --help     this help");
    println!("  km --version  print the version");
    println!();
    println!("Inside the browser, type 'help' for the command list.");
}
