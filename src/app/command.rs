//! Command parsing for the session loop.
//!
//! One input line becomes one [Command]. Parsing follows the
//! *tail-destination rule*: two-argument commands (`copy`, `move`, `rename`)
//! split the remainder at the first space, so the source name may not
//! contain spaces but the destination (the rest of the line) may.
//! Single-argument commands (`del`, `mkdir`, `sort`) take the whole
//! remainder, spaces included.
//!
//! Anything that matches no verb is treated as a subdirectory name.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Clear,
    Parent,
    Home,
    Root,
    Sort(String),
    ShowHidden(bool),
    Copy { source: String, dest: String },
    Move { source: String, dest: String },
    Rename { old: String, new: String },
    Delete(String),
    Mkdir(String),
    /// Fallback: try the whole line as a subdirectory of the current path.
    Enter(String),
    Empty,
    /// A known verb with missing/unusable arguments; carries the usage hint.
    Malformed(&'static str),
}

const USAGE_SORT: &str = "sort <name|size|date|type>";
const USAGE_COPY: &str = "copy <файл> <путь>";
const USAGE_MOVE: &str = "move <файл> <путь>";
const USAGE_RENAME: &str = "rename <старое> <новое>";
const USAGE_DEL: &str = "del <имя>";
const USAGE_MKDIR: &str = "mkdir <имя>";

impl Command {
    /// Parses one raw input line. Never fails; unknown input becomes
    /// [Command::Enter] and is resolved against the filesystem later.
    pub fn parse(line: &str) -> Command {
        match line {
            "" => return Command::Empty,
            "exit" | "q" => return Command::Exit,
            "help" => return Command::Help,
            "clear" => return Command::Clear,
            ".." => return Command::Parent,
            "~" => return Command::Home,
            "/" => return Command::Root,
            "show hidden" => return Command::ShowHidden(true),
            "hide hidden" => return Command::ShowHidden(false),
            _ => {}
        }

        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            // Bare argument-taking verbs are malformed, not folder names.
            None => {
                return match line {
                    "sort" => Command::Malformed(USAGE_SORT),
                    "copy" => Command::Malformed(USAGE_COPY),
                    "move" => Command::Malformed(USAGE_MOVE),
                    "rename" => Command::Malformed(USAGE_RENAME),
                    "del" => Command::Malformed(USAGE_DEL),
                    "mkdir" => Command::Malformed(USAGE_MKDIR),
                    _ => Command::Enter(line.to_string()),
                };
            }
        };

        match verb {
            "sort" if !rest.is_empty() => Command::Sort(rest.to_string()),
            "sort" => Command::Malformed(USAGE_SORT),
            "copy" => two_args(rest, USAGE_COPY, |source, dest| Command::Copy { source, dest }),
            "move" => two_args(rest, USAGE_MOVE, |source, dest| Command::Move { source, dest }),
            "rename" => two_args(rest, USAGE_RENAME, |old, new| Command::Rename { old, new }),
            "del" if !rest.is_empty() => Command::Delete(rest.to_string()),
            "del" => Command::Malformed(USAGE_DEL),
            "mkdir" if !rest.is_empty() => Command::Mkdir(rest.to_string()),
            "mkdir" => Command::Malformed(USAGE_MKDIR),
            _ => Command::Enter(line.to_string()),
        }
    }
}

/// Applies the tail-destination rule to `rest`: first token is the source,
/// everything after the first space is the destination.
fn two_args(
    rest: &str,
    usage: &'static str,
    build: impl FnOnce(String, String) -> Command,
) -> Command {
    match rest.split_once(' ') {
        Some((first, tail)) if !first.is_empty() && !tail.is_empty() => {
            build(first.to_string(), tail.to_string())
        }
        _ => Command::Malformed(usage),
    }
}
