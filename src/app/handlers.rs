//! Command dispatch for the session loop.
//!
//! Implements the [SessionState] methods that turn a parsed [Command] into
//! either a navigation state transition or a filesystem mutation, and decide
//! what the loop does next. Every failure is recovered locally: state stays
//! unchanged, a message is reported, the loop continues.
//!
//! Path resolution: sources and the `del`/`mkdir` targets resolve against
//! the browsed directory; relative destinations of `copy`/`move`/`rename`
//! resolve against the process working directory (see `core::ops`).

use crate::app::command::Command;
use crate::app::prompt::Prompter;
use crate::app::state::{Feedback, Outcome, SessionState};
use crate::core::formatter::SortKey;
use crate::core::ops;

use std::path::Path;

impl SessionState {
    /// Interprets one command. The prompter is only used by `del` for its
    /// confirmation question.
    pub fn dispatch(&mut self, command: Command, prompter: &mut dyn Prompter) -> Outcome {
        match command {
            Command::Exit => Outcome::Quit,
            Command::Help => Outcome::Help,
            Command::Clear | Command::Empty => Outcome::Redraw,
            Command::Parent => self.go_parent(),
            Command::Home => self.go_home(),
            Command::Root => self.go_root(),
            Command::Sort(key) => self.change_sort(&key),
            Command::ShowHidden(show) => self.change_hidden(show),
            Command::Copy { source, dest } => {
                let source = self.current_dir().join(source);
                report(
                    ops::copy_file(&source, &dest).is_ok(),
                    "Файл скопирован",
                    "Ошибка копирования",
                )
            }
            Command::Move { source, dest } => {
                let source = self.current_dir().join(source);
                report(
                    ops::move_entry(&source, &dest).is_ok(),
                    "Файл перемещён",
                    "Ошибка перемещения",
                )
            }
            Command::Rename { old, new } => {
                let old = self.current_dir().join(old);
                report(
                    ops::move_entry(&old, &new).is_ok(),
                    "Переименовано",
                    "Ошибка переименования",
                )
            }
            Command::Delete(name) => self.delete_with_confirmation(&name, prompter),
            Command::Mkdir(name) => {
                let target = self.current_dir().join(name);
                report(
                    ops::create_dir(&target).is_ok(),
                    "Папка создана",
                    "Ошибка создания",
                )
            }
            Command::Enter(name) => self.enter_subdir(&name),
            Command::Malformed(usage) => {
                Outcome::Report(Feedback::error(format!("Использование: {usage}")))
            }
        }
    }

    // Navigation transitions. Each keeps the previous directory on failure.

    fn go_parent(&mut self) -> Outcome {
        match self.current_dir().parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.set_current_dir(parent);
                Outcome::Redraw
            }
            None => Outcome::Report(Feedback::error("Уже в корне!")),
        }
    }

    fn go_home(&mut self) -> Outcome {
        match dirs::home_dir().filter(|home| home.is_dir()) {
            Some(home) => {
                self.set_current_dir(home);
                Outcome::Redraw
            }
            None => Outcome::Report(Feedback::error("Не могу найти домашнюю папку")),
        }
    }

    fn go_root(&mut self) -> Outcome {
        // The last ancestor of an absolute path is the root of its tree
        // (the volume root on Windows).
        let root = self
            .current_dir()
            .ancestors()
            .last()
            .map(Path::to_path_buf);
        match root.filter(|r| r.is_dir()) {
            Some(root) => {
                self.set_current_dir(root);
                Outcome::Redraw
            }
            None => Outcome::Report(Feedback::error("Не могу перейти в корень")),
        }
    }

    fn change_sort(&mut self, key: &str) -> Outcome {
        match key.parse::<SortKey>() {
            Ok(key) => {
                self.set_sort_key(key);
                Outcome::Report(Feedback::success(format!("Сортировка изменена на {key}")))
            }
            Err(()) => Outcome::Report(Feedback::error("Неизвестный тип сортировки")),
        }
    }

    fn change_hidden(&mut self, show: bool) -> Outcome {
        self.set_show_hidden(show);
        let text = if show {
            "Показываю скрытые файлы"
        } else {
            "Скрытые файлы скрыты"
        };
        Outcome::Report(Feedback::success(text))
    }

    /// `del` asks before acting; only an exact `y`/`yes` deletes. Anything
    /// else (including end of input) cancels silently.
    fn delete_with_confirmation(&mut self, name: &str, prompter: &mut dyn Prompter) -> Outcome {
        let question = format!("⚠️  Точно удалить '{name}'? (y/n): ");
        let answer = match prompter.read_line(&question) {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => return Outcome::Redraw,
        };

        if answer != "y" && answer != "yes" {
            return Outcome::Redraw;
        }

        let target = self.current_dir().join(name);
        report(
            ops::remove_entry(&target).is_ok(),
            "Удалено",
            "Ошибка удаления",
        )
    }

    /// Fallback for unrecognized input: try it as a subdirectory name.
    fn enter_subdir(&mut self, name: &str) -> Outcome {
        let candidate = self.current_dir().join(name);
        if candidate.is_dir() {
            let resolved = candidate.canonicalize().unwrap_or(candidate);
            self.set_current_dir(resolved);
            Outcome::Redraw
        } else {
            Outcome::Report(Feedback::error(format!(
                "Неизвестная команда или папка '{name}'"
            )))
        }
    }
}

fn report(ok: bool, success: &str, failure: &str) -> Outcome {
    if ok {
        Outcome::Report(Feedback::success(success))
    } else {
        Outcome::Report(Feedback::error(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::FeedbackKind;
    use crate::config::Config;
    use std::io;
    use tempfile::tempdir;

    /// Feeds pre-scripted answers to the dispatcher.
    struct Scripted(Vec<String>);

    impl Scripted {
        fn answers(lines: &[&str]) -> Self {
            Scripted(lines.iter().rev().map(|s| s.to_string()).collect())
        }
    }

    impl Prompter for Scripted {
        fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.0.pop())
        }
    }

    fn state_in(path: &Path) -> SessionState {
        let config = Config::default();
        SessionState::from_dir(&config, path).expect("session state")
    }

    fn expect_report(outcome: Outcome) -> Feedback {
        match outcome {
            Outcome::Report(fb) => fb,
            _ => panic!("expected a reported message"),
        }
    }

    #[test]
    fn parent_at_root_keeps_state_and_reports() {
        let mut state = state_in(Path::new("/"));
        let mut prompter = Scripted::answers(&[]);

        let outcome = state.dispatch(Command::Parent, &mut prompter);
        let fb = expect_report(outcome);
        assert_eq!(fb.kind, FeedbackKind::Error);
        assert_eq!(state.current_dir(), Path::new("/"));
    }

    #[test]
    fn unknown_sort_key_leaves_sort_unchanged() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let mut state = state_in(temp.path());
        let mut prompter = Scripted::answers(&[]);

        let fb = expect_report(state.dispatch(Command::Sort("speed".into()), &mut prompter));
        assert_eq!(fb.kind, FeedbackKind::Error);
        assert_eq!(state.sort_key(), SortKey::Name);

        let fb = expect_report(state.dispatch(Command::Sort("date".into()), &mut prompter));
        assert_eq!(fb.kind, FeedbackKind::Success);
        assert_eq!(state.sort_key(), SortKey::Date);
        Ok(())
    }

    #[test]
    fn mkdir_then_enter_navigates_into_new_dir() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let mut state = state_in(temp.path());
        let mut prompter = Scripted::answers(&[]);

        let fb = expect_report(state.dispatch(Command::Mkdir("foo".into()), &mut prompter));
        assert_eq!(fb.kind, FeedbackKind::Success);

        let outcome = state.dispatch(Command::Enter("foo".into()), &mut prompter);
        assert!(matches!(outcome, Outcome::Redraw));
        assert_eq!(
            state.current_dir().canonicalize()?,
            temp.path().join("foo").canonicalize()?
        );
        Ok(())
    }

    #[test]
    fn enter_unknown_name_reports_and_stays() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let mut state = state_in(temp.path());
        let mut prompter = Scripted::answers(&[]);

        let fb = expect_report(state.dispatch(Command::Enter("nope".into()), &mut prompter));
        assert_eq!(fb.kind, FeedbackKind::Error);
        assert_eq!(state.current_dir(), temp.path());
        Ok(())
    }

    #[test]
    fn delete_requires_exact_affirmative() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let victim = temp.path().join("victim.txt");

        for refusal in ["", "n", "no", "Y", "да"] {
            std::fs::write(&victim, b"keep me")?;
            let mut state = state_in(temp.path());
            let mut prompter = Scripted::answers(&[refusal]);

            let outcome = state.dispatch(Command::Delete("victim.txt".into()), &mut prompter);
            assert!(matches!(outcome, Outcome::Redraw), "answer {refusal:?}");
            assert!(victim.exists(), "answer {refusal:?} must not delete");
        }

        for consent in ["y", "yes"] {
            std::fs::write(&victim, b"goodbye")?;
            let mut state = state_in(temp.path());
            let mut prompter = Scripted::answers(&[consent]);

            let fb =
                expect_report(state.dispatch(Command::Delete("victim.txt".into()), &mut prompter));
            assert_eq!(fb.kind, FeedbackKind::Success);
            assert!(!victim.exists());
        }
        Ok(())
    }

    #[test]
    fn delete_is_recursive_for_directories() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let sub = temp.path().join("bundle");
        std::fs::create_dir_all(sub.join("deep"))?;
        std::fs::write(sub.join("deep/file.txt"), b"x")?;

        let mut state = state_in(temp.path());
        let mut prompter = Scripted::answers(&["yes"]);

        let fb = expect_report(state.dispatch(Command::Delete("bundle".into()), &mut prompter));
        assert_eq!(fb.kind, FeedbackKind::Success);
        assert!(!sub.exists());
        Ok(())
    }

    #[test]
    fn hidden_toggle_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let mut state = state_in(temp.path());
        let mut prompter = Scripted::answers(&[]);

        state.dispatch(Command::ShowHidden(true), &mut prompter);
        assert!(state.show_hidden());
        state.dispatch(Command::ShowHidden(false), &mut prompter);
        assert!(!state.show_hidden());
        Ok(())
    }
}
