//! Command dispatch, error reporting, and shell context helpers.

use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::core::services::ServiceError;
use crate::errors::{ConfigError, SplitError};

use super::output;
use super::registry::CommandEntry;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single command; reported and then the shell moves on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("exit requested")]
    ExitRequested,
    #[error("{message}")]
    InvalidArguments { message: String, usage: &'static str },
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CommandError {
    pub(crate) fn arguments(message: impl Into<String>, usage: &'static str) -> Self {
        CommandError::InvalidArguments {
            message: message.into(),
            usage,
        }
    }
}

impl From<SplitError> for CommandError {
    fn from(err: SplitError) -> Self {
        CommandError::Service(ServiceError::Split(err))
    }
}

/// Failures that stop the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

const SUGGESTION_DISTANCE: usize = 3;

impl ShellContext {
    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(&mut self, command: &str, raw: &str, args: &[&str]) -> LoopControl {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return LoopControl::Continue;
        };
        match handler(self, args) {
            Ok(()) => LoopControl::Continue,
            Err(CommandError::ExitRequested) => LoopControl::Exit,
            Err(err) => {
                self.report_error(err);
                LoopControl::Continue
            }
        }
    }

    /// Tokenizes and runs one input line.
    pub(crate) fn process_line(&mut self, line: &str) -> LoopControl {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(format!("Could not parse line: {err}"));
                return LoopControl::Continue;
            }
        };
        let Some(raw) = tokens.first() else {
            return LoopControl::Continue;
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        let control = self.dispatch(&command, raw, &args);
        if control == LoopControl::Exit {
            self.running = false;
        }
        control
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                output::hint(format!("Did you mean `{}`?", name.to_uppercase()));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments { message, usage } => {
                tracing::warn!(command = ?self.last_command, %message, "invalid arguments");
                output::error(message);
                output::hint(format!("Usage: {usage}"));
            }
            other => {
                tracing::warn!(command = ?self.last_command, error = %other, "command failed");
                output::error(other);
            }
        }
    }

    /// Confirms a successful command; script runs stay silent.
    pub(crate) fn confirm(&self, message: impl std::fmt::Display) {
        if self.mode == CliMode::Interactive {
            output::success(message);
        }
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> ShellContext {
    let mut context = ShellContext::new(CliMode::Script, crate::config::Config::default());
    for line in lines {
        if context.process_line(line) == LoopControl::Exit {
            break;
        }
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETUP: [&str; 4] = [
        "CREATE_USER u1 Ana ana@example.com 555-0001",
        "CREATE_USER u2 Ben ben@example.com 555-0002",
        "CREATE_USER u3 Cy cy@example.com 555-0003",
        "CREATE_GROUP trip 3 u1 u2 u3",
    ];

    fn script(extra: &[&str]) -> ShellContext {
        let lines: Vec<&str> = SETUP.iter().chain(extra.iter()).copied().collect();
        process_script(&lines)
    }

    fn balance(context: &ShellContext, creditor: &str, debtor: &str) -> f64 {
        context
            .app
            .groups()
            .get("trip")
            .unwrap()
            .ledger()
            .balance(creditor, debtor)
    }

    #[test]
    fn script_builds_users_and_groups() {
        let context = script(&[]);
        assert_eq!(context.app.users().len(), 3);
        let user = context.app.users().get("u2").unwrap();
        assert_eq!(user.email.as_deref(), Some("ben@example.com"));
        assert_eq!(
            context.app.groups().get("trip").unwrap().members(),
            ["u1", "u2", "u3"]
        );
    }

    #[test]
    fn expense_commands_update_ledger() {
        let context = script(&[
            "EXPENSE trip u1 90 3 u1 u2 u3 EQUAL",
            "expense trip u2 30 2 u2 u3 EXACT 0 30",
            "EXPENSE trip u3 50 2 u1 u3 percent 40 60",
        ]);
        assert_eq!(balance(&context, "u1", "u2"), 30.0);
        assert_eq!(balance(&context, "u2", "u3"), 30.0);
        assert_eq!(balance(&context, "u1", "u3"), 10.0);
    }

    #[test]
    fn failing_commands_do_not_stop_the_script() {
        let context = script(&[
            "EXPENSE trip u1 10 2 u1 ghost EQUAL",
            "EXPENSE trip u1 10 2 u1 u2 EXACT 5 5.01",
            "EXPENSE trip u1 10 2 u1 u2 SHARES",
            "EXPENSE trip u1 ten 2 u1 u2 EQUAL",
            "CREAT_USER u9 Typo",
            "",
            "EXPENSE trip u1 10 2 u1 u2 EQUAL",
        ]);
        assert_eq!(balance(&context, "u1", "u2"), 5.0);
        assert_eq!(balance(&context, "u1", "u3"), 0.0);
        assert!(context.running);
    }

    #[test]
    fn show_compacts_the_ledger() {
        let context = script(&[
            "EXPENSE trip u1 30 2 u2 u3 EQUAL",
            "EXPENSE trip u2 15 1 u3 EXACT 15",
            "SHOW trip",
        ]);
        assert_eq!(balance(&context, "u2", "u3"), 0.0);
        assert_eq!(balance(&context, "u1", "u3"), 30.0);
    }

    #[test]
    fn add_user_to_group_and_exit() {
        let context = script(&[
            "CREATE_USER u4 Di",
            "ADD_USER_TO_GROUP trip u4",
            "ADD_USER_TO_GROUP trip u4",
            "EXIT",
            "EXPENSE trip u1 40 2 u1 u4 EQUAL",
        ]);
        assert_eq!(context.app.groups().get("trip").unwrap().members().len(), 4);
        assert_eq!(balance(&context, "u1", "u4"), 0.0);
        assert!(!context.running);
    }
}
