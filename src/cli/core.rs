//! Command dispatch, error reporting and shared helpers for the shell.

use std::{io, path::Path};

use strsim::levenshtein;

use crate::errors::{BudgetError, CliError};
use crate::utils::snapshot_file;

use super::output;
use super::commands::CommandEntry;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No account snapshot loaded. Use `load <path>` first.")]
    SnapshotNotLoaded,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<bufy_core::CoreError> for CommandError {
    fn from(err: bufy_core::CoreError) -> Self {
        match BudgetError::from(err) {
            BudgetError::SnapshotNotLoaded => CommandError::SnapshotNotLoaded,
            other => CommandError::Core(other),
        }
    }
}

impl From<bufy_config::ConfigError> for CommandError {
    fn from(err: bufy_config::ConfigError) -> Self {
        CommandError::Core(BudgetError::from(err))
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.commands.get(command).map(|entry| entry.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        let outcome = match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        };
        self.flush_notifications();
        outcome
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .commands
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        self.confirm("Exit shell?").map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::SnapshotNotLoaded => {
                output::error(CommandError::SnapshotNotLoaded);
                output::hint("Try `load account.json` to get started.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }

    /// Picks up store changes before a command reads the view.
    pub(crate) fn sync_view(&mut self) {
        self.view.sync();
    }

    pub(crate) fn require_snapshot(&self) -> Result<(), CommandError> {
        if self.store.is_loaded() {
            Ok(())
        } else {
            Err(CommandError::SnapshotNotLoaded)
        }
    }

    /// Loads `path` into the store, replacing whatever was there.
    pub(crate) fn load_snapshot(&mut self, path: &Path) -> CommandResult {
        match snapshot_file::load_snapshot(path)? {
            Some(snapshot) => self.store.set(snapshot),
            None => self.store.clear(),
        }
        self.snapshot_path = Some(path.to_path_buf());
        self.sync_view();
        Ok(())
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    fn flush_notifications(&mut self) {
        for notification in self.view.drain_notifications() {
            output::notification(&notification);
        }
    }
}

pub(crate) fn parse_amount(input: &str) -> Result<f64, CommandError> {
    let cleaned: String = input.chars().filter(|ch| *ch != ',').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CommandError::InvalidArguments(format!("invalid amount `{}`", input)))
}

pub(crate) fn parse_id(input: &str) -> Result<u32, CommandError> {
    input
        .trim_start_matches('#')
        .parse::<u32>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid budget id `{}`", input)))
}
