//! Shell command table.
//!
//! Each submodule contributes its entries through `definitions()`; the
//! [`CommandSet`] keeps them in help order and resolves names and aliases.

pub mod budget;
pub mod config;
pub mod settings;
pub mod snapshot;
pub mod system;

use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub aliases: &'static [&'static str],
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            aliases: &[],
            handler,
        }
    }

    pub fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| *alias == name)
    }
}

pub struct CommandSet {
    entries: Vec<CommandEntry>,
}

impl CommandSet {
    /// All built-in shell commands.
    pub fn builtin() -> Self {
        let entries = snapshot::definitions()
            .into_iter()
            .chain(budget::definitions())
            .chain(settings::definitions())
            .chain(config::definitions())
            .chain(system::definitions())
            .collect();
        Self { entries }
    }

    /// Looks a command up by name or alias; `name` must already be lowercase.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.answers_to(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Primary names followed by aliases, for completion and suggestions.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .map(|entry| entry.name)
            .chain(self.entries.iter().flat_map(|entry| entry.aliases.iter().copied()))
    }
}
