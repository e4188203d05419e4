//! Tab completion and usage hints for the interactive shell.

use bufy_domain::{BudgetCategory, IncomeField, SettingsSection};
use rustyline::{
    completion::{Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use super::commands::CommandSet;

const FILTER_ARGS: [&str; 3] = ["all", "over", "under"];
const CONFIG_ACTIONS: [&str; 2] = ["show", "set"];
const CONFIG_KEYS: [&str; 5] = ["locale", "currency", "theme", "color", "default_filter"];
const SETTINGS_KEYWORDS: [&str; 4] = ["profile", "notifications", "privacy", "help"];

struct CommandInfo {
    name: &'static str,
    aliases: &'static [&'static str],
    usage: &'static str,
}

pub(crate) struct ShellHelper {
    commands: Vec<CommandInfo>,
}

impl ShellHelper {
    pub(crate) fn new(commands: &CommandSet) -> Self {
        Self {
            commands: commands
                .iter()
                .map(|entry| CommandInfo {
                    name: entry.name,
                    aliases: entry.aliases,
                    usage: entry.usage,
                })
                .collect(),
        }
    }

    fn resolve(&self, word: &str) -> Option<&CommandInfo> {
        let word = word.to_ascii_lowercase();
        self.commands.iter().find(|info| {
            info.name == word || info.aliases.iter().any(|alias| *alias == word)
        })
    }

    /// Candidates for the word following `words`; `words[0]` is the command.
    fn candidates(&self, words: &[&str]) -> Vec<String> {
        let Some((first, args)) = words.split_first() else {
            return self
                .commands
                .iter()
                .flat_map(|info| std::iter::once(info.name).chain(info.aliases.iter().copied()))
                .map(str::to_string)
                .collect();
        };
        let Some(info) = self.resolve(first) else {
            return Vec::new();
        };
        match (info.name, args) {
            ("filter", []) => owned(&FILTER_ARGS),
            ("config", []) => owned(&CONFIG_ACTIONS),
            ("config", [action]) if action.eq_ignore_ascii_case("set") => owned(&CONFIG_KEYS),
            ("config", [action, key])
                if action.eq_ignore_ascii_case("set")
                    && key.eq_ignore_ascii_case("default_filter") =>
            {
                owned(&FILTER_ARGS)
            }
            ("settings", []) => SETTINGS_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_string())
                .chain(SettingsSection::ALL.iter().map(|s| s.path().to_string()))
                .collect(),
            ("set", []) => IncomeField::ALL
                .iter()
                .map(|field| field.field_name().to_string())
                .chain(BudgetCategory::ALL.iter().map(|c| c.field_name().to_string()))
                .collect(),
            ("help", []) => self.commands.iter().map(|c| c.name.to_string()).collect(),
            _ => Vec::new(),
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];
        let start = before
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let words: Vec<&str> = before[..start].split_whitespace().collect();
        let needle = before[start..].to_ascii_lowercase();

        let matches = self
            .candidates(&words)
            .into_iter()
            .filter(|candidate| candidate.to_ascii_lowercase().starts_with(&needle))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    /// After `<command> ` shows the rest of its usage line.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos != line.len() || !line.ends_with(' ') {
            return None;
        }
        let mut words = line.split_whitespace();
        let command = words.next()?;
        if words.next().is_some() {
            return None;
        }
        let info = self.resolve(command)?;
        info.usage
            .split_once(' ')
            .map(|(_, rest)| rest.to_string())
    }
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}
