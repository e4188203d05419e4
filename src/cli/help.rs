use crate::cli::output::{info, section};
use crate::cli::commands::{CommandEntry, CommandSet};

pub fn print_overview(commands: &CommandSet) {
    section("Available commands");
    for entry in commands.iter() {
        info(format!("  {:<10} {}", entry.name, entry.description));
    }
    info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    section(format!("Help: {}", entry.name));
    info(format!("  Description: {}", entry.description));
    info(format!("  Usage: {}", entry.usage));
    if !entry.aliases.is_empty() {
        info(format!("  Aliases: {}", entry.aliases.join(", ")));
    }
}
