use bufy_domain::SettingsSection;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use super::CommandEntry;
use crate::cli::render;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "settings",
        "Show the settings sidebar or move to another section",
        "settings [path|section]",
        cmd_settings,
    )]
}

fn cmd_settings(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(target) = args.first() {
        let path = resolve_target(target)?;
        context.settings.navigate(path);
    }

    for line in render::settings_lines(&context.settings) {
        output::info(line);
    }
    if context.settings.active_section().is_none() {
        output::hint(format!(
            "`{}` does not match any section.",
            context.settings.active_path()
        ));
    }
    Ok(())
}

/// Accepts a raw route (`/settings-help`) or a section keyword (`help`).
fn resolve_target(target: &str) -> Result<String, CommandError> {
    if target.starts_with('/') {
        return Ok(target.to_string());
    }
    let section = match target.to_ascii_lowercase().as_str() {
        "profile" | "account" => SettingsSection::Profile,
        "notifications" | "notification" => SettingsSection::Notifications,
        "privacy" | "security" => SettingsSection::Privacy,
        "help" | "support" => SettingsSection::Help,
        _ => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown settings section `{}`",
                target
            )))
        }
    };
    Ok(section.path().to_string())
}
