use bufy_domain::BudgetFilter;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use super::CommandEntry;
use crate::currency::symbol_for;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and manage CLI preferences",
        "config [show|set <locale|currency|theme|color|default_filter> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_config(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(
                    "usage: config set <locale|currency|theme|color|default_filter> <value>"
                        .into(),
                ));
            }
            let value = args[2..].join(" ");
            set_config_value(context, args[1], value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{}`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    output::section("Configuration");
    output::info(format!("  locale          {}", config.locale));
    output::info(format!(
        "  currency        {} ({})",
        config.currency,
        symbol_for(&config.currency).trim_end()
    ));
    output::info(format!("  theme           {}", config.theme));
    output::info(format!(
        "  color           {}",
        if config.ui_color_enabled { "on" } else { "off" }
    ));
    output::info(format!("  default_filter  {}", config.default_filter));
    let last = config
        .last_snapshot
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(none)".into());
    output::info(format!("  last_snapshot   {}", last));
    output::info(format!(
        "  file            {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    context
        .config
        .set_value(key, value)
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;

    if key.eq_ignore_ascii_case("default_filter") {
        let filter = context
            .config
            .default_filter
            .parse::<BudgetFilter>()
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        context.view.set_filter(filter);
    }

    context.persist_config()?;
    context.apply_output_preferences();
    output::success(format!("Updated {}.", key));
    Ok(())
}
