use std::path::PathBuf;

use bufy_domain::SnapshotField;

use crate::cli::core::{parse_amount, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use super::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "load",
            "Load an account snapshot from a JSON file",
            "load <path>",
            cmd_load,
        ),
        CommandEntry::new(
            "set",
            "Change a budget or income field of the loaded snapshot",
            "set <field> <amount>",
            cmd_set,
        ),
    ]
}

fn cmd_load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: load <path>".into()));
    }
    let path = PathBuf::from(args.join(" "));
    context.load_snapshot(&path)?;

    if context.store.is_loaded() {
        output::success(format!("Loaded account snapshot from {}", path.display()));
    } else {
        output::warning(format!("{} holds no account snapshot", path.display()));
    }

    context.config.last_snapshot = Some(path);
    context.persist_config()
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: set <field> <amount>".into(),
        ));
    }
    context.require_snapshot()?;
    let field = SnapshotField::parse(args[0]).ok_or_else(|| {
        CommandError::InvalidArguments(format!("unknown snapshot field `{}`", args[0]))
    })?;
    let amount = parse_amount(args[1])?;

    context
        .store
        .update(|snapshot| snapshot.set_field(field, amount));
    context.sync_view();
    output::success(format!(
        "{} set to {}",
        field.field_name(),
        context.amount_format().format(amount)
    ));
    Ok(())
}
