use bufy_core::CoreError;
use bufy_domain::{BudgetDraft, BudgetFilter, Displayable};

use crate::cli::core::{parse_amount, parse_id, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use super::CommandEntry;
use crate::cli::render;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show income, savings and budget totals",
            "summary",
            cmd_summary,
        )
        .with_aliases(&["overview"]),
        CommandEntry::new(
            "list",
            "List budgets matching the current search and filter",
            "list",
            cmd_list,
        )
        .with_aliases(&["ls"]),
        CommandEntry::new(
            "search",
            "Narrow the list by budget name (no term clears the search)",
            "search [term]",
            cmd_search,
        ),
        CommandEntry::new(
            "filter",
            "Show all, over-budget or under-budget entries",
            "filter <all|over|under>",
            cmd_filter,
        ),
        CommandEntry::new(
            "create",
            "Create a budget for an empty category",
            "create <name> <amount>",
            cmd_create,
        ),
        CommandEntry::new(
            "edit",
            "Change the amount of an existing budget",
            "edit <id> <amount> [name]",
            cmd_edit,
        ),
        CommandEntry::new("delete", "Delete a budget", "delete <id>", cmd_delete)
            .with_aliases(&["rm"]),
        CommandEntry::new(
            "view",
            "Open the detail route of a budget",
            "view <id>",
            cmd_view,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.sync_view();
    context.require_snapshot()?;
    output::section("Budget Overview");
    for line in render::overview_lines(&context.view.overview(), &context.amount_format()) {
        output::info(line);
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.sync_view();
    let query = context.view.query();
    if query.search.is_empty() {
        output::section(query.filter.label());
    } else {
        output::section(format!("{} matching \"{}\"", query.filter.label(), query.search));
    }

    if let Some(message) = context.view.empty_state_message() {
        output::info(message);
        return Ok(());
    }
    let entries = context.view.visible_entries();
    output::info(render::budget_table(
        &context.view,
        &entries,
        &context.amount_format(),
    ));
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let term = args.join(" ");
    if term.trim().is_empty() {
        context.view.set_search("");
        output::info("Search cleared.");
    } else {
        output::info(format!("Searching budgets for \"{}\".", term));
        context.view.set_search(term);
    }
    cmd_list(context, &[])
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        output::info(format!(
            "Current filter: {}",
            context.view.query().filter.label()
        ));
        return Ok(());
    };
    let filter = raw
        .parse::<BudgetFilter>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
    context.view.set_filter(filter);
    cmd_list(context, &[])
}

fn cmd_create(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: create <name> <amount>".into(),
        ));
    }
    context.require_snapshot()?;
    let (amount_arg, name_parts) = args.split_last().ok_or_else(|| {
        CommandError::InvalidArguments("usage: create <name> <amount>".into())
    })?;
    let amount = parse_amount(amount_arg)?;
    let draft = BudgetDraft::new(name_parts.join(" "), amount);

    context.sync_view();
    context.view.open_create_dialog();
    let saved = context.view.save(draft, &mut context.actions);
    if !saved {
        context.view.cancel_edit();
    }
    context.sync_view();
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: edit <id> <amount> [name]".into(),
        ));
    }
    context.require_snapshot()?;
    let id = parse_id(args[0])?;
    let amount = parse_amount(args[1])?;

    context.sync_view();
    context.view.begin_edit(id)?;
    let name = if args.len() > 2 {
        args[2..].join(" ")
    } else {
        context
            .view
            .budget_to_edit()
            .map(|entry| entry.name.clone())
            .unwrap_or_default()
    };
    let saved = context
        .view
        .save(BudgetDraft::new(name, amount), &mut context.actions);
    if !saved {
        context.view.cancel_edit();
    }
    context.sync_view();
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        return Err(CommandError::InvalidArguments("usage: delete <id>".into()));
    };
    context.require_snapshot()?;
    let id = parse_id(raw)?;

    context.sync_view();
    let label = context
        .view
        .entries()
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.display_label())
        .ok_or(CoreError::BudgetNotFound(id))?;
    if !context.confirm(&format!("Delete budget {}?", label))? {
        output::info("Operation cancelled.");
        return Ok(());
    }
    context.view.delete(id, &mut context.actions);
    context.sync_view();
    Ok(())
}

fn cmd_view(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        return Err(CommandError::InvalidArguments("usage: view <id>".into()));
    };
    let id = parse_id(raw)?;

    context.sync_view();
    let entry = context
        .view
        .entries()
        .iter()
        .find(|entry| entry.id == id)
        .cloned()
        .ok_or(CoreError::BudgetNotFound(id))?;
    let route = context.view.view_details(id, &mut context.actions)?;
    output::info(format!("{} -> {}", entry.display_label(), route));
    Ok(())
}
