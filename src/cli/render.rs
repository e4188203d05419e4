//! Text rendering for the budget list, overview cards and settings sidebar.

use bufy_core::{BudgetListView, BudgetOverview, BudgetService, SettingsNavigation, SETTINGS_TITLE};
use bufy_domain::BudgetEntry;

use crate::currency::AmountFormat;

use super::output::current_preferences;
use super::table::{terminal_width, Alignment, Table, TableColumn};

const FIXED_COLUMNS_WIDTH: usize = 48;

pub fn overview_lines(overview: &BudgetOverview, amounts: &AmountFormat) -> Vec<String> {
    let rows = [
        ("Monthly Income", overview.monthly_income),
        ("Disposable Income", overview.disposable_income),
        ("Desired Savings", overview.desired_savings),
        ("Remaining Balance", overview.remaining_balance),
        ("Total Budgeted", overview.metrics.total_budgeted),
        ("Total Spent", overview.metrics.total_spent),
    ];
    let mut lines: Vec<String> = rows
        .iter()
        .map(|(label, value)| format!("  {:<18} {}", label, amounts.format(*value)))
        .collect();
    lines.push(format!(
        "  {:<18} {}",
        "Over Budget", overview.metrics.over_budget_count
    ));
    lines
}

/// Renders the visible entries as a table with share and status columns.
pub fn budget_table(
    view: &BudgetListView,
    entries: &[BudgetEntry],
    amounts: &AmountFormat,
) -> String {
    let name_width = terminal_width().saturating_sub(FIXED_COLUMNS_WIDTH).max(12);
    let mut table = Table::new(vec![
        TableColumn::new("ID", Alignment::Right),
        TableColumn::new("Budget", Alignment::Left).max_width(name_width),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Share", Alignment::Right),
        TableColumn::new("Status", Alignment::Left),
    ]);
    let metrics = view.metrics();
    for entry in entries {
        let share = BudgetService::proportional_share(entry, &metrics)
            .map(|value| amounts.format(value))
            .unwrap_or_else(|| "-".to_string());
        let status = if view.is_over_budget(entry) {
            "Over"
        } else {
            "Under"
        };
        table.push_row(vec![
            entry.id.to_string(),
            entry.name.clone(),
            amounts.format(entry.amount),
            share,
            status.to_string(),
        ]);
    }
    table.render()
}

pub fn settings_lines(nav: &SettingsNavigation) -> Vec<String> {
    let marker = if current_preferences().plain_mode {
        "*"
    } else {
        "▸"
    };
    let mut lines = vec![SETTINGS_TITLE.to_string()];
    lines.extend(nav.items().into_iter().map(|item| {
        let prefix = if item.active { marker } else { " " };
        format!(
            "  {} {:<22} {}",
            prefix,
            item.section.label(),
            item.section.path()
        )
    }));
    lines
}
