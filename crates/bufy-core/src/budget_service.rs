//! Derives budget entries, aggregate figures and filtered lists from an account snapshot.

use bufy_domain::{
    AccountSnapshot, BudgetCategory, BudgetEntry, BudgetFilter, BudgetQuery, IncomeField,
};

/// Aggregate figures shown above the budget list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetMetrics {
    pub total_budgeted: f64,
    pub total_spent: f64,
    pub over_budget_count: usize,
}

/// Stateless budgeting utilities that operate over [`AccountSnapshot`] values.
pub struct BudgetService;

impl BudgetService {
    /// Projects the snapshot into one entry per spending category, in fixed order.
    ///
    /// Returns an empty list when no snapshot is available.
    pub fn project(snapshot: Option<&AccountSnapshot>) -> Vec<BudgetEntry> {
        let Some(snapshot) = snapshot else {
            return Vec::new();
        };
        BudgetCategory::ALL
            .into_iter()
            .map(|category| BudgetEntry::for_category(category, snapshot.amount_for(category)))
            .collect()
    }

    /// Sum of the eight category amounts.
    pub fn total_budgeted(snapshot: Option<&AccountSnapshot>) -> f64 {
        snapshot
            .map(|snapshot| {
                BudgetCategory::ALL
                    .into_iter()
                    .map(|category| snapshot.amount_for(category))
                    .sum()
            })
            .unwrap_or(0.0)
    }

    /// Income left after disposable income and savings are set aside.
    pub fn total_spent(snapshot: Option<&AccountSnapshot>) -> f64 {
        snapshot
            .map(|snapshot| {
                snapshot.income_value(IncomeField::Income)
                    - snapshot.income_value(IncomeField::DisposableIncome)
                    - snapshot.income_value(IncomeField::DesiredSavings)
            })
            .unwrap_or(0.0)
    }

    /// Computes totals and the over-budget count for the snapshot.
    pub fn metrics(snapshot: Option<&AccountSnapshot>) -> BudgetMetrics {
        Self::metrics_for(&Self::project(snapshot), Self::total_spent(snapshot))
    }

    /// Totals `entries` and counts those whose share of `total_spent` exceeds
    /// their amount.
    pub fn metrics_for(entries: &[BudgetEntry], total_spent: f64) -> BudgetMetrics {
        let mut metrics = BudgetMetrics {
            total_budgeted: entries.iter().map(|entry| entry.amount).sum(),
            total_spent,
            over_budget_count: 0,
        };
        metrics.over_budget_count = entries
            .iter()
            .filter(|entry| Self::is_over_budget(entry, &metrics))
            .count();
        metrics
    }

    /// The entry's slice of total spending, weighted by its share of the budget.
    ///
    /// `None` when nothing is budgeted, since there is no share to apportion.
    pub fn proportional_share(entry: &BudgetEntry, metrics: &BudgetMetrics) -> Option<f64> {
        if metrics.total_budgeted == 0.0 {
            return None;
        }
        Some(entry.amount / metrics.total_budgeted * metrics.total_spent)
    }

    pub fn is_over_budget(entry: &BudgetEntry, metrics: &BudgetMetrics) -> bool {
        Self::proportional_share(entry, metrics)
            .map(|share| share > entry.amount)
            .unwrap_or(false)
    }

    /// Applies the search term and filter mode, preserving input order.
    pub fn filter(
        entries: &[BudgetEntry],
        query: &BudgetQuery,
        metrics: &BudgetMetrics,
    ) -> Vec<BudgetEntry> {
        entries
            .iter()
            .filter(|entry| query.matches_name(&entry.name))
            .filter(|entry| match query.filter {
                BudgetFilter::All => true,
                BudgetFilter::Over => Self::is_over_budget(entry, metrics),
                BudgetFilter::Under => !Self::is_over_budget(entry, metrics),
            })
            .cloned()
            .collect()
    }
}
