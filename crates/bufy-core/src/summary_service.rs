use bufy_domain::{AccountSnapshot, IncomeField};

use crate::budget_service::{BudgetMetrics, BudgetService};

/// Headline figures for the budget screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetOverview {
    pub monthly_income: f64,
    pub disposable_income: f64,
    pub desired_savings: f64,
    pub remaining_balance: f64,
    pub metrics: BudgetMetrics,
}

pub struct SummaryService;

impl SummaryService {
    /// Builds the overview cards; every figure is zero without a snapshot.
    pub fn overview(snapshot: Option<&AccountSnapshot>) -> BudgetOverview {
        let metrics = BudgetService::metrics(snapshot);
        let Some(snapshot) = snapshot else {
            return BudgetOverview {
                metrics,
                ..BudgetOverview::default()
            };
        };
        let disposable_income = snapshot.income_value(IncomeField::DisposableIncome);
        BudgetOverview {
            monthly_income: snapshot.income_value(IncomeField::Income),
            disposable_income,
            desired_savings: snapshot.income_value(IncomeField::DesiredSavings),
            remaining_balance: disposable_income - metrics.total_budgeted,
            metrics,
        }
    }
}
