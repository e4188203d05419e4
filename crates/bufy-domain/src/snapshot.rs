//! The account record a budget view derives its figures from.

use serde::{Deserialize, Serialize};

use crate::{
    category::BudgetCategory,
    common::{normalize_name, or_zero},
};

/// Category totals plus income figures for one account.
///
/// Field names follow the serialized record shared with the rest of the
/// application, so `Eating_Out` and friends keep their underscores on disk.
/// Missing fields deserialize to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccountSnapshot {
    #[serde(rename = "Groceries")]
    pub groceries: f64,
    #[serde(rename = "Transport")]
    pub transport: f64,
    #[serde(rename = "Eating_Out")]
    pub eating_out: f64,
    #[serde(rename = "Entertainment")]
    pub entertainment: f64,
    #[serde(rename = "Utilities")]
    pub utilities: f64,
    #[serde(rename = "Healthcare")]
    pub healthcare: f64,
    #[serde(rename = "Education")]
    pub education: f64,
    #[serde(rename = "Miscellaneous")]
    pub miscellaneous: f64,
    #[serde(rename = "Income")]
    pub income: f64,
    #[serde(rename = "Disposable_Income")]
    pub disposable_income: f64,
    #[serde(rename = "Desired_Savings")]
    pub desired_savings: f64,
}

/// Non-category fields of [`AccountSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeField {
    Income,
    DisposableIncome,
    DesiredSavings,
}

impl IncomeField {
    pub const ALL: [IncomeField; 3] = [
        IncomeField::Income,
        IncomeField::DisposableIncome,
        IncomeField::DesiredSavings,
    ];

    pub fn field_name(self) -> &'static str {
        match self {
            IncomeField::Income => "Income",
            IncomeField::DisposableIncome => "Disposable_Income",
            IncomeField::DesiredSavings => "Desired_Savings",
        }
    }
}

/// Any writable field of an [`AccountSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotField {
    Category(BudgetCategory),
    Income(IncomeField),
}

impl SnapshotField {
    /// Looks up a field by its serialized or display name, ignoring case,
    /// spaces, `_` and `-`.
    pub fn parse(name: &str) -> Option<Self> {
        let needle = normalize_name(name);
        IncomeField::ALL
            .into_iter()
            .find(|field| normalize_name(field.field_name()) == needle)
            .map(SnapshotField::Income)
            .or_else(|| BudgetCategory::from_name(name).map(SnapshotField::Category))
    }

    pub fn field_name(self) -> &'static str {
        match self {
            SnapshotField::Category(category) => category.field_name(),
            SnapshotField::Income(field) => field.field_name(),
        }
    }
}

impl AccountSnapshot {
    /// Budgeted amount for a category, with non-finite values read as zero.
    pub fn amount_for(&self, category: BudgetCategory) -> f64 {
        let raw = match category {
            BudgetCategory::Groceries => self.groceries,
            BudgetCategory::Transport => self.transport,
            BudgetCategory::EatingOut => self.eating_out,
            BudgetCategory::Entertainment => self.entertainment,
            BudgetCategory::Utilities => self.utilities,
            BudgetCategory::Healthcare => self.healthcare,
            BudgetCategory::Education => self.education,
            BudgetCategory::Miscellaneous => self.miscellaneous,
        };
        or_zero(raw)
    }

    pub fn set_amount(&mut self, category: BudgetCategory, amount: f64) {
        let slot = match category {
            BudgetCategory::Groceries => &mut self.groceries,
            BudgetCategory::Transport => &mut self.transport,
            BudgetCategory::EatingOut => &mut self.eating_out,
            BudgetCategory::Entertainment => &mut self.entertainment,
            BudgetCategory::Utilities => &mut self.utilities,
            BudgetCategory::Healthcare => &mut self.healthcare,
            BudgetCategory::Education => &mut self.education,
            BudgetCategory::Miscellaneous => &mut self.miscellaneous,
        };
        *slot = amount;
    }

    pub fn income_value(&self, field: IncomeField) -> f64 {
        let raw = match field {
            IncomeField::Income => self.income,
            IncomeField::DisposableIncome => self.disposable_income,
            IncomeField::DesiredSavings => self.desired_savings,
        };
        or_zero(raw)
    }

    pub fn set_field(&mut self, field: SnapshotField, value: f64) {
        match field {
            SnapshotField::Category(category) => self.set_amount(category, value),
            SnapshotField::Income(IncomeField::Income) => self.income = value,
            SnapshotField::Income(IncomeField::DisposableIncome) => {
                self.disposable_income = value
            }
            SnapshotField::Income(IncomeField::DesiredSavings) => self.desired_savings = value,
        }
    }
}
