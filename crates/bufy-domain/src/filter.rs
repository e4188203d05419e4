//! Search and filter selections for the budget list.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Restricts the budget list by over/under budget status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetFilter {
    #[default]
    All,
    Over,
    Under,
}

impl BudgetFilter {
    pub const ALL: [BudgetFilter; 3] = [BudgetFilter::All, BudgetFilter::Over, BudgetFilter::Under];

    pub fn key(self) -> &'static str {
        match self {
            BudgetFilter::All => "all",
            BudgetFilter::Over => "over",
            BudgetFilter::Under => "under",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetFilter::All => "All Budgets",
            BudgetFilter::Over => "Over Budget",
            BudgetFilter::Under => "Under Budget",
        }
    }
}

impl fmt::Display for BudgetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Returned when a filter key is not one of `all`, `over`, `under`.
pub struct ParseBudgetFilterError(pub String);

impl fmt::Display for ParseBudgetFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown filter `{}` (expected all, over or under)",
            self.0
        )
    }
}

impl std::error::Error for ParseBudgetFilterError {}

impl FromStr for BudgetFilter {
    type Err = ParseBudgetFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(BudgetFilter::All),
            "over" => Ok(BudgetFilter::Over),
            "under" => Ok(BudgetFilter::Under),
            _ => Err(ParseBudgetFilterError(value.to_string())),
        }
    }
}

/// Search term plus filter mode, as entered on the list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetQuery {
    pub search: String,
    pub filter: BudgetFilter,
}

impl BudgetQuery {
    pub fn new(search: impl Into<String>, filter: BudgetFilter) -> Self {
        Self {
            search: search.into(),
            filter,
        }
    }

    /// Returns `true` when either the search term or the filter narrows the list.
    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty() || self.filter != BudgetFilter::All
    }

    /// Case-insensitive substring match against `name`.
    pub fn matches_name(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.search.to_lowercase())
    }
}
