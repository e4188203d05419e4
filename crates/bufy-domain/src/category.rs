//! The fixed set of spending categories tracked by an account snapshot.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::common::normalize_name;

/// Spending categories in their canonical display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BudgetCategory {
    Groceries,
    Transport,
    EatingOut,
    Entertainment,
    Utilities,
    Healthcare,
    Education,
    Miscellaneous,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 8] = [
        BudgetCategory::Groceries,
        BudgetCategory::Transport,
        BudgetCategory::EatingOut,
        BudgetCategory::Entertainment,
        BudgetCategory::Utilities,
        BudgetCategory::Healthcare,
        BudgetCategory::Education,
        BudgetCategory::Miscellaneous,
    ];

    /// Stable identifier assigned to the projected budget entry.
    pub fn id(self) -> u32 {
        match self {
            BudgetCategory::Groceries => 1,
            BudgetCategory::Transport => 2,
            BudgetCategory::EatingOut => 3,
            BudgetCategory::Entertainment => 4,
            BudgetCategory::Utilities => 5,
            BudgetCategory::Healthcare => 6,
            BudgetCategory::Education => 7,
            BudgetCategory::Miscellaneous => 8,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            BudgetCategory::Groceries => "Groceries",
            BudgetCategory::Transport => "Transport",
            BudgetCategory::EatingOut => "Eating Out",
            BudgetCategory::Entertainment => "Entertainment",
            BudgetCategory::Utilities => "Utilities",
            BudgetCategory::Healthcare => "Healthcare",
            BudgetCategory::Education => "Education",
            BudgetCategory::Miscellaneous => "Miscellaneous",
        }
    }

    /// Name of the matching field in the serialized snapshot.
    pub fn field_name(self) -> &'static str {
        match self {
            BudgetCategory::Groceries => "Groceries",
            BudgetCategory::Transport => "Transport",
            BudgetCategory::EatingOut => "Eating_Out",
            BudgetCategory::Entertainment => "Entertainment",
            BudgetCategory::Utilities => "Utilities",
            BudgetCategory::Healthcare => "Healthcare",
            BudgetCategory::Education => "Education",
            BudgetCategory::Miscellaneous => "Miscellaneous",
        }
    }

    /// Resolves a category from its display name or field name, ignoring case,
    /// spaces and underscores.
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = normalize_name(name);
        if needle.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|category| normalize_name(category.display_name()) == needle)
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Returned when a string does not name a known category.
pub struct UnknownCategoryError(pub String);

impl fmt::Display for UnknownCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown budget category `{}`", self.0)
    }
}

impl std::error::Error for UnknownCategoryError {}

impl FromStr for BudgetCategory {
    type Err = UnknownCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value).ok_or_else(|| UnknownCategoryError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_display_order() {
        let ids: Vec<u32> = BudgetCategory::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn from_name_accepts_field_and_display_spelling() {
        assert_eq!(
            BudgetCategory::from_name("eating_out"),
            Some(BudgetCategory::EatingOut)
        );
        assert_eq!(
            BudgetCategory::from_name("Eating Out"),
            Some(BudgetCategory::EatingOut)
        );
        assert_eq!(BudgetCategory::from_name("rent"), None);
        assert_eq!(BudgetCategory::from_name("  "), None);
    }

    #[test]
    fn from_id_round_trips_known_ids() {
        assert_eq!(BudgetCategory::from_id(5), Some(BudgetCategory::Utilities));
        assert_eq!(BudgetCategory::from_id(0), None);
        assert_eq!(BudgetCategory::from_id(9), None);
    }
}
