//! Budget entries projected from an account snapshot.

use serde::{Deserialize, Serialize};

use crate::{category::BudgetCategory, common::Displayable};

/// A named budget line with its budgeted amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetEntry {
    pub id: u32,
    pub name: String,
    pub amount: f64,
}

impl BudgetEntry {
    pub fn new(id: u32, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
        }
    }

    pub fn for_category(category: BudgetCategory, amount: f64) -> Self {
        Self::new(category.id(), category.display_name(), amount)
    }

    /// Category this entry was projected from, if the id is a known one.
    pub fn category(&self) -> Option<BudgetCategory> {
        BudgetCategory::from_id(self.id)
    }

    /// Overwrites name and amount with the draft, keeping the id.
    pub fn apply(&mut self, draft: &BudgetDraft) {
        self.name = draft.name.clone();
        self.amount = draft.amount;
    }
}

impl Displayable for BudgetEntry {
    fn display_label(&self) -> String {
        format!("#{} {}", self.id, self.name)
    }
}

/// Fields supplied by the create/edit form; the id is assigned elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetDraft {
    pub name: String,
    pub amount: f64,
}

impl BudgetDraft {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

impl From<&BudgetEntry> for BudgetDraft {
    fn from(entry: &BudgetEntry) -> Self {
        Self::new(entry.name.clone(), entry.amount)
    }
}
