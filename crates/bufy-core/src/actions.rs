//! Create/edit/delete/view callbacks the budget list delegates to.

use std::sync::Arc;

use bufy_domain::{BudgetCategory, BudgetDraft};
use tracing::info;

use crate::{snapshot_store::AccountStore, CoreError};

/// Side effects requested by the budget list.
///
/// Implemented by whatever service owns budget persistence; the list only
/// reports the outcome.
pub trait BudgetActions {
    fn create(&mut self, draft: &BudgetDraft) -> Result<(), CoreError>;
    fn update(&mut self, id: u32, draft: &BudgetDraft) -> Result<(), CoreError>;
    fn delete(&mut self, id: u32) -> Result<(), CoreError>;
    fn navigate(&mut self, route: &str) -> Result<(), CoreError>;
}

/// Route of the detail screen for a budget entry.
pub fn budget_route(id: u32) -> String {
    format!("/budgets/{}", id)
}

/// Writes budget changes straight into the shared [`AccountStore`].
///
/// Categories are fixed, so creating a budget fills in an empty category,
/// editing overwrites its amount and deleting resets it to zero.
pub struct StoreBackedActions {
    store: Arc<AccountStore>,
    history: Vec<String>,
}

impl StoreBackedActions {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self {
            store,
            history: Vec::new(),
        }
    }

    /// Routes visited through [`BudgetActions::navigate`], oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn current_route(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    fn write_amount(&self, category: BudgetCategory, amount: f64) -> Result<(), CoreError> {
        if self.store.update(|snapshot| snapshot.set_amount(category, amount)) {
            Ok(())
        } else {
            Err(CoreError::SnapshotNotLoaded)
        }
    }

    fn current_amount(&self, category: BudgetCategory) -> Result<f64, CoreError> {
        self.store
            .get()
            .map(|snapshot| snapshot.amount_for(category))
            .ok_or(CoreError::SnapshotNotLoaded)
    }
}

fn validate_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() {
        return Err(CoreError::Validation("amount must be a number".into()));
    }
    if amount < 0.0 {
        return Err(CoreError::Validation("amount cannot be negative".into()));
    }
    Ok(())
}

impl BudgetActions for StoreBackedActions {
    fn create(&mut self, draft: &BudgetDraft) -> Result<(), CoreError> {
        validate_amount(draft.amount)?;
        let category = BudgetCategory::from_name(&draft.name)
            .ok_or_else(|| CoreError::UnknownCategory(draft.name.clone()))?;
        if self.current_amount(category)? != 0.0 {
            return Err(CoreError::InvalidOperation(format!(
                "a budget for {} already exists",
                category
            )));
        }
        self.write_amount(category, draft.amount)?;
        info!("created {} budget of {}", category, draft.amount);
        Ok(())
    }

    fn update(&mut self, id: u32, draft: &BudgetDraft) -> Result<(), CoreError> {
        validate_amount(draft.amount)?;
        let category = BudgetCategory::from_id(id).ok_or(CoreError::BudgetNotFound(id))?;
        if let Some(named) = BudgetCategory::from_name(&draft.name) {
            if named != category {
                return Err(CoreError::Validation(format!(
                    "cannot rename {} to another category ({})",
                    category, named
                )));
            }
        }
        self.write_amount(category, draft.amount)?;
        info!("updated {} budget to {}", category, draft.amount);
        Ok(())
    }

    fn delete(&mut self, id: u32) -> Result<(), CoreError> {
        let category = BudgetCategory::from_id(id).ok_or(CoreError::BudgetNotFound(id))?;
        self.write_amount(category, 0.0)?;
        info!("cleared {} budget", category);
        Ok(())
    }

    fn navigate(&mut self, route: &str) -> Result<(), CoreError> {
        if !route.starts_with('/') {
            return Err(CoreError::InvalidOperation(format!(
                "route `{}` must be absolute",
                route
            )));
        }
        self.history.push(route.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bufy_domain::AccountSnapshot;

    use super::*;

    fn loaded_store() -> Arc<AccountStore> {
        Arc::new(AccountStore::new(Some(AccountSnapshot {
            groceries: 100.0,
            ..AccountSnapshot::default()
        })))
    }

    #[test]
    fn create_fills_empty_category_only() {
        let store = loaded_store();
        let mut actions = StoreBackedActions::new(Arc::clone(&store));

        actions
            .create(&BudgetDraft::new("transport", 75.0))
            .expect("create transport");
        assert_eq!(store.get().unwrap().transport, 75.0);

        let err = actions
            .create(&BudgetDraft::new("Groceries", 10.0))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidOperation(_)));

        let err = actions.create(&BudgetDraft::new("Rent", 10.0)).unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory(_)));
    }

    #[test]
    fn update_rejects_unknown_ids_and_negative_amounts() {
        let store = loaded_store();
        let mut actions = StoreBackedActions::new(store);

        assert!(matches!(
            actions.update(42, &BudgetDraft::new("Groceries", 1.0)),
            Err(CoreError::BudgetNotFound(42))
        ));
        assert!(matches!(
            actions.update(1, &BudgetDraft::new("Groceries", -1.0)),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            actions.update(1, &BudgetDraft::new("Transport", 1.0)),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn delete_without_snapshot_fails() {
        let store = Arc::new(AccountStore::default());
        let mut actions = StoreBackedActions::new(store);
        assert!(matches!(actions.delete(1), Err(CoreError::SnapshotNotLoaded)));
    }

    #[test]
    fn navigate_records_history() {
        let mut actions = StoreBackedActions::new(loaded_store());
        actions.navigate(&budget_route(3)).unwrap();
        assert_eq!(actions.current_route(), Some("/budgets/3"));
        assert!(actions.navigate("budgets").is_err());
        assert_eq!(actions.history().len(), 1);
    }
}
