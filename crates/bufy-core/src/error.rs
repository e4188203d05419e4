use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Budget not found: {0}")]
    BudgetNotFound(u32),
    #[error("Unknown budget category: {0}")]
    UnknownCategory(String),
    #[error("Account snapshot not loaded")]
    SnapshotNotLoaded,
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Validation failed: {0}")]
    Validation(String),
}
