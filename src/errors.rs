use std::result::Result as StdResult;

use bufy_config::ConfigError;
use bufy_core::CoreError;
use thiserror::Error;

/// Unified error type for the core, config and input layers.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Account snapshot not loaded")]
    SnapshotNotLoaded,
    #[error("Budget not found: {0}")]
    BudgetNotFound(u32),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::InvalidInput(err.to_string())
    }
}

impl From<CoreError> for BudgetError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SnapshotNotLoaded => BudgetError::SnapshotNotLoaded,
            CoreError::BudgetNotFound(id) => BudgetError::BudgetNotFound(id),
            CoreError::UnknownCategory(name) => {
                BudgetError::InvalidInput(format!("unknown budget category `{}`", name))
            }
            CoreError::InvalidOperation(message) | CoreError::Validation(message) => {
                BudgetError::InvalidInput(message)
            }
        }
    }
}

impl From<ConfigError> for BudgetError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => BudgetError::StorageError(io.to_string()),
            ConfigError::Serde(message) => BudgetError::ConfigError(message),
            other @ (ConfigError::UnknownKey(_) | ConfigError::InvalidValue { .. }) => {
                BudgetError::InvalidInput(other.to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(BudgetError::from(err))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}
