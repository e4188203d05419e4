use std::{fs, path::Path};

use bufy_domain::AccountSnapshot;
use tracing::info;

use crate::errors::{BudgetError, Result};

/// Reads an account snapshot from a JSON file.
///
/// A file containing `null` yields `None`, meaning no account is available.
pub fn load_snapshot(path: &Path) -> Result<Option<AccountSnapshot>> {
    let data = fs::read_to_string(path).map_err(|err| {
        BudgetError::StorageError(format!("cannot read `{}`: {}", path.display(), err))
    })?;
    let snapshot: Option<AccountSnapshot> = serde_json::from_str(&data)?;
    info!("loaded account snapshot from {}", path.display());
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn loads_partial_snapshot() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"Income": 1000, "Groceries": 100}}"#).unwrap();

        let snapshot = load_snapshot(file.path()).unwrap().expect("snapshot");
        assert_eq!(snapshot.income, 1000.0);
        assert_eq!(snapshot.groceries, 100.0);
        assert_eq!(snapshot.transport, 0.0);
    }

    #[test]
    fn null_file_means_no_snapshot() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "null").unwrap();
        assert!(load_snapshot(file.path()).unwrap().is_none());
    }

    #[test]
    fn missing_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, BudgetError::StorageError(_)));
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"Income\": \"lots\"}}").unwrap();
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidInput(_)));
    }
}
