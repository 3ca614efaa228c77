//! JSON export files
//!
//! The export file has exactly the persisted layout, so it can be imported
//! again as-is or merged into another tracker.

use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::services::ExportSnapshot;
use crate::storage::write_atomic;

/// Write a snapshot to `output`
///
/// If `output` is an existing directory the snapshot's own file name is used
/// inside it. Returns the path written.
pub fn write_snapshot(snapshot: &ExportSnapshot, output: &Path) -> BudgetResult<PathBuf> {
    let path = if output.is_dir() {
        output.join(&snapshot.file_name)
    } else {
        output.to_path_buf()
    };

    write_atomic(&path, &snapshot.contents)
        .map_err(|e| BudgetError::Export(format!("{}: {}", path.display(), e)))?;
    Ok(path)
}

/// Read an import file as text
pub fn read_import_file(path: &Path) -> BudgetResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| BudgetError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn snapshot() -> ExportSnapshot {
        ExportSnapshot {
            file_name: "budget-data-2025-01-31.json".into(),
            contents: "{\n  \"monthlyBudget\": 1.0\n}".into(),
        }
    }

    #[test]
    fn test_write_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_snapshot(&snapshot(), temp_dir.path()).unwrap();

        assert_eq!(path, temp_dir.path().join("budget-data-2025-01-31.json"));
        assert_eq!(read_import_file(&path).unwrap(), snapshot().contents);
    }

    #[test]
    fn test_write_to_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("backup.json");
        let path = write_snapshot(&snapshot(), &target).unwrap();
        assert_eq!(path, target);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_import_file(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
