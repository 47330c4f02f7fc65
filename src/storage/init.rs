//! Storage initialization
//!
//! Handles first-run setup: directories and an empty ledger file.

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

use super::file_io::write_ledger_csv_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the directories and a header-only ledger. An existing ledger
/// is left untouched.
pub fn initialize_storage(paths: &LedgerPaths) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        write_ledger_csv_atomic(paths.ledger_file(), &[])?;
        tracing::info!(path = %paths.ledger_file().display(), "Created ledger file");
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &LedgerPaths) -> bool {
    !paths.ledger_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let existing = "Date,Project Name,Person Name,Category,Fuel,Food,Purchase,Hotel,Other Expenses,Total,Narration\n\
                        2024-02-01,Acme,Anil,Delivery,1,0,0,0,0,1,\n";
        std::fs::write(paths.ledger_file(), existing).unwrap();

        initialize_storage(&paths).unwrap();

        assert_eq!(std::fs::read_to_string(paths.ledger_file()).unwrap(), existing);
    }
}
