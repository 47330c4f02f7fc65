//! Ledger store
//!
//! Owns the in-memory record collection and mirrors it to the ledger CSV.
//! Every mutation rewrites the whole file.

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseRecord;

use super::file_io::{read_ledger_csv, write_ledger_csv_atomic};

/// The ledger: records addressed by their position
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
}

impl LedgerStore {
    /// Open the ledger at `path`, creating a header-only file if none exists
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let mut store = Self {
            path: path.into(),
            records: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Re-read the ledger file, replacing the in-memory records
    ///
    /// A missing file is initialized with the column header and no rows.
    pub fn load(&mut self) -> LedgerResult<&[ExpenseRecord]> {
        if self.path.exists() {
            self.records = read_ledger_csv(&self.path)?;
            tracing::debug!(path = %self.path.display(), count = self.records.len(), "Loaded ledger");
        } else {
            self.records.clear();
            write_ledger_csv_atomic(&self.path, &self.records)?;
            tracing::info!(path = %self.path.display(), "Initialized empty ledger");
        }
        Ok(&self.records)
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in ledger order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Record at a row position
    pub fn get(&self, index: usize) -> Option<&ExpenseRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record at the end and persist; returns its row position
    ///
    /// If persisting fails the record is removed again, so memory keeps
    /// matching the file.
    pub fn append(&mut self, record: ExpenseRecord) -> LedgerResult<usize> {
        self.records.push(record);
        let index = self.records.len() - 1;

        if let Err(err) = self.persist() {
            self.records.pop();
            return Err(err);
        }

        tracing::info!(index, "Appended expense record");
        Ok(index)
    }

    /// Overwrite the record at `index` and persist
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is not an existing position; the ledger is
    /// left untouched. A failed persist restores the previous record.
    pub fn replace_at(&mut self, index: usize, record: ExpenseRecord) -> LedgerResult<()> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(LedgerError::OutOfRange { index, len })?;

        let previous = std::mem::replace(slot, record);

        if let Err(err) = self.persist() {
            self.records[index] = previous;
            return Err(err);
        }

        tracing::info!(index, "Replaced expense record");
        Ok(())
    }

    /// Rewrite the ledger file from memory
    pub fn persist(&self) -> LedgerResult<()> {
        write_ledger_csv_atomic(&self.path, &self.records)
    }
}
