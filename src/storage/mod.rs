//! Storage layer for the site ledger
//!
//! Provides the CSV-backed ledger store with atomic whole-file writes and
//! automatic directory creation.

pub mod file_io;
pub mod init;
pub mod ledger;

pub use file_io::{read_ledger_csv, write_ledger_csv_atomic};
pub use init::initialize_storage;
pub use ledger::LedgerStore;
