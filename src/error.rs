//! Custom error types for the site ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the ledger file itself
    #[error("I/O error: {0}")]
    Io(String),

    /// Bad user input: blank required field, negative amount, unknown category
    #[error("Validation error: {0}")]
    Validation(String),

    /// Row position does not address an existing record
    #[error("Row {index} is out of range (ledger has {len} records)")]
    OutOfRange { index: usize, len: usize },

    /// Spreadsheet generation failures
    #[error("Export error: {0}")]
    Export(String),

    /// Ledger file read/write failures
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// A required text field was blank
    pub fn required_field(field: &str) -> Self {
        Self::Validation(format!("required field missing: {}", field))
    }

    /// Category text is not one of the fixed categories
    pub fn invalid_category(value: &str) -> Self {
        Self::Validation(format!("invalid category: '{}'", value))
    }

    /// An expense amount was below zero
    pub fn negative_amount(field: &str) -> Self {
        Self::Validation(format!("negative amount: {}", field))
    }

    /// The amounts of one entry sum past the representable range
    pub fn amount_too_large() -> Self {
        Self::Validation("amount too large".to_string())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for LedgerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
