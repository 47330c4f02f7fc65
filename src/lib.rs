//! Site Ledger - expense ledger for construction sites
//!
//! This library provides the core of a single-user expense ledger: each
//! entry records who spent what on which project, split across fuel,
//! food, purchase, hotel and other expenses. Entries live in a CSV file,
//! can be edited in place by row position, filtered and summarized per
//! project, and exported as an XLSX report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, records, summaries)
//! - `storage`: CSV ledger store
//! - `services`: Record editor and query/summary engine
//! - `export`: XLSX report export
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers for the `siteledger` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use site_ledger::services::{ExpenseInput, RecordEditor};
//! use site_ledger::storage::LedgerStore;
//!
//! let mut ledger = LedgerStore::open("site_expenses.csv")?;
//! let input = ExpenseInput::new(today, "Acme Tower", "Ravi");
//! RecordEditor::new(&mut ledger).create(&input)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
