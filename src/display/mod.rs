//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger rows and project summaries
//! as terminal tables.

pub mod record;
pub mod summary;

pub use record::{format_record_details, format_record_table};
pub use summary::format_summary_table;
