//! Core data models for the site ledger
//!
//! This module contains the data structures of the expense domain:
//! money amounts, categories, expense records and project summaries.

pub mod category;
pub mod money;
pub mod record;
pub mod summary;

pub use category::ExpenseCategory;
pub use money::{Money, MoneyParseError};
pub use record::{ExpenseAmounts, ExpenseKind, ExpenseRecord};
pub use summary::ProjectSummary;
