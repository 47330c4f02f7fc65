//! Service layer for the site ledger
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation and record assembly, filtering and summaries.

pub mod editor;
pub mod query;

pub use editor::{build_record, ExpenseInput, RecordEditor};
pub use query::{
    filter_by_project, filter_with_positions, list_projects, summarize, ProjectFilter,
    ALL_PROJECTS,
};
