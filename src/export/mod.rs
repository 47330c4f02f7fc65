//! Export module for the site ledger
//!
//! Produces the downloadable spreadsheet report of a record set.

pub mod xlsx;

pub use xlsx::{export_xlsx, SHEET_NAME};

/// MIME type of the exported report
pub const REPORT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File name offered for the exported report
pub const DEFAULT_REPORT_FILE_NAME: &str = "site_expense_report.xlsx";
