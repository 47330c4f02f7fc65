//! Report CLI commands
//!
//! Table view, project selector, project-wise summary and the
//! spreadsheet download, all over the project-filtered view.

use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{format_record_table, format_summary_table};
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_xlsx, REPORT_MIME_TYPE};
use crate::services::{
    filter_by_project, filter_with_positions, list_projects, summarize, ProjectFilter,
    ALL_PROJECTS,
};
use crate::storage::LedgerStore;

/// Print the records of the filtered view with their row positions
pub fn handle_list(ledger: &LedgerStore, settings: &Settings, filter: &ProjectFilter) {
    let rows = filter_with_positions(ledger.records(), filter);
    print!("{}", format_record_table(&rows, settings));
}

/// Print the project selector choices
pub fn handle_projects(ledger: &LedgerStore) {
    println!("{}", ALL_PROJECTS);
    for project in list_projects(ledger.records()) {
        println!("{}", project);
    }
}

/// Print project-wise sums of the filtered view
pub fn handle_summary(ledger: &LedgerStore, filter: &ProjectFilter) {
    let view = filter_by_project(ledger.records(), filter);
    print!("{}", format_summary_table(&summarize(&view)));
}

/// Write the filtered view as an XLSX report
///
/// Without `output` the report lands in the current directory under the
/// configured report file name.
pub fn handle_export(
    ledger: &LedgerStore,
    settings: &Settings,
    filter: &ProjectFilter,
    output: Option<PathBuf>,
) -> LedgerResult<PathBuf> {
    let view = filter_by_project(ledger.records(), filter);
    let blob = export_xlsx(&view)?;

    let path = output.unwrap_or_else(|| PathBuf::from(&settings.report_file_name));
    std::fs::write(&path, &blob).map_err(|e| {
        LedgerError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    println!(
        "Exported {} records to {} ({})",
        view.len(),
        path.display(),
        REPORT_MIME_TYPE
    );
    Ok(path)
}
