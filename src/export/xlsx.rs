//! XLSX report export
//!
//! Writes records to a single-sheet workbook held in memory.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseKind, ExpenseRecord};

/// Name of the only worksheet in the report
pub const SHEET_NAME: &str = "Expenses";

/// Longest text Excel stores in one cell, in characters
pub const MAX_CELL_CHARS: usize = 32_767;

/// Cut text to what a cell can hold, on a char boundary
fn cell_text(s: &str) -> &str {
    match s.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Serialize records to an XLSX blob
///
/// Row 0 is the canonical header; each record follows in the given order.
/// Amounts and totals are numeric cells, the date is ISO text. Text longer
/// than a cell can hold is cut to `MAX_CELL_CHARS`.
pub fn export_xlsx(records: &[ExpenseRecord]) -> LedgerResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, title) in ExpenseRecord::COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = u32::try_from(i + 1)
                .map_err(|_| LedgerError::Export(format!("Row {} exceeds sheet size", i + 1)))?;
            sheet.write_string(row, 0, &record.date.format("%Y-%m-%d").to_string())?;
            sheet.write_string(row, 1, cell_text(&record.project_name))?;
            sheet.write_string(row, 2, cell_text(&record.person_name))?;
            sheet.write_string(row, 3, record.category.label())?;

            for (offset, kind) in ExpenseKind::ALL.iter().enumerate() {
                let amount = record.amounts.get(*kind);
                sheet.write_number(row, 4 + offset as u16, amount.to_f64())?;
            }

            sheet.write_number(row, 9, record.total().to_f64())?;
            sheet.write_string(row, 10, cell_text(&record.narration))?;
        }
    }

    let blob = workbook.save_to_buffer()?;
    tracing::info!(rows = records.len(), bytes = blob.len(), "Exported expense report");
    Ok(blob)
}
