//! Ledger CSV I/O with atomic writes
//!
//! Reads the ledger file into records and rewrites it as a whole. Writes
//! go to a temp file that is renamed over the ledger, so a failed write
//! never leaves a half-written ledger behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::{ExpenseAmounts, ExpenseCategory, ExpenseKind, ExpenseRecord, Money};

/// One ledger line as stored on disk. Every cell is kept as text so that
/// blank cells (written by hand or by other tools) can be defaulted.
#[derive(Debug, Serialize, Deserialize)]
struct LedgerRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Project Name", default)]
    project_name: String,
    #[serde(rename = "Person Name", default)]
    person_name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Fuel", default)]
    fuel: String,
    #[serde(rename = "Food", default)]
    food: String,
    #[serde(rename = "Purchase", default)]
    purchase: String,
    #[serde(rename = "Hotel", default)]
    hotel: String,
    #[serde(rename = "Other Expenses", default)]
    other: String,
    #[serde(rename = "Total", default)]
    total: String,
    #[serde(rename = "Narration", default)]
    narration: String,
}

impl From<&ExpenseRecord> for LedgerRow {
    fn from(record: &ExpenseRecord) -> Self {
        let amounts = &record.amounts;
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            project_name: record.project_name.clone(),
            person_name: record.person_name.clone(),
            category: record.category.label().to_string(),
            fuel: amounts.fuel.to_plain_string(),
            food: amounts.food.to_plain_string(),
            purchase: amounts.purchase.to_plain_string(),
            hotel: amounts.hotel.to_plain_string(),
            other: amounts.other.to_plain_string(),
            total: record.total().to_plain_string(),
            narration: record.narration.clone(),
        }
    }
}

impl LedgerRow {
    fn cell(&self, kind: ExpenseKind) -> &str {
        match kind {
            ExpenseKind::Fuel => &self.fuel,
            ExpenseKind::Food => &self.food,
            ExpenseKind::Purchase => &self.purchase,
            ExpenseKind::Hotel => &self.hotel,
            ExpenseKind::Other => &self.other,
        }
    }

    /// Convert to a record; `line` is the 1-based file line for messages
    fn into_record(self, line: usize) -> Result<ExpenseRecord, String> {
        let date = parse_date(&self.date)
            .ok_or_else(|| format!("line {}: invalid date '{}'", line, self.date))?;

        let category: ExpenseCategory = self
            .category
            .parse()
            .map_err(|_| format!("line {}: unknown category '{}'", line, self.category))?;

        let mut amounts = ExpenseAmounts::default();
        for kind in ExpenseKind::ALL {
            let cell = self.cell(kind);
            let amount = Money::parse(cell)
                .map_err(|_| format!("line {}: invalid {} amount '{}'", line, kind, cell))?;
            if amount.is_negative() {
                return Err(format!("line {}: negative {} amount '{}'", line, kind, cell));
            }
            amounts.set(kind, amount);
        }

        let derived = amounts
            .checked_total()
            .ok_or_else(|| format!("line {}: amounts too large to total", line))?;

        let record = ExpenseRecord {
            date,
            project_name: self.project_name,
            person_name: self.person_name,
            category,
            amounts,
            narration: self.narration,
        };

        match Money::parse(&self.total) {
            Ok(stored) if stored == derived => {}
            _ => tracing::warn!(
                line,
                stored = %self.total,
                derived = %derived,
                "Stored total disagrees with expense columns; using derived total"
            ),
        }

        Ok(record)
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Read every record from an existing ledger file
pub fn read_ledger_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ExpenseRecord>, LedgerError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let mut records = Vec::new();

    for (i, row) in reader.deserialize::<LedgerRow>().enumerate() {
        let line = i + 2;
        let row = row.map_err(|e| {
            LedgerError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        let record = row.into_record(line).map_err(|e| {
            LedgerError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Rewrite the whole ledger file atomically (write to temp, then rename)
///
/// The header row is always written, so an empty slice yields a
/// header-only ledger.
pub fn write_ledger_csv_atomic<P: AsRef<Path>>(
    path: P,
    records: &[ExpenseRecord],
) -> Result<(), LedgerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = path.with_extension("csv.tmp");

    let result = write_rows(&temp_path, records).and_then(|_| {
        fs::rename(&temp_path, path)
            .map_err(|e| LedgerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_rows(temp_path: &Path, records: &[ExpenseRecord]) -> Result<(), LedgerError> {
    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    // Header is written by hand so that it is present even with no rows
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer
        .write_record(ExpenseRecord::COLUMNS)
        .map_err(|e| LedgerError::Storage(format!("Failed to write header: {}", e)))?;

    for record in records {
        writer
            .serialize(LedgerRow::from(record))
            .map_err(|e| LedgerError::Storage(format!("Failed to serialize record: {}", e)))?;
    }

    let buffered = writer
        .into_inner()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;
    let file = buffered
        .into_inner()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn sample(project: &str, fuel: Money) -> ExpenseRecord {
        ExpenseRecord {
            date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            project_name: project.into(),
            person_name: "Suresh".into(),
            category: ExpenseCategory::InstallationAndDelivery,
            amounts: ExpenseAmounts {
                fuel,
                food: Money::new(dec!(80.25)),
                ..Default::default()
            },
            narration: "Crane hire, \"north\" gate\nsecond line".into(),
        }
    }

    #[test]
    fn test_empty_ledger_has_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        write_ledger_csv_atomic(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.trim_end(),
            "Date,Project Name,Person Name,Category,Fuel,Food,Purchase,Hotel,Other Expenses,Total,Narration"
        );
        assert!(read_ledger_csv(&path).unwrap().is_empty());
    }

    #[test]
    fn test_write_and_read_preserves_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        let records = vec![
            sample("Acme Tower", Money::new(dec!(100.50))),
            sample("Bay Bridge", Money::zero()),
        ];

        write_ledger_csv_atomic(&path, &records).unwrap();
        let loaded = read_ledger_csv(&path).unwrap();

        assert_eq!(loaded, records);
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("2024-05-17,Acme Tower,Suresh,Installation + Delivery,100.50,80.25,0,0,0,180.75,"));
    }

    #[test]
    fn test_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        write_ledger_csv_atomic(&path, &[sample("Acme", Money::zero())]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("ledger.csv.tmp").exists());
    }

    #[test]
    fn test_blank_cells_default_and_stale_total_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Date,Project Name,Person Name,Category,Fuel,Food,Purchase,Hotel,Other Expenses,Total,Narration\n\
             2024-01-02,Acme,Anil,Delivery,10.5,,,2,,999,\n",
        )
        .unwrap();

        let loaded = read_ledger_csv(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].total().amount(), dec!(12.5));
        assert_eq!(loaded[0].narration, "");
        assert!(loaded[0].amounts.food.is_zero());
    }

    #[test]
    fn test_datetime_cells_are_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Date,Project Name,Person Name,Category,Fuel,Food,Purchase,Hotel,Other Expenses,Total,Narration\n\
             2024-01-02 00:00:00,Acme,Anil,Measurement,0,0,0,0,0,0,tape\n",
        )
        .unwrap();

        let loaded = read_ledger_csv(&path).unwrap();
        assert_eq!(loaded[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_malformed_rows_are_storage_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Date,Project Name,Person Name,Category,Fuel,Food,Purchase,Hotel,Other Expenses,Total,Narration\n\
             2024-01-02,Acme,Anil,Painting,0,0,0,0,0,0,\n",
        )
        .unwrap();

        let err = read_ledger_csv(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_negative_cell_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(
            &path,
            "Date,Project Name,Person Name,Category,Fuel,Food,Purchase,Hotel,Other Expenses,Total,Narration\n\
             2024-01-02,Acme,Anil,Delivery,10,0,0,0,0,10,\n\
             2024-01-03,Acme,Anil,Delivery,-50,0,0,0,0,-50,\n",
        )
        .unwrap();

        let err = read_ledger_csv(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("negative Fuel"));
    }

    #[test]
    fn test_overflowing_row_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        let max = rust_decimal::Decimal::MAX;
        fs::write(
            &path,
            format!(
                "Date,Project Name,Person Name,Category,Fuel,Food,Purchase,Hotel,Other Expenses,Total,Narration\n\
                 2024-01-02,Acme,Anil,Delivery,{max},{max},0,0,0,0,\n"
            ),
        )
        .unwrap();

        let err = read_ledger_csv(&path).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_ledger_csv(temp_dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
    }
}
