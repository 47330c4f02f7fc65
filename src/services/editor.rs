//! Record editor service
//!
//! Validates form input and turns it into expense records, either appended
//! as a new entry or written over an existing row. Validation always runs
//! before the ledger is touched.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseAmounts, ExpenseCategory, ExpenseRecord};
use crate::storage::LedgerStore;

/// Raw form input for one expense entry
///
/// `category` is kept as text because it arrives from the presentation
/// layer unchecked; the editor validates it against the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: NaiveDate,
    pub project_name: String,
    pub person_name: String,
    pub category: String,
    pub amounts: ExpenseAmounts,
    pub narration: String,
}

impl ExpenseInput {
    /// Blank entry form: default category, zero amounts, no narration
    pub fn new(
        date: NaiveDate,
        project_name: impl Into<String>,
        person_name: impl Into<String>,
    ) -> Self {
        Self {
            date,
            project_name: project_name.into(),
            person_name: person_name.into(),
            category: ExpenseCategory::default().label().to_string(),
            amounts: ExpenseAmounts::default(),
            narration: String::new(),
        }
    }

    /// Form pre-filled from an existing row, as shown when editing it
    pub fn from_record(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date,
            project_name: record.project_name.clone(),
            person_name: record.person_name.clone(),
            category: record.category.label().to_string(),
            amounts: record.amounts,
            narration: record.narration.clone(),
        }
    }
}

/// Validate input and assemble a record
///
/// Names and narration are trimmed. The total is not an input; it is
/// always derived from the five amounts.
pub fn build_record(input: &ExpenseInput) -> LedgerResult<ExpenseRecord> {
    let project_name = input.project_name.trim();
    if project_name.is_empty() {
        return Err(LedgerError::required_field("Project Name"));
    }

    let person_name = input.person_name.trim();
    if person_name.is_empty() {
        return Err(LedgerError::required_field("Person Name"));
    }

    let category: ExpenseCategory = input.category.parse()?;

    if let Some(kind) = input.amounts.first_negative() {
        return Err(LedgerError::negative_amount(kind.column()));
    }

    if input.amounts.checked_total().is_none() {
        return Err(LedgerError::amount_too_large());
    }

    Ok(ExpenseRecord {
        date: input.date,
        project_name: project_name.to_string(),
        person_name: person_name.to_string(),
        category,
        amounts: input.amounts,
        narration: input.narration.trim().to_string(),
    })
}

/// Service for creating and editing ledger entries
pub struct RecordEditor<'a> {
    ledger: &'a mut LedgerStore,
}

impl<'a> RecordEditor<'a> {
    /// Create a new record editor over a ledger
    pub fn new(ledger: &'a mut LedgerStore) -> Self {
        Self { ledger }
    }

    /// Save a new entry at the end of the ledger
    ///
    /// On `Ok` the caller may reset its form state.
    pub fn create(&mut self, input: &ExpenseInput) -> LedgerResult<ExpenseRecord> {
        let record = build_record(input)?;
        self.ledger.append(record.clone())?;
        Ok(record)
    }

    /// Overwrite the entry at `index` with a full new record
    pub fn update(&mut self, index: usize, input: &ExpenseInput) -> LedgerResult<ExpenseRecord> {
        let record = build_record(input)?;
        self.ledger.replace_at(index, record.clone())?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseKind, Money};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 12).unwrap()
    }

    fn input(project: &str) -> ExpenseInput {
        let mut input = ExpenseInput::new(date(), project, "Kiran");
        input.category = "Delivery".into();
        input.amounts = ExpenseAmounts::new(
            Money::new(dec!(350.75)),
            Money::new(dec!(120.10)),
            Money::new(dec!(999.99)),
            Money::new(dec!(0.05)),
            Money::new(dec!(14.11)),
        );
        input.narration = "  cement run  ".into();
        input
    }

    fn open_ledger(temp_dir: &TempDir) -> LedgerStore {
        LedgerStore::open(temp_dir.path().join("ledger.csv")).unwrap()
    }

    #[test]
    fn test_build_record_computes_exact_total() {
        let record = build_record(&input("Acme")).unwrap();
        assert_eq!(record.total().amount(), dec!(1485.00));
        assert_eq!(record.category, ExpenseCategory::Delivery);
        assert_eq!(record.narration, "cement run");
    }

    #[test]
    fn test_build_record_trims_names() {
        let mut raw = input("  Acme  ");
        raw.person_name = " Kiran\t".into();
        let record = build_record(&raw).unwrap();
        assert_eq!(record.project_name, "Acme");
        assert_eq!(record.person_name, "Kiran");
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let err = build_record(&input("   ")).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("required field missing"));

        let mut raw = input("Acme");
        raw.person_name = String::new();
        assert!(build_record(&raw)
            .unwrap_err()
            .to_string()
            .contains("Person Name"));
    }

    #[test]
    fn test_invalid_category_is_rejected() {
        let mut raw = input("Acme");
        raw.category = "Demolition".into();
        let err = build_record(&raw).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("invalid category"));
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let mut raw = input("Acme");
        raw.amounts.set(ExpenseKind::Food, Money::new(dec!(-0.01)));
        let err = build_record(&raw).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("negative amount: Food"));
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let mut huge = input("Acme");
        huge.amounts.fuel = Money::new(rust_decimal::Decimal::MAX);
        huge.amounts.food = Money::new(rust_decimal::Decimal::MAX);

        let err = build_record(&huge).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("amount too large"));
    }

    #[test]
    fn test_overflowing_entry_leaves_ledger_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        let before = std::fs::read_to_string(ledger.path()).unwrap();

        let mut huge = input("Acme");
        huge.amounts.hotel = Money::new(rust_decimal::Decimal::MAX);
        huge.amounts.other = Money::new(dec!(1));
        assert!(RecordEditor::new(&mut ledger).create(&huge).is_err());

        assert!(ledger.is_empty());
        assert_eq!(std::fs::read_to_string(ledger.path()).unwrap(), before);
    }

    #[test]
    fn test_create_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);

        let saved = RecordEditor::new(&mut ledger).create(&input("Acme")).unwrap();

        let mut reloaded = open_ledger(&temp_dir);
        let records = reloaded.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], saved);
        assert_eq!(records[0], build_record(&input("Acme")).unwrap());
    }

    #[test]
    fn test_create_with_blank_project_leaves_ledger_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        RecordEditor::new(&mut ledger).create(&input("Acme")).unwrap();
        let before = std::fs::read_to_string(ledger.path()).unwrap();

        let err = RecordEditor::new(&mut ledger).create(&input("")).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(ledger.len(), 1);
        assert_eq!(std::fs::read_to_string(ledger.path()).unwrap(), before);
    }

    #[test]
    fn test_update_changes_only_target_row() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        let mut editor = RecordEditor::new(&mut ledger);
        for project in ["Acme", "Bolt", "Crest"] {
            editor.create(&input(project)).unwrap();
        }

        let mut changed = input("Bolt");
        changed.category = "Measurement".into();
        changed.amounts = ExpenseAmounts::default();
        editor.update(1, &changed).unwrap();

        let reloaded = open_ledger(&temp_dir);
        let records = reloaded.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], build_record(&input("Acme")).unwrap());
        assert_eq!(records[1].category, ExpenseCategory::Measurement);
        assert!(records[1].total().is_zero());
        assert_eq!(records[2], build_record(&input("Crest")).unwrap());
    }

    #[test]
    fn test_update_out_of_range_leaves_ledger_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);
        RecordEditor::new(&mut ledger).create(&input("Acme")).unwrap();
        let before = ledger.records().to_vec();

        let err = RecordEditor::new(&mut ledger)
            .update(5, &input("Bolt"))
            .unwrap_err();

        assert!(err.is_out_of_range());
        assert_eq!(ledger.records(), before.as_slice());
        assert_eq!(open_ledger(&temp_dir).records(), before.as_slice());
    }

    #[test]
    fn test_update_validates_before_range_check() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = open_ledger(&temp_dir);

        let err = RecordEditor::new(&mut ledger)
            .update(0, &input(""))
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[test]
    fn test_from_record_prefills_form() {
        let record = build_record(&input("Acme")).unwrap();
        let form = ExpenseInput::from_record(&record);
        assert_eq!(build_record(&form).unwrap(), record);
    }
}
