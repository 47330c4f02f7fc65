//! Entry CLI commands
//!
//! Implements the add/edit form: `add` saves a new entry, `edit` loads an
//! existing row into the form, applies the given fields and overwrites it.

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_record_details;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseKind, Money};
use crate::services::{ExpenseInput, RecordEditor};
use crate::storage::LedgerStore;

/// Form fields shared by `add` and `edit`
#[derive(Args, Debug, Default)]
pub struct EntryArgs {
    /// Expense date (YYYY-MM-DD), defaults to today for new entries
    #[arg(short, long)]
    pub date: Option<String>,
    /// Project (site) name
    #[arg(short, long)]
    pub project: Option<String>,
    /// Person who incurred the expense
    #[arg(short = 'n', long)]
    pub person: Option<String>,
    /// Category: Installation, "Additional Site Expense", Delivery,
    /// "Installation + Delivery" or Measurement
    #[arg(short, long)]
    pub category: Option<String>,
    /// Fuel amount
    #[arg(long)]
    pub fuel: Option<String>,
    /// Food amount
    #[arg(long)]
    pub food: Option<String>,
    /// Purchase amount
    #[arg(long)]
    pub purchase: Option<String>,
    /// Hotel amount
    #[arg(long)]
    pub hotel: Option<String>,
    /// Other expenses amount
    #[arg(long)]
    pub other: Option<String>,
    /// Narration / details
    #[arg(short = 'm', long)]
    pub narration: Option<String>,
}

impl EntryArgs {
    fn amount_arg(&self, kind: ExpenseKind) -> Option<&str> {
        match kind {
            ExpenseKind::Fuel => self.fuel.as_deref(),
            ExpenseKind::Food => self.food.as_deref(),
            ExpenseKind::Purchase => self.purchase.as_deref(),
            ExpenseKind::Hotel => self.hotel.as_deref(),
            ExpenseKind::Other => self.other.as_deref(),
        }
    }

    /// Overlay the given fields onto a form
    fn apply_to(self, form: &mut ExpenseInput) -> LedgerResult<()> {
        if let Some(date_str) = &self.date {
            form.date = parse_date(date_str)?;
        }

        for kind in ExpenseKind::ALL {
            if let Some(raw) = self.amount_arg(kind) {
                let amount = Money::parse(raw).map_err(|_| {
                    LedgerError::Validation(format!(
                        "Invalid {} amount: '{}'. Use a number like '250' or '99.50'",
                        kind, raw
                    ))
                })?;
                form.amounts.set(kind, amount);
            }
        }

        if let Some(project) = self.project {
            form.project_name = project;
        }
        if let Some(person) = self.person {
            form.person_name = person;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(narration) = self.narration {
            form.narration = narration;
        }

        Ok(())
    }
}

fn parse_date(date_str: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", date_str))
    })
}

/// Save a new entry ("New Entry" in the row selector)
pub fn handle_add(ledger: &mut LedgerStore, settings: &Settings, args: EntryArgs) -> LedgerResult<()> {
    let today = chrono::Local::now().date_naive();
    let mut form = ExpenseInput::new(today, "", "");
    form.category = settings.default_category.label().to_string();
    args.apply_to(&mut form)?;

    let record = RecordEditor::new(ledger).create(&form)?;
    let row = ledger.len() - 1;

    println!("✅ Expense saved (row {})", row);
    print!("{}", format_record_details(row, &record, settings));
    Ok(())
}

/// Overwrite an existing row; fields not given keep their current values
pub fn handle_edit(
    ledger: &mut LedgerStore,
    settings: &Settings,
    row: usize,
    args: EntryArgs,
) -> LedgerResult<()> {
    let current = ledger.get(row).ok_or(LedgerError::OutOfRange {
        index: row,
        len: ledger.len(),
    })?;
    let mut form = ExpenseInput::from_record(current);
    args.apply_to(&mut form)?;

    let record = RecordEditor::new(ledger).update(row, &form)?;

    println!("✅ Expense updated (row {})", row);
    print!("{}", format_record_details(row, &record, settings));
    Ok(())
}

/// Print a row as the edit form would show it
pub fn handle_show(ledger: &LedgerStore, settings: &Settings, row: usize) -> LedgerResult<()> {
    let record = ledger.get(row).ok_or(LedgerError::OutOfRange {
        index: row,
        len: ledger.len(),
    })?;
    print!("{}", format_record_details(row, record, settings));
    Ok(())
}
