//! Expense record display formatting
//!
//! Table view of ledger rows and the pre-filled form of a single row.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::models::ExpenseRecord;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Row")]
    row: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Project Name")]
    project: String,
    #[tabled(rename = "Person Name")]
    person: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Fuel")]
    fuel: String,
    #[tabled(rename = "Food")]
    food: String,
    #[tabled(rename = "Purchase")]
    purchase: String,
    #[tabled(rename = "Hotel")]
    hotel: String,
    #[tabled(rename = "Other Expenses")]
    other: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Narration")]
    narration: String,
}

/// Format ledger rows, each with its row position, as a table
pub fn format_record_table(rows: &[(usize, &ExpenseRecord)], settings: &Settings) -> String {
    if rows.is_empty() {
        return "No expense records found.\n".to_string();
    }

    let table_rows = rows.iter().map(|(index, record)| RecordRow {
        row: *index,
        date: format_date(record.date, &settings.date_format),
        project: record.project_name.clone(),
        person: record.person_name.clone(),
        category: record.category.to_string(),
        fuel: record.amounts.fuel.to_string(),
        food: record.amounts.food.to_string(),
        purchase: record.amounts.purchase.to_string(),
        hotel: record.amounts.hotel.to_string(),
        other: record.amounts.other.to_string(),
        total: record.total().to_string(),
        narration: truncate(&record.narration, 30),
    });

    let mut table = Table::new(table_rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format one record the way the edit form shows it
pub fn format_record_details(index: usize, record: &ExpenseRecord, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Row:          {}\n", index));
    output.push_str(&format!(
        "Date:         {}\n",
        format_date(record.date, &settings.date_format)
    ));
    output.push_str(&format!("Project Name: {}\n", record.project_name));
    output.push_str(&format!("Person Name:  {}\n", record.person_name));
    output.push_str(&format!("Category:     {}\n", record.category));

    for (kind, amount) in record.amounts.iter() {
        output.push_str(&format!(
            "{:14}{}\n",
            format!("{}:", kind),
            amount.format_with_symbol(symbol)
        ));
    }

    output.push_str(&format!(
        "Total:        {}\n",
        record.total().format_with_symbol(symbol)
    ));

    if !record.narration.is_empty() {
        output.push_str(&format!("Narration:    {}\n", record.narration));
    }

    output
}

/// Render a date with the configured format, falling back to ISO
fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Truncate to `max_chars` characters, marking the cut with "..."
fn truncate(s: &str, max_chars: usize) -> String {
    let single_line = s.replace('\n', " ");
    if single_line.chars().count() <= max_chars {
        single_line
    } else {
        let kept: String = single_line.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
