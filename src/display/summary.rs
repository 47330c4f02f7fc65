//! Project summary display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::ProjectSummary;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Project Name")]
    project: String,
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
}

/// Format project-wise sums as a table
pub fn format_summary_table(summaries: &[ProjectSummary]) -> String {
    if summaries.is_empty() {
        return "No data available\n".to_string();
    }

    let rows = summaries.iter().map(|s| SummaryRow {
        project: s.project_name.clone(),
        fuel: s.amounts.fuel.to_string(),
        food: s.amounts.food.to_string(),
        purchase: s.amounts.purchase.to_string(),
        hotel: s.amounts.hotel.to_string(),
        other: s.amounts.other.to_string(),
        total: s.total.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
