//! Query and summary engine
//!
//! Filters ledger records by project and aggregates expense columns per
//! project. All functions are pure over a slice of records.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::models::{ExpenseRecord, ProjectSummary};

/// Selector value meaning "no project filter"
pub const ALL_PROJECTS: &str = "All";

/// Project selector for the table view, summary and export
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    /// Exact, case-sensitive project name
    Project(String),
}

impl ProjectFilter {
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        match self {
            Self::All => true,
            Self::Project(name) => record.project_name == *name,
        }
    }
}

impl From<&str> for ProjectFilter {
    fn from(selector: &str) -> Self {
        if selector == ALL_PROJECTS {
            Self::All
        } else {
            Self::Project(selector.to_string())
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_PROJECTS),
            Self::Project(name) => f.write_str(name),
        }
    }
}

/// Records matching the selector, in ledger order
pub fn filter_by_project(records: &[ExpenseRecord], filter: &ProjectFilter) -> Vec<ExpenseRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Like [`filter_by_project`], keeping each record's row position
pub fn filter_with_positions<'r>(
    records: &'r [ExpenseRecord],
    filter: &ProjectFilter,
) -> Vec<(usize, &'r ExpenseRecord)> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .collect()
}

/// Distinct non-blank project names, alphabetically sorted
pub fn list_projects(records: &[ExpenseRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.has_project())
        .map(|record| record.project_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Per-project sums, ordered alphabetically by project name
///
/// Each expense column and the total column are accumulated separately,
/// so `summary.is_consistent()` cross-checks the derived totals. Records
/// without a project are left out.
pub fn summarize(records: &[ExpenseRecord]) -> Vec<ProjectSummary> {
    let mut groups: BTreeMap<&str, ProjectSummary> = BTreeMap::new();

    for record in records.iter().filter(|r| r.has_project()) {
        let summary = groups
            .entry(record.project_name.as_str())
            .or_insert_with(|| ProjectSummary::new(record.project_name.as_str()));
        summary.amounts += record.amounts;
        summary.total += record.total();
        summary.record_count += 1;
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseAmounts, ExpenseCategory, Money};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(project: &str, fuel: Money, food: Money) -> ExpenseRecord {
        ExpenseRecord {
            date: NaiveDate::from_ymd_opt(2024, 9, 3).unwrap(),
            project_name: project.into(),
            person_name: "Arjun".into(),
            category: ExpenseCategory::AdditionalSiteExpense,
            amounts: ExpenseAmounts {
                fuel,
                food,
                ..Default::default()
            },
            narration: String::new(),
        }
    }

    fn ledger() -> Vec<ExpenseRecord> {
        vec![
            record("Zenith", Money::new(dec!(5)), Money::zero()),
            record("Acme", Money::new(dec!(60)), Money::new(dec!(40))),
            record("acme", Money::new(dec!(1)), Money::zero()),
            record("Acme", Money::new(dec!(200.25)), Money::new(dec!(49.75))),
        ]
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let records = ledger();
        let filtered = filter_by_project(&records, &ProjectFilter::from("All"));
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filter_exact_case_sensitive_match() {
        let records = ledger();
        let filtered = filter_by_project(&records, &"Acme".into());
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.project_name == "Acme"));
        assert_eq!(filtered[0].amounts.fuel.amount(), dec!(60));
        assert_eq!(filtered[1].amounts.fuel.amount(), dec!(200.25));

        assert!(filter_by_project(&records, &"Acm".into()).is_empty());
    }

    #[test]
    fn test_filter_with_positions_keeps_row_index() {
        let records = ledger();
        let positions: Vec<usize> = filter_with_positions(&records, &"Acme".into())
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn test_list_projects_sorted_distinct_non_blank() {
        let mut records = ledger();
        records.push(record("  ", Money::zero(), Money::zero()));
        assert_eq!(list_projects(&records), vec!["Acme", "Zenith", "acme"]);
    }

    #[test]
    fn test_summarize_groups_by_project() {
        let summaries = summarize(&ledger());
        let names: Vec<_> = summaries.iter().map(|s| s.project_name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Zenith", "acme"]);

        let acme = &summaries[0];
        assert_eq!(acme.total.amount(), dec!(350));
        assert_eq!(acme.amounts.fuel.amount(), dec!(260.25));
        assert_eq!(acme.amounts.food.amount(), dec!(89.75));
        assert!(acme.amounts.hotel.is_zero());
        assert_eq!(acme.record_count, 2);
        assert!(summaries.iter().all(|s| s.is_consistent()));
    }

    #[test]
    fn test_summarize_empty_input() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_filter_display_and_parse() {
        assert_eq!(ProjectFilter::All.to_string(), "All");
        assert_eq!(
            "Bay Bridge".parse::<ProjectFilter>().unwrap(),
            ProjectFilter::Project("Bay Bridge".into())
        );
    }
}
