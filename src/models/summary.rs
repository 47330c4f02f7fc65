//! Project summary model

use super::money::Money;
use super::record::ExpenseAmounts;

/// Per-project sums of the five expense columns and the total column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub project_name: String,
    /// Column-wise sums
    pub amounts: ExpenseAmounts,
    /// Sum of the records' totals, accumulated independently of `amounts`
    pub total: Money,
    pub record_count: usize,
}

impl ProjectSummary {
    /// Empty summary for a project
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            amounts: ExpenseAmounts::default(),
            total: Money::zero(),
            record_count: 0,
        }
    }

    /// Whether the summed total agrees with the summed columns
    pub fn is_consistent(&self) -> bool {
        self.total == self.amounts.total()
    }
}
