//! Expense categories
//!
//! The kind of site work an expense entry was incurred for. The set is
//! fixed; the labels are what the ledger file and reports store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// The kind of site work an expense belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    #[default]
    #[serde(rename = "Installation")]
    Installation,
    #[serde(rename = "Additional Site Expense")]
    AdditionalSiteExpense,
    #[serde(rename = "Delivery")]
    Delivery,
    #[serde(rename = "Installation + Delivery")]
    InstallationAndDelivery,
    #[serde(rename = "Measurement")]
    Measurement,
}

impl ExpenseCategory {
    /// All categories in selector order
    pub const ALL: [ExpenseCategory; 5] = [
        Self::Installation,
        Self::AdditionalSiteExpense,
        Self::Delivery,
        Self::InstallationAndDelivery,
        Self::Measurement,
    ];

    /// Label stored in the ledger file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Installation => "Installation",
            Self::AdditionalSiteExpense => "Additional Site Expense",
            Self::Delivery => "Delivery",
            Self::InstallationAndDelivery => "Installation + Delivery",
            Self::Measurement => "Measurement",
        }
    }

    /// All labels, for help text and error messages
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = LedgerError;

    /// Exact label match after trimming surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| LedgerError::invalid_category(s))
    }
}
