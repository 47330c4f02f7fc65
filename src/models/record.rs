//! Expense record model
//!
//! One row of the ledger: who spent what, on which project, and for which
//! kind of site work. The total is derived from the five expense columns
//! and is never stored on its own.

use chrono::NaiveDate;
use std::fmt;
use std::ops::AddAssign;

use super::category::ExpenseCategory;
use super::money::Money;

/// The five expense columns of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseKind {
    Fuel,
    Food,
    Purchase,
    Hotel,
    Other,
}

impl ExpenseKind {
    /// Columns in ledger order
    pub const ALL: [ExpenseKind; 5] = [
        Self::Fuel,
        Self::Food,
        Self::Purchase,
        Self::Hotel,
        Self::Other,
    ];

    /// Column header in the ledger file and reports
    pub fn column(&self) -> &'static str {
        match self {
            Self::Fuel => "Fuel",
            Self::Food => "Food",
            Self::Purchase => "Purchase",
            Self::Hotel => "Hotel",
            Self::Other => "Other Expenses",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Amounts for the five expense columns; each defaults to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpenseAmounts {
    pub fuel: Money,
    pub food: Money,
    pub purchase: Money,
    pub hotel: Money,
    pub other: Money,
}

impl ExpenseAmounts {
    /// Build from amounts given in column order
    pub fn new(fuel: Money, food: Money, purchase: Money, hotel: Money, other: Money) -> Self {
        Self {
            fuel,
            food,
            purchase,
            hotel,
            other,
        }
    }

    pub fn get(&self, kind: ExpenseKind) -> Money {
        match kind {
            ExpenseKind::Fuel => self.fuel,
            ExpenseKind::Food => self.food,
            ExpenseKind::Purchase => self.purchase,
            ExpenseKind::Hotel => self.hotel,
            ExpenseKind::Other => self.other,
        }
    }

    pub fn set(&mut self, kind: ExpenseKind, amount: Money) {
        match kind {
            ExpenseKind::Fuel => self.fuel = amount,
            ExpenseKind::Food => self.food = amount,
            ExpenseKind::Purchase => self.purchase = amount,
            ExpenseKind::Hotel => self.hotel = amount,
            ExpenseKind::Other => self.other = amount,
        }
    }

    /// Iterate `(column, amount)` pairs in ledger order
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseKind, Money)> + '_ {
        ExpenseKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Sum of the five columns
    pub fn total(&self) -> Money {
        self.iter().map(|(_, amount)| amount).sum()
    }

    /// Sum of the five columns, or `None` if it exceeds the decimal range
    pub fn checked_total(&self) -> Option<Money> {
        self.iter()
            .try_fold(Money::zero(), |acc, (_, amount)| acc.checked_add(amount))
    }

    /// First column holding a negative amount, if any
    pub fn first_negative(&self) -> Option<ExpenseKind> {
        self.iter()
            .find(|(_, amount)| amount.is_negative())
            .map(|(kind, _)| kind)
    }
}

impl AddAssign for ExpenseAmounts {
    fn add_assign(&mut self, other: Self) {
        for kind in ExpenseKind::ALL {
            self.set(kind, self.get(kind) + other.get(kind));
        }
    }
}

/// A single expense entry in the ledger
///
/// Records have no identifier of their own; they are addressed by their
/// position in the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    /// Day the expense was incurred
    pub date: NaiveDate,

    /// Project (site) the expense is booked against
    pub project_name: String,

    /// Person who spent the money
    pub person_name: String,

    /// Kind of site work
    pub category: ExpenseCategory,

    /// The five expense columns
    pub amounts: ExpenseAmounts,

    /// Free-text details; empty when not given
    pub narration: String,
}

impl ExpenseRecord {
    /// Canonical column order shared by the ledger file and the report
    pub const COLUMNS: [&'static str; 11] = [
        "Date",
        "Project Name",
        "Person Name",
        "Category",
        "Fuel",
        "Food",
        "Purchase",
        "Hotel",
        "Other Expenses",
        "Total",
        "Narration",
    ];

    /// Derived total of the five expense columns
    pub fn total(&self) -> Money {
        self.amounts.total()
    }

    pub fn has_project(&self) -> bool {
        !self.project_name.trim().is_empty()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {} ({}) {}",
            self.date.format("%Y-%m-%d"),
            self.project_name,
            self.person_name,
            self.category,
            self.total()
        )
    }
}
