//! Money type for representing expense amounts
//!
//! Wraps `rust_decimal::Decimal` so that summing two-decimal amounts is
//! exact. Provides safe arithmetic operations, parsing and formatting.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use thiserror::Error;

/// A monetary amount in the ledger's (single) currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Wrap a decimal value
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money amount from whole currency units and hundredths
    ///
    /// # Examples
    /// ```
    /// use site_ledger::models::Money;
    /// let amount = Money::from_units_cents(10, 50); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(Decimal::new(units * 100 + cents, 2))
    }

    /// Get the underlying decimal
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly below zero (`-0` is not negative)
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Add two amounts, or `None` if the sum does not fit
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Approximate floating point value, for spreadsheet cells only
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Plain decimal text as stored in the ledger file
    pub fn to_plain_string(&self) -> String {
        self.0.to_string()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "10", "₹1,250.00", "$10.50", "1e3".
    /// A blank string is zero, matching how an untouched form field or an
    /// empty ledger cell reads.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::zero());
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.trim_start_matches(['₹', '$']).replace(',', "");
        if rest.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let parsed = if rest.contains(['e', 'E']) {
            Decimal::from_scientific(&rest)
        } else {
            Decimal::from_str(&rest)
        };
        let value = parsed.map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol, two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// Aggregates saturate at the decimal range; records that overflow on
// their own are rejected by `checked_add` callers before they are stored.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}
