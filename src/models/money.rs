//! Money type for representing currency amounts
//!
//! Amounts are plain decimals stored as `f64` and serialized as bare JSON
//! numbers, so the budget file stays readable and hand-editable.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A monetary amount in whole currency units (e.g. `12.5` is $12.50)
///
/// Non-finite amounts refuse to serialize: JSON has no representation for
/// them that reads back as a number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a decimal value
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// let amount = Money::new(10.5); // $10.50
    /// ```
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw decimal value
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Check if the amount is zero or more; false for NaN
    pub fn is_non_negative(&self) -> bool {
        self.0 >= 0.0
    }

    /// Check if the amount is neither infinite nor NaN
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Ratio of this amount to `limit`, or `0.0` when the limit is not positive
    pub fn ratio_of(&self, limit: Money) -> f64 {
        if limit.is_positive() {
            self.0 / limit.0
        } else {
            0.0
        }
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1e3".
    /// Non-finite values ("inf", "NaN") are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).trim_start();

        if rest.is_empty() || (negative && rest.starts_with(['-', '+'])) {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        let value: f64 = rest
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite(trimmed.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_finite() {
            return Err(S::Error::custom(format!(
                "cannot store non-finite amount {}",
                self.0
            )));
        }
        serializer.serialize_f64(self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite(s) => write!(f, "Amount must be a finite number: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(10.5)), "$10.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
        assert_eq!(format!("{}", Money::new(-10.5)), "-$10.50");
        assert_eq!(format!("{}", Money::new(0.05)), "$0.05");
        assert_eq!(Money::new(130.0).format_with_symbol("€"), "€130.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().amount(), 10.5);
        assert_eq!(Money::parse("$10.50").unwrap().amount(), 10.5);
        assert_eq!(Money::parse("-10.50").unwrap().amount(), -10.5);
        assert_eq!(Money::parse("-$5").unwrap().amount(), -5.0);
        assert_eq!(Money::parse(" 10 ").unwrap().amount(), 10.0);
        assert_eq!(Money::parse("1e3").unwrap().amount(), 1000.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("ten"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("$").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("12.3.4").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            Money::parse("inf"),
            Err(MoneyParseError::NotFinite(_))
        ));
        assert!(matches!(
            Money::parse("NaN"),
            Err(MoneyParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_ratio_of() {
        assert_eq!(Money::new(75.0).ratio_of(Money::new(150.0)), 0.5);
        assert_eq!(Money::new(75.0).ratio_of(Money::zero()), 0.0);
        assert_eq!(Money::new(75.0).ratio_of(Money::new(-1.0)), 0.0);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::new(1.25), Money::new(2.5), Money::new(3.0)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.amount(), 6.75);
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(12.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let from_int: Money = serde_json::from_str("150").unwrap();
        assert_eq!(from_int.amount(), 150.0);
    }

    #[test]
    fn test_non_finite_does_not_serialize() {
        assert!(serde_json::to_string(&Money::new(f64::NAN)).is_err());
        assert!(serde_json::to_string(&Money::new(f64::INFINITY)).is_err());
        assert!(serde_json::to_string(&Money::new(f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn test_is_non_negative() {
        assert!(Money::zero().is_non_negative());
        assert!(Money::new(0.01).is_non_negative());
        assert!(!Money::new(-0.01).is_non_negative());
        assert!(!Money::new(f64::NAN).is_non_negative());
    }
}
