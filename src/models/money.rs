//! Money type for representing currency amounts
//!
//! Wraps a fixed-point `Decimal` so that summing many expense amounts never
//! drifts the way binary floating point does. Provides arithmetic, ordering,
//! and two-decimal formatting.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A monetary amount held as an exact decimal
///
/// Serializes as a plain JSON number (`225.5`), which is what report
/// consumers expect for `total` and `totalAmount`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_report::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.format_plain(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Round half away from zero to two decimal places
    pub fn rounded(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Lossy conversion for spreadsheet cells and percentages
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// This amount as a fraction of `whole` (0.0 when `whole` is zero)
    pub fn ratio_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            return 0.0;
        }
        self.0
            .checked_div(whole.0)
            .and_then(|r| r.to_f64())
            .unwrap_or(0.0)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);

        let value = Decimal::from_str(s)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with exactly two decimals and no symbol ("1234.50")
    pub fn format_plain(&self) -> String {
        format!("{:.2}", self.rounded().0)
    }

    /// Format with a currency symbol ("$1234.50", "-$3.00")
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, self.abs().format_plain())
        } else {
            format!("{}{}", symbol, self.format_plain())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
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

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m, Money::parse("10.5").unwrap());
        assert_eq!(m.format_plain(), "10.50");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_format_rounds_to_two_places() {
        assert_eq!(Money::parse("10.005").unwrap().format_plain(), "10.01");
        assert_eq!(Money::parse("225").unwrap().format_plain(), "225.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));

        let mut total = Money::zero();
        total += a;
        total += b;
        assert_eq!(total, Money::from_cents(1500));
    }

    #[test]
    fn test_sum_has_no_float_drift() {
        // 0.1 + 0.2 is the classic float trap
        let total: Money = vec![Money::parse("0.1").unwrap(), Money::parse("0.2").unwrap()]
            .into_iter()
            .sum();
        assert_eq!(total, Money::parse("0.3").unwrap());

        let many: Money = std::iter::repeat(Money::from_cents(1)).take(1000).sum();
        assert_eq!(many, Money::parse("10").unwrap());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("$10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("10").unwrap(), Money::from_cents(1000));
        assert!(Money::parse("ten").is_err());
    }

    #[test]
    fn test_comparison_ignores_scale() {
        assert_eq!(Money::parse("150").unwrap(), Money::parse("150.00").unwrap());
        assert!(Money::from_cents(1000) > Money::from_cents(500));
    }

    #[test]
    fn test_ratio_of() {
        let part = Money::from_cents(7500);
        let whole = Money::from_cents(22500);
        assert!((part.ratio_of(whole) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(part.ratio_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str("10.5").unwrap();
        assert_eq!(m, deserialized);

        let whole: Money = serde_json::from_str("100").unwrap();
        assert_eq!(whole, Money::from_cents(10000));
    }
}
