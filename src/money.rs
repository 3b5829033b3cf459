//! Integer money type denominated in cents.
//!
//! All pricing arithmetic stays in whole cents; the division by 100 and the
//! US-locale rendering happen only in the `Display` impl, so floating-point
//! rounding never enters the pipeline.

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount in whole cents.
///
/// Displays as a US-formatted currency string with a dollar sign, thousands
/// grouping, and exactly two fraction digits.
///
/// # Examples
///
/// ```
/// use theater_billing::Cents;
///
/// assert_eq!(Cents::new(173_000).to_string(), "$1,730.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cents(i64);

impl Cents {
    /// Zero value.
    pub const ZERO: Self = Cents(0);

    /// Creates a new amount from a whole number of cents.
    pub const fn new(cents: i64) -> Self {
        Cents(cents)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Scale 2 turns the cent count into an exact dollar amount.
        let dollars = Decimal::new(self.0, 2);
        let rendered = format!("{:.2}", dollars.abs());

        // Safety: "{:.2}" always renders a decimal point
        let (whole, fraction) = rendered.split_once('.').expect("two fraction digits");

        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{}", sign, group_thousands(whole), fraction)
    }
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_zero() {
        assert_eq!(Cents::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_formats_sub_dollar_amounts() {
        assert_eq!(Cents::new(5).to_string(), "$0.05");
        assert_eq!(Cents::new(99).to_string(), "$0.99");
    }

    #[test]
    fn test_formats_whole_dollars() {
        assert_eq!(Cents::new(40_000).to_string(), "$400.00");
        assert_eq!(Cents::new(65_000).to_string(), "$650.00");
    }

    #[test]
    fn test_groups_thousands() {
        assert_eq!(Cents::new(173_000).to_string(), "$1,730.00");
        assert_eq!(Cents::new(100_000_00).to_string(), "$100,000.00");
        assert_eq!(Cents::new(123_456_789).to_string(), "$1,234,567.89");
    }

    #[test]
    fn test_formats_negative_amounts() {
        assert_eq!(Cents::new(-50).to_string(), "-$0.50");
        assert_eq!(Cents::new(-173_000).to_string(), "-$1,730.00");
    }

    #[test]
    fn test_addition() {
        let mut total = Cents::ZERO;
        total += Cents::new(65_000);
        total += Cents::new(58_000);
        assert_eq!(total + Cents::new(50_000), Cents::new(173_000));
    }

    #[test]
    fn test_zero_constant() {
        assert_eq!(Cents::ZERO, Cents::new(0));
    }
}
