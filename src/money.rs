//! Monetary amounts with cent precision.
//!
//! Amounts are exact: input finer than a cent is refused rather than
//! rounded, and every value stays within [`Money::max`] in magnitude so
//! balance arithmetic can never overflow the underlying decimal.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest magnitude accepted, in cents (one quadrillion units).
const MAX_CENTS: i64 = 100_000_000_000_000_000;

/// Why a value could not become `Money`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Not a decimal number
    #[error("not a number: {0}")]
    Parse(String),

    /// More than two decimal places
    #[error("amounts are limited to {} decimal places", Money::SCALE)]
    TooPrecise,

    /// Magnitude above the supported maximum
    #[error("amount is larger than {}", Money::max())]
    OutOfRange,
}

/// An exact monetary amount with at most 2 decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use branch_ledger::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// assert!(Money::from_str("0.005").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places kept.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Largest amount (and balance) representable.
    pub fn max() -> Self {
        Money(Decimal::new(MAX_CENTS, Self::SCALE))
    }

    /// Creates an amount from a whole number of cents within range.
    pub(crate) fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents.clamp(-MAX_CENTS, MAX_CENTS), Self::SCALE))
    }

    /// Returns `true` if this amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Sum of both amounts, or `None` when it leaves the supported range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).and_then(|sum| Money::try_from(sum).ok())
    }

    /// Difference of both amounts, or `None` when it leaves the supported range.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).and_then(|diff| Money::try_from(diff).ok())
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.normalize().scale() > Self::SCALE {
            return Err(MoneyError::TooPrecise);
        }
        if value.abs() > Self::max().0 {
            return Err(MoneyError::OutOfRange);
        }

        // exact: at most SCALE significant decimals
        let mut cents = value;
        cents.rescale(Self::SCALE);
        Ok(Money(cents))
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal =
            Decimal::from_str(s.trim()).map_err(|e| MoneyError::Parse(e.to_string()))?;
        Money::try_from(decimal)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_from_str_keeps_exact_cents() {
        assert_eq!(dec("1").to_string(), "1.00");
        assert_eq!(dec("1.5").to_string(), "1.50");
        assert_eq!(dec("  2.25  ").to_string(), "2.25");
        assert_eq!(dec("-5").to_string(), "-5.00");
        assert_eq!(dec("3.1000").to_string(), "3.10");
    }

    #[test]
    fn test_from_str_rejects_sub_cent_amounts() {
        assert_eq!(Money::from_str("0.001"), Err(MoneyError::TooPrecise));
        assert_eq!(Money::from_str("0.005"), Err(MoneyError::TooPrecise));
        assert_eq!(Money::from_str("-1.015"), Err(MoneyError::TooPrecise));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(matches!(Money::from_str("ten"), Err(MoneyError::Parse(_))));
        assert!(matches!(Money::from_str(""), Err(MoneyError::Parse(_))));
    }

    #[test]
    fn test_from_str_enforces_range() {
        assert_eq!(Money::max().to_string(), "1000000000000000.00");
        assert_eq!(dec("1000000000000000"), Money::max());
        assert_eq!(
            Money::from_str("1000000000000000.01"),
            Err(MoneyError::OutOfRange)
        );
        assert_eq!(
            Money::from_str("79228162514264337593543950335"),
            Err(MoneyError::OutOfRange)
        );
        assert_eq!(
            Money::from_str("-79228162514264337593543950335"),
            Err(MoneyError::OutOfRange)
        );
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(50000).to_string(), "500.00");
        assert_eq!(Money::from_cents(5), dec("0.05"));
        assert_eq!(Money::from_cents(i64::MAX), Money::max());
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = dec("1.5");
        let b = dec("2.5");

        assert_eq!(a.checked_add(b).unwrap().to_string(), "4.00");
        assert_eq!(b.checked_sub(a).unwrap().to_string(), "1.00");
        assert_eq!(a.checked_sub(b).unwrap().to_string(), "-1.00");
    }

    #[test]
    fn test_checked_arithmetic_stays_in_range() {
        assert_eq!(Money::max().checked_add(dec("0.01")), None);
        assert_eq!(Money::max().checked_add(Money::max()), None);
        assert_eq!(Money::ZERO.checked_sub(Money::max()).unwrap().to_string(), "-1000000000000000.00");
        assert_eq!(
            Money::max().checked_sub(dec("0.01")).unwrap().to_string(),
            "999999999999999.99"
        );
    }

    #[test]
    fn test_sign_checks() {
        assert!(dec("0.01").is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!dec("-3").is_positive());
    }
}
