//! Non-negative monetary amounts in the smallest currency unit.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

const CENTS_PER_UNIT: u64 = 100;

/// Amount of money in cents. Negative amounts are unrepresentable.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build from a signed cent amount, rejecting negatives.
    pub fn try_from_cents(cents: i64) -> Result<Self, DomainError> {
        u64::try_from(cents)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("price must be non-negative (got {cents} cents)")))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// `self × quantity`, saturating at `u64::MAX` cents.
    pub fn times(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / CENTS_PER_UNIT, self.0 % CENTS_PER_UNIT)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parse a decimal amount such as `2`, `2.5` or `2.50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(DomainError::validation(format!("price must be non-negative (got {s})")));
        }

        let invalid = || DomainError::validation(format!("invalid price: {s:?}"));
        let (units, fraction) = s.split_once('.').unwrap_or((s, ""));
        if units.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2 || !units.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: u64 = if units.is_empty() { 0 } else { units.parse().map_err(|_| invalid())? };
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(fraction))
            .map(Self)
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!("2".parse::<Money>().unwrap(), Money::from_cents(200));
        assert_eq!("2.5".parse::<Money>().unwrap(), Money::from_cents(250));
        assert_eq!("0.05".parse::<Money>().unwrap(), Money::from_cents(5));
        assert_eq!(".75".parse::<Money>().unwrap(), Money::from_cents(75));
        assert_eq!(" 10.00 ".parse::<Money>().unwrap(), Money::from_cents(1000));
    }

    #[test]
    fn rejects_negative_and_malformed_amounts() {
        for input in ["-1", "-0.50", "", ".", "1.234", "abc", "1,50", "1.-5"] {
            let err = input.parse::<Money>().unwrap_err();
            assert!(err.is_validation(), "{input:?} -> {err:?}");
        }
    }

    #[test]
    fn try_from_cents_rejects_negatives() {
        assert_eq!(Money::try_from_cents(150).unwrap().cents(), 150);
        assert!(Money::try_from_cents(-1).unwrap_err().is_validation());
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::from_cents(1100).to_string(), "11.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn multiplication_saturates() {
        assert_eq!(Money::from_cents(200).times(3), Money::from_cents(600));
        assert_eq!(Money::from_cents(u64::MAX).times(2), Money::from_cents(u64::MAX));
    }

    #[test]
    fn serializes_as_plain_cents() {
        let json = serde_json::to_string(&Money::from_cents(250)).unwrap();
        assert_eq!(json, "250");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: Display output parses back to the same amount.
            #[test]
            fn display_output_parses_back(cents in 0u64..10_000_000_000u64) {
                let money = Money::from_cents(cents);
                prop_assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
            }
        }
    }
}
