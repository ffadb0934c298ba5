//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// - **Value Object**: `Money(517)` equals any other `Money(517)`
/// - **Entity**: a `Product` is the same product as long as its id matches
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Largest decimal amount accepted from clients.
///
/// Keeps the cents conversion well inside the exactly-representable range of `f64`.
const MAX_DECIMAL: f64 = 90_000_000_000_000.0;

/// A non-negative money amount stored in minor units (cents).
///
/// Arithmetic is done on integers so totals like `5.17 * 8` come out as exactly
/// `41.36` instead of accumulating floating point error.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convert a decimal amount (e.g. a GraphQL `Float`) to money.
    ///
    /// Amounts with more than two decimal places are rejected rather than rounded.
    pub fn from_decimal(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if value > MAX_DECIMAL {
            return Err(DomainError::validation("price is too large"));
        }

        let scaled = value * 100.0;
        let cents = scaled.round();
        // Absorbs f64 representation error (5.17 * 100.0 == 516.999...).
        let tolerance = (scaled * 1e-14).max(1e-6);
        if (scaled - cents).abs() > tolerance {
            return Err(DomainError::validation("price must have at most two decimal places"));
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_mul(self, qty: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(qty)).map(Money)
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_decimal_accepts_whole_cents() {
        assert_eq!(Money::from_decimal(5.17).unwrap().cents(), 517);
        assert_eq!(Money::from_decimal(10.5).unwrap().cents(), 1050);
        assert_eq!(Money::from_decimal(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn from_decimal_rejects_negative_and_non_finite() {
        assert!(matches!(Money::from_decimal(-0.01), Err(DomainError::Validation(_))));
        assert!(matches!(Money::from_decimal(f64::NAN), Err(DomainError::Validation(_))));
        assert!(matches!(Money::from_decimal(f64::INFINITY), Err(DomainError::Validation(_))));
        assert!(matches!(Money::from_decimal(1e20), Err(DomainError::Validation(_))));
    }

    #[test]
    fn from_decimal_rejects_sub_cent_amounts() {
        for value in [0.004, 2.999, 1.005, 0.001] {
            let err = Money::from_decimal(value).unwrap_err();
            assert_eq!(
                err,
                DomainError::validation("price must have at most two decimal places"),
                "{value}"
            );
        }
    }

    #[test]
    fn multiplication_is_exact() {
        let price = Money::from_decimal(5.17).unwrap();
        let total = price.checked_mul(8).unwrap();
        assert_eq!(total.cents(), 4136);
        assert_eq!(total.to_decimal(), 41.36);
        assert_eq!(total.to_string(), "41.36");
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let big = Money::from_cents(u64::MAX);
        assert_eq!(big.checked_add(Money::from_cents(1)), None);
        assert_eq!(big.checked_mul(2), None);
        assert_eq!(big.saturating_add(Money::from_cents(1)), big);
    }

    #[test]
    fn display_pads_cents() {
        assert_eq!(Money::from_cents(1405).to_string(), "14.05");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: whole-cent decimals survive the cents conversion.
            #[test]
            fn cents_round_trip_through_decimal(cents in 0u64..10_000_000_000) {
                let money = Money::from_cents(cents);
                prop_assert_eq!(Money::from_decimal(money.to_decimal()).unwrap(), money);
            }
        }
    }
}
