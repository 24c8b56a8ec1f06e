//! Type-safe price representation using decimal arithmetic.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency-agnostic price amount.
///
/// Amounts are decimal (never floating point) and treated as whole/decimal
/// currency units. Totals are always derived by summation at the point of
/// use, never cached.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply this per-unit price by a quantity.
    #[must_use]
    pub fn times(&self, qty: u32) -> Self {
        Self(self.0 * Decimal::from(qty))
    }

    /// Whether the amount is negative. Catalog prices are expected to be
    /// non-negative; this exists for boundary validation.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_times_and_sum() {
        let naan = Price::from(60);
        let biryani = Price::from(220);

        let total: Price = [naan.times(3), biryani.times(2)].into_iter().sum();
        assert_eq!(total, Price::from(620));
    }

    #[test]
    fn test_is_negative() {
        assert!(!Price::ZERO.is_negative());
        assert!(!Price::from(50).is_negative());
        assert!(Price::new(Decimal::from(-1)).is_negative());
    }
}
