//! Type-safe price representation using decimal arithmetic.
//!
//! All monetary amounts in the client are unit prices or sums of
//! `unit price x quantity`, carried as [`rust_decimal::Decimal`] to avoid
//! floating-point drift. The platform sells in a single currency, so no
//! currency code travels with the amount.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the platform's currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Total for `quantity` units at this price.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
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
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let price = Price::from(100);
        assert_eq!(price.line_total(3), Price::from(300));
        assert_eq!(price.line_total(0), Price::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from(10), Price::from(25)].into_iter().sum();
        assert_eq!(total, Price::from(35));
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from(100).to_string(), "100.00");
        assert_eq!(
            Price::new(Decimal::new(1950, 2)).to_string(),
            "19.50"
        );
    }
}
