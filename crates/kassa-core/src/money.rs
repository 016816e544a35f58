//! # Money Module
//!
//! Provides the `Money` type for monetary values on a receipt.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64:                                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Kassa prices goods per kg, so quantities are fractional and           │
//! │  integer cents alone can't hold 0.35 kg × 105.00.                      │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    105.00 × 1.0 × 0.35 = 36.75 exactly                                 │
//! │    Rounding happens once, at display time                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kassa_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::new(Decimal::new(10500, 2)); // 105.00
//! let line = price * Decimal::new(2, 0);
//! assert_eq!(line.to_string(), "210.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{AddAssign, Mul};

/// Number of decimal places shown on a receipt.
pub const DISPLAY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value with exact decimal precision.
///
/// Arithmetic keeps full precision; only [`Display`](fmt::Display) rounds,
/// half away from zero, to [`DISPLAY_SCALE`] places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact underlying amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two amounts, returning `None` if the sum leaves the decimal range.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Returns the amount rounded for display.
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let m = Money::new(Decimal::new(36745, 3)); // 36.745
    /// assert_eq!(m.rounded(), Decimal::new(3675, 2));
    /// ```
    pub fn rounded(&self) -> Decimal {
        let mut value = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(DISPLAY_SCALE);
        value
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with exactly two decimal places and no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a quantity or discount factor.
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: Decimal) -> Self {
        Money(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        let mut total = Money::zero();
        for amount in iter {
            total += amount;
        }
        total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Money::new(Decimal::new(210, 0)).to_string(), "210.00");
        assert_eq!(Money::new(Decimal::new(1055, 1)).to_string(), "105.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Money::new(Decimal::new(1005, 3)).to_string(), "1.01");
        assert_eq!(Money::new(Decimal::new(1004, 3)).to_string(), "1.00");
        assert_eq!(Money::new(Decimal::new(-1005, 3)).to_string(), "-1.01");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(Decimal::new(1000, 2));
        let b = Money::new(Decimal::new(500, 2));

        assert_eq!((a * Decimal::new(3, 0)).amount(), Decimal::new(3000, 2));

        let mut c = a;
        c += b;
        assert_eq!(c.amount(), Decimal::new(1500, 2));
    }

    #[test]
    fn test_sum() {
        let total: Money = [1, 2, 3]
            .into_iter()
            .map(|n| Money::new(Decimal::new(n, 0)))
            .sum();
        assert_eq!(total.amount(), Decimal::new(6, 0));

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_checked_add() {
        let a = Money::new(Decimal::new(1000, 2));
        assert_eq!(a.checked_add(a), Some(Money::new(Decimal::new(2000, 2))));

        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::new(Decimal::ONE)), None);
        assert!(Money::zero().is_zero());
    }
}
