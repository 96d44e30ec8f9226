//! # Money Module
//!
//! Provides the `Money` type for every monetary value in the B2B state.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart subtotal summed from 40 line totals drifts the same way,       │
//! │  and the checkout summary would disagree with the server's invoice.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    line_total = unit_price_cents × quantity   (exact)                  │
//! │    subtotal   = Σ line_total                  (exact)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use b2b_core::money::Money;
//!
//! let unit_price = Money::from_cents(1250); // $12.50
//! let line_total = unit_price.multiply_quantity(4);
//! assert_eq!(line_total.cents(), 5000);
//!
//! // Totals never go below zero, whatever the discounts say
//! let total = (Money::from_cents(100) - Money::from_cents(300)).floor_at_zero();
//! assert!(total.is_zero());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  B2BCartItem.unit_price ──► B2BCartItem.line_total                     │
/// │                                    │                                    │
/// │                                    ▼                                    │
/// │  B2BCartTotals.subtotal ── tier/volume discount ── shipping ── tax     │
/// │                                    │                                    │
/// │                                    ▼                                    │
/// │                         B2BCartTotals.total (≥ 0)                       │
/// │                                                                         │
/// │  SpendingLimit.amount / .spent ──► remaining budget, utilisation       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Signed so that intermediate results (subtotal minus a large discount)
/// can be represented before being floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use b2b_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Copy paper, case of 10 reams   $42.00
    /// Quantity: 12 (min 5, max 200)
    ///      │
    ///      ▼
    /// multiply_quantity(12) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $504.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Clamps negative amounts to zero.
    ///
    /// Used for the cart total and for remaining budgets, neither of which
    /// may be reported as negative.
    #[inline]
    pub fn floor_at_zero(self) -> Self {
        self.max(Money::zero())
    }

    /// Returns `self` as a share of `whole`, in basis points (10000 = 100%).
    ///
    /// Returns `None` when `whole` is zero or negative, since there is no
    /// meaningful ratio.
    ///
    /// ```rust
    /// use b2b_core::money::Money;
    ///
    /// let spent = Money::from_cents(8_000);
    /// let limit = Money::from_cents(10_000);
    /// assert_eq!(spent.ratio_bps(limit), Some(8_000)); // 80%
    /// assert_eq!(spent.ratio_bps(Money::zero()), None);
    /// ```
    pub fn ratio_bps(&self, whole: Money) -> Option<i64> {
        if whole.0 <= 0 {
            return None;
        }
        let bps = i128::from(self.0) * 10_000 / i128::from(whole.0);
        Some(i64::try_from(bps).unwrap_or(if bps < 0 { i64::MIN } else { i64::MAX }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. Storefront formatting (locale, currency symbol)
/// happens in the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
