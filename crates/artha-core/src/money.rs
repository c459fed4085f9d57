//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Integer cents fix that, but billing lines multiply a price by a        │
//! │  FRACTIONAL quantity (0.001 kg granularity):                            │
//! │    ₹48.50 × 0.375 kg = ₹18.1875                                         │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Exact base-10 arithmetic, full precision while accumulating,         │
//! │    rounded to 2 decimal places ONLY at display time                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use artha_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::new(dec!(10.99));
//! let total = price * dec!(3);
//! assert_eq!(total.amount(), dec!(32.97));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Decimal places used when rounding for display/output.
pub const DISPLAY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value with exact decimal arithmetic.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values — a grand total may go
///   below zero when the discount exceeds subtotal + tax, and that is
///   displayed as-is
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **No intermediate rounding**: Sums accumulate at full precision;
///   [`Money::rounded`] is for presentation only
///
/// ## User Workflow Context
/// ```text
/// Product.price ──► LineItem.unit_price ──► line total ──► subtotal
///                                                             │
///                              grand total ◄── + tax - discount
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, Default,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(#[ts(as = "String")] Decimal);

impl Money {
    /// Creates a Money value from a decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use artha_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(10.99));
    /// assert_eq!(price.amount(), dec!(10.99));
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the raw, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the amount rounded to 2 decimal places for display.
    ///
    /// Uses the default banker's rounding (round half to even), which
    /// avoids systematic bias across many invoices.
    ///
    /// ## Example
    /// ```rust
    /// use artha_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let total = Money::new(dec!(18.1875));
    /// assert_eq!(total.rounded(), dec!(18.19));
    ///
    /// // Internal accumulation keeps full precision:
    /// assert_eq!(total.amount(), dec!(18.1875));
    /// ```
    #[inline]
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp(DISPLAY_DECIMALS)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the display-rounded amount.
///
/// ## Note
/// No currency symbol here. Symbol and localization belong to the UI layer;
/// this is for logs and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl From<Decimal> for Money {
    #[inline]
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl From<i64> for Money {
    #[inline]
    fn from(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a decimal quantity (line total = price × quantity).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: Decimal) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line totals without intermediate rounding.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
