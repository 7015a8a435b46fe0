//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    55.00 - 27.65 = 27.349999999999998  ❌ WRONG!                        │
//! │                                                                         │
//! │  Breaking that into coins would leave a phantom fraction of a cent.    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    5500 - 2765 = 2735 centavos, exactly                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! User-typed amounts are parsed as [`Decimal`] and converted here, once,
//! with half-away-from-zero rounding. From then on everything is `i64`.
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let total = Money::from_cents(2765); // R$ 27,65
//! let paid = Money::from_cents(5500);  // R$ 55,00
//!
//! assert!(paid > total);
//! assert_eq!(paid.format_with_separator(','), "55,00");
//! assert_eq!(total.to_minor_units(), Some(2765));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::MINOR_PER_MAJOR;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as a payment shortfall may be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates Money from an unsigned minor-unit count, as produced by the
    /// allocator. Saturates at `i64::MAX`.
    #[inline]
    pub fn from_minor_units(units: u64) -> Self {
        Money(i64::try_from(units).unwrap_or(i64::MAX))
    }

    /// Converts a decimal amount in major units (reais) to Money, rounding
    /// half away from zero to the nearest cent.
    ///
    /// Returns `None` when the amount does not fit in an `i64` of cents.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use till_core::money::Money;
    ///
    /// let amount: Decimal = "10.005".parse().unwrap();
    /// assert_eq!(Money::from_decimal(amount), Some(Money::from_cents(1001)));
    ///
    /// let negative: Decimal = "-10.005".parse().unwrap();
    /// assert_eq!(Money::from_decimal(negative), Some(Money::from_cents(-1001)));
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        amount
            .checked_mul(Decimal::from(MINOR_PER_MAJOR))
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_i64())
            .map(Money)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as unsigned minor units, or `None` if negative.
    ///
    /// This is the only way into the allocator, which takes `u64`.
    #[inline]
    pub fn to_minor_units(&self) -> Option<u64> {
        u64::try_from(self.0).ok()
    }

    /// Returns the major unit (reais) portion.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).major(), 10);
    /// assert_eq!(Money::from_cents(-550).major(), -5);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
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

    /// Formats the amount with two decimals and the given decimal separator.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(5).format_with_separator(','), "0,05");
    /// assert_eq!(Money::from_cents(-1250).format_with_separator('.'), "-12.50");
    /// ```
    pub fn format_with_separator(&self, separator: char) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}{:02}",
            sign,
            self.major().abs(),
            separator,
            self.minor_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `major.minor` rendering, without currency symbol.
///
/// ## Note
/// This is for logs and error messages. Use [`crate::render::Locale`]
/// for anything shown to the operator.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_separator('.'))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
