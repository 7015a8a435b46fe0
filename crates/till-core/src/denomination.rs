//! # Denomination Table
//!
//! The fixed, ordered universe of Brazilian real bills and coins.
//!
//! ## Ordering Matters
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DENOMINATIONS (descending face value)                                  │
//! │                                                                         │
//! │   Bills:  200,00  100,00  50,00  20,00  10,00  5,00  2,00              │
//! │   Coins:    1,00    0,50   0,25   0,10   0,05                           │
//! │                                                                         │
//! │   ▲ This order is both the inventory lookup order and the              │
//! │     allocation order. The allocator never sorts.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each entry carries a stable identifier (`stock_200`, `stock_0_05`, ...)
//! used by front ends to label the inventory field for that denomination.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Face values at or above this (R$ 2,00) are bills, below are coins.
const BILL_THRESHOLD_CENTS: u64 = 200;

// =============================================================================
// Denomination Kind
// =============================================================================

/// Whether a denomination is handed out as paper or metal.
///
/// Display only: the allocator treats both the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DenominationKind {
    Bill,
    Coin,
}

impl DenominationKind {
    /// Classifies a face value: `Bill` from two major units upward.
    #[inline]
    pub const fn for_face_value(face_value_cents: u64) -> Self {
        if face_value_cents >= BILL_THRESHOLD_CENTS {
            DenominationKind::Bill
        } else {
            DenominationKind::Coin
        }
    }
}

// =============================================================================
// Denomination
// =============================================================================

/// A single bill or coin type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Denomination {
    /// Face value in centavos. Always positive.
    pub face_value_cents: u64,

    /// Stable identifier for the inventory entry of this denomination.
    pub id: &'static str,
}

impl Denomination {
    const fn new(face_value_cents: u64, id: &'static str) -> Self {
        Denomination {
            face_value_cents,
            id,
        }
    }

    /// Bill or coin.
    #[inline]
    pub const fn kind(&self) -> DenominationKind {
        DenominationKind::for_face_value(self.face_value_cents)
    }

    /// Face value as Money.
    #[inline]
    pub fn face_value(&self) -> Money {
        Money::from_minor_units(self.face_value_cents)
    }

    /// Looks up a denomination by face value.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::Denomination;
    ///
    /// let fifty = Denomination::by_face_value(50).unwrap();
    /// assert_eq!(fifty.id, "stock_0_50");
    /// assert!(Denomination::by_face_value(3).is_none());
    /// ```
    pub fn by_face_value(face_value_cents: u64) -> Option<&'static Denomination> {
        DENOMINATIONS
            .iter()
            .find(|d| d.face_value_cents == face_value_cents)
    }

    /// Looks up a denomination by its stable identifier.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn by_id(id: &str) -> Option<&'static Denomination> {
        let id = id.trim();
        DENOMINATIONS.iter().find(|d| d.id.eq_ignore_ascii_case(id))
    }
}

/// All denominations, strictly descending by face value.
pub static DENOMINATIONS: [Denomination; 12] = [
    Denomination::new(20000, "stock_200"),
    Denomination::new(10000, "stock_100"),
    Denomination::new(5000, "stock_50"),
    Denomination::new(2000, "stock_20"),
    Denomination::new(1000, "stock_10"),
    Denomination::new(500, "stock_5"),
    Denomination::new(200, "stock_2"),
    Denomination::new(100, "stock_1"),
    Denomination::new(50, "stock_0_50"),
    Denomination::new(25, "stock_0_25"),
    Denomination::new(10, "stock_0_10"),
    Denomination::new(5, "stock_0_05"),
];

// =============================================================================
// Unit Tests
// =============================================================================
