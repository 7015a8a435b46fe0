//! # Change Allocator
//!
//! Breaks an amount of change into bills and coins, limited by what is in
//! the drawer.
//!
//! ## Algorithm: Bounded Greedy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  remaining = amount                                                     │
//! │                                                                         │
//! │  for d in DENOMINATIONS (largest first):                                │
//! │      desired = remaining / d          ← how many would fit              │
//! │      used    = min(desired, stock[d]) ← how many we actually have       │
//! │      if used > 0:                                                       │
//! │          record (d, used)                                               │
//! │          remaining -= used × d                                          │
//! │                                                                         │
//! │  fully_covered = remaining == 0                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With unlimited stock the real/centavo set is canonical, so this yields the
//! fewest pieces. With scarce stock it may leave a remainder even when some
//! other combination would have covered the amount: there is no backtracking.
//! One pass over twelve denominations, no recursion, no allocation beyond the
//! result vector.
//!
//! ## Example
//! ```rust
//! use till_core::{allocate, Supply};
//!
//! let allocation = allocate(2735, &Supply::unlimited());
//! let pieces: Vec<(u64, u64)> = allocation
//!     .lines
//!     .iter()
//!     .map(|line| (line.face_value_cents, line.quantity))
//!     .collect();
//!
//! assert_eq!(pieces, vec![(2000, 1), (500, 1), (200, 1), (25, 1), (10, 1)]);
//! assert!(allocation.fully_covered);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::denomination::{Denomination, DenominationKind, DENOMINATIONS};
use crate::money::Money;
use crate::supply::Supply;

// =============================================================================
// Result Types
// =============================================================================

/// One row of the breakdown: `quantity` pieces of one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AllocationLine {
    /// Face value in centavos.
    pub face_value_cents: u64,
    /// Bill or coin, for display.
    pub kind: DenominationKind,
    /// Pieces handed out. Always > 0.
    pub quantity: u64,
}

impl AllocationLine {
    fn new(denomination: &Denomination, quantity: u64) -> Self {
        AllocationLine {
            face_value_cents: denomination.face_value_cents,
            kind: denomination.kind(),
            quantity,
        }
    }

    /// Value of this row (face value × quantity) in centavos.
    #[inline]
    pub fn subtotal_cents(&self) -> u64 {
        self.face_value_cents * self.quantity
    }

    /// Face value as Money.
    #[inline]
    pub fn face_value(&self) -> Money {
        Money::from_minor_units(self.face_value_cents)
    }
}

/// Outcome of one allocation.
///
/// ## Invariant
/// `sum(line.subtotal_cents()) + remainder_cents == requested_cents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Allocation {
    /// The change that was asked for, in centavos.
    pub requested_cents: u64,
    /// Denominations used, largest first. Unused denominations are absent.
    pub lines: Vec<AllocationLine>,
    /// Portion of the request the drawer could not cover.
    pub remainder_cents: u64,
    /// True when `remainder_cents == 0`.
    pub fully_covered: bool,
}

impl Allocation {
    /// Centavos actually handed out.
    pub fn paid_out_cents(&self) -> u64 {
        self.lines.iter().map(AllocationLine::subtotal_cents).sum()
    }

    /// Total number of bills and coins handed out.
    pub fn piece_count(&self) -> u64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// True when nothing is handed out.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The uncovered shortfall as Money.
    pub fn remainder(&self) -> Money {
        Money::from_minor_units(self.remainder_cents)
    }

    /// Quantity used of a given face value (zero if not used).
    pub fn quantity_of(&self, face_value_cents: u64) -> u64 {
        self.lines
            .iter()
            .find(|line| line.face_value_cents == face_value_cents)
            .map_or(0, |line| line.quantity)
    }
}

// =============================================================================
// Allocation
// =============================================================================

/// Allocates `amount_cents` of change from `supply`, largest denomination
/// first.
///
/// Total over every amount and supply: never panics, never fails. A drawer
/// that runs dry shows up as `fully_covered == false` with a non-zero
/// `remainder_cents`.
pub fn allocate(amount_cents: u64, supply: &Supply) -> Allocation {
    let mut remaining = amount_cents;
    let mut lines = Vec::new();

    for denomination in DENOMINATIONS.iter() {
        let available = supply.count_of(denomination);
        let desired = remaining / denomination.face_value_cents;
        let used = desired.min(available);

        if used > 0 {
            lines.push(AllocationLine::new(denomination, used));
            // used ≤ remaining / face, so this cannot underflow
            remaining -= used * denomination.face_value_cents;
        }
    }

    Allocation {
        requested_cents: amount_cents,
        lines,
        remainder_cents: remaining,
        fully_covered: remaining == 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
