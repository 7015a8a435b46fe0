//! # Register (Tender Flow)
//!
//! Everything that happens between "Calculate" and the result panel.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Total: "27,65"     Paid: "55"     Inventory: { stock_20: 3, ... }      │
//! │       │                  │                │                             │
//! │       ▼                  ▼                │                             │
//! │  Tender::parse ── invalid? ──► InvalidInput (no calculation)           │
//! │       │                                   │                             │
//! │       ▼                                   │                             │
//! │  change_due ── paid < total? ──► InsufficientPayment { missing }       │
//! │       │                                   │                             │
//! │       ▼  change = round(paid - total)     ▼                             │
//! │  allocate(change, supply) ──► ChangeReport                             │
//! │                                   │                                     │
//! │                                   └── fully_covered == false is a      │
//! │                                       shortfall warning, not an error  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::allocator::{allocate, Allocation};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::supply::Supply;
use crate::validation::{parse_amount, validate_purchase_total};

// =============================================================================
// Tender
// =============================================================================

/// A validated purchase total and the amount the customer handed over,
/// both exact decimals in major units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tender {
    pub total: Decimal,
    pub paid: Decimal,
}

impl Tender {
    /// Parses and validates raw form input.
    ///
    /// ## Rules
    /// - Both amounts must parse (see [`parse_amount`])
    /// - The total must be positive
    /// - Paid may be anything that parses; a short payment is caught later
    ///   by [`Tender::change_due`] so that the missing amount can be shown
    pub fn parse(total_raw: &str, paid_raw: &str) -> CoreResult<Self> {
        let total = parse_amount("total", total_raw)?;
        let paid = parse_amount("paid", paid_raw)?;
        validate_purchase_total(total)?;

        Ok(Tender { total, paid })
    }

    /// Change owed, rounded half away from zero to the centavo.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Money, Tender};
    ///
    /// let tender = Tender::parse("27,65", "55").unwrap();
    /// assert_eq!(tender.change_due().unwrap(), Money::from_cents(2735));
    ///
    /// let short = Tender::parse("27,65", "20").unwrap();
    /// assert!(short.change_due().is_err());
    /// ```
    pub fn change_due(&self) -> CoreResult<Money> {
        if self.paid < self.total {
            let missing = self
                .total
                .checked_sub(self.paid)
                .ok_or_else(|| out_of_range("paid"))?;
            return Err(CoreError::InsufficientPayment {
                total: to_money("total", self.total)?,
                paid: to_money("paid", self.paid)?,
                missing: to_money("paid", missing)?,
            });
        }

        let change = self
            .paid
            .checked_sub(self.total)
            .ok_or_else(|| out_of_range("paid"))?;
        to_money("change", change)
    }
}

fn to_money(field: &str, amount: Decimal) -> CoreResult<Money> {
    Money::from_decimal(amount).ok_or_else(|| out_of_range(field))
}

fn out_of_range(field: &str) -> CoreError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX,
    }
    .into()
}

// =============================================================================
// Change Report
// =============================================================================

/// Result of a successful tender: the amounts involved and the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeReport {
    pub total: Money,
    pub paid: Money,
    pub change: Money,
    pub allocation: Allocation,
}

impl ChangeReport {
    /// True when the drawer could hand out the whole change.
    #[inline]
    pub fn is_fully_covered(&self) -> bool {
        self.allocation.fully_covered
    }

    /// True when payment matched the total exactly.
    #[inline]
    pub fn no_change_due(&self) -> bool {
        self.change.is_zero()
    }
}

/// Runs the whole tender flow on raw input.
///
/// ## Example
/// ```rust
/// use till_core::{make_change, Supply};
///
/// let report = make_change("27,65", "55,00", &Supply::unlimited()).unwrap();
/// assert_eq!(report.change.cents(), 2735);
/// assert!(report.is_fully_covered());
/// ```
pub fn make_change(total_raw: &str, paid_raw: &str, supply: &Supply) -> CoreResult<ChangeReport> {
    let tender = Tender::parse(total_raw, paid_raw)?;
    let change = tender.change_due()?;
    let change_cents = change
        .to_minor_units()
        .ok_or_else(|| out_of_range("change"))?;

    Ok(ChangeReport {
        total: to_money("total", tender.total)?,
        paid: to_money("paid", tender.paid)?,
        change,
        allocation: allocate(change_cents, supply),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
