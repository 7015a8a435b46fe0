//! # till-core: Pure Change-Making Logic for Till
//!
//! This crate is the **heart** of Till. It contains the change calculator
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front End (till CLI / browser)                  │   │
//! │  │    Total + Paid inputs ──► Inventory ──► Result panel           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │  ┌────────────┐ ┌──────────┐ ┌───────────┐ ┌────────────────┐  │   │
//! │  │  │denomination│ │  supply  │ │ allocator │ │ register/render│  │   │
//! │  │  │   table    │ │ mapping  │ │  greedy   │ │ tender, receipt│  │   │
//! │  │  └────────────┘ └──────────┘ └───────────┘ └────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO FILES • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`denomination`] - The fixed, ordered table of bills and coins
//! - [`supply`] - Available count per denomination
//! - [`allocator`] - Greedy, supply-bounded change allocation
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`validation`] - Parsing and sanitation of raw user input
//! - [`register`] - The tender flow: total + paid → change breakdown
//! - [`render`] - Human-readable receipt lines
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{allocate, Supply};
//!
//! // R$ 3,00 in change with a single R$ 1,00 coin in the drawer
//! let supply = Supply::empty().with(100, 1);
//! let allocation = allocate(300, &supply);
//!
//! assert_eq!(allocation.piece_count(), 1);
//! assert_eq!(allocation.remainder_cents, 200);
//! assert!(!allocation.fully_covered);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocator;
pub mod denomination;
pub mod error;
pub mod money;
pub mod register;
pub mod render;
pub mod supply;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use allocator::{allocate, Allocation, AllocationLine};
pub use denomination::{Denomination, DenominationKind, DENOMINATIONS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use register::{make_change, ChangeReport, Tender};
pub use render::{Locale, Receipt, Tone};
pub use supply::Supply;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minor units per major unit (centavos per real).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Stock assumed for every denomination when nothing else is configured.
pub const DEFAULT_STOCK_PER_DENOMINATION: u64 = 10;
