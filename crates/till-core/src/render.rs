//! # Receipt Rendering
//!
//! Turns a [`ChangeReport`] (or the error that prevented one) into the text
//! shown in the result panel.
//!
//! ## Result Panel
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Total change: R$ 27,35                          tone: success          │
//! │  Change details:                                                        │
//! │    1 bill of R$ 20,00                                                   │
//! │    1 bill of R$ 5,00                                                    │
//! │    1 bill of R$ 2,00                                                    │
//! │    1 coin of R$ 0,25                                                    │
//! │    1 coin of R$ 0,10                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! When the drawer cannot cover the change the panel switches to the
//! `alert` tone and ends with a shortfall line.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::allocator::AllocationLine;
use crate::denomination::DenominationKind;
use crate::error::CoreError;
use crate::money::Money;
use crate::register::ChangeReport;

const INVALID_INPUT_MESSAGE: &str = "Please enter valid values for the purchase.";
const DETAILS_TITLE: &str = "Change details:";
const NO_CHANGE_MESSAGE: &str = "No change due.";

// =============================================================================
// Locale
// =============================================================================

/// Display conventions for amounts and line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// Printed before every amount, e.g. `R$`.
    pub currency_symbol: String,
    /// Decimal separator for amounts.
    pub decimal_separator: char,
    /// Singular word for a bill.
    pub bill_label: String,
    /// Singular word for a coin.
    pub coin_label: String,
    /// Word between the piece label and the amount ("1 bill *of* R$ 20,00").
    pub connector: String,
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            currency_symbol: "R$".to_string(),
            decimal_separator: ',',
            bill_label: "bill".to_string(),
            coin_label: "coin".to_string(),
            connector: "of".to_string(),
        }
    }
}

impl Locale {
    /// Formats an amount with symbol and separator.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Locale, Money};
    ///
    /// let locale = Locale::default();
    /// assert_eq!(locale.format_money(Money::from_cents(2735)), "R$ 27,35");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        format!(
            "{} {}",
            self.currency_symbol,
            amount.format_with_separator(self.decimal_separator)
        )
    }

    fn label(&self, kind: DenominationKind) -> &str {
        match kind {
            DenominationKind::Bill => &self.bill_label,
            DenominationKind::Coin => &self.coin_label,
        }
    }

    /// Formats one breakdown row: `<quantity> <label>[s] <connector> <amount>`.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{allocate, Locale, Supply};
    ///
    /// let allocation = allocate(400, &Supply::unlimited());
    /// let line = Locale::default().format_line(&allocation.lines[0]);
    /// assert_eq!(line, "2 bills of R$ 2,00");
    /// ```
    pub fn format_line(&self, line: &AllocationLine) -> String {
        let plural = if line.quantity > 1 { "s" } else { "" };
        format!(
            "{} {}{} {} {}",
            line.quantity,
            self.label(line.kind),
            plural,
            self.connector,
            self.format_money(line.face_value())
        )
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Overall tone of the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Change computed and fully covered by the drawer.
    Success,
    /// Rejected input, short payment, or a drawer shortfall.
    Alert,
}

/// Everything the result panel shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    pub tone: Tone,
    pub headline: String,
    /// Present only when a breakdown was computed.
    pub details_title: Option<String>,
    pub lines: Vec<String>,
    /// Present only when the drawer could not cover the change.
    pub shortfall: Option<String>,
}

impl Receipt {
    /// Renders a completed tender.
    pub fn for_report(report: &ChangeReport, locale: &Locale) -> Self {
        let allocation = &report.allocation;

        let lines = if report.no_change_due() {
            vec![NO_CHANGE_MESSAGE.to_string()]
        } else {
            allocation
                .lines
                .iter()
                .map(|line| locale.format_line(line))
                .collect()
        };

        let shortfall = (!allocation.fully_covered).then(|| {
            format!(
                "[WARNING] Change unavailable! Missing {}",
                locale.format_money(allocation.remainder())
            )
        });

        Receipt {
            tone: if allocation.fully_covered {
                Tone::Success
            } else {
                Tone::Alert
            },
            headline: format!("Total change: {}", locale.format_money(report.change)),
            details_title: Some(DETAILS_TITLE.to_string()),
            lines,
            shortfall,
        }
    }

    /// Renders the reason no calculation took place.
    pub fn for_error(err: &CoreError, locale: &Locale) -> Self {
        let (headline, lines) = match err {
            CoreError::InsufficientPayment { missing, .. } => (
                format!("Insufficient payment. Missing: {}", locale.format_money(*missing)),
                Vec::new(),
            ),
            CoreError::Validation(reason) => {
                (INVALID_INPUT_MESSAGE.to_string(), vec![reason.to_string()])
            }
            CoreError::UnknownDenomination(_) => {
                (INVALID_INPUT_MESSAGE.to_string(), vec![err.to_string()])
            }
        };

        Receipt {
            tone: Tone::Alert,
            headline,
            details_title: None,
            lines,
            shortfall: None,
        }
    }
}

/// Plain-text panel, one message per line.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        if let Some(title) = &self.details_title {
            writeln!(f, "{title}")?;
        }
        for line in &self.lines {
            writeln!(f, "  {line}")?;
        }
        if let Some(shortfall) = &self.shortfall {
            writeln!(f, "{shortfall}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
