//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Tender / inventory errors                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  till-cli errors (app)                                                 │
//! │  └── ConfigError      - Configuration loading failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → Receipt (alert tone) → User       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Running out of stock while making change is a normal outcome, reported
//! through [`Allocation::fully_covered`](crate::Allocation). The allocator
//! itself never fails.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised before the allocator runs.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The customer handed over less than the purchase total.
    ///
    /// ## User Workflow
    /// ```text
    /// Total: 27,65   Paid: 20,00
    ///      │
    ///      ▼
    /// InsufficientPayment { missing: 7,65 }
    ///      │
    ///      ▼
    /// UI shows: "Insufficient payment. Missing: R$ 7,65"
    /// ```
    #[error("Insufficient payment: total {total}, paid {paid}, missing {missing}")]
    InsufficientPayment {
        total: Money,
        paid: Money,
        missing: Money,
    },

    /// An inventory entry names a denomination that is not in the table.
    #[error("Unknown denomination: {0}")]
    UnknownDenomination(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for errors caused by malformed or out-of-range input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CoreError::Validation(_) | CoreError::UnknownDenomination(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., letters in an amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientPayment {
            total: Money::from_cents(2765),
            paid: Money::from_cents(2000),
            missing: Money::from_cents(765),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient payment: total 27.65, paid 20.00, missing 7.65"
        );

        let err = CoreError::UnknownDenomination("stock_3".to_string());
        assert_eq!(err.to_string(), "Unknown denomination: stock_3");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "total".to_string(),
        };
        assert_eq!(err.to_string(), "total is required");

        let err = ValidationError::MustBePositive {
            field: "total".to_string(),
        };
        assert_eq!(err.to_string(), "total must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "paid".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(core_err.is_invalid_input());
    }

    #[test]
    fn test_insufficient_payment_is_not_invalid_input() {
        let err = CoreError::InsufficientPayment {
            total: Money::from_cents(100),
            paid: Money::from_cents(50),
            missing: Money::from_cents(50),
        };
        assert!(!err.is_invalid_input());
    }
}
