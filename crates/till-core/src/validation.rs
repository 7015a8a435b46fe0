//! # Validation Module
//!
//! Turns raw, operator-typed strings into values the core can trust.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Boundaries                                   │
//! │                                                                         │
//! │  Amounts ("27,65", "55.00")                                            │
//! │  ├── parse_amount: either separator, rejected on garbage               │
//! │  └── validate_purchase_total: total must be > 0                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Tender flow (register.rs) computes change in exact decimals           │
//! │                                                                         │
//! │  Inventory counts ("3", "", "-1", "abc")                               │
//! │  └── sanitize_count: never fails, bad input becomes 0                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{parse_amount, sanitize_count};
//!
//! let total = parse_amount("total", "27,65").unwrap();
//! assert_eq!(total.to_string(), "27.65");
//!
//! assert_eq!(sanitize_count("3"), 3);
//! assert_eq!(sanitize_count("three"), 0);
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const AMOUNT_FORMAT_HINT: &str = "must be a number such as 12,50 or 12.50";

// =============================================================================
// Amount Validators
// =============================================================================

/// Parses a monetary amount typed by the operator.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Either `.` or `,` is accepted as the decimal separator, at most once
/// - An optional leading `+` or `-` sign is accepted
/// - Anything else (letters, thousands separators, exponents) is rejected
///
/// ## Example
/// ```rust
/// use till_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("paid", "55").unwrap().to_string(), "55");
/// assert_eq!(parse_amount("paid", "0,5").unwrap().to_string(), "0.5");
/// assert!(parse_amount("paid", "").is_err());
/// assert!(parse_amount("paid", "1.234,56").is_err());
/// ```
pub fn parse_amount(field: &str, raw: &str) -> ValidationResult<Decimal> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let (sign, body) = match raw.as_bytes()[0] {
        b'-' => ("-", &raw[1..]),
        b'+' => ("", &raw[1..]),
        _ => ("", raw),
    };

    let separators = body.chars().filter(|c| *c == '.' || *c == ',').count();
    let digits = body.chars().filter(char::is_ascii_digit).count();
    let well_formed = separators <= 1
        && digits > 0
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',');

    if !well_formed {
        return Err(invalid_amount(field));
    }

    let normalized = body.replace(',', ".");
    let normalized = normalized.trim_end_matches('.');
    let normalized = if normalized.starts_with('.') {
        format!("{sign}0{normalized}")
    } else {
        format!("{sign}{normalized}")
    };

    Decimal::from_str(&normalized).map_err(|_| invalid_amount(field))
}

/// Validates the purchase total.
///
/// ## Rules
/// - Must be strictly positive: there is no sale to make change for otherwise
pub fn validate_purchase_total(total: Decimal) -> ValidationResult<()> {
    if total <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "total".to_string(),
        });
    }

    Ok(())
}

fn invalid_amount(field: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: AMOUNT_FORMAT_HINT.to_string(),
    }
}

// =============================================================================
// Inventory Sanitation
// =============================================================================

/// Coerces a raw inventory count to a non-negative integer.
///
/// ## Rules
/// - Leading whitespace and an optional sign are skipped, then the leading
///   digits are read (`"12 notes"` → 12, `"3.9"` → 3)
/// - No leading digits, or a negative number → 0
/// - Counts too large for `u64` saturate
///
/// ## Example
/// ```rust
/// use till_core::validation::sanitize_count;
///
/// assert_eq!(sanitize_count(" 12 "), 12);
/// assert_eq!(sanitize_count("3.9"), 3);
/// assert_eq!(sanitize_count("-4"), 0);
/// assert_eq!(sanitize_count(""), 0);
/// ```
pub fn sanitize_count(raw: &str) -> u64 {
    let raw = raw.trim_start();
    let (negative, body) = match raw.chars().next() {
        Some('-') => (true, &raw[1..]),
        Some('+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits: &str = {
        let end = body
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(body.len());
        &body[..end]
    };

    if digits.is_empty() || negative {
        return 0;
    }

    digits.parse::<u64>().unwrap_or(u64::MAX)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_amount_separators() {
        assert_eq!(parse_amount("total", "27,65").unwrap(), dec("27.65"));
        assert_eq!(parse_amount("total", "27.65").unwrap(), dec("27.65"));
        assert_eq!(parse_amount("total", " 100 ").unwrap(), dec("100"));
        assert_eq!(parse_amount("total", ",5").unwrap(), dec("0.5"));
        assert_eq!(parse_amount("total", "12,").unwrap(), dec("12"));
    }

    #[test]
    fn test_parse_amount_signs() {
        assert_eq!(parse_amount("paid", "-3,50").unwrap(), dec("-3.50"));
        assert_eq!(parse_amount("paid", "+3,50").unwrap(), dec("3.50"));
        assert_eq!(parse_amount("paid", "-,5").unwrap(), dec("-0.5"));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("total", "   "),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["abc", "12abc", "1.234,56", "1,2,3", ".", "-", "1e5", "1 000", "R$ 5"] {
            assert!(
                matches!(parse_amount("total", bad), Err(ValidationError::InvalidFormat { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_amount_reports_field() {
        let err = parse_amount("paid", "x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "paid has invalid format: must be a number such as 12,50 or 12.50"
        );
    }

    #[test]
    fn test_validate_purchase_total() {
        assert!(validate_purchase_total(dec("0.01")).is_ok());
        assert!(validate_purchase_total(dec("27.65")).is_ok());
        assert!(validate_purchase_total(Decimal::ZERO).is_err());
        assert!(validate_purchase_total(dec("-1")).is_err());
    }

    #[test]
    fn test_sanitize_count() {
        assert_eq!(sanitize_count("0"), 0);
        assert_eq!(sanitize_count("7"), 7);
        assert_eq!(sanitize_count("+7"), 7);
        assert_eq!(sanitize_count("12 notes"), 12);
        assert_eq!(sanitize_count("abc"), 0);
        assert_eq!(sanitize_count("-0"), 0);
        assert_eq!(sanitize_count("-15"), 0);
        assert_eq!(sanitize_count("  "), 0);
        assert_eq!(sanitize_count("99999999999999999999999"), u64::MAX);
    }
}
