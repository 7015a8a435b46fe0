//! # Supply Mapping
//!
//! How many units of each denomination are in the drawer right now.
//!
//! A `Supply` is built fresh for every calculation from whatever the front
//! end holds (form fields, a config file, command-line flags) and handed to
//! the allocator by reference. The allocator never mutates it.
//!
//! ## Raw Input
//! ```text
//! "stock_20" = "3"     ──► 2000 → 3
//! "stock_5"  = ""      ──►  500 → 0   (empty)
//! "stock_2"  = "-4"    ──►  200 → 0   (negative)
//! "stock_1"  = "abc"   ──►  100 → 0   (not a number)
//! "stock_7"  = "1"     ──► Error: UnknownDenomination
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::denomination::{Denomination, DENOMINATIONS};
use crate::error::{CoreError, CoreResult};
use crate::validation::sanitize_count;

/// Available count per denomination, keyed by face value in centavos.
///
/// Denominations without an entry have zero units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    counts: BTreeMap<u64, u64>,
}

impl Supply {
    /// A drawer with nothing in it.
    pub fn empty() -> Self {
        Supply::default()
    }

    /// The same count for every denomination in the table.
    pub fn uniform(count: u64) -> Self {
        let counts = DENOMINATIONS
            .iter()
            .map(|d| (d.face_value_cents, count))
            .collect();
        Supply { counts }
    }

    /// Effectively infinite stock of everything.
    pub fn unlimited() -> Self {
        Supply::uniform(u64::MAX)
    }

    /// Builder-style setter.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Denomination, Supply};
    ///
    /// let supply = Supply::empty().with(2000, 2).with(100, 5);
    /// let twenty = Denomination::by_face_value(2000).unwrap();
    /// assert_eq!(supply.count_of(twenty), 2);
    /// ```
    pub fn with(mut self, face_value_cents: u64, count: u64) -> Self {
        self.set(face_value_cents, count);
        self
    }

    /// Sets the count for a face value, replacing any previous count.
    pub fn set(&mut self, face_value_cents: u64, count: u64) {
        self.counts.insert(face_value_cents, count);
    }

    /// Units available for a denomination (zero if absent).
    #[inline]
    pub fn count_of(&self, denomination: &Denomination) -> u64 {
        self.counts
            .get(&denomination.face_value_cents)
            .copied()
            .unwrap_or(0)
    }

    /// Sets a count from a raw, user-typed string keyed by denomination id.
    ///
    /// The string is sanitized with [`sanitize_count`]. Only the identifier
    /// can fail.
    pub fn set_raw(&mut self, id: &str, raw_count: &str) -> CoreResult<()> {
        let denomination =
            Denomination::by_id(id).ok_or_else(|| CoreError::UnknownDenomination(id.to_string()))?;
        self.set(denomination.face_value_cents, sanitize_count(raw_count));
        Ok(())
    }

    /// Builds a supply from `(id, raw count)` pairs.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Denomination, Supply};
    ///
    /// let supply = Supply::from_raw([("stock_20", "3"), ("stock_5", "oops")]).unwrap();
    /// assert_eq!(supply.count_of(Denomination::by_id("stock_20").unwrap()), 3);
    /// assert_eq!(supply.count_of(Denomination::by_id("stock_5").unwrap()), 0);
    ///
    /// assert!(Supply::from_raw([("stock_7", "1")]).is_err());
    /// ```
    pub fn from_raw<I, K, V>(entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut supply = Supply::empty();
        for (id, raw) in entries {
            supply.set_raw(id.as_ref(), raw.as_ref())?;
        }
        Ok(supply)
    }

    /// Every denomination in table order with its count (including zeros).
    pub fn iter(&self) -> impl Iterator<Item = (&'static Denomination, u64)> + '_ {
        DENOMINATIONS.iter().map(move |d| (d, self.count_of(d)))
    }

    /// Total value of the drawer in centavos, saturating on overflow.
    pub fn total_value_cents(&self) -> u64 {
        self.iter().fold(0u64, |acc, (d, count)| {
            acc.saturating_add(d.face_value_cents.saturating_mul(count))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn denom(face: u64) -> &'static Denomination {
        Denomination::by_face_value(face).unwrap()
    }

    #[test]
    fn test_missing_entries_are_zero() {
        let supply = Supply::empty();
        assert!(DENOMINATIONS.iter().all(|d| supply.count_of(d) == 0));
    }

    #[test]
    fn test_uniform() {
        let supply = Supply::uniform(4);
        assert!(DENOMINATIONS.iter().all(|d| supply.count_of(d) == 4));
    }

    #[test]
    fn test_set_replaces() {
        let mut supply = Supply::empty().with(500, 2);
        supply.set(500, 7);
        assert_eq!(supply.count_of(denom(500)), 7);
    }

    #[test]
    fn test_raw_sanitation() {
        let supply = Supply::from_raw([
            ("stock_20", "3"),
            ("stock_5", ""),
            ("stock_2", "-4"),
            ("stock_1", "abc"),
            ("stock_0_50", " 12 "),
        ])
        .unwrap();

        assert_eq!(supply.count_of(denom(2000)), 3);
        assert_eq!(supply.count_of(denom(500)), 0);
        assert_eq!(supply.count_of(denom(200)), 0);
        assert_eq!(supply.count_of(denom(100)), 0);
        assert_eq!(supply.count_of(denom(50)), 12);
    }

    #[test]
    fn test_unknown_id_rejected() {
        let err = Supply::from_raw([("stock_3", "1")]).unwrap_err();
        assert!(matches!(err, CoreError::UnknownDenomination(id) if id == "stock_3"));
    }

    #[test]
    fn test_iter_follows_table_order() {
        let supply = Supply::empty().with(5, 1).with(20000, 2);
        let faces: Vec<u64> = supply.iter().map(|(d, _)| d.face_value_cents).collect();
        assert_eq!(faces.first(), Some(&20000));
        assert_eq!(faces.last(), Some(&5));
        assert_eq!(faces.len(), DENOMINATIONS.len());
    }

    #[test]
    fn test_total_value() {
        let supply = Supply::empty().with(2000, 2).with(25, 3);
        assert_eq!(supply.total_value_cents(), 4075);
        assert_eq!(Supply::unlimited().total_value_cents(), u64::MAX);
    }
}
