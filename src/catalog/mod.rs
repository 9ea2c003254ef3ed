// SPDX-License-Identifier: PMPL-1.0-or-later

//! Term catalog.
//!
//! The catalog is a compile-time static table of [`TermRecord`]s. Keys are
//! kept in a fixed order next to the table so that callers picking "any
//! key" always index the same sequence.
//!
//! ## Adding a term
//!
//! 1. Add a `TermRecord` to `TERMS` in `terms.rs`
//! 2. Append its key to `KEYS` in the same position

mod terms;

use crate::types::{TermRecord, UnknownTerm};
use terms::{KEYS, TERMS};

/// Look up a term by its canonical key.
///
/// Comparison is exact and case-sensitive; lowercase user input before
/// calling.
///
/// # Examples
///
/// ```
/// use astro_card::catalog;
/// assert_eq!(catalog::lookup("apogee").unwrap().localized_name, "遠地点");
/// assert!(catalog::lookup("Apogee").is_err());
/// ```
pub fn lookup(key: &str) -> Result<&'static TermRecord, UnknownTerm> {
    TERMS
        .iter()
        .find(|term| term.key == key)
        .ok_or_else(|| UnknownTerm::new(key, KEYS))
}

/// All catalog keys, in display order.
pub fn keys() -> &'static [&'static str] {
    KEYS
}

/// All records, in the same order as [`keys`].
pub fn all() -> &'static [TermRecord] {
    TERMS
}
