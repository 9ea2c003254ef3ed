// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for astro-card

use std::fmt;

/// One astronomical term and everything printed on its card.
///
/// Multi-line fields are stored as explicit line slices. Blank lines at the
/// start or end of the icon art are part of the art and are kept as empty
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRecord {
    /// Canonical lowercase catalog key.
    pub key: &'static str,
    pub name: &'static str,
    /// Japanese name of the term.
    pub localized_name: &'static str,
    pub etymology: &'static [&'static str],
    pub definition: &'static [&'static str],
    pub poetic: &'static [&'static str],
    pub icon: &'static [&'static str],
}

/// A requested key that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTerm {
    pub key: String,
    pub available: &'static [&'static str],
}

impl UnknownTerm {
    pub fn new(key: impl Into<String>, available: &'static [&'static str]) -> Self {
        Self {
            key: key.into(),
            available,
        }
    }
}

impl fmt::Display for UnknownTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Term '{}' not found. Available terms: {}",
            self.key,
            self.available.join(", ")
        )
    }
}

impl std::error::Error for UnknownTerm {}
