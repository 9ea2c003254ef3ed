// SPDX-License-Identifier: PMPL-1.0-or-later

//! Term selection from command-line input.

use crate::catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// The run's single random generator.
///
/// Built once at startup and lent to [`resolve`]; nothing else in the crate
/// draws random numbers.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed from the system clock. Not reproducible across runs.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| {
                let nanos = elapsed.as_nanos();
                // Fold the high bits in rather than dropping them.
                (nanos as u64) ^ ((nanos >> 64) as u64)
            })
            .unwrap_or_default();
        Self::seeded(nanos)
    }

    /// Deterministic source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly pick one of `items`. Returns `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.random_range(0..items.len()))
    }
}

/// Uniformly pick a catalog key.
///
/// `None` only if the catalog is empty, which the static table never is.
pub fn random_key(rng: &mut RandomSource) -> Option<&'static str> {
    rng.pick(catalog::keys()).copied()
}

/// Resolve the key to display.
///
/// `random` wins over `requested`; an empty `requested` also falls back to a
/// random key. A non-empty name is lowercased and returned without checking
/// it against the catalog.
pub fn resolve(requested: &str, random: bool, rng: &mut RandomSource) -> String {
    let key = if random || requested.is_empty() {
        match random_key(rng) {
            Some(key) => key.to_string(),
            None => {
                warn!("term catalog is empty, nothing to pick from");
                String::new()
            }
        }
    } else {
        requested.to_lowercase()
    };
    debug!(requested, random, key = %key, "resolved term");
    key
}
