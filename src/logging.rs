// SPDX-License-Identifier: PMPL-1.0-or-later

//! Diagnostic logging to stderr.
//!
//! Stdout carries only the card, so every event goes to stderr. The filter
//! defaults to `warn` and can be raised with `RUST_LOG` when debugging.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
