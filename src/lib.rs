// SPDX-License-Identifier: PMPL-1.0-or-later

//! astro-card — stylized terminal cards for four orbital terms.
//!
//! Each card shows a glyph icon, the English and Japanese names, the Greek
//! etymology, a short definition and a poetic couplet for one of aphelion,
//! perihelion, apogee or perigee.
//!
//! PIECES:
//! 1. **Catalog**: the static term table and key lookup.
//! 2. **Selector**: picks a key from `--term` / `--random`, owning the
//!    run's random source.
//! 3. **Card**: centers every line by display width and prints it in color.

pub mod card;
pub mod catalog;
pub mod logging;
pub mod selector;
pub mod types;
