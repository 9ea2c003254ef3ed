// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog, selector and layout tests against the public API

use astro_card::card::layout::{center, display_width, padding};
use astro_card::catalog;
use astro_card::selector::{self, RandomSource};
use std::collections::HashMap;

#[test]
fn test_all_canonical_keys_resolve() {
    for key in ["aphelion", "perihelion", "apogee", "perigee"] {
        let term = catalog::lookup(key).expect("canonical key should resolve");
        assert_eq!(term.key, key);
        assert_eq!(term.name, key);
    }
}

#[test]
fn test_unknown_term_message() {
    let err = catalog::lookup("unknown").expect_err("unknown key must fail");
    assert_eq!(
        err.to_string(),
        "Term 'unknown' not found. Available terms: aphelion, perihelion, apogee, perigee"
    );
}

#[test]
fn test_localized_names() {
    let expected = [
        ("aphelion", "遠日点"),
        ("perihelion", "近日点"),
        ("apogee", "遠地点"),
        ("perigee", "近地点"),
    ];
    for (key, localized) in expected {
        assert_eq!(catalog::lookup(key).unwrap().localized_name, localized);
    }
}

#[test]
fn test_center_perihelion() {
    assert_eq!(display_width("perihelion"), 10);
    assert_eq!(padding("perihelion", 50), 20);
    assert_eq!(center("perihelion", 50), format!("{}perihelion", " ".repeat(20)));
}

#[test]
fn test_resolve_case_folds() {
    let mut rng = RandomSource::seeded(3);
    assert_eq!(selector::resolve("APOGEE", false, &mut rng), "apogee");
}

#[test]
fn test_random_fallback_is_uniform() {
    const TRIALS: usize = 4000;
    // Chi-square critical value for 3 degrees of freedom at p = 0.001.
    const CRITICAL: f64 = 16.27;

    let mut rng = RandomSource::seeded(0x5eed);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..TRIALS {
        *counts.entry(selector::resolve("", false, &mut rng)).or_default() += 1;
    }

    assert_eq!(counts.len(), catalog::keys().len(), "every key should appear");

    let expected = TRIALS as f64 / catalog::keys().len() as f64;
    let chi_square: f64 = catalog::keys()
        .iter()
        .map(|key| {
            let observed = *counts.get(*key).unwrap_or(&0) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();
    assert!(
        chi_square < CRITICAL,
        "selection not uniform: chi-square {:.2}, counts {:?}",
        chi_square,
        counts
    );
}

#[test]
fn test_random_flag_always_yields_catalog_key() {
    let mut rng = RandomSource::from_time();
    for _ in 0..200 {
        let key = selector::resolve("not-a-term", true, &mut rng);
        assert!(catalog::lookup(&key).is_ok(), "random pick {} not in catalog", key);
    }
}
