// SPDX-License-Identifier: PMPL-1.0-or-later

//! The four terms, in display order.

use crate::types::TermRecord;

pub(super) const TERMS: &[TermRecord] = &[
    TermRecord {
        key: "aphelion",
        name: "aphelion",
        localized_name: "遠日点",
        etymology: &["από (\"away\") + ἥλιος (\"sun\")"],
        definition: &[
            "The point in a celestial body's orbit",
            "farthest from the Sun.",
        ],
        poetic: &["farthest from light", "closest to void"],
        icon: &[
            "",
            "  ⁎ ───────── ⁎",
            "╱     ◌        ╲",
            "   ◯     ☉   ",
            "╲              ╱",
            "  ⁎ ───────── ⁎",
            "",
        ],
    },
    TermRecord {
        key: "perihelion",
        name: "perihelion",
        localized_name: "近日点",
        etymology: &["περί (\"near\") + ἥλιος (\"sun\")"],
        definition: &[
            "The point in a celestial body's orbit",
            "closest to the Sun.",
        ],
        poetic: &["closest to light", "embrace of fire"],
        icon: &[
            "",
            "⁎ ───────── ⁎",
            "╱             ╲",
            "    ◯ ☉          ",
            "╲             ╱",
            "⁎ ───────── ⁎",
            "",
        ],
    },
    TermRecord {
        key: "apogee",
        name: "apogee",
        localized_name: "遠地点",
        etymology: &["από (\"away\") + γῆ (\"earth\")"],
        definition: &["The point in the Moon's orbit", "farthest from the Earth."],
        poetic: &["dancing with stars", "far from home"],
        icon: &[
            "",
            "⁎ ───── ⊙",
            "╱         ╲",
            "◯           ●",
            "╲         ╱",
            "⁎ ───── ⁎",
            "",
        ],
    },
    TermRecord {
        key: "perigee",
        name: "perigee",
        localized_name: "近地点",
        etymology: &["περί (\"near\") + γῆ (\"earth\")"],
        definition: &["The point in the Moon's orbit", "closest to the Earth."],
        poetic: &["return to earth", "close to home"],
        icon: &[
            "",
            "  ⁎ ───── ⊙",
            "  ╱         ╲",
            "●    ◯      ",
            "  ╲         ╱",
            "  ⁎ ───── ⁎",
            "",
        ],
    },
];

pub(super) const KEYS: &[&str] = &["aphelion", "perihelion", "apogee", "perigee"];
