// SPDX-License-Identifier: PMPL-1.0-or-later

//! Centering by terminal display width.

use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns.
///
/// Wide glyphs (CJK and similar) count as 2 columns.
///
/// ```
/// use astro_card::card::layout::display_width;
/// assert_eq!(display_width("apogee"), 6);
/// assert_eq!(display_width("遠地点"), 6);
/// ```
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Spaces needed to center `text` in `width` columns, rounded down.
///
/// Zero when the text is as wide as, or wider than, `width`.
#[must_use]
pub fn padding(text: &str, width: usize) -> usize {
    width.saturating_sub(display_width(text)) / 2
}

/// Prefix `text` with enough spaces to center it in `width` columns.
///
/// Over-wide lines are returned as-is; nothing is wrapped or truncated.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let pad = padding(text, width);
    let mut line = String::with_capacity(pad + text.len());
    line.extend(std::iter::repeat(' ').take(pad));
    line.push_str(text);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_term_is_centered() {
        let line = center("perihelion", 50);
        assert_eq!(line.len() - "perihelion".len(), 20);
        assert!(line.starts_with(&" ".repeat(20)));
        assert!(line.ends_with("perihelion"));
    }

    #[test]
    fn wide_glyphs_count_double() {
        assert_eq!(display_width("近日点"), 6);
        assert_eq!(padding("近日点", 50), 22);
    }

    #[test]
    fn odd_remainder_rounds_down() {
        assert_eq!(padding("abc", 10), 3);
    }

    #[test]
    fn empty_line_is_half_width_of_spaces() {
        assert_eq!(center("", 50), " ".repeat(25));
        assert_eq!(center("", 0), "");
    }

    #[test]
    fn wide_line_is_not_truncated() {
        let long = "x".repeat(60);
        assert_eq!(center(&long, 50), long);
    }

    #[test]
    fn result_width_is_padding_plus_text() {
        for text in ["", "a", "apogee", "遠日点", "  ⁎ ───────── ⁎", "περί (\"near\")"] {
            for width in [0, 1, 7, 50, 80] {
                let line = center(text, width);
                assert_eq!(
                    display_width(&line),
                    padding(text, width) + display_width(text),
                    "text {:?} width {}",
                    text,
                    width
                );
            }
        }
    }
}
