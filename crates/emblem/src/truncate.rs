//! Text truncation for labels that must shrink to the measured width.

use emblem_render::TextMeasurer;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::TruncateSide;

/// Find the longest prefix (or suffix) of `text` that fits in `max_width`.
///
/// The full string is tried first and returned unchanged when its measured
/// width does not exceed `max_width`. Otherwise graphemes are dropped one at
/// a time from the configured side, re-measuring after each drop, and the
/// first candidate whose width is strictly less than
/// `max_width + width_of_last_dropped_grapheme` is returned. The one-grapheme
/// grace margin is part of the contract: a truncated label may render up to
/// one dropped grapheme wider than the nominal budget, and pixel-snapshot
/// output depends on the exact comparison.
///
/// If even a single grapheme does not fit, the empty string is returned -
/// truncation never fails.
///
/// Re-measuring a shrinking candidate each step makes this O(n²) in measurer
/// calls for the worst case. That is fine for UI captions; do not feed it
/// arbitrary-length text.
pub fn fit_text<'a>(
    text: &'a str,
    max_width: f32,
    measurer: &dyn TextMeasurer,
    side: TruncateSide,
) -> &'a str {
    if measurer.measure(text).width <= max_width {
        return text;
    }

    let boundaries: Vec<(usize, &str)> = text.grapheme_indices(true).collect();

    match side {
        TruncateSide::Trailing => {
            for (start, grapheme) in boundaries.iter().rev() {
                let candidate = &text[..*start];
                let dropped_width = measurer.measure(grapheme).width;
                if measurer.measure(candidate).width < max_width + dropped_width {
                    return candidate;
                }
            }
            ""
        }
        TruncateSide::Leading => {
            for (start, grapheme) in boundaries.iter() {
                let candidate = &text[start + grapheme.len()..];
                let dropped_width = measurer.measure(grapheme).width;
                if measurer.measure(candidate).width < max_width + dropped_width {
                    return candidate;
                }
            }
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use emblem_render::FixedAdvanceMeasurer;

    use super::*;

    const M: FixedAdvanceMeasurer = FixedAdvanceMeasurer {
        advance: 10.0,
        ascent: 8.0,
        descent: 2.0,
    };

    #[test]
    fn full_string_fits() {
        assert_eq!(fit_text("abc", 30.0, &M, TruncateSide::Trailing), "abc");
    }

    #[test]
    fn drops_trailing_characters() {
        // 6 chars = 60px into 40px: candidates are measured against the
        // budget plus the width of the grapheme just dropped, strictly.
        // "abcde" is 50px, not < 40 + 10; "abcd" is 40px, which passes.
        assert_eq!(fit_text("abcdef", 40.0, &M, TruncateSide::Trailing), "abcd");
    }

    #[test]
    fn drops_leading_characters() {
        assert_eq!(fit_text("abcdef", 40.0, &M, TruncateSide::Leading), "cdef");
    }

    #[test]
    fn grace_margin_is_exactly_one_dropped_grapheme() {
        // 8 chars at 17.5px = 140px into a 100px budget. The first
        // candidate below budget+advance is 6 chars (105px), which sits
        // inside the grace margin (100 + 17.5).
        let wide = FixedAdvanceMeasurer {
            advance: 17.5,
            ascent: 14.0,
            descent: 3.5,
        };
        let fitted = fit_text("Settings", 100.0, &wide, TruncateSide::Trailing);
        assert_eq!(fitted, "Settin");
        let width = wide.measure(fitted).width;
        assert!(width > 100.0 && width < 100.0 + 17.5);
    }

    #[test]
    fn single_char_too_wide_yields_empty() {
        let huge = FixedAdvanceMeasurer {
            advance: 500.0,
            ascent: 400.0,
            descent: 100.0,
        };
        assert_eq!(fit_text("ab", 100.0, &huge, TruncateSide::Trailing), "");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(fit_text("", 100.0, &M, TruncateSide::Trailing), "");
    }

    #[test]
    fn idempotent_at_advance_boundaries() {
        let once = fit_text("abcdefgh", 30.0, &M, TruncateSide::Trailing);
        let twice = fit_text(once, 30.0, &M, TruncateSide::Trailing);
        assert_eq!(once, twice);
    }

    #[test]
    fn monotone_in_available_width() {
        let text = "abcdefghij";
        let mut last_len = 0;
        for w in [0.0, 10.0, 20.0, 50.0, 80.0, 100.0] {
            let fitted = fit_text(text, w, &M, TruncateSide::Trailing);
            assert!(fitted.len() >= last_len);
            last_len = fitted.len();
        }
    }

    #[test]
    fn truncates_on_grapheme_boundaries() {
        // Family emoji is a single grapheme of many bytes; dropping it must
        // not split the cluster.
        let text = "ab\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        let fitted = fit_text(text, 20.0, &M, TruncateSide::Trailing);
        assert_eq!(fitted, "ab");
    }
}
