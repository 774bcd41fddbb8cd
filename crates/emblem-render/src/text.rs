//! Text measurement collaborator interface.
//!
//! Emblem does not shape or rasterize glyphs. Layout only needs metrics:
//! the bounding box of a string, and the font's ascent and descent. Hosts
//! provide these from their text stack (cosmic-text, CoreText, a glyph
//! atlas, ...) by implementing [`TextMeasurer`].

use crate::types::Size;

/// Provides text metrics for a single font configuration.
///
/// A measurer is bound to one font family/size/weight; changing the font
/// means supplying a different measurer. Implementations must be
/// deterministic: identical input strings yield identical metrics.
pub trait TextMeasurer {
    /// Measure the bounding box of `text` on a single line.
    ///
    /// An empty string measures as `Size::ZERO`.
    fn measure(&self, text: &str) -> Size;

    /// Distance from the baseline to the top of the font, in pixels.
    fn ascent(&self) -> f32;

    /// Distance from the baseline to the bottom of the font, in pixels.
    fn descent(&self) -> f32;

    /// Total line height (ascent + descent).
    fn line_height(&self) -> f32 {
        self.ascent() + self.descent()
    }
}

/// A deterministic measurer that gives every `char` the same advance.
///
/// Useful for headless rendering and tests, where real shaping is
/// unavailable or undesirable. Width is `advance * char_count`; height is
/// `ascent + descent` for non-empty strings.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    /// Horizontal advance per character.
    pub advance: f32,
    /// Baseline-to-top distance.
    pub ascent: f32,
    /// Baseline-to-bottom distance.
    pub descent: f32,
}

impl FixedAdvanceMeasurer {
    /// Create a measurer with the given per-character advance and a 4:1
    /// ascent/descent split of the advance (a rough sans-serif shape).
    pub fn new(advance: f32) -> Self {
        Self {
            advance,
            ascent: advance * 0.8,
            descent: advance * 0.2,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let count = text.chars().count() as f32;
        Size::new(self.advance * count, self.ascent + self.descent)
    }

    fn ascent(&self) -> f32 {
        self.ascent
    }

    fn descent(&self) -> f32 {
        self.descent
    }
}
