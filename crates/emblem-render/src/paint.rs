//! Paint styles for filling and stroking shapes.

use crate::color::Color;

/// Stroke style options for shape outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Stroke {
    /// Create a stroke with the given color and width.
    #[inline]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Porter-Duff compositing modes supported by Emblem surfaces.
///
/// Only the modes the compositor actually issues are listed; backends map
/// them onto their own blend state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard alpha blending (source over destination).
    #[default]
    SrcOver,
    /// Keep the source only where the destination is opaque.
    SrcIn,
    /// Keep the destination only where the source is opaque.
    ///
    /// This is the masked-tint mode: a flat fill already on the layer is
    /// clipped to the silhouette of the image drawn with `DstIn`.
    DstIn,
}
