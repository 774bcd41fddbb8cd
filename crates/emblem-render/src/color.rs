//! Color type for the cross-fade renderer.
//!
//! Emblem colors are non-premultiplied RGBA8. The cross-fade contract is
//! defined in 8-bit alpha (`ceil(255 * ratio)`), so the color type works in
//! the same domain rather than in normalized floats.

use bytemuck::{Pod, Zeroable};

/// A non-premultiplied RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a color from RGBA components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from a 32-bit RGBA value (0xRRGGBBAA).
    #[inline]
    pub const fn from_u32(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xFF) as u8,
            g: ((rgba >> 16) & 0xFF) as u8,
            b: ((rgba >> 8) & 0xFF) as u8,
            a: (rgba & 0xFF) as u8,
        }
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if hex.len() == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self { r, g, b, a })
    }

    /// Return this color with a replaced alpha channel.
    #[inline]
    pub const fn with_alpha8(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    /// Check if the color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const DARK_GRAY: Self = Self::from_rgb(68, 68, 68);
    pub const LIGHT_GRAY: Self = Self::from_rgb(204, 204, 204);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::from_rgb(255, 0, 0)));
        assert_eq!(
            Color::from_hex("00FF0080"),
            Some(Color::new(0, 255, 0, 128))
        );
        assert_eq!(Color::from_hex("#123"), None);
    }

    #[test]
    fn from_u32_unpacks_channels() {
        let c = Color::from_u32(0x11223344);
        assert_eq!(c, Color::new(0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn with_alpha8_preserves_rgb() {
        let c = Color::from_rgb(10, 20, 30).with_alpha8(5);
        assert_eq!(c, Color::new(10, 20, 30, 5));
    }
}
