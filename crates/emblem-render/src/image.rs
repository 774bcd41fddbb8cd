//! Raster images and the icon-decoding collaborator interface.
//!
//! Icons arrive as encoded bytes (PNG, etc.) and are resolved to a
//! fixed-size RGBA raster once, at configuration time - never per frame.

use crate::types::Size;

/// Errors from decoding an icon source into a raster.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The encoded bytes could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The requested target size is zero, negative, or non-finite.
    #[error("invalid target size {width}x{height}")]
    InvalidTargetSize { width: f32, height: f32 },
}

/// A decoded RGBA8 image with fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a raster from raw RGBA8 pixels.
    ///
    /// `pixels.len()` must equal `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A fully transparent raster, for tests and placeholders.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Image dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Raw RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Resolves an encoded icon source into a raster at a fixed display size.
///
/// Called once when the widget is configured; the resulting raster is reused
/// for every frame until the icon configuration changes.
pub trait ImageDecoder {
    /// Decode `bytes` and scale the result to `target` pixels.
    fn decode(&self, bytes: &[u8], target: Size) -> Result<RasterImage, DecodeError>;
}

/// Decoder for PNG (and other formats the `image` crate auto-detects).
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

impl ImageDecoder for PngDecoder {
    fn decode(&self, bytes: &[u8], target: Size) -> Result<RasterImage, DecodeError> {
        if !target.is_valid() || target.is_empty() {
            return Err(DecodeError::InvalidTargetSize {
                width: target.width,
                height: target.height,
            });
        }

        let decoded = image::load_from_memory(bytes)?.into_rgba8();
        let (tw, th) = (target.width.round() as u32, target.height.round() as u32);

        let scaled = if decoded.dimensions() == (tw, th) {
            decoded
        } else {
            tracing::trace!(
                from = ?decoded.dimensions(),
                to = ?(tw, th),
                "scaling icon raster"
            );
            image::imageops::resize(&decoded, tw, th, image::imageops::FilterType::Triangle)
        };

        let raster = RasterImage {
            width: tw,
            height: th,
            pixels: scaled.into_raw(),
        };
        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_to_target_size() {
        let bytes = png_bytes(8, 8);
        let raster = PngDecoder.decode(&bytes, Size::new(24.0, 24.0)).unwrap();
        assert_eq!(raster.width(), 24);
        assert_eq!(raster.height(), 24);
        assert_eq!(raster.pixels().len(), 24 * 24 * 4);
    }

    #[test]
    fn rejects_zero_target() {
        let bytes = png_bytes(8, 8);
        let err = PngDecoder.decode(&bytes, Size::ZERO).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidTargetSize { .. }));
    }

    #[test]
    fn rejects_garbage_bytes() {
        let err = PngDecoder
            .decode(&[0, 1, 2, 3], Size::new(8.0, 8.0))
            .unwrap_err();
        assert!(matches!(err, DecodeError::Decode(_)));
    }

    #[test]
    fn from_rgba8_validates_length() {
        assert!(RasterImage::from_rgba8(2, 2, vec![0; 16]).is_some());
        assert!(RasterImage::from_rgba8(2, 2, vec![0; 15]).is_none());
    }
}
