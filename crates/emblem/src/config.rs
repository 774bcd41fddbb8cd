//! Configuration schema for the icon+label control.
//!
//! One schema with explicit per-field defaults replaces the historical
//! pattern of shipping several widget variants that differed only in their
//! defaults (shape, gap direction, inheritance base). `shape = None`
//! uniformly disables the background; there is no variant hierarchy.

use emblem_render::{Color, ImageDecoder, Padding, RasterImage, Size, Stroke};

use crate::error::ConfigurationError;

/// Whether icon and label stack vertically or sit side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arrangement {
    /// Icon on top, label below.
    #[default]
    IconAboveText,
    /// Icon on the left, label to the right.
    IconBesideText,
}

/// Decorative background shape drawn behind the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundShape {
    /// No background.
    #[default]
    None,
    /// Rounded rectangle filling the icon's occupied box.
    RoundedRect,
    /// Circle inscribed in the icon's occupied box.
    Circle,
}

/// Which end of the label is dropped when the text must shrink to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncateSide {
    /// Drop trailing characters, keeping the start of the label.
    #[default]
    Trailing,
    /// Drop leading characters, keeping the end of the label.
    Leading,
}

/// Immutable configuration for one layout pass of an [`IconLabel`].
///
/// Fields are public and paired with `with_*` builder methods. A config is
/// only checked when handed to the control ([`validate`](Self::validate));
/// intermediate states while building may be inconsistent.
///
/// [`IconLabel`]: crate::IconLabel
#[derive(Debug, Clone, PartialEq)]
pub struct IconLabelConfig {
    /// Icon raster, resolved to display size at configuration time.
    /// `None` means no icon: the icon contributes zero to measurement.
    pub icon: Option<RasterImage>,
    /// Icon display size in pixels.
    pub icon_size: Size,
    /// Label text.
    pub text: String,
    /// Gap between icon and label in pixels. Only counted when both an
    /// icon and non-empty text are present.
    pub gap: f32,
    /// Outer padding of the control.
    pub padding: Padding,
    /// Stacking direction of icon and label.
    pub arrangement: Arrangement,
    /// Background shape behind the icon.
    pub background: BackgroundShape,
    /// Background fill color.
    pub background_color: Color,
    /// Uniform padding between the icon and its background edge.
    pub background_padding: f32,
    /// Corner radius for [`BackgroundShape::RoundedRect`].
    pub corner_radius: f32,
    /// Optional background border, stroked on top of the fill.
    pub border: Option<Stroke>,
    /// Label color in the base state.
    pub text_color: Color,
    /// Label and icon-tint color in the hover state.
    pub hover_color: Color,
    /// Which end of the label is truncated.
    pub truncate_side: TruncateSide,
    /// Whether the control renders the animated cross-fade (hover ratio)
    /// or a single static state.
    pub animated: bool,
}

impl IconLabelConfig {
    /// Create a configuration with the standard defaults: no icon, empty
    /// text, vertical arrangement, no background, 6px gap, 8px corner
    /// radius.
    pub fn new() -> Self {
        Self {
            icon: None,
            icon_size: Size::ZERO,
            text: String::new(),
            gap: 6.0,
            padding: Padding::ZERO,
            arrangement: Arrangement::IconAboveText,
            background: BackgroundShape::None,
            background_color: Color::LIGHT_GRAY,
            background_padding: 0.0,
            corner_radius: 8.0,
            border: None,
            text_color: Color::BLACK,
            hover_color: Color::from_rgb(0, 122, 255),
            truncate_side: TruncateSide::Trailing,
            animated: false,
        }
    }

    /// Set the icon raster, taking its dimensions as the display size.
    pub fn with_icon(mut self, icon: RasterImage) -> Self {
        self.icon_size = icon.size();
        self.icon = Some(icon);
        self
    }

    /// Resolve an encoded icon source to `size` through `decoder` and set it.
    ///
    /// Decoding happens here, once - never during a frame.
    pub fn with_icon_source(
        mut self,
        bytes: &[u8],
        size: Size,
        decoder: &dyn ImageDecoder,
    ) -> Result<Self, ConfigurationError> {
        let raster = decoder.decode(bytes, size)?;
        self.icon_size = size;
        self.icon = Some(raster);
        Ok(self)
    }

    /// Set the label text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the icon/label gap.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the outer padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the arrangement mode.
    pub fn with_arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Set the background shape.
    pub fn with_background(mut self, shape: BackgroundShape) -> Self {
        self.background = shape;
        self
    }

    /// Set the background fill color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the icon/background padding.
    pub fn with_background_padding(mut self, padding: f32) -> Self {
        self.background_padding = padding;
        self
    }

    /// Set the rounded-rect corner radius.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the background border stroke.
    pub fn with_border(mut self, border: Stroke) -> Self {
        self.border = Some(border);
        self
    }

    /// Set the base-state text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the hover-state color.
    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    /// Set the truncation side.
    pub fn with_truncate_side(mut self, side: TruncateSide) -> Self {
        self.truncate_side = side;
        self
    }

    /// Enable or disable the animated cross-fade.
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Check whether the background shape contributes to layout.
    pub fn has_background(&self) -> bool {
        self.background != BackgroundShape::None
    }

    /// The size of the icon's occupied box: the icon display size, expanded
    /// uniformly by the background padding when a background is configured.
    ///
    /// An absent icon occupies a zero box regardless of background settings.
    pub fn icon_box(&self) -> Size {
        if self.icon.is_none() {
            return Size::ZERO;
        }
        if self.has_background() {
            Size::new(
                self.icon_size.width + 2.0 * self.background_padding,
                self.icon_size.height + 2.0 * self.background_padding,
            )
        } else {
            self.icon_size
        }
    }

    /// Validate the configuration.
    ///
    /// Checked when the config is handed to a control; see
    /// [`ConfigurationError`] for the taxonomy.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.icon.is_some() && (!self.icon_size.is_valid() || self.icon_size.is_empty()) {
            return Err(ConfigurationError::InvalidIconSize {
                width: self.icon_size.width,
                height: self.icon_size.height,
            });
        }
        if self.animated && self.icon.is_none() {
            return Err(ConfigurationError::MissingIcon);
        }

        let metrics = [
            ("gap", self.gap),
            ("background_padding", self.background_padding),
            ("corner_radius", self.corner_radius),
        ];
        for (name, value) in metrics {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidMetric { name, value });
            }
        }
        if !self.padding.is_valid() {
            return Err(ConfigurationError::InvalidMetric {
                name: "padding",
                value: f32::NAN,
            });
        }
        Ok(())
    }
}

impl Default for IconLabelConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_box_expands_with_background() {
        let config = IconLabelConfig::new()
            .with_icon(RasterImage::blank(24, 24))
            .with_background(BackgroundShape::Circle)
            .with_background_padding(4.0);
        assert_eq!(config.icon_box(), Size::new(32.0, 32.0));
    }

    #[test]
    fn icon_box_ignores_background_without_icon() {
        let config = IconLabelConfig::new()
            .with_background(BackgroundShape::Circle)
            .with_background_padding(4.0);
        assert_eq!(config.icon_box(), Size::ZERO);
    }

    #[test]
    fn shape_none_disables_background() {
        let config = IconLabelConfig::new().with_icon(RasterImage::blank(24, 24));
        assert!(!config.has_background());
        assert_eq!(config.icon_box(), Size::new(24.0, 24.0));
    }

    #[test]
    fn animated_requires_icon() {
        let err = IconLabelConfig::new()
            .with_animated(true)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingIcon));
    }

    #[test]
    fn negative_gap_is_rejected() {
        let err = IconLabelConfig::new().with_gap(-1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidMetric { name: "gap", .. }
        ));
    }

    #[test]
    fn zero_icon_size_with_raster_is_rejected() {
        let mut config = IconLabelConfig::new().with_icon(RasterImage::blank(24, 24));
        config.icon_size = Size::ZERO;
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidIconSize { .. })
        ));
    }
}
