//! Error types for the Emblem control.

use emblem_render::DecodeError;

/// Fatal configuration errors, raised when a control is constructed or
/// reconfigured.
///
/// None of these are recoverable by the control; the host must supply a
/// valid configuration. Rendering itself never raises them - a control that
/// constructed successfully can always draw.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Animated cross-fade rendering was requested without an icon raster.
    ///
    /// The masked tint needs an icon silhouette, so the icon is mandatory
    /// in this mode.
    #[error("an icon is required for animated cross-fade rendering")]
    MissingIcon,

    /// The icon display size is zero, negative, or non-finite while an icon
    /// raster is configured.
    #[error("invalid icon size {width}x{height}")]
    InvalidIconSize { width: f32, height: f32 },

    /// A scalar metric (gap, padding, corner radius, ...) is negative or
    /// non-finite.
    #[error("invalid value {value} for {name}")]
    InvalidMetric { name: &'static str, value: f32 },

    /// The icon source bytes could not be resolved to a raster.
    #[error("failed to resolve icon source")]
    IconDecode(#[from] DecodeError),
}
