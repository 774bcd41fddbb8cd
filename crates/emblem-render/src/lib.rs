//! Rendering abstractions for the Emblem widget library.
//!
//! This crate defines everything an Emblem widget needs to describe a frame
//! without committing to a graphics backend:
//!
//! - [`Point`], [`Size`], [`Rect`], [`RoundedRect`], [`Padding`] - f32
//!   geometry primitives
//! - [`Color`] - non-premultiplied RGBA8 color with 8-bit alpha helpers
//! - [`Stroke`], [`BlendMode`] - paint styles
//! - [`Surface`] - the abstract 2D drawing target, with [`DisplayList`] as a
//!   recording implementation
//! - [`TextMeasurer`] - the text-metrics collaborator interface
//! - [`ImageDecoder`], [`RasterImage`] - icon resolution at configuration
//!   time
//!
//! Hosts replay [`DrawCommand`]s into their real backend, or implement
//! [`Surface`] directly on top of it.

mod color;
mod image;
mod paint;
mod surface;
mod text;
mod types;

pub use color::Color;
pub use image::{DecodeError, ImageDecoder, PngDecoder, RasterImage};
pub use paint::{BlendMode, Stroke};
pub use surface::{DisplayList, DrawCommand, Surface};
pub use text::{FixedAdvanceMeasurer, TextMeasurer};
pub use types::{Padding, Point, Rect, RoundedRect, Size};
