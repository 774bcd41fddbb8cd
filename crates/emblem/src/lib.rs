//! A composite icon-and-label control.
//!
//! Emblem lays out and renders an icon together with a text label, with:
//!
//! - two arrangement modes ([`Arrangement::IconAboveText`],
//!   [`Arrangement::IconBesideText`])
//! - an optional decorative background behind the icon (rounded rectangle or
//!   circle, with an optional border)
//! - an animated hover/selected cross-fade between two visual states, driven
//!   by a continuous ratio the host sets
//!
//! The crate computes geometry and emits drawing commands to an abstract
//! [`Surface`](emblem_render::Surface); it owns no event loop, performs no
//! I/O, and treats text metrics and icon decoding as host-provided
//! collaborators.
//!
//! # Example
//!
//! ```
//! use emblem::{IconLabel, IconLabelConfig, MeasureSpec};
//! use emblem_render::{DisplayList, FixedAdvanceMeasurer, RasterImage};
//!
//! let config = IconLabelConfig::new()
//!     .with_icon(RasterImage::blank(24, 24))
//!     .with_text("Inbox");
//!
//! let mut control = IconLabel::new(config).unwrap();
//! let measurer = FixedAdvanceMeasurer::new(7.0);
//!
//! control.layout(&measurer, MeasureSpec::AtMost(200.0), MeasureSpec::AtMost(200.0));
//!
//! let mut frame = DisplayList::new();
//! control.render(&mut frame, &measurer);
//! assert!(!frame.is_empty());
//! ```

mod compositor;
mod config;
mod constraint;
mod error;
mod icon_label;
mod layout;
mod shape;
mod truncate;

pub use compositor::{base_alpha, hover_alpha, render_frame};
pub use config::{Arrangement, BackgroundShape, IconLabelConfig, TruncateSide};
pub use constraint::MeasureSpec;
pub use error::ConfigurationError;
pub use icon_label::{Dirty, IconLabel};
pub use layout::{LayoutResult, measure_and_arrange};
pub use shape::paint_background;
pub use truncate::fit_text;
