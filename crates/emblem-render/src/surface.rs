//! The abstract 2D drawing target.
//!
//! Emblem widgets do not render pixels; they issue an ordered sequence of
//! drawing commands to a [`Surface`]. Hosts either implement the trait on
//! top of their graphics backend or record into a [`DisplayList`] and replay
//! the commands later.
//!
//! # Layers
//!
//! [`push_layer`](Surface::push_layer) starts a fresh, fully transparent
//! off-surface buffer; all subsequent commands draw into it until the
//! matching [`pop_layer`](Surface::pop_layer), which composites the buffer
//! onto the parent with `SrcOver`. Layers are where masked tinting happens:
//! fill a rect, switch to [`BlendMode::DstIn`], draw the mask image, pop.
//! Layers are never reused across frames.

use crate::color::Color;
use crate::image::RasterImage;
use crate::paint::{BlendMode, Stroke};
use crate::types::{Point, Rect, RoundedRect, Size};

/// An abstract 2D surface that receives drawing commands.
///
/// Commands are executed in call order; there is no reordering or batching
/// visible to the caller. All coordinates are in the surface's own pixel
/// space.
pub trait Surface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Stroke the outline of a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: Stroke);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Stroke the outline of a circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke);

    /// Draw an image scaled into the destination rectangle.
    fn draw_image(&mut self, image: &RasterImage, dest: Rect);

    /// Draw a run of text with its baseline at `baseline`.
    fn draw_text(&mut self, text: &str, baseline: Point, color: Color);

    /// Begin drawing into a fresh transparent off-surface buffer of the
    /// given size.
    fn push_layer(&mut self, size: Size);

    /// Composite the current layer onto its parent and discard it.
    fn pop_layer(&mut self);

    /// Set the blend mode for subsequent drawing operations.
    fn set_blend_mode(&mut self, mode: BlendMode);
}

/// A single recorded drawing command.
///
/// Image draws record the image dimensions rather than the pixel data so
/// that display lists stay cheap to clone and compare in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillRoundedRect {
        rect: RoundedRect,
        color: Color,
    },
    StrokeRoundedRect {
        rect: RoundedRect,
        stroke: Stroke,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        stroke: Stroke,
    },
    DrawImage {
        image_size: Size,
        dest: Rect,
    },
    DrawText {
        text: String,
        baseline: Point,
        color: Color,
    },
    PushLayer {
        size: Size,
    },
    PopLayer,
    SetBlendMode {
        mode: BlendMode,
    },
}

/// A [`Surface`] implementation that records commands instead of drawing.
///
/// Used by tests to assert on exact command sequences, and by hosts that
/// replay commands into an immediate-mode backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.commands
            .push(DrawCommand::FillRoundedRect { rect, color });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: Stroke) {
        self.commands
            .push(DrawCommand::StrokeRoundedRect { rect, stroke });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke,
        });
    }

    fn draw_image(&mut self, image: &RasterImage, dest: Rect) {
        self.commands.push(DrawCommand::DrawImage {
            image_size: image.size(),
            dest,
        });
    }

    fn draw_text(&mut self, text: &str, baseline: Point, color: Color) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            baseline,
            color,
        });
    }

    fn push_layer(&mut self, size: Size) {
        self.commands.push(DrawCommand::PushLayer { size });
    }

    fn pop_layer(&mut self) {
        self.commands.push(DrawCommand::PopLayer);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.commands.push(DrawCommand::SetBlendMode { mode });
    }
}
