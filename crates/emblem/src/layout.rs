//! Constraint-based measurement and arrangement of icon, background, and
//! label rectangles.

use emblem_core::logging::targets;
use emblem_render::{Point, Rect, Size, TextMeasurer};

use crate::config::{Arrangement, IconLabelConfig};
use crate::constraint::MeasureSpec;
use crate::truncate::fit_text;

/// The output of one layout pass.
///
/// A result is recomputed whole on every pass; nothing in it is mutated
/// incrementally. It is only valid for the configuration it was computed
/// from - the control tracks this with a revision counter.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Final measured control size.
    pub size: Size,
    /// The control bounds minus outer padding.
    pub content_rect: Rect,
    /// Where the icon raster is drawn. Zero-sized when no icon is
    /// configured, positioned at the slot the icon would occupy.
    pub icon_rect: Rect,
    /// The icon rect expanded uniformly by the background padding; the
    /// background shape fills this box. Equals `icon_rect` when no
    /// background is configured.
    pub icon_background_rect: Rect,
    /// Where the label is drawn. Zero-sized for empty text.
    pub text_rect: Rect,
    /// The label after truncation to the available width.
    pub text: String,
}

/// Measure the icon+label content against the given constraints and compute
/// the exact rectangles for icon, background, and label.
///
/// This is a pure function of its inputs: identical config, measurer
/// metrics, and specs produce bit-identical rectangles.
pub fn measure_and_arrange(
    config: &IconLabelConfig,
    measurer: &dyn TextMeasurer,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> LayoutResult {
    let icon_box = config.icon_box();
    let full_text_size = measurer.measure(&config.text);

    // The gap only separates two present parties.
    let has_icon = !icon_box.is_empty();
    let has_text = !config.text.is_empty();
    let gap = if has_icon && has_text { config.gap } else { 0.0 };

    let desired = match config.arrangement {
        Arrangement::IconAboveText => Size::new(
            icon_box.width.max(full_text_size.width),
            icon_box.height + gap + full_text_size.height,
        ),
        Arrangement::IconBesideText => Size::new(
            icon_box.width + gap + full_text_size.width,
            icon_box.height.max(full_text_size.height),
        ),
    };

    let size = Size::new(
        width_spec.resolve(desired.width + config.padding.horizontal()),
        height_spec.resolve(desired.height + config.padding.vertical()),
    );
    let content_rect = Rect::new(0.0, 0.0, size.width, size.height).inset(config.padding);

    // Truncate against the width actually available to the label.
    let available_text_width = match config.arrangement {
        Arrangement::IconAboveText => content_rect.width(),
        Arrangement::IconBesideText => (content_rect.width() - icon_box.width - gap).max(0.0),
    };
    let text = if has_text {
        fit_text(
            &config.text,
            available_text_width,
            measurer,
            config.truncate_side,
        )
        .to_string()
    } else {
        String::new()
    };
    let text_size = if text.is_empty() {
        Size::ZERO
    } else {
        measurer.measure(&text)
    };

    // Cross-axis centering, contiguous main-axis placement.
    let (icon_background_rect, text_rect) = match config.arrangement {
        Arrangement::IconAboveText => {
            let bg = Rect {
                origin: Point::new(
                    content_rect.left() + (content_rect.width() - icon_box.width) / 2.0,
                    content_rect.top(),
                ),
                size: icon_box,
            };
            let text_rect = Rect {
                origin: Point::new(
                    content_rect.left() + (content_rect.width() - text_size.width) / 2.0,
                    bg.bottom() + gap,
                ),
                size: text_size,
            };
            (bg, text_rect)
        }
        Arrangement::IconBesideText => {
            let bg = Rect {
                origin: Point::new(
                    content_rect.left(),
                    content_rect.top() + (content_rect.height() - icon_box.height) / 2.0,
                ),
                size: icon_box,
            };
            let text_rect = Rect {
                origin: Point::new(
                    bg.right() + gap,
                    content_rect.top() + (content_rect.height() - text_size.height) / 2.0,
                ),
                size: text_size,
            };
            (bg, text_rect)
        }
    };

    let icon_rect = if config.has_background() && has_icon {
        icon_background_rect.inflate(-config.background_padding)
    } else {
        icon_background_rect
    };

    tracing::trace!(
        target: targets::LAYOUT,
        width = size.width,
        height = size.height,
        truncated = text.len() < config.text.len(),
        "layout pass"
    );

    LayoutResult {
        size,
        content_rect,
        icon_rect,
        icon_background_rect,
        text_rect,
        text,
    }
}
