//! Frame composition: static rendering and the two-state cross-fade.
//!
//! The cross-fade blends a "base" and a "hover" rendering of the same
//! control by complementary 8-bit opacities derived from a single ratio.
//! The icon's hover state is a masked tint: a flat hover-color fill clipped
//! to the icon's silhouette on a fresh off-surface layer.

use emblem_core::logging::targets;
use emblem_render::{BlendMode, Point, Surface, TextMeasurer};

use crate::config::{Arrangement, IconLabelConfig};
use crate::layout::LayoutResult;
use crate::shape::paint_background;

/// Opacity of the hover layer for a given ratio.
///
/// The ceiling biases fractional ratios toward the hover color; the two
/// alphas are complementary but deliberately do not always sum to 255.
#[inline]
pub fn hover_alpha(ratio: f32) -> u8 {
    (255.0 * ratio.clamp(0.0, 1.0)).ceil() as u8
}

/// Opacity of the base layer for a given ratio.
#[inline]
pub fn base_alpha(ratio: f32) -> u8 {
    255 - hover_alpha(ratio)
}

/// Render one frame of the control from a completed layout.
///
/// In static mode (`config.animated == false`) this draws background, icon,
/// and label once. In animated mode it draws the base layer unblended, then
/// composes the hover tint on a fresh off-surface layer, then draws the
/// label twice at complementary opacities. The off-surface layer is
/// recreated every frame; it is never reused.
///
/// Horizontal centering of the label is recomputed here from the truncated
/// string's measured width, so a measurer change between frames cannot
/// leave the label off-center. Truncation itself is part of layout and is
/// not redone per frame.
pub fn render_frame(
    surface: &mut dyn Surface,
    layout: &LayoutResult,
    config: &IconLabelConfig,
    measurer: &dyn TextMeasurer,
    ratio: f32,
) {
    paint_background(
        surface,
        config.background,
        layout.icon_background_rect,
        config.corner_radius,
        config.background_color,
        config.border,
    );

    if let Some(icon) = &config.icon {
        if !layout.icon_rect.is_empty() {
            surface.draw_image(icon, layout.icon_rect);
        }
    }

    if !config.animated {
        if !layout.text.is_empty() {
            surface.draw_text(&layout.text, text_baseline(layout, config, measurer), config.text_color);
        }
        return;
    }

    let hover = hover_alpha(ratio);
    let base = 255 - hover;
    tracing::trace!(target: targets::COMPOSITOR, ratio, hover, base, "cross-fade frame");

    // Masked tint: flat hover fill, clipped to the icon silhouette with
    // DstIn on a throwaway layer.
    if let Some(icon) = &config.icon {
        if !layout.icon_rect.is_empty() {
            surface.push_layer(layout.size);
            surface.fill_rect(layout.icon_rect, config.hover_color.with_alpha8(hover));
            surface.set_blend_mode(BlendMode::DstIn);
            surface.draw_image(icon, layout.icon_rect);
            surface.set_blend_mode(BlendMode::SrcOver);
            surface.pop_layer();
        }
    }

    // Both label passes are required; blending two complementary layers is
    // order-independent, but skipping either breaks the cross-fade.
    if !layout.text.is_empty() {
        let baseline = text_baseline(layout, config, measurer);
        surface.draw_text(&layout.text, baseline, config.text_color.with_alpha8(base));
        surface.draw_text(&layout.text, baseline, config.hover_color.with_alpha8(hover));
    }
}

/// Baseline origin of the label: horizontally centered in its slot against
/// the truncated string's current measured width, vertically aligned by
/// ascent.
fn text_baseline(
    layout: &LayoutResult,
    config: &IconLabelConfig,
    measurer: &dyn TextMeasurer,
) -> Point {
    let width = measurer.measure(&layout.text).width;
    let x = match config.arrangement {
        Arrangement::IconAboveText => {
            layout.content_rect.left() + (layout.content_rect.width() - width) / 2.0
        }
        Arrangement::IconBesideText => {
            layout.text_rect.left() + (layout.text_rect.width() - width) / 2.0
        }
    };
    Point::new(x, layout.text_rect.top() + measurer.ascent())
}

#[cfg(test)]
mod tests {
    use emblem_render::{DisplayList, DrawCommand, FixedAdvanceMeasurer, RasterImage};

    use crate::config::BackgroundShape;
    use crate::constraint::MeasureSpec;
    use crate::layout::measure_and_arrange;

    use super::*;

    const M: FixedAdvanceMeasurer = FixedAdvanceMeasurer {
        advance: 10.0,
        ascent: 8.0,
        descent: 2.0,
    };

    fn animated_config() -> IconLabelConfig {
        IconLabelConfig::new()
            .with_icon(RasterImage::blank(24, 24))
            .with_text("Go")
            .with_animated(true)
    }

    fn lay_out(config: &IconLabelConfig) -> crate::layout::LayoutResult {
        measure_and_arrange(config, &M, MeasureSpec::AtMost(200.0), MeasureSpec::AtMost(200.0))
    }

    #[test]
    fn alpha_complementarity_at_endpoints_and_midpoint() {
        assert_eq!(hover_alpha(0.0), 0);
        assert_eq!(base_alpha(0.0), 255);
        assert_eq!(hover_alpha(1.0), 255);
        assert_eq!(base_alpha(1.0), 0);
        // ceil(127.5) = 128
        assert_eq!(hover_alpha(0.5), 128);
        assert_eq!(base_alpha(0.5), 127);
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(hover_alpha(-0.5), 0);
        assert_eq!(hover_alpha(1.5), 255);
    }

    #[test]
    fn static_mode_draws_icon_then_single_text() {
        let config = IconLabelConfig::new()
            .with_icon(RasterImage::blank(24, 24))
            .with_text("Go");
        let layout = lay_out(&config);

        let mut frame = DisplayList::new();
        render_frame(&mut frame, &layout, &config, &M, 0.0);

        assert_eq!(frame.len(), 2);
        assert!(matches!(frame.commands()[0], DrawCommand::DrawImage { .. }));
        match &frame.commands()[1] {
            DrawCommand::DrawText { text, color, .. } => {
                assert_eq!(text, "Go");
                assert_eq!(*color, config.text_color);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn animated_mode_emits_tint_layer_and_two_text_passes() {
        let config = animated_config();
        let layout = lay_out(&config);

        let mut frame = DisplayList::new();
        render_frame(&mut frame, &layout, &config, &M, 0.5);

        let commands = frame.commands();
        // base icon, then layer: push / fill / DstIn / image / SrcOver / pop,
        // then two text passes.
        assert!(matches!(commands[0], DrawCommand::DrawImage { .. }));
        assert!(matches!(commands[1], DrawCommand::PushLayer { .. }));
        assert!(matches!(commands[2], DrawCommand::FillRect { .. }));
        assert!(matches!(
            commands[3],
            DrawCommand::SetBlendMode {
                mode: BlendMode::DstIn
            }
        ));
        assert!(matches!(commands[4], DrawCommand::DrawImage { .. }));
        assert!(matches!(
            commands[5],
            DrawCommand::SetBlendMode {
                mode: BlendMode::SrcOver
            }
        ));
        assert!(matches!(commands[6], DrawCommand::PopLayer));

        let texts: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawText { color, baseline, .. } => Some((*color, *baseline)),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0.a, 127);
        assert_eq!(texts[1].0.a, 128);
        // Same baseline for both passes.
        assert_eq!(texts[0].1, texts[1].1);
    }

    #[test]
    fn ratio_change_only_affects_alphas_not_geometry() {
        let config = animated_config();
        let layout = lay_out(&config);

        let mut at_zero = DisplayList::new();
        render_frame(&mut at_zero, &layout, &config, &M, 0.0);
        let mut at_one = DisplayList::new();
        render_frame(&mut at_one, &layout, &config, &M, 1.0);

        assert_eq!(at_zero.len(), at_one.len());
        for (a, b) in at_zero.commands().iter().zip(at_one.commands()) {
            match (a, b) {
                (
                    DrawCommand::FillRect { rect: ra, color: ca },
                    DrawCommand::FillRect { rect: rb, color: cb },
                ) => {
                    assert_eq!(ra, rb);
                    assert_eq!((ca.r, ca.g, ca.b), (cb.r, cb.g, cb.b));
                    assert_ne!(ca.a, cb.a);
                }
                (
                    DrawCommand::DrawText { baseline: pa, .. },
                    DrawCommand::DrawText { baseline: pb, .. },
                ) => assert_eq!(pa, pb),
                (a, b) if a == b => {}
                (a, b) => panic!("geometry diverged: {a:?} vs {b:?}"),
            }
        }
    }

    #[test]
    fn background_precedes_icon() {
        let config = animated_config()
            .with_background(BackgroundShape::Circle)
            .with_background_padding(4.0);
        let layout = lay_out(&config);

        let mut frame = DisplayList::new();
        render_frame(&mut frame, &layout, &config, &M, 0.0);

        assert!(matches!(frame.commands()[0], DrawCommand::FillCircle { .. }));
        assert!(matches!(frame.commands()[1], DrawCommand::DrawImage { .. }));
    }

    #[test]
    fn baseline_uses_ascent() {
        let config = IconLabelConfig::new().with_text("Hi");
        let layout = lay_out(&config);

        let mut frame = DisplayList::new();
        render_frame(&mut frame, &layout, &config, &M, 0.0);

        match &frame.commands()[0] {
            DrawCommand::DrawText { baseline, .. } => {
                assert_eq!(baseline.y, layout.text_rect.top() + 8.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
