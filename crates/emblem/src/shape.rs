//! Background shape painting.

use emblem_render::{Color, Rect, RoundedRect, Stroke, Surface};

use crate::config::BackgroundShape;

/// Paint a background shape into `rect`.
///
/// Ordering is fill first, then the optional border stroked on top of the
/// fill edge. The caller draws the icon strictly after this returns, so
/// content is never occluded by the border.
///
/// A zero-area `rect` paints nothing, whatever the shape.
pub fn paint_background(
    surface: &mut dyn Surface,
    shape: BackgroundShape,
    rect: Rect,
    corner_radius: f32,
    fill: Color,
    border: Option<Stroke>,
) {
    if rect.is_empty() {
        return;
    }

    match shape {
        BackgroundShape::None => {}
        BackgroundShape::RoundedRect => {
            let rounded = RoundedRect::new(rect, corner_radius);
            surface.fill_rounded_rect(rounded, fill);
            if let Some(stroke) = border {
                surface.stroke_rounded_rect(rounded, stroke);
            }
        }
        BackgroundShape::Circle => {
            // A non-square rect yields a circle inscribed in it, never an
            // ellipse.
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0;
            surface.fill_circle(center, radius, fill);
            if let Some(stroke) = border {
                surface.stroke_circle(center, radius, stroke);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use emblem_render::{DisplayList, DrawCommand, Point};

    use super::*;

    #[test]
    fn none_is_a_no_op() {
        let mut list = DisplayList::new();
        paint_background(
            &mut list,
            BackgroundShape::None,
            Rect::new(0.0, 0.0, 40.0, 40.0),
            8.0,
            Color::LIGHT_GRAY,
            Some(Stroke::default()),
        );
        assert!(list.is_empty());
    }

    #[test]
    fn rounded_rect_fills_then_strokes() {
        let mut list = DisplayList::new();
        paint_background(
            &mut list,
            BackgroundShape::RoundedRect,
            Rect::new(0.0, 0.0, 40.0, 40.0),
            8.0,
            Color::LIGHT_GRAY,
            Some(Stroke::new(Color::DARK_GRAY, 1.0)),
        );
        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::FillRoundedRect { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::StrokeRoundedRect { .. }));
    }

    #[test]
    fn circle_is_inscribed_in_non_square_rect() {
        let mut list = DisplayList::new();
        paint_background(
            &mut list,
            BackgroundShape::Circle,
            Rect::new(0.0, 0.0, 40.0, 20.0),
            0.0,
            Color::LIGHT_GRAY,
            None,
        );
        assert_eq!(list.len(), 1);
        match &list.commands()[0] {
            DrawCommand::FillCircle { center, radius, .. } => {
                assert_eq!(*center, Point::new(20.0, 10.0));
                assert_eq!(*radius, 10.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let mut list = DisplayList::new();
        paint_background(
            &mut list,
            BackgroundShape::Circle,
            Rect::ZERO,
            0.0,
            Color::LIGHT_GRAY,
            None,
        );
        assert!(list.is_empty());
    }
}
