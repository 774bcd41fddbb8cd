//! Basic geometry types for layout and rendering.

use bytemuck::{Pod, Zeroable};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Convert to a glam Vec2.
    #[inline]
    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Create from a glam Vec2.
    #[inline]
    pub fn from_vec2(v: glam::Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if both dimensions are finite and non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }
}

/// Padding on the four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    /// Create padding with explicit values per side.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create padding with the same value on all sides.
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// No padding.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Total horizontal padding (left + right).
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding (top + bottom).
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Check if all sides are finite and non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle centered at a point.
    #[inline]
    pub fn from_center(center: Point, size: Size) -> Self {
        Self {
            origin: Point {
                x: center.x - size.width / 2.0,
                y: center.y - size.height / 2.0,
            },
            size,
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Expand the rectangle by the given amount on all sides.
    #[inline]
    pub fn inflate(&self, amount: f32) -> Rect {
        Rect::new(
            self.origin.x - amount,
            self.origin.y - amount,
            self.size.width + amount * 2.0,
            self.size.height + amount * 2.0,
        )
    }

    /// Shrink the rectangle by per-side padding.
    ///
    /// A rect smaller than the padding degenerates to zero size at the
    /// padded origin rather than going negative.
    #[inline]
    pub fn inset(&self, padding: Padding) -> Rect {
        Rect::new(
            self.origin.x + padding.left,
            self.origin.y + padding.top,
            (self.size.width - padding.horizontal()).max(0.0),
            (self.size.height - padding.vertical()).max(0.0),
        )
    }

    /// Offset the rectangle by the given amount.
    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            origin: Point {
                x: self.origin.x + dx,
                y: self.origin.y + dy,
            },
            size: self.size,
        }
    }

    /// Check whether two rectangles overlap with positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Check whether `other` lies entirely within this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// A rectangle with a uniform corner radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    /// The base rectangle.
    pub rect: Rect,
    /// Corner radius applied to all four corners.
    pub radius: f32,
}

impl RoundedRect {
    /// Create a rounded rectangle with a uniform corner radius.
    #[inline]
    pub const fn new(rect: Rect, radius: f32) -> Self {
        Self { rect, radius }
    }

    /// Check if the corner radius is zero (a regular rectangle).
    #[inline]
    pub fn is_rect(&self) -> bool {
        self.radius == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn rect_inset_by_padding() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = r.inset(Padding::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(inner, Rect::new(10.0, 20.0, 60.0, 40.0));
    }

    #[test]
    fn rect_inset_never_goes_negative() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = r.inset(Padding::uniform(20.0));
        assert_eq!(inner.width(), 0.0);
        assert_eq!(inner.height(), 0.0);
    }

    #[test]
    fn rect_from_center() {
        let r = Rect::from_center(Point::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(r, Rect::new(40.0, 45.0, 20.0, 10.0));
    }

    #[test]
    fn rect_intersects_requires_positive_area() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let overlapping = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
    }

    #[test]
    fn padding_totals() {
        let p = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.horizontal(), 4.0);
        assert_eq!(p.vertical(), 6.0);
    }

    #[test]
    fn size_validity() {
        assert!(Size::new(0.0, 0.0).is_valid());
        assert!(!Size::new(-1.0, 0.0).is_valid());
        assert!(!Size::new(f32::NAN, 0.0).is_valid());
    }
}
