//! Plain 2D geometry in screen coordinates: y grows downward, so the *top*
//! of a rectangle is its minimum y and the *bottom* its maximum y.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A position in world coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (downward-positive).
    pub y: f64,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by the given amounts.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add<Vector> for Point {
    type Output = Self;

    fn add(self, rhs: Vector) -> Self {
        Self::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A direction and magnitude in the plane. Directions are not required to be
/// normalized; entity speed is tracked separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// Horizontal component.
    pub dx: f64,
    /// Vertical component (downward-positive).
    pub dy: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a vector from its components.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.dx += rhs.dx;
        self.dy += rhs.dy;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size from its extents.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Return `true` if either extent is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// An axis-aligned rectangle: origin (top-left corner) plus size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent of the rectangle.
    pub size: Size,
}

impl Rect {
    /// The zero rectangle.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a rectangle from origin coordinates and extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle at the origin with the given size.
    pub fn with_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    /// Leftmost x coordinate.
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Rightmost x coordinate.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Horizontal center.
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    /// Topmost y coordinate (screen coordinates: the smaller value).
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Bottommost y coordinate.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Vertical center.
    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Top-left corner.
    pub fn top_left(&self) -> Point {
        self.origin
    }

    /// Top-right corner.
    pub fn top_right(&self) -> Point {
        Point::new(self.max_x(), self.min_y())
    }

    /// Bottom-left corner.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.min_x(), self.max_y())
    }

    /// Bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    /// Return this rectangle shifted by the given amounts.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            origin: self.origin.offset(dx, dy),
            size: self.size,
        }
    }

    /// Return `true` if the point lies inside or on the edge of the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Overlap of two rectangles, or `None` if they are disjoint.
    ///
    /// Rectangles that merely share an edge produce a zero-width or
    /// zero-height overlap rather than `None`; resting contact between a
    /// body and a boundary strip is represented exactly this way.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x0 = self.min_x().max(other.min_x());
        let y0 = self.min_y().max(other.min_y());
        let x1 = self.max_x().min(other.max_x());
        let y1 = self.max_y().min(other.max_y());
        if x1 < x0 || y1 < y0 {
            return None;
        }
        Some(Self::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// Return `true` if the rectangles overlap or touch.
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{origin: {}, size: {}}}", self.origin, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_corners() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.max_x(), 40.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_y(), 60.0);
        assert_eq!(rect.center(), Point::new(25.0, 40.0));
        assert_eq!(rect.top_left(), Point::new(10.0, 20.0));
        assert_eq!(rect.top_right(), Point::new(40.0, 20.0));
        assert_eq!(rect.bottom_left(), Point::new(10.0, 60.0));
        assert_eq!(rect.bottom_right(), Point::new(40.0, 60.0));
    }

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap, Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersection_of_touching_rects_is_zero_area() {
        // A body resting exactly on top of a surface shares an edge with it.
        let body = Rect::new(0.0, 90.0, 10.0, 10.0);
        let surface = Rect::new(0.0, 100.0, 50.0, 5.0);
        let contact = body.intersection(&surface).unwrap();
        assert_eq!(contact.min_y(), 100.0);
        assert_eq!(contact.height(), 0.0);
        assert_eq!(contact.width(), 10.0);
    }

    #[test]
    fn intersection_of_disjoint_rects_is_none() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersection(&b).is_none());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn rect_offset_moves_origin_only() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let moved = rect.offset(10.0, -2.0);
        assert_eq!(moved.origin, Point::new(11.0, 0.0));
        assert_eq!(moved.size, rect.size);
    }

    #[test]
    fn rect_contains_edge_points() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(!rect.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn vector_arithmetic() {
        let v = Vector::new(1.0, -2.0);
        assert_eq!(v + Vector::new(2.0, 2.0), Vector::new(3.0, 0.0));
        assert_eq!(v * 2.0, Vector::new(2.0, -4.0));
        assert_eq!(-v, Vector::new(-1.0, 2.0));
        assert_eq!(Vector::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn display_formats() {
        let rect = Rect::new(0.0, 1.0, 2.0, 3.0);
        assert_eq!(rect.to_string(), "{origin: (0, 1), size: 2 x 3}");
    }
}
