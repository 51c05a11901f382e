//! Planar geometry types produced by the generators.
//!
//! Everything here is `f64`: fractal detail lives many subdivision levels
//! deep and single precision runs out long before the recursion does.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A point (or displacement) in the plane.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Point2 {
    /// Creates a new point
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Displacement of length `length` pointing at `angle_degrees`,
    /// measured counter-clockwise from the +X axis.
    #[inline]
    #[must_use]
    pub fn from_polar(angle_degrees: f64, length: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self::new(length * cos, length * sin)
    }

    /// Rotates the vector by +90° (multiplication by `i` on the complex plane).
    #[inline]
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Euclidean length of the vector.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance to another point
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Returns `true` if both components are within `epsilon` of `other`'s.
    #[inline]
    #[must_use]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl std::ops::Add for Point2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Point2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Div<f64> for Point2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// A drawn edge between two points.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Segment {
    /// Where the pen went down
    pub start: Point2,
    /// Where the pen lifted
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment
    #[inline]
    #[must_use]
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Length of the segment
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Axis-aligned bounding box.
///
/// Renderers use this to frame a figure with an equal aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower-left corner
    pub min: Point2,
    /// Upper-right corner
    pub max: Point2,
}

impl Bounds {
    /// Degenerate box containing exactly one point.
    #[inline]
    #[must_use]
    pub const fn around(point: Point2) -> Self {
        Self { min: point, max: point }
    }

    /// Grows the box so it contains `point`.
    #[inline]
    pub fn include(&mut self, point: Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Smallest box containing every point, or `None` for an empty input.
    #[must_use]
    pub fn of_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::around(iter.next()?);
        for point in iter {
            bounds.include(point);
        }
        Some(bounds)
    }

    /// Smallest box containing both endpoints of every segment.
    #[must_use]
    pub fn of_segments<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = Segment>,
    {
        Self::of_points(segments.into_iter().flat_map(|s| [s.start, s.end]))
    }

    /// Horizontal extent
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the box
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.min.lerp(self.max, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Point2::new(5.0, 8.0));
        assert_eq!(b - a, Point2::new(3.0, 4.0));
        assert_eq!(a.distance(b), 5.0);
        assert_eq!((b - a) / 2.0, Point2::new(1.5, 2.0));
    }

    #[test]
    fn test_perp_is_quarter_turn() {
        let v = Point2::new(1.0, 0.0);
        assert_eq!(v.perp(), Point2::new(0.0, 1.0));
        assert_eq!(v.perp().perp(), Point2::new(-1.0, 0.0));
    }

    #[test]
    fn test_from_polar() {
        let east = Point2::from_polar(0.0, 10.0);
        assert_eq!(east, Point2::new(10.0, 0.0));

        let north = Point2::from_polar(90.0, 2.0);
        assert!(north.approx_eq(Point2::new(0.0, 2.0), 1e-12));

        let diagonal = Point2::from_polar(45.0, 2.0_f64.sqrt());
        assert!(diagonal.approx_eq(Point2::new(1.0, 1.0), 1e-12));
    }

    #[test]
    fn test_bounds() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(3.0, -1.0),
            Point2::new(-2.0, 4.0),
        ];
        let bounds = Bounds::of_points(points).unwrap();

        assert_eq!(bounds.min, Point2::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point2::new(3.0, 4.0));
        assert_eq!(bounds.width(), 5.0);
        assert_eq!(bounds.height(), 5.0);
        assert_eq!(bounds.center(), Point2::new(0.5, 1.5));

        assert!(Bounds::of_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_segment_bounds() {
        let segments = [Segment::new(Point2::ORIGIN, Point2::new(1.0, 2.0))];
        let bounds = Bounds::of_segments(segments).unwrap();
        assert_eq!(bounds.max, Point2::new(1.0, 2.0));
        assert!((segments[0].length() - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_point_bytemuck() {
        let points = [Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&points);
        assert_eq!(bytes.len(), 32); // 2 points * 2 * 8 bytes

        let segment = Segment::new(points[0], points[1]);
        assert_eq!(bytemuck::bytes_of(&segment).len(), 32);
    }

    #[test]
    fn test_point_from_toml() {
        let point: Point2 = toml::from_str("x = 0.5\ny = -1.0").unwrap();
        assert_eq!(point, Point2::new(0.5, -1.0));
    }
}
