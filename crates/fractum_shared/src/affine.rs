//! Affine maps of the plane.
//!
//! Coefficients follow the layout of classic IFS tables:
//!
//! ```text
//! x' = a·x + b·y + e
//! y' = c·x + d·y + f
//! ```

use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// An affine transform `p ↦ M·p + t` with `M = [[a, b], [c, d]]`, `t = (e, f)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    /// Row 0, column 0 of the linear part
    pub a: f64,
    /// Row 0, column 1 of the linear part
    pub b: f64,
    /// Row 1, column 0 of the linear part
    pub c: f64,
    /// Row 1, column 1 of the linear part
    pub d: f64,
    /// X translation
    pub e: f64,
    /// Y translation
    pub f: f64,
}

impl AffineTransform {
    /// Creates a transform from its six coefficients.
    #[inline]
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Identity transform
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a transform from a `[a, b, c, d, e, f]` row.
    #[inline]
    #[must_use]
    pub const fn from_row(row: [f64; 6]) -> Self {
        Self::new(row[0], row[1], row[2], row[3], row[4], row[5])
    }

    /// Pure translation by `offset`.
    #[inline]
    #[must_use]
    pub const fn translation(offset: Point2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, offset.x, offset.y)
    }

    /// Maps a point through the transform.
    #[inline]
    #[must_use]
    pub fn apply(&self, p: Point2) -> Point2 {
        Point2::new(
            self.a * p.x + self.b * p.y + self.e,
            self.c * p.x + self.d * p.y + self.f,
        )
    }

    /// Determinant of the linear part.
    ///
    /// Its absolute value is the factor by which the map scales area.
    #[inline]
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = Point2::new(0.3, -7.5);
        assert_eq!(AffineTransform::IDENTITY.apply(p), p);
        assert_eq!(AffineTransform::default(), AffineTransform::IDENTITY);
    }

    #[test]
    fn test_apply_matches_coefficients() {
        // Barnsley fern, successively smaller leaflets
        let t = AffineTransform::from_row([0.85, 0.04, -0.04, 0.85, 0.0, 1.6]);
        let p = t.apply(Point2::new(1.0, 2.0));

        assert!((p.x - (0.85 + 0.08)).abs() < 1e-12);
        assert!((p.y - (-0.04 + 1.7 + 1.6)).abs() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = AffineTransform::translation(Point2::new(1.0, -1.0));
        assert_eq!(t.apply(Point2::ORIGIN), Point2::new(1.0, -1.0));
        assert_eq!(t.determinant(), 1.0);
    }

    #[test]
    fn test_determinant_of_stem_is_zero() {
        let stem = AffineTransform::new(0.0, 0.0, 0.0, 0.16, 0.0, 0.0);
        assert_eq!(stem.determinant(), 0.0);
    }
}
