//! # Subdivision Curves
//!
//! Deterministic self-similar curves built by motif replacement.
//!
//! Each round replaces every segment `p1 → p2` of the current polyline
//! with a fixed multi-segment motif scaled and rotated onto it. Writing
//! `d = p2 - p1` and `i·d` for `d` rotated by +90°:
//!
//! ```text
//! Koch (4 segments)        Minkowski (5 segments)
//!
//!          /\                    ┌────┐
//!      ___/  \___             ___│    │___
//!
//! p1 + d/3                 p1 + d/4
//! p1 + d/2 + i·d·√3/6      p1 + d/4 + i·d/4
//! p1 + 2d/3                p1 + 3d/4 + i·d/4
//!                          p1 + 3d/4
//! ```
//!
//! The final point of the whole polyline is emitted exactly once, so both
//! extreme endpoints survive every round unchanged.

use fractum_shared::Point2;
use serde::{Deserialize, Serialize};

use crate::error::{FractalError, FractalResult};

/// The motif used to replace each segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveFamily {
    /// Triangular bump: 4 segments of length 1/3.
    Koch,
    /// Square bump: 5 segments, the raised one half the base length and
    /// the rest a quarter each.
    Minkowski,
}

impl CurveFamily {
    /// Number of segments a single segment becomes after one round.
    #[inline]
    #[must_use]
    pub const fn segments(self) -> usize {
        match self {
            Self::Koch => 4,
            Self::Minkowski => 5,
        }
    }

    /// Appends the motif points for `p1 → p2` to `out`, starting with `p1`
    /// and stopping before `p2`.
    #[inline]
    fn push_motif(self, p1: Point2, p2: Point2, out: &mut Vec<Point2>) {
        let d = p2 - p1;
        match self {
            Self::Koch => {
                let apex = d.perp() * (3.0_f64.sqrt() / 6.0);
                out.extend_from_slice(&[
                    p1,
                    p1 + d / 3.0,
                    p1 + d / 2.0 + apex,
                    p1 + d * 2.0 / 3.0,
                ]);
            }
            Self::Minkowski => {
                let rise = d.perp() / 4.0;
                out.extend_from_slice(&[
                    p1,
                    p1 + d / 4.0,
                    p1 + d / 4.0 + rise,
                    p1 + d * 3.0 / 4.0 + rise,
                    p1 + d * 3.0 / 4.0,
                ]);
            }
        }
    }
}

/// Generator for one curve family.
///
/// # Example
///
/// ```rust
/// use fractum_procedural::{CurveFamily, SubdivisionCurve};
/// use fractum_shared::Point2;
///
/// let koch = SubdivisionCurve::new(CurveFamily::Koch);
/// let curve = koch
///     .generate(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], 2)
///     .unwrap();
/// assert_eq!(curve.len(), 17);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubdivisionCurve {
    family: CurveFamily,
}

impl SubdivisionCurve {
    /// Creates a generator for the given family.
    #[must_use]
    pub const fn new(family: CurveFamily) -> Self {
        Self { family }
    }

    /// Number of points `generate` will return for an input of
    /// `initial_points` points, following `N(k+1) = (N(k) - 1)·s + 1`.
    #[must_use]
    pub fn point_count(&self, initial_points: usize, levels: u32) -> usize {
        let segments = self.family.segments();
        (0..levels).fold(initial_points, |n, _| {
            n.saturating_sub(1).saturating_mul(segments).saturating_add(1)
        })
    }

    /// Replaces every segment of `initial` with the motif, `levels` times.
    ///
    /// `levels = 0` returns the input unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FractalError::TooFewPoints`] if `initial` has fewer than
    /// two points.
    pub fn generate(&self, initial: &[Point2], levels: u32) -> FractalResult<Vec<Point2>> {
        if initial.len() < 2 {
            return Err(FractalError::TooFewPoints(initial.len()));
        }

        let mut current = initial.to_vec();
        let mut next = Vec::with_capacity(self.point_count(initial.len(), levels));

        for _ in 0..levels {
            next.clear();
            for pair in current.windows(2) {
                self.family.push_motif(pair[0], pair[1], &mut next);
            }
            next.push(current[current.len() - 1]);
            std::mem::swap(&mut current, &mut next);
        }

        tracing::debug!(
            "subdivision {:?}: {} levels, {} -> {} points",
            self.family,
            levels,
            initial.len(),
            current.len()
        );

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_segment() -> [Point2; 2] {
        [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]
    }

    #[test]
    fn test_level_zero_is_identity() {
        let input = [Point2::new(0.3, 1.0), Point2::new(-2.0, 5.5)];
        for family in [CurveFamily::Koch, CurveFamily::Minkowski] {
            let out = SubdivisionCurve::new(family).generate(&input, 0).unwrap();
            assert_eq!(out, input);
        }
    }

    #[test]
    fn test_koch_level_one_closed_form() {
        let out = SubdivisionCurve::new(CurveFamily::Koch)
            .generate(&unit_segment(), 1)
            .unwrap();

        let expected = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0 / 3.0, 0.0),
            Point2::new(0.5, 3.0_f64.sqrt() / 6.0),
            Point2::new(2.0 / 3.0, 0.0),
            Point2::new(1.0, 0.0),
        ];
        assert_eq!(out.len(), expected.len());
        for (got, want) in out.iter().zip(expected) {
            assert!(got.approx_eq(want, 1e-12), "{got:?} != {want:?}");
        }
    }

    #[test]
    fn test_minkowski_level_one_closed_form() {
        let out = SubdivisionCurve::new(CurveFamily::Minkowski)
            .generate(&unit_segment(), 1)
            .unwrap();

        let expected = [
            Point2::new(0.0, 0.0),
            Point2::new(0.25, 0.0),
            Point2::new(0.25, 0.25),
            Point2::new(0.75, 0.25),
            Point2::new(0.75, 0.0),
            Point2::new(1.0, 0.0),
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn test_point_count_recurrence() {
        for family in [CurveFamily::Koch, CurveFamily::Minkowski] {
            let curve = SubdivisionCurve::new(family);
            let mut previous = 2;
            for level in 1..=5 {
                let out = curve.generate(&unit_segment(), level).unwrap();
                assert_eq!(out.len(), (previous - 1) * family.segments() + 1);
                assert_eq!(out.len(), curve.point_count(2, level));
                previous = out.len();
            }
        }
    }

    #[test]
    fn test_endpoints_preserved() {
        let input = [Point2::new(-1.5, 2.0), Point2::new(4.0, -3.0)];
        for family in [CurveFamily::Koch, CurveFamily::Minkowski] {
            for level in 0..6 {
                let out = SubdivisionCurve::new(family).generate(&input, level).unwrap();
                assert_eq!(out[0], input[0]);
                assert_eq!(out[out.len() - 1], input[1]);
            }
        }
    }

    #[test]
    fn test_multi_segment_input() {
        // An open triangle: two segments expand independently, shared vertex once
        let input = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let out = SubdivisionCurve::new(CurveFamily::Koch).generate(&input, 1).unwrap();

        assert_eq!(out.len(), 9);
        assert_eq!(out[4], input[1]);
        assert_eq!(out[8], input[2]);
    }

    #[test]
    fn test_too_few_points() {
        let curve = SubdivisionCurve::new(CurveFamily::Koch);
        assert!(matches!(curve.generate(&[], 1), Err(FractalError::TooFewPoints(0))));
        assert!(matches!(
            curve.generate(&[Point2::ORIGIN], 0),
            Err(FractalError::TooFewPoints(1))
        ));
    }
}
