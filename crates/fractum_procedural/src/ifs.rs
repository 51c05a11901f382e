//! # Iterated Function Systems
//!
//! Point clouds sampled from the attractor of a set of weighted affine
//! maps with the chaos game:
//!
//! ```text
//! p ← (0.5, 0)
//! repeat warmup + count times:
//!     pick map k with probability w_k      (independent draws)
//!     p ← T_k(p)
//! keep the last `count` points
//! ```
//!
//! The first `warmup` points have not yet fallen onto the attractor and
//! are discarded.
//!
//! ## Selection
//!
//! Weights are stored as a cumulative distribution. One uniform draw in
//! `[0, 1)` is located with a binary search, so picking a map is
//! O(log n) and never depends on earlier picks.

use fractum_shared::{AffineTransform, Point2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FractalError, FractalResult};
use crate::seed::FractalSeed;

/// How far the weight sum may drift from 1.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Where every chaos game orbit starts.
pub const SEED_POINT: Point2 = Point2::new(0.5, 0.0);

/// A validated, ordered set of `(transform, weight)` pairs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 7]>", into = "Vec<[f64; 7]>")]
pub struct WeightedTransformSet {
    transforms: Vec<AffineTransform>,
    weights: Vec<f64>,
    /// `cumulative[k]` = sum of weights `0..=k`.
    cumulative: Vec<f64>,
}

impl WeightedTransformSet {
    /// Validates and builds a transform set.
    ///
    /// # Errors
    ///
    /// - [`FractalError::EmptyTransformSet`] for an empty input.
    /// - [`FractalError::InvalidWeight`] for a negative or non-finite weight.
    /// - [`FractalError::WeightSum`] if the weights do not sum to 1
    ///   within [`WEIGHT_TOLERANCE`].
    pub fn new(pairs: Vec<(AffineTransform, f64)>) -> FractalResult<Self> {
        if pairs.is_empty() {
            return Err(FractalError::EmptyTransformSet);
        }

        let mut transforms = Vec::with_capacity(pairs.len());
        let mut weights = Vec::with_capacity(pairs.len());
        let mut cumulative = Vec::with_capacity(pairs.len());
        let mut running = 0.0;

        for (index, (transform, weight)) in pairs.into_iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(FractalError::InvalidWeight { index, weight });
            }
            running += weight;
            transforms.push(transform);
            weights.push(weight);
            cumulative.push(running);
        }

        if (running - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(FractalError::WeightSum { sum: running });
        }

        Ok(Self {
            transforms,
            weights,
            cumulative,
        })
    }

    /// Builds a set from `[a, b, c, d, e, f, weight]` rows.
    ///
    /// # Errors
    ///
    /// Same as [`WeightedTransformSet::new`].
    pub fn from_rows(rows: &[[f64; 7]]) -> FractalResult<Self> {
        Self::new(
            rows.iter()
                .map(|r| (AffineTransform::new(r[0], r[1], r[2], r[3], r[4], r[5]), r[6]))
                .collect(),
        )
    }

    /// Builds a set from rows already known to be valid, skipping checks.
    pub(crate) fn from_trusted_rows(rows: &[[f64; 7]]) -> Self {
        let mut running = 0.0;
        let mut set = Self {
            transforms: Vec::with_capacity(rows.len()),
            weights: Vec::with_capacity(rows.len()),
            cumulative: Vec::with_capacity(rows.len()),
        };
        for r in rows {
            running += r[6];
            set.transforms
                .push(AffineTransform::new(r[0], r[1], r[2], r[3], r[4], r[5]));
            set.weights.push(r[6]);
            set.cumulative.push(running);
        }
        set
    }

    /// Number of transforms
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns `true` if there are no transforms (never true once built).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// The weights, in input order.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Maps a uniform draw `u ∈ [0, 1)` to a transform index.
    ///
    /// Zero-weight transforms are never selected. Draws that land past
    /// the last cumulative bound (weights summing to slightly less than 1)
    /// go to the last transform with non-zero weight.
    #[inline]
    #[must_use]
    pub fn select(&self, u: f64) -> usize {
        let index = self.cumulative.partition_point(|&bound| bound <= u);
        if index < self.len() {
            index
        } else {
            self.weights
                .iter()
                .rposition(|&w| w > 0.0)
                .unwrap_or(self.len() - 1)
        }
    }

    /// Draws one transform index from the weight distribution.
    #[inline]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.select(rng.gen::<f64>())
    }
}

impl TryFrom<Vec<[f64; 7]>> for WeightedTransformSet {
    type Error = FractalError;

    fn try_from(rows: Vec<[f64; 7]>) -> FractalResult<Self> {
        Self::from_rows(&rows)
    }
}

impl From<WeightedTransformSet> for Vec<[f64; 7]> {
    fn from(set: WeightedTransformSet) -> Self {
        set.transforms
            .iter()
            .zip(&set.weights)
            .map(|(t, &w)| [t.a, t.b, t.c, t.d, t.e, t.f, w])
            .collect()
    }
}

/// Chaos game sampler over one transform set.
///
/// # Example
///
/// ```rust
/// use fractum_procedural::{presets, ChaosGame, FractalSeed};
///
/// let fern = ChaosGame::new(presets::barnsley_fern_transforms());
/// let points = fern.sample_seeded(1_000, 100, FractalSeed::new(42)).unwrap();
/// assert_eq!(points.len(), 1_000);
/// ```
#[derive(Clone, Debug)]
pub struct ChaosGame {
    set: WeightedTransformSet,
}

impl ChaosGame {
    /// Creates a sampler for the given transform set.
    #[must_use]
    pub fn new(set: WeightedTransformSet) -> Self {
        Self { set }
    }

    /// Endless orbit of the seed point, one transform application per item.
    ///
    /// The seed point itself is not yielded.
    pub fn orbit<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> Orbit<'a, R> {
        Orbit {
            set: &self.set,
            rng,
            point: SEED_POINT,
        }
    }

    /// Runs `warmup + count` steps and returns the last `count` points in
    /// generation order.
    ///
    /// # Errors
    ///
    /// Returns [`FractalError::ZeroCount`] if `count` is zero.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        count: usize,
        warmup: usize,
        rng: &mut R,
    ) -> FractalResult<Vec<Point2>> {
        if count == 0 {
            return Err(FractalError::ZeroCount { what: "point count" });
        }

        let mut points = Vec::with_capacity(count);
        points.extend(self.orbit(rng).skip(warmup).take(count));

        tracing::debug!(
            "chaos game: {} transforms, {} warmup + {} points",
            self.set.len(),
            warmup,
            points.len()
        );

        Ok(points)
    }

    /// Same as [`ChaosGame::sample`] with a ChaCha8 stream built from `seed`.
    ///
    /// Identical arguments always produce bit-identical output.
    ///
    /// # Errors
    ///
    /// Returns [`FractalError::ZeroCount`] if `count` is zero.
    pub fn sample_seeded(
        &self,
        count: usize,
        warmup: usize,
        seed: FractalSeed,
    ) -> FractalResult<Vec<Point2>> {
        self.sample(count, warmup, &mut seed.rng())
    }
}

/// Iterator returned by [`ChaosGame::orbit`].
pub struct Orbit<'a, R: ?Sized> {
    set: &'a WeightedTransformSet,
    rng: &'a mut R,
    point: Point2,
}

impl<R: Rng + ?Sized> Iterator for Orbit<'_, R> {
    type Item = Point2;

    #[inline]
    fn next(&mut self) -> Option<Point2> {
        let index = self.set.choose(&mut *self.rng);
        self.point = self.set.transforms[index].apply(self.point);
        Some(self.point)
    }
}
