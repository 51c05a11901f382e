//! # Presets
//!
//! The classic parameter sets, exposed as data.
//!
//! | preset                | model        | output                 |
//! |-----------------------|--------------|------------------------|
//! | `koch_curve`          | subdivision  | polyline               |
//! | `minkowski_sausage`   | subdivision  | polyline               |
//! | `koch_lsystem`        | L-system     | segments               |
//! | `binary_tree`         | L-system     | segments (branching)   |
//! | `barnsley_fern`       | IFS          | 100 000 points         |
//! | `probability_tree`    | IFS          | 100 000 points         |

use fractum_shared::Point2;

use crate::config::{FractalJob, IfsJob, NamedJob, SubdivisionJob};
use crate::ifs::WeightedTransformSet;
use crate::lsystem::{LSystem, RuleSet, TurtleConfig};
use crate::subdivision::CurveFamily;

/// Points sampled by the IFS presets.
pub const IFS_POINTS: usize = 100_000;

/// Warmup steps discarded by the IFS presets.
pub const IFS_WARMUP: usize = 100;

/// Barnsley fern: `[a, b, c, d, e, f, weight]`.
pub const BARNSLEY_FERN: [[f64; 7]; 4] = [
    [0.00, 0.00, 0.00, 0.16, 0.00, 0.00, 0.01],   // stem
    [0.85, 0.04, -0.04, 0.85, 0.00, 1.60, 0.85],  // successively smaller leaflets
    [0.20, -0.26, 0.23, 0.22, 0.00, 1.60, 0.07],  // largest left leaflet
    [-0.15, 0.28, 0.26, 0.24, 0.00, 0.44, 0.07],  // largest right leaflet
];

/// Probability tree: `[a, b, c, d, e, f, weight]`.
pub const PROBABILITY_TREE: [[f64; 7]; 3] = [
    [0.00, 0.00, 0.00, 0.50, 0.00, 0.00, 0.10],   // trunk
    [0.42, -0.42, 0.42, 0.42, 0.00, 0.20, 0.45],  // left branch
    [0.42, 0.42, -0.42, 0.42, 0.00, 0.20, 0.45],  // right branch
];

/// The segment `(0, 0) → (1, 0)` every subdivision preset starts from.
#[must_use]
pub fn unit_segment() -> Vec<Point2> {
    vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]
}

/// Koch curve on the unit segment.
#[must_use]
pub fn koch_curve(levels: u32) -> SubdivisionJob {
    SubdivisionJob {
        family: CurveFamily::Koch,
        points: unit_segment(),
        levels,
    }
}

/// Minkowski sausage on the unit segment.
#[must_use]
pub fn minkowski_sausage(levels: u32) -> SubdivisionJob {
    SubdivisionJob {
        family: CurveFamily::Minkowski,
        points: unit_segment(),
        levels,
    }
}

/// Koch curve as an L-system: `F → F+F--F+F`, 60°, 3 generations.
#[must_use]
pub fn koch_lsystem() -> LSystem {
    LSystem {
        axiom: "F".into(),
        rules: RuleSet::new().with_rule('F', "F+F--F+F"),
        iterations: 3,
        turtle: TurtleConfig::new(60.0, 10.0),
    }
}

/// Binary fractal tree: `1 → 11`, `0 → 1[0]0`, 45°, 5 generations.
#[must_use]
pub fn binary_tree() -> LSystem {
    LSystem {
        axiom: "0".into(),
        rules: RuleSet::new().with_rule('1', "11").with_rule('0', "1[0]0"),
        iterations: 5,
        turtle: TurtleConfig::new(45.0, 10.0),
    }
}

/// Transform set of the Barnsley fern.
#[must_use]
pub fn barnsley_fern_transforms() -> WeightedTransformSet {
    WeightedTransformSet::from_trusted_rows(&BARNSLEY_FERN)
}

/// Transform set of the probability tree.
#[must_use]
pub fn probability_tree_transforms() -> WeightedTransformSet {
    WeightedTransformSet::from_trusted_rows(&PROBABILITY_TREE)
}

/// Barnsley fern job with the default point budget.
#[must_use]
pub fn barnsley_fern() -> IfsJob {
    IfsJob {
        transforms: barnsley_fern_transforms(),
        points: IFS_POINTS,
        warmup: IFS_WARMUP,
        seed: None,
    }
}

/// Probability tree job with the default point budget.
#[must_use]
pub fn probability_tree() -> IfsJob {
    IfsJob {
        transforms: probability_tree_transforms(),
        points: IFS_POINTS,
        warmup: IFS_WARMUP,
        seed: None,
    }
}

/// Every preset as a named job, in the order of the table above.
#[must_use]
pub fn all() -> Vec<NamedJob> {
    vec![
        NamedJob::new("koch_curve", FractalJob::Subdivision(koch_curve(4))),
        NamedJob::new("minkowski_sausage", FractalJob::Subdivision(minkowski_sausage(4))),
        NamedJob::new("koch_lsystem", FractalJob::LSystem(koch_lsystem())),
        NamedJob::new("binary_tree", FractalJob::LSystem(binary_tree())),
        NamedJob::new("barnsley_fern", FractalJob::Ifs(barnsley_fern())),
        NamedJob::new("probability_tree", FractalJob::Ifs(probability_tree())),
    ]
}
