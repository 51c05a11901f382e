//! # Job Files
//!
//! Generator parameters loaded from external TOML files, once, at startup.
//!
//! ```toml
//! [[jobs]]
//! name = "koch"
//! kind = "subdivision"
//! family = "koch"
//! levels = 4
//!
//! [[jobs]]
//! name = "tree"
//! kind = "lsystem"
//! axiom = "0"
//! rules = { 1 = "11", 0 = "1[0]0" }
//! iterations = 5
//! turn_angle = 45.0
//! step = 10.0
//!
//! [[jobs]]
//! name = "fern"
//! kind = "ifs"
//! points = 100000
//! warmup = 100
//! seed = 42
//! transforms = [
//!     [0.00,  0.00,  0.00, 0.16, 0.00, 0.00, 0.01],
//!     [0.85,  0.04, -0.04, 0.85, 0.00, 1.60, 0.85],
//!     [0.20, -0.26,  0.23, 0.22, 0.00, 1.60, 0.07],
//!     [-0.15, 0.28,  0.26, 0.24, 0.00, 0.44, 0.07],
//! ]
//! ```
//!
//! Counts are unsigned: a negative level, iteration or point count is
//! rejected while parsing.

use std::path::Path;

use fractum_shared::{Bounds, Point2, Segment};
use serde::{Deserialize, Serialize};

use crate::error::FractalResult;
use crate::ifs::{ChaosGame, WeightedTransformSet};
use crate::lsystem::LSystem;
use crate::presets;
use crate::seed::FractalSeed;
use crate::subdivision::{CurveFamily, SubdivisionCurve};

/// Parameters of a subdivision curve run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubdivisionJob {
    /// Motif to replace every segment with.
    pub family: CurveFamily,
    /// Initial polyline; defaults to the unit segment.
    #[serde(default = "presets::unit_segment")]
    pub points: Vec<Point2>,
    /// Rounds of replacement.
    pub levels: u32,
}

/// Parameters of a chaos game run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IfsJob {
    /// Weighted maps, as `[a, b, c, d, e, f, weight]` rows.
    pub transforms: WeightedTransformSet,
    /// Points to keep.
    #[serde(default = "default_ifs_points")]
    pub points: usize,
    /// Points to discard first.
    #[serde(default = "default_ifs_warmup")]
    pub warmup: usize,
    /// Fixed seed; a fresh one is drawn per run when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_ifs_points() -> usize {
    presets::IFS_POINTS
}

fn default_ifs_warmup() -> usize {
    presets::IFS_WARMUP
}

/// One generator invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FractalJob {
    /// Recursive motif replacement.
    Subdivision(SubdivisionJob),
    /// Grammar expansion + turtle drawing.
    #[serde(rename = "lsystem")]
    LSystem(LSystem),
    /// Chaos game sampling.
    Ifs(IfsJob),
}

impl FractalJob {
    /// Short name of the generative model.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Subdivision(_) => "subdivision",
            Self::LSystem(_) => "lsystem",
            Self::Ifs(_) => "ifs",
        }
    }

    /// Runs the generator.
    ///
    /// # Errors
    ///
    /// Any configuration or structural error from the underlying generator.
    pub fn generate(&self) -> FractalResult<Geometry> {
        match self {
            Self::Subdivision(job) => SubdivisionCurve::new(job.family)
                .generate(&job.points, job.levels)
                .map(Geometry::Polyline),
            Self::LSystem(system) => system.generate().map(Geometry::Segments),
            Self::Ifs(job) => {
                let seed = job.seed.map_or_else(FractalSeed::from_entropy, FractalSeed::new);
                ChaosGame::new(job.transforms.clone())
                    .sample_seeded(job.points, job.warmup, seed)
                    .map(Geometry::Points)
            }
        }
    }
}

/// A job with a name for reporting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedJob {
    /// Label shown in reports.
    pub name: String,
    /// What to generate.
    #[serde(flatten)]
    pub job: FractalJob,
}

impl NamedJob {
    /// Creates a named job.
    #[must_use]
    pub fn new(name: impl Into<String>, job: FractalJob) -> Self {
        Self {
            name: name.into(),
            job,
        }
    }
}

/// Contents of a job file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    /// Jobs in file order.
    #[serde(default)]
    pub jobs: Vec<NamedJob>,
}

impl JobFile {
    /// Parses a job file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FractalError::InvalidConfig`] for malformed TOML or
    /// parameters that fail validation.
    pub fn from_toml_str(text: &str) -> FractalResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a job file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FractalError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`JobFile::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> FractalResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let file = Self::from_toml_str(&text)?;
        tracing::info!("loaded {} job(s) from {}", file.jobs.len(), path.display());
        Ok(file)
    }
}

/// Output of a generator, ready for a renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// Connected path (subdivision curves).
    Polyline(Vec<Point2>),
    /// Independent drawn edges, in drawing order (L-systems).
    Segments(Vec<Segment>),
    /// Unconnected samples (IFS).
    Points(Vec<Point2>),
}

impl Geometry {
    /// Short name of the geometry kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Polyline(_) => "polyline",
            Self::Segments(_) => "segments",
            Self::Points(_) => "points",
        }
    }

    /// Number of points or segments.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Polyline(points) | Self::Points(points) => points.len(),
            Self::Segments(segments) => segments.len(),
        }
    }

    /// Returns `true` if nothing was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding box of everything produced.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Polyline(points) | Self::Points(points) => Bounds::of_points(points.iter().copied()),
            Self::Segments(segments) => Bounds::of_segments(segments.iter().copied()),
        }
    }
}
