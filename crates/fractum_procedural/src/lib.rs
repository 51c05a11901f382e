//! # Fractum Procedural Generation
//!
//! Geometry for self-similar fractal curves, from three generative models.
//!
//! ## Design Principles
//!
//! 1. **Pure**: every generator is a synchronous function of its inputs
//! 2. **Deterministic**: same parameters + same seed = same geometry
//! 3. **Ordered**: output order is drawing order, renderers rely on it
//! 4. **Loud**: bad input is an error, never partial geometry
//!
//! ## Core Components
//!
//! - `SubdivisionCurve`: Koch / Minkowski motif replacement → polyline
//! - `lsystem::RuleSet`: parallel grammar rewriting → instruction string
//! - `lsystem::Turtle`: instruction string → drawn segments
//! - `ChaosGame`: weighted affine maps → attractor point cloud
//! - `JobFile`: TOML job descriptions for all of the above
//! - `run_batch`: independent jobs on parallel threads
//!
//! ## Example
//!
//! ```rust
//! use fractum_procedural::{presets, ChaosGame, FractalSeed};
//!
//! let tree = presets::binary_tree();
//! let segments = tree.generate().unwrap();
//! assert_eq!(segments.len(), tree.instructions().matches(|c: char| c == '0' || c == '1').count());
//!
//! let fern = ChaosGame::new(presets::barnsley_fern_transforms());
//! let points = fern.sample_seeded(10_000, 100, FractalSeed::new(7)).unwrap();
//! assert_eq!(points.len(), 10_000);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod batch;
pub mod config;
pub mod error;
pub mod ifs;
pub mod lsystem;
pub mod presets;
pub mod seed;
pub mod subdivision;

pub use batch::{run_batch, BatchOutcome};
pub use config::{FractalJob, Geometry, IfsJob, JobFile, NamedJob, SubdivisionJob};
pub use error::{FractalError, FractalResult};
pub use ifs::{ChaosGame, WeightedTransformSet};
pub use lsystem::{LSystem, RuleSet, Turtle, TurtleConfig};
pub use seed::FractalSeed;
pub use subdivision::{CurveFamily, SubdivisionCurve};
