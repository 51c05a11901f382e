//! # FRACTUM
//!
//! Self-similar curve generation, integrating all crates.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     FRACTUM_PROCEDURAL                       │
//! │                                                              │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐      │
//! │  │ Subdivision  │   │  L-systems   │   │     IFS      │      │
//! │  │  Koch        │   │  grammar     │   │  chaos game  │      │
//! │  │  Minkowski   │   │  turtle      │   │  ChaCha8     │      │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘      │
//! │         │ polyline         │ segments         │ points       │
//! │         └──────────────────┼──────────────────┘              │
//! │                            ▼                                 │
//! │                 Geometry (FRACTUM_SHARED)                    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `shared`: points, segments, bounds, affine maps
//! - `procedural`: the generators, presets, job files and batch runner

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub use fractum_procedural as procedural;
pub use fractum_shared as shared;

pub use fractum_procedural::{
    presets, run_batch, ChaosGame, CurveFamily, FractalError, FractalJob, FractalResult,
    FractalSeed, Geometry, JobFile, LSystem, NamedJob, SubdivisionCurve, Turtle, TurtleConfig,
};
