//! # Fractum Shared
//!
//! Geometry value types used by every generator and by any renderer that
//! consumes their output.
//!
//! ## Rule
//!
//! This crate must NEVER depend on a windowing, plotting or GPU crate.
//! Generators hand plain data across this boundary, nothing else.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod affine;
pub mod math;

pub use affine::AffineTransform;
pub use math::{Bounds, Point2, Segment};
