//! # Generation Error Types
//!
//! All errors that can occur while generating fractal geometry.
//!
//! Configuration errors are detected before any geometry is produced.
//! Structural errors abort a run midway; the partial output is dropped.

use thiserror::Error;

/// Errors that can occur in the generators.
#[derive(Error, Debug)]
pub enum FractalError {
    /// A subdivision curve needs at least one segment to subdivide.
    #[error("polyline needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// An IFS needs at least one transform to choose from.
    #[error("transform set is empty")]
    EmptyTransformSet,

    /// A transform weight was negative, NaN or infinite.
    #[error("invalid weight {weight} for transform {index}")]
    InvalidWeight {
        /// Position of the transform in the set.
        index: usize,
        /// The rejected weight.
        weight: f64,
    },

    /// The weights of a transform set do not form a probability distribution.
    #[error("transform weights sum to {sum}, expected 1")]
    WeightSum {
        /// The actual sum of all weights.
        sum: f64,
    },

    /// A count that must be positive was zero.
    #[error("{what} must be positive")]
    ZeroCount {
        /// Which count was zero.
        what: &'static str,
    },

    /// Grammar rules map single symbols; the key had another length.
    #[error("rule key {0:?} is not a single symbol")]
    InvalidRuleKey(String),

    /// A `]` was read with nothing saved on the turtle's state stack.
    #[error("unbalanced branch: ']' at offset {offset} with empty state stack")]
    UnbalancedBranch {
        /// Byte offset of the offending `]` in the instruction string.
        offset: usize,
    },

    /// Invalid job file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Job file could not be read.
    #[error("failed to read job file: {0}")]
    Io(#[from] std::io::Error),
}

impl FractalError {
    /// Returns `true` for errors caused by malformed input parameters.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::UnbalancedBranch { .. } | Self::Io(_))
    }
}

impl From<toml::de::Error> for FractalError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for generator operations.
pub type FractalResult<T> = Result<T, FractalError>;
