//! # L-Systems
//!
//! Two stages, run back to back:
//!
//! 1. **Grammar**: rewrite the axiom for a fixed number of generations.
//! 2. **Turtle**: walk the resulting string and record drawn segments.
//!
//! ```rust
//! use fractum_procedural::lsystem::{LSystem, RuleSet, TurtleConfig};
//!
//! let tree = LSystem {
//!     axiom: "0".into(),
//!     rules: RuleSet::new().with_rule('1', "11").with_rule('0', "1[0]0"),
//!     iterations: 1,
//!     turtle: TurtleConfig::new(45.0, 10.0),
//! };
//! assert_eq!(tree.instructions(), "1[0]0");
//! assert_eq!(tree.generate().unwrap().len(), 3);
//! ```

pub mod grammar;
pub mod turtle;

use fractum_shared::Segment;
use serde::{Deserialize, Serialize};

use crate::error::FractalResult;

pub use grammar::{expand, RuleSet};
pub use turtle::{Turtle, TurtleConfig, TurtleState};

/// A complete L-system: grammar plus drawing parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LSystem {
    /// Generation 0.
    pub axiom: String,
    /// Production rules.
    #[serde(default)]
    pub rules: RuleSet,
    /// Number of rewriting generations.
    pub iterations: u32,
    /// How the expanded string is drawn.
    #[serde(flatten)]
    pub turtle: TurtleConfig,
}

impl LSystem {
    /// The expanded instruction string.
    #[must_use]
    pub fn instructions(&self) -> String {
        self.rules.expand(&self.axiom, self.iterations)
    }

    /// Expands the grammar and interprets the result.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FractalError::UnbalancedBranch`] if the expanded
    /// string closes a branch it never opened.
    pub fn generate(&self) -> FractalResult<Vec<Segment>> {
        let instructions = self.instructions();
        Turtle::new(self.turtle).interpret(&instructions)
    }
}
