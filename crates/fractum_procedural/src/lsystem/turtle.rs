//! Turtle interpretation of an expanded instruction string.
//!
//! ## Instruction Set
//!
//! | symbol        | effect                                               |
//! |---------------|------------------------------------------------------|
//! | `F` `0` `1`   | step forward, emit a segment                         |
//! | `f`           | step forward, no segment                             |
//! | `+` / `-`     | turn left / right by the turn angle                  |
//! | `[`           | save position and heading (branch mode: then turn +) |
//! | `]`           | restore position and heading (branch mode: then turn -) |
//! | anything else | ignored                                              |
//!
//! ## Branch Mode
//!
//! Branch mode is on when the caller asks for it **or** when the
//! instructions contain `[` or `]`. Bracketed strings describe trees, and
//! trees fork by turning at every save/restore; switching this off would
//! change the geometry, not just how it is drawn.

use fractum_shared::{Point2, Segment};
use serde::{Deserialize, Serialize};

use crate::error::{FractalError, FractalResult};

/// Parameters of one turtle run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    /// Degrees added by `+` (and subtracted by `-`).
    pub turn_angle: f64,
    /// Distance covered by one forward step.
    pub step: f64,
    /// Starting position.
    pub start: Point2,
    /// Starting heading in degrees; 0 points along +X, 90 along +Y.
    pub heading: f64,
    /// Forces branch mode even for strings without brackets.
    pub branch_mode: bool,
}

impl TurtleConfig {
    /// Creates a config starting at the origin, heading along +X.
    #[must_use]
    pub const fn new(turn_angle: f64, step: f64) -> Self {
        Self {
            turn_angle,
            step,
            start: Point2::ORIGIN,
            heading: 0.0,
            branch_mode: false,
        }
    }

    /// Sets the starting position and heading.
    #[must_use]
    pub const fn starting_at(mut self, start: Point2, heading: f64) -> Self {
        self.start = start;
        self.heading = heading;
        self
    }

    /// Forces branch mode on.
    #[must_use]
    pub const fn with_branch_mode(mut self, branch_mode: bool) -> Self {
        self.branch_mode = branch_mode;
        self
    }

    /// Whether a run over `instructions` turns at `[` and `]`.
    #[must_use]
    pub fn effective_branch_mode(&self, instructions: &str) -> bool {
        self.branch_mode || instructions.contains(|c: char| c == '[' || c == ']')
    }
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self::new(90.0, 1.0)
    }
}

/// Position and heading of the turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleState {
    /// Current position.
    pub position: Point2,
    /// Current heading in degrees.
    pub heading: f64,
}

/// Symbols that step forward and leave a segment behind.
#[inline]
fn is_draw_symbol(symbol: char) -> bool {
    matches!(symbol, 'F' | '0' | '1')
}

/// Interpreter for one instruction string at a time.
///
/// The save/restore stack lives only for the duration of
/// [`Turtle::interpret`]; nothing carries over between runs.
#[derive(Clone, Copy, Debug)]
pub struct Turtle {
    config: TurtleConfig,
}

impl Turtle {
    /// Creates an interpreter with the given parameters.
    #[must_use]
    pub const fn new(config: TurtleConfig) -> Self {
        Self { config }
    }

    /// Walks `instructions` and returns every drawn segment in order.
    ///
    /// # Errors
    ///
    /// Returns [`FractalError::UnbalancedBranch`] if a `]` is read while the
    /// state stack is empty. No partial output is returned.
    pub fn interpret(&self, instructions: &str) -> FractalResult<Vec<Segment>> {
        let TurtleConfig {
            turn_angle, step, ..
        } = self.config;
        let branch_mode = self.config.effective_branch_mode(instructions);

        let mut state = TurtleState {
            position: self.config.start,
            heading: self.config.heading,
        };
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut segments = Vec::with_capacity(instructions.matches(is_draw_symbol).count());

        for (offset, symbol) in instructions.char_indices() {
            match symbol {
                'F' | '0' | '1' => {
                    let next = state.position + Point2::from_polar(state.heading, step);
                    segments.push(Segment::new(state.position, next));
                    state.position = next;
                }
                'f' => {
                    state.position = state.position + Point2::from_polar(state.heading, step);
                }
                '+' => state.heading += turn_angle,
                '-' => state.heading -= turn_angle,
                '[' => {
                    stack.push(state);
                    if branch_mode {
                        state.heading += turn_angle;
                    }
                }
                ']' => {
                    state = stack.pop().ok_or(FractalError::UnbalancedBranch { offset })?;
                    if branch_mode {
                        state.heading -= turn_angle;
                    }
                }
                _ => {}
            }
        }

        if !stack.is_empty() {
            tracing::warn!("turtle finished with {} unclosed branch(es)", stack.len());
        }
        tracing::debug!(
            "turtle: {} symbols -> {} segments (branch mode: {})",
            instructions.len(),
            segments.len(),
            branch_mode
        );

        Ok(segments)
    }
}
