//! Animated movement bookkeeping.
//!
//! An animated move is not a timer loop: the session holds an
//! [`ActiveMove`] and the host drives it one collision-checked step at a
//! time via `GameSession::tick`, sleeping `GameConfig::step_delay` between
//! steps on its own scheduler. Steps of one move therefore execute
//! strictly in sequence, and a newly requested move supersedes the
//! in-flight one by replacing the `ActiveMove` outright.

use serde::{Deserialize, Serialize};

use crate::core::geometry::Direction;

/// An in-flight animated move: a direction and the steps left to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveMove {
    /// Direction of travel.
    pub direction: Direction,
    /// Steps not yet taken.
    pub remaining: u32,
}

impl ActiveMove {
    /// Create a move with `distance` steps left.
    #[must_use]
    pub const fn new(direction: Direction, distance: u32) -> Self {
        Self {
            direction,
            remaining: distance,
        }
    }

    /// Consume one step. Returns `true` while steps remain afterwards.
    pub fn take_step(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }
}

/// Outcome of driving the move stepper once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// No move in flight.
    Idle,
    /// One step committed; more steps remain.
    Moved,
    /// One step committed and the move finished.
    Finished,
    /// The candidate position collided; the move was aborted and the
    /// collision logged.
    Collided,
}

impl StepOutcome {
    /// Whether the host should schedule another tick for this move.
    #[must_use]
    pub const fn has_more_steps(self) -> bool {
        matches!(self, StepOutcome::Moved)
    }
}
