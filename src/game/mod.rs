//! The game session and its movement state machine.

pub mod movement;
pub mod session;

pub use movement::{ActiveMove, StepOutcome};
pub use session::GameSession;
