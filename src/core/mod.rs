//! Core engine types: geometry, RNG, configuration, commands, state.
//!
//! These are the building blocks shared by maze generation, rendering, and
//! the game session. Hosts configure behavior through [`GameConfig`]
//! rather than by modifying the core.

pub mod command;
pub mod config;
pub mod geometry;
pub mod rng;
pub mod state;

pub use command::{Command, CommandRecord, ParseError};
pub use config::{Bounds, GameConfig};
pub use geometry::{Cell, CellKey, Direction, Point};
pub use rng::{GameRng, GameRngState};
pub use state::{GamePhase, GameState};
