//! # corridors
//!
//! A canvas-style maze sandbox engine: procedural maze generation and
//! collision-aware player movement over an abstract drawing surface.
//!
//! ## Design Principles
//!
//! 1. **Renderer-Agnostic**: The engine draws through the [`Renderer`]
//!    trait. Hosts adapt it to a DOM canvas, a terminal, or the bundled
//!    in-memory recorder.
//!
//! 2. **Single Owner**: All mutable game state lives in one
//!    [`GameSession`]; there is no ambient state and no locking.
//!
//! 3. **Deterministic**: Maze generation is a pure function of the board
//!    bounds, the cell size, and a seeded RNG. The same seed reproduces
//!    the same maze and the same move outcomes.
//!
//! ## Architecture
//!
//! - **Walkable-path mazes**: Generation produces corridors (walkable
//!   rectangles), not walls. Collision detection inverts containment: a
//!   position outside every known corridor is a wall.
//!
//! - **Cooperative animation**: Animated moves are driven step by step via
//!   `GameSession::tick`, with the host scheduling the inter-step delay. A
//!   new move request supersedes an in-flight one.
//!
//! - **Recoverable errors**: Collisions and rejected commands append to an
//!   ordered error log; nothing crashes the session.
//!
//! ## Modules
//!
//! - `core`: Geometry, RNG, configuration, commands, state
//! - `maze`: Randomized-backtracker generation and the walkable path
//! - `render`: The renderer capability, board painting, an op recorder
//! - `game`: The session state machine and movement stepper

pub mod core;
pub mod game;
pub mod maze;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Bounds, Cell, CellKey, Command, CommandRecord, Direction, GameConfig, GamePhase, GameRng,
    GameRngState, GameState, ParseError, Point,
};

pub use crate::maze::{generate, Path};

pub use crate::render::{draw_board, draw_player, DrawOp, RecordingRenderer, Renderer};

pub use crate::game::{ActiveMove, GameSession, StepOutcome};
