//! Procedural maze generation and the walkable path it produces.

pub mod generator;
pub mod path;

pub use generator::{generate, start_cell};
pub use path::Path;
