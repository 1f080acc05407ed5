//! Game state: phase, player position, maze path, error log, history.
//!
//! All mutable session state lives in one explicit [`GameState`] with a
//! single owner (the session), rather than ambient globals. The only
//! mutator is the session driving it on one thread, so no locking is
//! needed.
//!
//! ## Phases
//!
//! `Uninitialized -> Ready <-> Moving`. Before the first init the maze is
//! empty and the player position is only a placeholder (the configured
//! start); init generates a maze and enters `Ready`; an in-flight animated
//! move holds the state in `Moving`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::command::{Command, CommandRecord};
use super::config::GameConfig;
use super::geometry::Point;
use super::rng::GameRng;
use crate::maze::Path;

/// Lifecycle phase of a game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No maze generated yet; every move collides.
    #[default]
    Uninitialized,
    /// Maze generated, player idle.
    Ready,
    /// An animated move is in flight.
    Moving,
}

/// Complete mutable game state.
///
/// Uses `im` persistent vectors for the append-only error log and command
/// history, so snapshots of either are O(1) clones.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current lifecycle phase.
    pub phase: GamePhase,

    /// Player position. Meaningful once the phase leaves `Uninitialized`.
    pub player_pos: Point,

    /// The generated walkable path. Read-only once generated; replaced
    /// wholesale by the next init.
    pub path: Path,

    /// Deterministic RNG driving maze generation.
    pub rng: GameRng,

    /// Append-only error log.
    errors: Vector<String>,

    /// Applied commands, for replay and debugging.
    command_history: Vector<CommandRecord>,

    /// Next command sequence number.
    command_sequence: u32,
}

impl GameState {
    /// Create a fresh, uninitialized state.
    #[must_use]
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            phase: GamePhase::Uninitialized,
            player_pos: config.start_pos(),
            path: Path::new(),
            rng: GameRng::new(seed),
            errors: Vector::new(),
            command_history: Vector::new(),
            command_sequence: 0,
        }
    }

    // === Error log ===

    /// The ordered error log.
    #[must_use]
    pub fn errors(&self) -> &Vector<String> {
        &self.errors
    }

    /// Append a message to the error log.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    /// Clear the error log.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    // === Command history ===

    /// The ordered history of applied commands.
    #[must_use]
    pub fn command_history(&self) -> &Vector<CommandRecord> {
        &self.command_history
    }

    /// Record a command, assigning it the next sequence number.
    pub fn record_command(&mut self, command: Command) {
        let record = CommandRecord::new(command, self.command_sequence);
        self.command_sequence += 1;
        self.command_history.push_back(record);
    }

    // === Transitions ===

    /// Install a freshly generated path and enter `Ready`, resetting the
    /// player to the start position. Replaces any prior maze.
    pub fn install_path(&mut self, config: &GameConfig, path: Path) {
        self.path = path;
        self.player_pos = config.start_pos();
        self.phase = GamePhase::Ready;
    }

    /// Full reset back to `Uninitialized`: empty maze, player at start,
    /// error log and history cleared. The RNG stream continues, so the
    /// next init produces a different maze than the first did.
    pub fn reset(&mut self, config: &GameConfig) {
        self.phase = GamePhase::Uninitialized;
        self.player_pos = config.start_pos();
        self.path = Path::new();
        self.errors.clear();
        self.command_history.clear();
        self.command_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Cell;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(&config(), 42);

        assert_eq!(state.phase, GamePhase::Uninitialized);
        assert_eq!(state.player_pos, Point::new(30, 990));
        assert!(state.path.is_empty());
        assert!(state.errors().is_empty());
        assert!(state.command_history().is_empty());
    }

    #[test]
    fn test_error_log_append_only() {
        let mut state = GameState::new(&config(), 42);

        state.log_error("Collision detected at: (50, 990)");
        state.log_error("Invalid command: nope");

        assert_eq!(state.errors().len(), 2);
        assert_eq!(state.errors()[0], "Collision detected at: (50, 990)");

        state.clear_errors();
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_command_history_sequencing() {
        let mut state = GameState::new(&config(), 42);

        state.record_command(Command::InitGame);
        state.record_command(Command::MoveRight(3));

        let history = state.command_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], CommandRecord::new(Command::InitGame, 0));
        assert_eq!(history[1], CommandRecord::new(Command::MoveRight(3), 1));
    }

    #[test]
    fn test_install_path() {
        let cfg = config();
        let mut state = GameState::new(&cfg, 42);
        state.player_pos = Point::new(0, 0);

        let path = Path::from_cells(vec![Cell::new(20, 980, 40, 1000)]);
        state.install_path(&cfg, path.clone());

        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.player_pos, cfg.start_pos());
        assert_eq!(state.path, path);
    }

    #[test]
    fn test_reset() {
        let cfg = config();
        let mut state = GameState::new(&cfg, 42);

        state.install_path(&cfg, Path::from_cells(vec![Cell::new(20, 980, 40, 1000)]));
        state.log_error("Collision detected at: (50, 990)");
        state.record_command(Command::InitGame);
        state.player_pos = Point::new(70, 990);

        state.reset(&cfg);

        assert_eq!(state.phase, GamePhase::Uninitialized);
        assert_eq!(state.player_pos, cfg.start_pos());
        assert!(state.path.is_empty());
        assert!(state.errors().is_empty());
        assert!(state.command_history().is_empty());
    }
}
