//! The game session: the single owner of all mutable game state.
//!
//! `GameSession` composes the maze generator, the collision rules, and a
//! [`Renderer`] into the surface a host UI drives: init, move requests,
//! the cooperative tick loop, and the error log.
//!
//! ## Collision rule
//!
//! A candidate position collides iff it lies inside *no* stored path
//! rectangle. Connector rectangles never added to the path (had generation
//! terminated early) would count as walls; an uninitialized session has an
//! empty path and rejects every move. Changing this rule changes maze
//! solvability, so it is preserved exactly.

use std::time::Duration;

use im::Vector;

use crate::core::command::{Command, CommandRecord};
use crate::core::config::GameConfig;
use crate::core::geometry::{Direction, Point};
use crate::core::state::{GamePhase, GameState};
use crate::maze;
use crate::maze::Path;
use crate::render::{board, Renderer};

use super::movement::{ActiveMove, StepOutcome};

/// A single game session over a rendering surface.
///
/// ```
/// use corridors::core::{Direction, GameConfig, GamePhase};
/// use corridors::game::GameSession;
/// use corridors::render::RecordingRenderer;
///
/// let mut session = GameSession::new(GameConfig::default(), RecordingRenderer::new(), 42);
/// session.init_game();
/// assert_eq!(session.phase(), GamePhase::Ready);
///
/// session.request_move(Direction::Up, 2);
/// session.run_pending();
/// ```
pub struct GameSession<R: Renderer> {
    config: GameConfig,
    state: GameState,
    renderer: R,
    active_move: Option<ActiveMove>,
}

impl<R: Renderer> GameSession<R> {
    /// Create a new session. The maze is not generated until
    /// [`init_game`](Self::init_game); until then every move collides.
    pub fn new(config: GameConfig, renderer: R, seed: u64) -> Self {
        let state = GameState::new(&config, seed);
        let mut session = Self {
            config,
            state,
            renderer,
            active_move: None,
        };
        session
            .renderer
            .change_background_color(&session.config.background_color);
        session.renderer.change_color(&session.config.draw_color);
        session
    }

    // === Command surface ===

    /// Apply a validated command.
    ///
    /// Every applied command is recorded in the command history.
    pub fn apply(&mut self, command: Command) {
        self.state.record_command(command);
        match command {
            Command::InitGame => self.init_game_inner(),
            Command::MoveLeft(d) => self.request_move_inner(Direction::Left, d),
            Command::MoveRight(d) => self.request_move_inner(Direction::Right, d),
            Command::MoveUp(d) => self.request_move_inner(Direction::Up, d),
            Command::MoveDown(d) => self.request_move_inner(Direction::Down, d),
            Command::ClearErrors => self.state.clear_errors(),
        }
    }

    /// Generate a fresh maze, reset the player to start, and render the
    /// full board. Replaces any prior maze and cancels any in-flight move.
    pub fn init_game(&mut self) {
        self.apply(Command::InitGame);
    }

    /// Request an animated move. Supersedes any in-flight move.
    pub fn request_move(&mut self, direction: Direction, distance: u32) {
        let command = match direction {
            Direction::Left => Command::MoveLeft(distance),
            Direction::Right => Command::MoveRight(distance),
            Direction::Up => Command::MoveUp(distance),
            Direction::Down => Command::MoveDown(distance),
        };
        self.apply(command);
    }

    /// Move the player left by `distance` steps.
    pub fn move_left(&mut self, distance: u32) {
        self.apply(Command::MoveLeft(distance));
    }

    /// Move the player right by `distance` steps.
    pub fn move_right(&mut self, distance: u32) {
        self.apply(Command::MoveRight(distance));
    }

    /// Move the player up by `distance` steps.
    pub fn move_up(&mut self, distance: u32) {
        self.apply(Command::MoveUp(distance));
    }

    /// Move the player down by `distance` steps.
    pub fn move_down(&mut self, distance: u32) {
        self.apply(Command::MoveDown(distance));
    }

    /// Clear the error log.
    pub fn clear_errors(&mut self) {
        self.apply(Command::ClearErrors);
    }

    /// Append a host-side message to the error log, e.g. a rejected
    /// command string. Rejected commands are logged, never fatal.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.state.log_error(message);
    }

    // === The cooperative stepper ===

    /// Drive the in-flight move one step.
    ///
    /// The candidate position one step ahead is collision-checked before
    /// anything is committed. On success the position is committed and the
    /// board re-rendered; on collision the player stays put, one error is
    /// logged, and the remainder of the move is aborted.
    ///
    /// Hosts animating moves call this once per `step_delay`, as long as
    /// the outcome [`has_more_steps`](StepOutcome::has_more_steps).
    pub fn tick(&mut self) -> StepOutcome {
        let Some(mut active) = self.active_move else {
            return StepOutcome::Idle;
        };

        let (dx, dy) = active.direction.step(self.config.step_size());
        let candidate = self.state.player_pos.offset(dx, dy);

        if !self.state.path.contains_point(candidate) {
            self.state
                .log_error(format!("Collision detected at: {candidate}"));
            self.active_move = None;
            self.sync_phase();
            return StepOutcome::Collided;
        }

        self.state.player_pos = candidate;
        self.redraw();

        if active.take_step() {
            self.active_move = Some(active);
            StepOutcome::Moved
        } else {
            self.active_move = None;
            self.sync_phase();
            StepOutcome::Finished
        }
    }

    /// Drain the in-flight move synchronously, with no inter-step delay.
    ///
    /// Returns the terminal outcome (`Idle` if nothing was in flight).
    pub fn run_pending(&mut self) -> StepOutcome {
        loop {
            let outcome = self.tick();
            if !outcome.has_more_steps() {
                return outcome;
            }
        }
    }

    /// Delay a host should leave between animated steps.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        self.config.step_delay()
    }

    // === State views ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Current player position.
    #[must_use]
    pub fn player_pos(&self) -> Point {
        self.state.player_pos
    }

    /// The generated walkable path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.state.path
    }

    /// The ordered error log.
    #[must_use]
    pub fn errors(&self) -> &Vector<String> {
        self.state.errors()
    }

    /// The ordered history of applied commands.
    #[must_use]
    pub fn command_history(&self) -> &Vector<CommandRecord> {
        self.state.command_history()
    }

    /// The in-flight move, if any.
    #[must_use]
    pub fn active_move(&self) -> Option<ActiveMove> {
        self.active_move
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The rendering surface.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the rendering surface.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Full reset back to `Uninitialized`: empty maze, player at start,
    /// error log and command history cleared, in-flight move dropped.
    pub fn reset(&mut self) {
        self.active_move = None;
        self.state.reset(&self.config);
    }

    // === Internals ===

    fn init_game_inner(&mut self) {
        let path = maze::generate(
            self.config.bounds,
            self.config.cell_size(),
            &mut self.state.rng,
        );
        self.active_move = None;
        self.state.install_path(&self.config, path);
        self.redraw();
    }

    fn request_move_inner(&mut self, direction: Direction, distance: u32) {
        self.active_move = if distance > 0 {
            Some(ActiveMove::new(direction, distance))
        } else {
            None
        };
        self.sync_phase();
    }

    /// Keep the phase in step with the presence of an in-flight move.
    /// `Uninitialized` is only left through init.
    fn sync_phase(&mut self) {
        if self.state.phase != GamePhase::Uninitialized {
            self.state.phase = if self.active_move.is_some() {
                GamePhase::Moving
            } else {
                GamePhase::Ready
            };
        }
    }

    fn redraw(&mut self) {
        board::draw_board(&mut self.renderer, &self.config, &self.state.path);
        board::draw_player(&mut self.renderer, &self.config, self.state.player_pos);
    }
}
