//! Rendering capability consumed by the game session.
//!
//! The engine never touches a real drawing surface. It paints through the
//! [`Renderer`] trait, an imperative canvas-style surface with a stateful
//! current color; hosts adapt it to whatever backend they have (a DOM
//! canvas, a terminal, a test recorder). [`RecordingRenderer`] is the
//! in-memory implementation the test suites drive.

pub mod board;
pub mod recording;

pub use board::{draw_board, draw_player};
pub use recording::{DrawOp, RecordingRenderer};

/// An imperative drawing surface.
///
/// All calls operate against an implicit current surface and current
/// fill/stroke color; color changes are stateful and persist until changed
/// again. Rectangle fills take a corner plus width/height, where width and
/// height may be negative (the rectangle extends backwards).
pub trait Renderer {
    /// Fill the whole surface with the background color, then restore the
    /// current draw color.
    fn fill_background(&mut self);

    /// Fill a rectangle from `(x, y)` extending by `(width, height)`.
    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Stroke a rectangle outline between two corners.
    fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Fill a circle of the given diameter centered at `(x, y)`.
    fn fill_circle(&mut self, x: i32, y: i32, diameter: i32);

    /// Stroke a circle outline of the given diameter centered at `(x, y)`.
    fn draw_circle(&mut self, x: i32, y: i32, diameter: i32);

    /// Stroke a line segment.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Set the current draw (fill + stroke) color.
    fn change_color(&mut self, color: &str);

    /// Set the background color used by `fill_background`.
    fn change_background_color(&mut self, color: &str);

    /// The current draw color. Needed to save/restore around temporary
    /// color changes (e.g. the player marker).
    fn draw_color(&self) -> &str;

    /// The current background color.
    fn background_color(&self) -> &str;

    // === Low-level path primitives ===

    fn begin_path(&mut self);
    fn move_to(&mut self, x: i32, y: i32);
    fn line_to(&mut self, x: i32, y: i32);
    fn stroke(&mut self);
    fn close_path(&mut self);
}
