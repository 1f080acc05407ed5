//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing a [`GameConfig`]:
//! board bounds, colors, player appearance, and the animation step delay.
//! Everything derived from those knobs (cell size, start cell, start
//! position) is computed, never stored, so the config cannot drift out of
//! sync with itself.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::geometry::{Cell, Point};

/// Board bounds in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Create new bounds.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Complete game configuration.
///
/// Defaults mirror the reference sandbox: a 1000x1000 black board with
/// white corridors, a tomato-colored player of diameter 10 starting at the
/// bottom-left, and a 400 ms delay between animated move steps.
///
/// ```
/// use corridors::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_player_diameter(15)
///     .with_player_color("gold");
///
/// assert_eq!(config.cell_size(), 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board bounds.
    pub bounds: Bounds,

    /// Background fill color (CSS-style string).
    pub background_color: String,

    /// Default draw color for corridors and grid lines.
    pub draw_color: String,

    /// Player marker diameter. One grid cell is twice this.
    player_diameter: i32,

    /// Player marker color.
    pub player_color: String,

    /// Delay between steps of an animated move, in milliseconds.
    pub step_delay_ms: u64,

    /// Explicit start position override. `None` derives the center of the
    /// start cell.
    start: Option<Point>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(1000, 1000),
            background_color: "#000000".to_string(),
            draw_color: "#ffffff".to_string(),
            player_diameter: 10,
            player_color: "tomato".to_string(),
            step_delay_ms: 400,
            start: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for the given board bounds, with all other
    /// knobs at their defaults.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            ..Self::default()
        }
    }

    /// Set the player diameter.
    ///
    /// ## Panics
    ///
    /// Panics if `diameter` is not positive.
    #[must_use]
    pub fn with_player_diameter(mut self, diameter: i32) -> Self {
        assert!(diameter > 0, "Player diameter must be positive");
        self.player_diameter = diameter;
        self
    }

    /// Set the player marker color.
    #[must_use]
    pub fn with_player_color(mut self, color: impl Into<String>) -> Self {
        self.player_color = color.into();
        self
    }

    /// Set the background fill color.
    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Set the default draw color.
    #[must_use]
    pub fn with_draw_color(mut self, color: impl Into<String>) -> Self {
        self.draw_color = color.into();
        self
    }

    /// Set the delay between animated move steps.
    #[must_use]
    pub fn with_step_delay_ms(mut self, millis: u64) -> Self {
        self.step_delay_ms = millis;
        self
    }

    /// Override the derived player start position.
    #[must_use]
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = Some(start);
        self
    }

    // === Derived values ===

    /// Player marker diameter.
    #[must_use]
    pub fn player_diameter(&self) -> i32 {
        self.player_diameter
    }

    /// Grid cell size: twice the player diameter.
    ///
    /// A non-positive diameter (reachable only through deserialization of a
    /// hand-edited config) clamps to the minimum grid so derived sizes stay
    /// positive.
    #[must_use]
    pub fn cell_size(&self) -> i32 {
        self.player_diameter.max(1) * 2
    }

    /// Player step size per animated move step. Equal to the cell size.
    #[must_use]
    pub fn step_size(&self) -> i32 {
        self.cell_size()
    }

    /// The maze start cell: one cell in from the bottom-left corner.
    #[must_use]
    pub fn start_cell(&self) -> Cell {
        let cell = self.cell_size();
        Cell::square(cell, self.bounds.height - cell, cell)
    }

    /// Player start position: explicit override, or the center of the
    /// start cell.
    #[must_use]
    pub fn start_pos(&self) -> Point {
        self.start.unwrap_or_else(|| self.start_cell().center())
    }

    /// Delay between animated move steps.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.bounds, Bounds::new(1000, 1000));
        assert_eq!(config.cell_size(), 20);
        assert_eq!(config.step_delay(), Duration::from_millis(400));
    }

    #[test]
    fn test_default_start_cell_and_pos() {
        let config = GameConfig::default();

        assert_eq!(config.start_cell(), Cell::new(20, 980, 40, 1000));
        assert_eq!(config.start_pos(), Point::new(30, 990));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(500, 400)
            .with_player_diameter(20)
            .with_player_color("gold")
            .with_background_color("#222222")
            .with_draw_color("#eeeeee")
            .with_step_delay_ms(100);

        assert_eq!(config.bounds, Bounds::new(500, 400));
        assert_eq!(config.cell_size(), 40);
        assert_eq!(config.player_color, "gold");
        assert_eq!(config.background_color, "#222222");
        assert_eq!(config.draw_color, "#eeeeee");
        assert_eq!(config.step_delay_ms, 100);
        assert_eq!(config.start_cell(), Cell::new(40, 360, 80, 400));
    }

    #[test]
    fn test_start_override() {
        let config = GameConfig::default().with_start(Point::new(70, 990));
        assert_eq!(config.start_pos(), Point::new(70, 990));
    }

    #[test]
    #[should_panic(expected = "Player diameter must be positive")]
    fn test_zero_diameter_panics() {
        let _ = GameConfig::default().with_player_diameter(0);
    }

    #[test]
    fn test_deserialized_bad_diameter_is_clamped() {
        let json = r##"{
            "bounds": {"width": 1000, "height": 1000},
            "background_color": "#000000",
            "draw_color": "#ffffff",
            "player_diameter": 0,
            "player_color": "tomato",
            "step_delay_ms": 400,
            "start": null
        }"##;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.player_diameter(), 0);
        assert_eq!(config.cell_size(), 2);
        assert_eq!(config.step_size(), 2);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(800, 600).with_player_diameter(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
