//! An in-memory renderer that records every drawing call.
//!
//! Used by the test suites to assert on render interactions, and usable by
//! headless hosts that want to replay draw streams elsewhere.

use serde::{Deserialize, Serialize};

use super::Renderer;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOp {
    FillBackground,
    FillRectangle { x: i32, y: i32, width: i32, height: i32 },
    DrawRectangle { x1: i32, y1: i32, x2: i32, y2: i32 },
    FillCircle { x: i32, y: i32, diameter: i32 },
    DrawCircle { x: i32, y: i32, diameter: i32 },
    DrawLine { x1: i32, y1: i32, x2: i32, y2: i32 },
    ChangeColor(String),
    ChangeBackgroundColor(String),
    BeginPath,
    MoveTo { x: i32, y: i32 },
    LineTo { x: i32, y: i32 },
    Stroke,
    ClosePath,
}

/// Renderer that appends every call to an op log.
///
/// Colors default to a white surface with black ink until the session
/// pushes its configured colors.
#[derive(Clone, Debug)]
pub struct RecordingRenderer {
    draw_color: String,
    background_color: String,
    ops: Vec<DrawOp>,
}

impl RecordingRenderer {
    /// Create a new recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draw_color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
            ops: Vec::new(),
        }
    }

    /// All recorded ops, in call order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop all recorded ops, keeping color state.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// The circles filled so far, in call order. Convenience for asserting
    /// on player marker positions.
    pub fn filled_circles(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillCircle { x, y, diameter } => Some((*x, *y, *diameter)),
            _ => None,
        })
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for RecordingRenderer {
    fn fill_background(&mut self) {
        self.ops.push(DrawOp::FillBackground);
    }

    fn fill_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ops.push(DrawOp::FillRectangle {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.ops.push(DrawOp::DrawRectangle { x1, y1, x2, y2 });
    }

    fn fill_circle(&mut self, x: i32, y: i32, diameter: i32) {
        self.ops.push(DrawOp::FillCircle { x, y, diameter });
    }

    fn draw_circle(&mut self, x: i32, y: i32, diameter: i32) {
        self.ops.push(DrawOp::DrawCircle { x, y, diameter });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.ops.push(DrawOp::DrawLine { x1, y1, x2, y2 });
    }

    fn change_color(&mut self, color: &str) {
        self.draw_color = color.to_string();
        self.ops.push(DrawOp::ChangeColor(color.to_string()));
    }

    fn change_background_color(&mut self, color: &str) {
        self.background_color = color.to_string();
        self.ops.push(DrawOp::ChangeBackgroundColor(color.to_string()));
    }

    fn draw_color(&self) -> &str {
        &self.draw_color
    }

    fn background_color(&self) -> &str {
        &self.background_color
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_call_order() {
        let mut renderer = RecordingRenderer::new();

        renderer.fill_background();
        renderer.fill_rectangle(20, 980, 20, 20);
        renderer.draw_rectangle(20, 980, 40, 1000);
        renderer.draw_line(0, 0, 0, 1000);

        assert_eq!(
            renderer.ops(),
            &[
                DrawOp::FillBackground,
                DrawOp::FillRectangle {
                    x: 20,
                    y: 980,
                    width: 20,
                    height: 20
                },
                DrawOp::DrawRectangle {
                    x1: 20,
                    y1: 980,
                    x2: 40,
                    y2: 1000
                },
                DrawOp::DrawLine {
                    x1: 0,
                    y1: 0,
                    x2: 0,
                    y2: 1000
                },
            ]
        );
    }

    #[test]
    fn test_color_state() {
        let mut renderer = RecordingRenderer::new();
        assert_eq!(renderer.draw_color(), "#000000");
        assert_eq!(renderer.background_color(), "#ffffff");

        renderer.change_color("tomato");
        renderer.change_background_color("#222222");

        assert_eq!(renderer.draw_color(), "tomato");
        assert_eq!(renderer.background_color(), "#222222");
    }

    #[test]
    fn test_filled_circles() {
        let mut renderer = RecordingRenderer::new();
        renderer.fill_circle(30, 990, 10);
        renderer.draw_circle(1, 2, 3);
        renderer.fill_circle(50, 990, 10);

        let circles: Vec<_> = renderer.filled_circles().collect();
        assert_eq!(circles, vec![(30, 990, 10), (50, 990, 10)]);
    }

    #[test]
    fn test_path_primitives() {
        let mut renderer = RecordingRenderer::new();

        renderer.begin_path();
        renderer.move_to(0, 0);
        renderer.line_to(20, 0);
        renderer.line_to(20, 20);
        renderer.stroke();
        renderer.close_path();

        assert_eq!(
            renderer.ops(),
            &[
                DrawOp::BeginPath,
                DrawOp::MoveTo { x: 0, y: 0 },
                DrawOp::LineTo { x: 20, y: 0 },
                DrawOp::LineTo { x: 20, y: 20 },
                DrawOp::Stroke,
                DrawOp::ClosePath,
            ]
        );
    }

    #[test]
    fn test_clear_keeps_colors() {
        let mut renderer = RecordingRenderer::new();
        renderer.change_color("gold");
        renderer.clear();

        assert!(renderer.ops().is_empty());
        assert_eq!(renderer.draw_color(), "gold");
    }
}
