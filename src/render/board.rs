//! Board painting: full-board redraw and the player marker.

use super::Renderer;
use crate::core::config::GameConfig;
use crate::core::geometry::Point;
use crate::maze::Path;

/// Redraw the full board: background, every path rectangle as a filled
/// rectangle, then the uniform grid overlay.
pub fn draw_board<R: Renderer>(renderer: &mut R, config: &GameConfig, path: &Path) {
    renderer.fill_background();

    for cell in path {
        renderer.fill_rectangle(cell.x1, cell.y1, cell.x2 - cell.x1, cell.y2 - cell.y1);
    }

    draw_grid(renderer, config);
}

/// Draw the player marker: a filled circle of the configured diameter in
/// the player color, restoring the previous draw color afterwards.
pub fn draw_player<R: Renderer>(renderer: &mut R, config: &GameConfig, pos: Point) {
    let previous = renderer.draw_color().to_string();
    renderer.change_color(&config.player_color);
    renderer.fill_circle(pos.x, pos.y, config.player_diameter());
    renderer.change_color(&previous);
}

/// Overlay a uniform grid of lines spaced one cell (`2 x diameter`) apart
/// across the board bounds.
fn draw_grid<R: Renderer>(renderer: &mut R, config: &GameConfig) {
    let grid = config.cell_size();
    let vertical_lines = config.bounds.width / grid;
    let horizontal_lines = config.bounds.height / grid;

    for i in 0..vertical_lines {
        renderer.draw_line(i * grid, 0, i * grid, config.bounds.height);
    }
    for i in 0..horizontal_lines {
        renderer.draw_line(0, i * grid, config.bounds.width, i * grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Cell;
    use crate::render::recording::{DrawOp, RecordingRenderer};

    #[test]
    fn test_draw_board_ops() {
        let config = GameConfig::new(100, 100);
        let path = Path::from_cells(vec![
            Cell::new(20, 80, 40, 100),
            Cell::new(20, 60, 40, 40),
        ]);
        let mut renderer = RecordingRenderer::new();

        draw_board(&mut renderer, &config, &path);

        assert_eq!(renderer.ops()[0], DrawOp::FillBackground);

        let rects = renderer
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRectangle { .. }))
            .count();
        assert_eq!(rects, 2);

        // 100 / 20 = 5 lines each way.
        let lines = renderer
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::DrawLine { .. }))
            .count();
        assert_eq!(lines, 10);
    }

    #[test]
    fn test_rectangle_width_may_be_negative() {
        // Connector cells can have descending corners; the fill call
        // passes the raw extent through.
        let config = GameConfig::new(100, 100);
        let path = Path::from_cells(vec![Cell::new(40, 100, 60, 80)]);
        let mut renderer = RecordingRenderer::new();

        draw_board(&mut renderer, &config, &path);

        assert!(renderer.ops().contains(&DrawOp::FillRectangle {
            x: 40,
            y: 100,
            width: 20,
            height: -20,
        }));
    }

    #[test]
    fn test_draw_player_restores_color() {
        let config = GameConfig::default();
        let mut renderer = RecordingRenderer::new();
        renderer.change_color("#ffffff");
        renderer.clear();

        draw_player(&mut renderer, &config, Point::new(30, 990));

        assert_eq!(
            renderer.ops(),
            &[
                DrawOp::ChangeColor("tomato".to_string()),
                DrawOp::FillCircle {
                    x: 30,
                    y: 990,
                    diameter: 10
                },
                DrawOp::ChangeColor("#ffffff".to_string()),
            ]
        );
        assert_eq!(renderer.draw_color(), "#ffffff");
    }
}
