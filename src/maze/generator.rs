//! Randomized maze generation over a bounded grid.
//!
//! Classic randomized depth-first backtracking, implemented as an explicit
//! stack loop rather than recursion: no call-stack depth limit and no
//! shared mutable arrays threaded through calls. Stepping cells sit
//! `2 x cell_size` apart so the connector corridor between two stopping
//! cells has room to render; every accepted step pushes the chosen cell
//! *and* the connector spanning the gap onto the path.
//!
//! Because a cell is never revisited, the returned path is connected and
//! acyclic in the spanning-tree sense. Determinism comes entirely from the
//! random source: the same seed and bounds reproduce the same maze.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::path::Path;
use crate::core::config::Bounds;
use crate::core::geometry::{Cell, CellKey, Direction};
use crate::core::rng::GameRng;

/// Generate a maze path for the given bounds and cell size.
///
/// The walk starts one `cell_size` in from the bottom-left corner. The
/// start cell itself is appended to the path last, so the result is never
/// empty: a grid too small for any valid step yields just `[start]`.
///
/// ## Panics
///
/// Panics if `cell_size` is not positive.
pub fn generate(bounds: Bounds, cell_size: i32, rng: &mut GameRng) -> Path {
    assert!(cell_size > 0, "Cell size must be positive");

    let start = start_cell(bounds, cell_size);
    let mut path = Path::new();
    let mut visited: FxHashSet<CellKey> = FxHashSet::default();
    let mut stack: Vec<Cell> = Vec::new();

    visited.insert(start.key());
    stack.push(start);

    while let Some(&current) = stack.last() {
        let candidates = open_neighbors(current, bounds, cell_size, &visited);

        match rng.choose(&candidates) {
            Some(&next) => {
                path.push(next);
                path.push(connector(current, next));
                visited.insert(next.key());
                stack.push(next);
            }
            // Dead end: walk back to the most recent cell that may still
            // have unexplored neighbors.
            None => {
                stack.pop();
            }
        }
    }

    path.push(start);
    path
}

/// The fixed start cell: one `cell_size` in from the bottom-left corner.
#[must_use]
pub fn start_cell(bounds: Bounds, cell_size: i32) -> Cell {
    Cell::square(cell_size, bounds.height - cell_size, cell_size)
}

/// Unvisited, in-bounds neighbors of `current`, offset by `2 x cell_size`,
/// scanned in [`Direction::ALL`] order.
fn open_neighbors(
    current: Cell,
    bounds: Bounds,
    cell_size: i32,
    visited: &FxHashSet<CellKey>,
) -> SmallVec<[Cell; 4]> {
    let stride = cell_size * 2;
    let mut candidates = SmallVec::new();

    for direction in Direction::ALL {
        let (dx, dy) = direction.step(stride);
        let neighbor = current.translated(dx, dy);
        if in_bounds(neighbor, bounds) && !visited.contains(&neighbor.key()) {
            candidates.push(neighbor);
        }
    }

    candidates
}

/// A cell is in bounds only if every corner coordinate is strictly inside
/// the grid: any coordinate `<= 0` or `>=` its bound disqualifies the cell.
fn in_bounds(cell: Cell, bounds: Bounds) -> bool {
    let x_ok = |x: i32| x > 0 && x < bounds.width;
    let y_ok = |y: i32| y > 0 && y < bounds.height;
    x_ok(cell.x1) && x_ok(cell.x2) && y_ok(cell.y1) && y_ok(cell.y2)
}

/// The connector cell spanning the gap between two stopping cells.
///
/// Built corner-to-corner: from the corner of `current` nearest `next` to
/// the corner of `next` nearest `current`. Corners may come out in
/// descending order; containment queries normalize.
fn connector(current: Cell, next: Cell) -> Cell {
    if next.x1 < current.x1 || next.y1 < current.y1 {
        Cell::new(current.x1, current.y1, next.x2, next.y2)
    } else {
        Cell::new(current.x2, current.y2, next.x1, next.y1)
    }
}
