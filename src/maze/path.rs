//! The walkable path: an ordered sequence of corridor rectangles.
//!
//! A generated path alternates (stopping cell, connector) pairs in
//! generation order, with the start cell appended last, so a generated
//! path always has odd length. The degenerate path is just `[start]`.
//!
//! Collision detection is a containment query over the whole sequence: a
//! position is walkable iff *some* rectangle contains it (inclusive bounds,
//! corners normalized). An empty path therefore contains nothing — every
//! position outside all known corridors counts as a wall, even when that
//! makes unreached connectors look solid.

use serde::{Deserialize, Serialize};

use crate::core::geometry::{Cell, Point};

/// Ordered sequence of walkable rectangles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from an existing cell sequence.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Append a cell.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Number of rectangles in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path holds no rectangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The full rectangle sequence, in generation order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the rectangles.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The start cell, appended last during generation.
    #[must_use]
    pub fn start_cell(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Iterate over stopping cells (the cells the player can rest in,
    /// excluding connectors): even indices of the generation sequence.
    pub fn stopping_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().step_by(2).copied()
    }

    /// Check whether a position lies inside any path rectangle.
    ///
    /// This is the walkability test: `false` means a collision.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.cells.iter().any(|cell| cell.contains(point))
    }

    /// Check that every rectangle is reachable from the start cell through
    /// touching rectangles.
    ///
    /// An empty path is trivially connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.cells.is_empty() {
            return true;
        }

        let mut reached = vec![false; self.cells.len()];
        let mut frontier = vec![self.cells.len() - 1];
        reached[self.cells.len() - 1] = true;

        while let Some(index) = frontier.pop() {
            let current = self.cells[index];
            for (other_index, other) in self.cells.iter().enumerate() {
                if !reached[other_index] && current.touches(*other) {
                    reached[other_index] = true;
                    frontier.push(other_index);
                }
            }
        }

        reached.into_iter().all(|r| r)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
