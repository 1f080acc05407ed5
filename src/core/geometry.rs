//! Board geometry: points, cells, packed cell keys, directions.
//!
//! Coordinates are `i32` canvas coordinates with the origin at the top-left
//! and y growing downward. A [`Cell`] is a rectangle given by two corner
//! points; corners are *not* guaranteed normalized (connector cells between
//! two maze cells are built corner-to-corner and may have descending
//! coordinates), so every query normalizes first.

use serde::{Deserialize, Serialize};

/// A point on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point offset by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of a grid step or a player move.
///
/// `Up` is negative y (toward the top of the canvas).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order the maze generator scans neighbor
    /// candidates. This order is part of the seeded-determinism contract.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The `(dx, dy)` offset of a step of `distance` in this direction.
    ///
    /// ```
    /// use corridors::core::Direction;
    ///
    /// assert_eq!(Direction::Right.step(20), (20, 0));
    /// assert_eq!(Direction::Up.step(20), (0, -20));
    /// ```
    #[must_use]
    pub const fn step(self, distance: i32) -> (i32, i32) {
        match self {
            Direction::Left => (-distance, 0),
            Direction::Right => (distance, 0),
            Direction::Up => (0, -distance),
            Direction::Down => (0, distance),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{name}")
    }
}

/// A rectangle given by two corner points.
///
/// The unit of maze traversal: both stopping cells and the connector
/// corridors between them are represented identically as rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Cell {
    /// Create a cell from two corners.
    #[must_use]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create an axis-aligned square cell with its first corner at `(x, y)`.
    #[must_use]
    pub const fn square(x: i32, y: i32, size: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + size,
            y2: y + size,
        }
    }

    /// Return this cell translated by `(dx, dy)`.
    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }

    /// Identity key of this cell position (packed first corner).
    #[must_use]
    pub const fn key(self) -> CellKey {
        CellKey::pack(self.x1, self.y1)
    }

    /// Center point of the cell (integer division; exact for even sizes).
    #[must_use]
    pub const fn center(self) -> Point {
        Point::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Normalized bounds as `(x_min, x_max, y_min, y_max)`.
    #[must_use]
    const fn bounds(self) -> (i32, i32, i32, i32) {
        let (x_min, x_max) = if self.x1 <= self.x2 {
            (self.x1, self.x2)
        } else {
            (self.x2, self.x1)
        };
        let (y_min, y_max) = if self.y1 <= self.y2 {
            (self.y1, self.y2)
        } else {
            (self.y2, self.y1)
        };
        (x_min, x_max, y_min, y_max)
    }

    /// Check whether a point lies within this cell.
    ///
    /// Bounds are inclusive on all four edges, after corner normalization.
    ///
    /// ```
    /// use corridors::core::{Cell, Point};
    ///
    /// // Corners in descending order still describe the same box.
    /// let cell = Cell::new(40, 1000, 60, 980);
    /// assert!(cell.contains(Point::new(50, 990)));
    /// assert!(cell.contains(Point::new(40, 980)));
    /// assert!(!cell.contains(Point::new(61, 990)));
    /// ```
    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        let (x_min, x_max, y_min, y_max) = self.bounds();
        x_min <= point.x && point.x <= x_max && y_min <= point.y && point.y <= y_max
    }

    /// Check whether two cells touch (closed boxes intersect or share an
    /// edge/corner). Used for path connectivity queries.
    #[must_use]
    pub const fn touches(self, other: Cell) -> bool {
        let (ax_min, ax_max, ay_min, ay_max) = self.bounds();
        let (bx_min, bx_max, by_min, by_max) = other.bounds();
        ax_min <= bx_max && bx_min <= ax_max && ay_min <= by_max && by_min <= ay_max
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell[({}, {})-({}, {})]",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Packed-integer identity of a cell position.
///
/// Packs the cell's first corner `(x1, y1)` into a single `u64`, replacing
/// string-serialized coordinate keys for visited-set membership.
///
/// ```
/// use corridors::core::CellKey;
///
/// let key = CellKey::pack(20, 980);
/// assert_eq!(key.unpack(), (20, 980));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellKey(pub u64);

impl CellKey {
    /// Pack a coordinate pair into a key.
    #[must_use]
    pub const fn pack(x: i32, y: i32) -> Self {
        Self(((x as u32 as u64) << 32) | (y as u32 as u64))
    }

    /// Recover the coordinate pair from a key.
    #[must_use]
    pub const fn unpack(self) -> (i32, i32) {
        ((self.0 >> 32) as u32 as i32, self.0 as u32 as i32)
    }

    /// Get the raw packed value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (x, y) = self.unpack();
        write!(f, "Key({x}, {y})")
    }
}
