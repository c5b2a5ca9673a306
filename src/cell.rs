use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the grid. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// The move leading from a cell to one of its 4-neighbours. [Direction::Up] increases the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }
    /// The neighbour along increasing column.
    pub fn right(&self) -> Cell {
        Cell::new(self.row, self.col + 1)
    }
    /// The neighbour along increasing row.
    pub fn up(&self) -> Cell {
        Cell::new(self.row + 1, self.col)
    }
    pub fn step(&self, dir: Direction) -> Cell {
        let (dr, dc) = dir.delta();
        Cell::new(self.row + dr, self.col + dc)
    }
    /// Computed in [i64] so that cells anywhere in the [i32] range can be compared.
    pub fn manhattan_distance(&self, other: &Cell) -> i64 {
        let (dr, dc) = self.offset_to(other);
        dr.abs() + dc.abs()
    }
    fn offset_to(&self, other: &Cell) -> (i64, i64) {
        (
            other.row as i64 - self.row as i64,
            other.col as i64 - self.col as i64,
        )
    }
    /// Returns the direction of the move to `other`, or [None] if the two cells do not share
    /// a grid edge.
    pub fn direction_to(&self, other: &Cell) -> Option<Direction> {
        match self.offset_to(other) {
            (1, 0) => Some(Direction::Up),
            (-1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
