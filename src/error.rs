//! Error types for grid construction, search and path reconstruction.

use thiserror::Error;

use crate::cell::Cell;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid dimensions must both be positive.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidGrid { rows: i32, cols: i32 },

    /// The cell is out of bounds or an obstacle, so it is not a node of the graph.
    #[error("cell {0} is not a traversable cell of the grid")]
    InvalidCell(Cell),

    /// No parent chain leads from the target back to the start.
    #[error("no path to target {0} was recorded")]
    UnreachableTarget(Cell),

    #[error("map parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
