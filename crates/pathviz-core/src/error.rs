use std::fmt;

use crate::geom::{Point, Range};

/// Errors reported by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid must have at least one row and one column.
    InvalidDimensions { rows: i32, cols: i32 },
    /// The position lies outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
    /// The cell already holds the other endpoint (start or finish).
    Occupied { pos: Point },
    /// Deserialized grid data contradicts itself.
    Inconsistent(&'static str),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid: invalid dimensions {rows}x{cols}")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "grid: position {pos} outside {bounds}")
            }
            Self::Occupied { pos } => {
                write!(f, "grid: cell {pos} already holds the other endpoint")
            }
            Self::Inconsistent(why) => write!(f, "grid: inconsistent data: {why}"),
        }
    }
}

impl std::error::Error for GridError {}
