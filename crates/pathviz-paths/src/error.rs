use std::fmt;

use pathviz_core::{GridError, Point};

/// Errors reported by the search engine and path reconstruction.
///
/// An unreachable finish is *not* an error: [`search`](crate::search)
/// succeeds and [`is_reachable`](crate::is_reachable) reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An endpoint lies outside the grid.
    Grid(GridError),
    /// Start and finish are the same cell.
    SameEndpoints(Point),
    /// Reconstruction was asked for a cell the last search never finalized.
    NotReached(Point),
    /// A back-link joins two cells that are not neighbours, or the chain of
    /// back-links is longer than the grid.
    BrokenLink { from: Point, to: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "search: {e}"),
            Self::SameEndpoints(p) => write!(f, "search: start and finish are both {p}"),
            Self::NotReached(p) => write!(f, "search: {p} was not reached"),
            Self::BrokenLink { from, to } => {
                write!(f, "search: broken back-link from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
