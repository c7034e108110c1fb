//! Shortest-path search over pathviz grids.
//!
//! The engine is Dijkstra's algorithm on a 4-connected grid where every step
//! between two open cells costs 1:
//!
//! - [`search`] / [`Dijkstra::search`] finalize cells in distance order and
//!   return that order (the *trace*), writing distances and back-links into
//!   the grid as they go.
//! - [`is_reachable`] tells whether the finish made it into the trace.
//! - [`reconstruct_path`] follows the back-links from the finish to the
//!   start.
//!
//! Ties between cells at the same distance are broken in row-major order,
//! so identical grids always produce identical traces.

mod dijkstra;
mod distance;
mod error;
mod path;

pub use dijkstra::{Dijkstra, is_reachable, search};
pub use distance::manhattan;
pub use error::SearchError;
pub use path::reconstruct_path;
