//! Wall layouts for pathviz grids.
//!
//! - [`apply_maze`]: the fixed maze shipped with the visualizer, built from
//!   rectangular [`WallSegment`]s.
//! - [`Layout`]: ASCII layouts parsed into grids and grids rendered back to
//!   text.
//! - [`scatter_walls`]: random wall placement.

pub mod layout;
pub mod maze;
pub mod scatter;

pub use layout::{Layout, LayoutError, render, render_search};
pub use maze::{MAZE, WallSegment, apply_maze, apply_segments};
pub use scatter::scatter_walls;
