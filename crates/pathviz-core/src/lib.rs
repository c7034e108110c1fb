//! **pathviz-core**: grid model for the pathviz shortest-path visualizer.
//!
//! This crate provides the types every other pathviz crate builds on:
//! geometry primitives, the per-cell [`Node`] carrying search state, and the
//! arena-backed [`Grid`] that the search engine mutates in place.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use node::{Node, UNREACHABLE};
