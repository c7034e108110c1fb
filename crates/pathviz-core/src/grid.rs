//! The [`Grid`]: a fixed-size, row-major arena of [`Node`]s.
//!
//! Back-links between nodes are stored as positions rather than references,
//! so the whole grid is a single owned value that the search engine borrows
//! mutably for the duration of a run.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::node::Node;

/// A rectangular grid of nodes addressed by [`Point`] (`x` = column,
/// `y` = row).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    nodes: Vec<Node>,
    bounds: Range,
    start: Option<Point>,
    finish: Option<Point>,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    nodes: Vec<Node>,
    bounds: Range,
    start: Option<Point>,
    finish: Option<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        if raw.bounds.min != Point::ZERO {
            return Err(GridError::Inconsistent("bounds must start at the origin"));
        }
        let mut grid = Grid::new(raw.bounds.height(), raw.bounds.width())?;
        if raw.nodes.len() != grid.len() {
            return Err(GridError::Inconsistent("node count does not match bounds"));
        }
        if raw.nodes.iter().zip(grid.nodes.iter()).any(|(a, b)| a.pos() != b.pos()) {
            return Err(GridError::Inconsistent("nodes are not in row-major order"));
        }
        let flagged = |f: fn(&Node) -> bool| -> Vec<Point> {
            raw.nodes.iter().filter(|n| f(n)).map(Node::pos).collect()
        };
        if flagged(Node::is_start) != raw.start.into_iter().collect::<Vec<_>>() {
            return Err(GridError::Inconsistent("start does not match node flags"));
        }
        if flagged(Node::is_finish) != raw.finish.into_iter().collect::<Vec<_>>() {
            return Err(GridError::Inconsistent("finish does not match node flags"));
        }
        if let Some(p) = raw.start.filter(|&p| raw.finish == Some(p)) {
            return Err(GridError::Occupied { pos: p });
        }
        grid.nodes = raw.nodes;
        grid.start = raw.start;
        grid.finish = raw.finish;
        Ok(grid)
    }
}

impl Grid {
    /// Create a grid of `rows × cols` open nodes with no start or finish.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let bounds = Range::new(0, 0, cols, rows);
        let nodes = bounds.iter().map(Node::new).collect();
        Ok(Self {
            nodes,
            bounds,
            start: None,
            finish: None,
        })
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a grid has at least one node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.cols() + p.x) as usize)
    }

    /// Position of the node at row-major index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols() as usize;
        Point::new((idx % cols) as i32, (idx / cols) as i32)
    }

    /// Like [`index`](Self::index) but reports the failure.
    pub fn check(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.index(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to the node at `p`.
    ///
    /// Only search state can be changed through the returned reference;
    /// walls and endpoints go through the grid's own setters.
    #[inline]
    pub fn node_mut(&mut self, p: Point) -> Option<&mut Node> {
        let i = self.index(p)?;
        Some(&mut self.nodes[i])
    }

    /// All nodes in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Nodes the search has not finalized yet, in row-major order.
    pub fn unvisited(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| !n.is_visited())
    }

    /// Append the in-bounds up/right/down/left neighbours of `p` to `buf`.
    /// The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.bounds.contains(n) {
                buf.push(n);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------------

    /// Current start position.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Current finish position.
    #[inline]
    pub fn finish(&self) -> Option<Point> {
        self.finish
    }

    /// Move the start flag to `p`, clearing it from the previous holder.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.check(p)?;
        if self.nodes[i].is_finish() {
            return Err(GridError::Occupied { pos: p });
        }
        if let Some(old) = self.start.take() {
            if let Some(n) = self.node_mut(old) {
                n.set_start(false);
            }
        }
        self.nodes[i].set_start(true);
        self.start = Some(p);
        Ok(())
    }

    /// Move the finish flag to `p`, clearing it from the previous holder.
    pub fn set_finish(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.check(p)?;
        if self.nodes[i].is_start() {
            return Err(GridError::Occupied { pos: p });
        }
        if let Some(old) = self.finish.take() {
            if let Some(n) = self.node_mut(old) {
                n.set_finish(false);
            }
        }
        self.nodes[i].set_finish(true);
        self.finish = Some(p);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Walls
    // -----------------------------------------------------------------------

    /// Set or clear the wall flag at `p`.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        let i = self.check(p)?;
        self.nodes[i].set_wall(wall);
        Ok(())
    }

    /// Flip the wall flag at `p` and return the new value.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, GridError> {
        let i = self.check(p)?;
        let wall = !self.nodes[i].is_wall();
        self.nodes[i].set_wall(wall);
        Ok(wall)
    }

    /// Turn every open node for which `f` returns `true` into a wall.
    ///
    /// Start and finish nodes are skipped and never passed to `f`. Returns
    /// the newly walled positions in row-major order.
    pub fn fill_walls(&mut self, mut f: impl FnMut(&Node) -> bool) -> Vec<Point> {
        let mut walled = Vec::new();
        for n in self.nodes.iter_mut() {
            if n.is_start() || n.is_finish() || n.is_wall() {
                continue;
            }
            if f(n) {
                n.set_wall(true);
                walled.push(n.pos());
            }
        }
        walled
    }

    /// Positions of all walls, row-major.
    pub fn walls(&self) -> Vec<Point> {
        self.nodes
            .iter()
            .filter(|n| n.is_wall())
            .map(|n| n.pos())
            .collect()
    }

    // -----------------------------------------------------------------------
    // Reset
    // -----------------------------------------------------------------------

    /// Restore distance, visited flag and back-link on every node.
    /// Walls and endpoints are kept.
    pub fn clear_search_state(&mut self) {
        for n in self.nodes.iter_mut() {
            n.clear_search_state();
        }
    }

    /// Remove every wall. Search state and endpoints are kept.
    pub fn clear_walls(&mut self) {
        for n in self.nodes.iter_mut() {
            n.set_wall(false);
        }
    }

    /// Clear search state **and** walls, keeping only start and finish.
    pub fn reset(&mut self) {
        self.clear_search_state();
        self.clear_walls();
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_start(Point::at(0, 0)).unwrap();
        g.set_finish(Point::at(2, 2)).unwrap();
        g.set_wall(Point::at(1, 1), true).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    fn encoded() -> serde_json::Value {
        let mut g = Grid::new(2, 2).unwrap();
        g.set_start(Point::at(0, 0)).unwrap();
        g.set_finish(Point::at(1, 1)).unwrap();
        serde_json::to_value(&g).unwrap()
    }

    #[test]
    fn truncated_nodes_are_rejected() {
        let mut v = encoded();
        v["nodes"].as_array_mut().unwrap().truncate(1);
        let err = serde_json::from_value::<Grid>(v).unwrap_err();
        assert!(err.to_string().contains("node count"));
    }

    #[test]
    fn shuffled_nodes_are_rejected() {
        let mut v = encoded();
        v["nodes"].as_array_mut().unwrap().swap(1, 2);
        assert!(serde_json::from_value::<Grid>(v).is_err());
    }

    #[test]
    fn endpoint_disagreeing_with_flags_is_rejected() {
        let mut v = encoded();
        v["start"] = serde_json::json!({ "x": 1, "y": 0 });
        let err = serde_json::from_value::<Grid>(v).unwrap_err();
        assert!(err.to_string().contains("start"));

        let mut v = encoded();
        v["finish"] = serde_json::Value::Null;
        assert!(serde_json::from_value::<Grid>(v).is_err());
    }

    #[test]
    fn bad_bounds_are_rejected() {
        let mut v = encoded();
        v["bounds"]["max"]["x"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Grid>(v).is_err());
    }
}
