//! The [`Node`] type: one grid cell with its search state.

use crate::geom::Point;

/// Sentinel distance meaning "not reached (yet)".
pub const UNREACHABLE: i32 = i32::MAX;

/// A single grid cell.
///
/// A node carries two kinds of state:
///
/// - **topology**: wall, start and finish flags. Start and finish can only be
///   moved through [`Grid`](crate::Grid), which keeps them unique.
/// - **search state**: tentative distance, visited flag and back-link,
///   written by the shortest-path engine and cleared by
///   [`Grid::clear_search_state`](crate::Grid::clear_search_state).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Point,
    is_start: bool,
    is_finish: bool,
    is_wall: bool,
    distance: i32,
    is_visited: bool,
    previous: Option<Point>,
}

impl Node {
    /// Create an open node at `pos` with cleared search state.
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            is_start: false,
            is_finish: false,
            is_wall: false,
            distance: UNREACHABLE,
            is_visited: false,
            previous: None,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub const fn is_finish(&self) -> bool {
        self.is_finish
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        self.is_wall
    }

    /// Tentative distance from the start, [`UNREACHABLE`] if unknown.
    #[inline]
    pub const fn distance(&self) -> i32 {
        self.distance
    }

    /// Whether the search has finalized this node.
    #[inline]
    pub const fn is_visited(&self) -> bool {
        self.is_visited
    }

    /// The node the final distance was reached from, if any.
    #[inline]
    pub const fn previous(&self) -> Option<Point> {
        self.previous
    }

    #[inline]
    pub fn set_distance(&mut self, distance: i32) {
        self.distance = distance;
    }

    #[inline]
    pub fn mark_visited(&mut self) {
        self.is_visited = true;
    }

    #[inline]
    pub fn set_previous(&mut self, previous: Option<Point>) {
        self.previous = previous;
    }

    /// Restore distance, visited flag and back-link to their initial values.
    #[inline]
    pub fn clear_search_state(&mut self) {
        self.distance = UNREACHABLE;
        self.is_visited = false;
        self.previous = None;
    }

    #[inline]
    pub(crate) fn set_wall(&mut self, wall: bool) {
        self.is_wall = wall;
    }

    #[inline]
    pub(crate) fn set_start(&mut self, start: bool) {
        self.is_start = start;
    }

    #[inline]
    pub(crate) fn set_finish(&mut self, finish: bool) {
        self.is_finish = finish;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_open_and_unreached() {
        let n = Node::new(Point::at(2, 5));
        assert_eq!(n.row(), 2);
        assert_eq!(n.col(), 5);
        assert!(!n.is_wall());
        assert!(!n.is_start());
        assert!(!n.is_finish());
        assert!(!n.is_visited());
        assert_eq!(n.distance(), UNREACHABLE);
        assert_eq!(n.previous(), None);
    }

    #[test]
    fn clear_search_state_keeps_topology() {
        let mut n = Node::new(Point::ZERO);
        n.set_wall(true);
        n.set_start(true);
        n.set_distance(3);
        n.mark_visited();
        n.set_previous(Some(Point::new(1, 0)));

        n.clear_search_state();

        assert_eq!(n.distance(), UNREACHABLE);
        assert!(!n.is_visited());
        assert_eq!(n.previous(), None);
        assert!(n.is_wall());
        assert!(n.is_start());
    }
}
