//! The fixed maze: a static table of rectangular wall segments.

use pathviz_core::{Grid, Point, Range};

/// An inclusive rectangle of wall cells, given by its two corner cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSegment {
    pub from: Point,
    pub to: Point,
}

impl WallSegment {
    /// Segment covering rows `start_row..=end_row` and columns
    /// `start_col..=end_col`.
    pub const fn new(start_row: i32, start_col: i32, end_row: i32, end_col: i32) -> Self {
        Self {
            from: Point::at(start_row, start_col),
            to: Point::at(end_row, end_col),
        }
    }

    /// The cells covered by the segment.
    #[inline]
    pub fn range(self) -> Range {
        Range::spanning(self.from, self.to)
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.range().contains(p)
    }
}

/// The maze layout of the visualizer, sized for its default 80 × 30 grid.
///
/// Segments running past a smaller grid are clipped.
pub const MAZE: &[WallSegment] = &[
    // Vertical runs: columns 4, 9, 15, 20, 25.
    WallSegment::new(1, 4, 9, 4),
    WallSegment::new(10, 4, 16, 4),
    WallSegment::new(18, 4, 27, 4),
    WallSegment::new(29, 4, 38, 4),
    WallSegment::new(39, 4, 47, 4),
    WallSegment::new(49, 4, 58, 4),
    WallSegment::new(59, 4, 67, 4),
    WallSegment::new(69, 4, 78, 4),

    WallSegment::new(1, 9, 8, 9),
    WallSegment::new(10, 9, 17, 9),
    WallSegment::new(18, 9, 28, 9),
    WallSegment::new(29, 9, 37, 9),
    WallSegment::new(39, 9, 48, 9),
    WallSegment::new(49, 9, 57, 9),
    WallSegment::new(59, 9, 68, 9),
    WallSegment::new(69, 9, 77, 9),

    WallSegment::new(1, 15, 8, 15),
    WallSegment::new(10, 15, 16, 15),
    WallSegment::new(18, 15, 27, 15),
    WallSegment::new(29, 15, 37, 15),
    WallSegment::new(39, 15, 47, 15),
    WallSegment::new(49, 15, 58, 15),
    WallSegment::new(59, 15, 67, 15),
    WallSegment::new(69, 15, 77, 15),

    WallSegment::new(1, 20, 8, 20),
    WallSegment::new(10, 20, 17, 20),
    WallSegment::new(18, 20, 28, 20),
    WallSegment::new(29, 20, 37, 20),
    WallSegment::new(39, 20, 47, 20),
    WallSegment::new(49, 20, 57, 20),
    WallSegment::new(59, 20, 69, 20),
    WallSegment::new(69, 20, 77, 20),

    WallSegment::new(1, 25, 9, 25),
    WallSegment::new(10, 25, 16, 25),
    WallSegment::new(18, 25, 27, 25),
    WallSegment::new(29, 25, 38, 25),
    WallSegment::new(39, 25, 47, 25),
    WallSegment::new(49, 25, 57, 25),
    WallSegment::new(59, 25, 67, 25),
    WallSegment::new(69, 25, 77, 25),

    // Horizontal runs: rows 4, 11, 21, 33, 41, 53, 64, 70, 75.
    WallSegment::new(4, 1, 4, 5),
    WallSegment::new(4, 7, 4, 12),
    WallSegment::new(4, 13, 4, 17),
    WallSegment::new(4, 19, 4, 21),
    WallSegment::new(4, 23, 4, 29),

    WallSegment::new(11, 0, 11, 5),
    WallSegment::new(11, 7, 11, 11),
    WallSegment::new(11, 13, 11, 18),
    WallSegment::new(11, 19, 11, 21),
    WallSegment::new(11, 23, 11, 28),

    WallSegment::new(21, 0, 21, 2),
    WallSegment::new(21, 5, 21, 11),
    WallSegment::new(21, 13, 21, 17),
    WallSegment::new(21, 19, 21, 22),
    WallSegment::new(21, 23, 21, 28),

    WallSegment::new(33, 1, 33, 6),
    WallSegment::new(33, 7, 33, 11),
    WallSegment::new(33, 13, 33, 17),
    WallSegment::new(33, 19, 33, 21),
    WallSegment::new(33, 23, 33, 28),

    WallSegment::new(41, 1, 41, 5),
    WallSegment::new(41, 7, 41, 12),
    WallSegment::new(41, 13, 41, 17),
    WallSegment::new(41, 19, 41, 21),
    WallSegment::new(41, 23, 41, 29),

    WallSegment::new(53, 0, 53, 5),
    WallSegment::new(53, 7, 53, 11),
    WallSegment::new(53, 13, 53, 18),
    WallSegment::new(53, 19, 53, 21),
    WallSegment::new(53, 23, 53, 28),

    WallSegment::new(64, 1, 64, 5),
    WallSegment::new(64, 7, 64, 11),
    WallSegment::new(64, 12, 64, 17),
    WallSegment::new(64, 19, 64, 21),
    WallSegment::new(64, 23, 64, 28),

    WallSegment::new(70, 1, 70, 6),
    WallSegment::new(70, 7, 70, 11),
    WallSegment::new(70, 13, 70, 17),
    WallSegment::new(70, 18, 70, 21),
    WallSegment::new(70, 23, 70, 29),

    WallSegment::new(75, 1, 75, 5),
    WallSegment::new(75, 7, 75, 12),
    WallSegment::new(75, 13, 75, 17),
    WallSegment::new(75, 19, 75, 21),
    WallSegment::new(75, 22, 75, 28),
];

/// Apply [`MAZE`] to `grid`. See [`apply_segments`].
pub fn apply_maze(grid: &mut Grid) -> Vec<Point> {
    apply_segments(grid, MAZE)
}

/// Wall every cell covered by one of `segments`, skipping the start and
/// finish cells.
///
/// Returns the newly walled cells in row-major order. Cells that already
/// were walls are not reported. Nothing guarantees the finish stays
/// reachable.
pub fn apply_segments(grid: &mut Grid, segments: &[WallSegment]) -> Vec<Point> {
    let bounds = grid.bounds();
    let clipped: Vec<Range> = segments
        .iter()
        .map(|s| s.range().intersect(bounds))
        .filter(|r| !r.is_empty())
        .collect();
    let walled = grid.fill_walls(|n| clipped.iter().any(|r| r.contains(n.pos())));
    log::debug!(
        "maze: {} segments applied, {} cells walled",
        clipped.len(),
        walled.len()
    );
    walled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_grid() -> Grid {
        let mut g = Grid::new(80, 30).unwrap();
        g.set_start(Point::at(25, 14)).unwrap();
        g.set_finish(Point::at(55, 14)).unwrap();
        g
    }

    #[test]
    fn table_shape() {
        assert_eq!(MAZE.len(), 85);
        let vertical = MAZE.iter().filter(|s| s.from.col() == s.to.col()).count();
        assert_eq!(vertical, 40);
    }

    #[test]
    fn segment_is_inclusive() {
        let s = WallSegment::new(4, 1, 4, 5);
        assert_eq!(s.range().len(), 5);
        assert!(s.contains(Point::at(4, 1)));
        assert!(s.contains(Point::at(4, 5)));
        assert!(!s.contains(Point::at(4, 6)));
        assert!(!s.contains(Point::at(5, 3)));
    }

    #[test]
    fn maze_walls_expected_cells() {
        let mut g = default_grid();
        let walled = apply_maze(&mut g);

        assert_eq!(walled, g.walls());
        assert!(g.node(Point::at(1, 4)).unwrap().is_wall());
        assert!(g.node(Point::at(9, 4)).unwrap().is_wall());
        assert!(g.node(Point::at(4, 2)).unwrap().is_wall());
        assert!(!g.node(Point::at(0, 4)).unwrap().is_wall());
        assert!(!g.node(Point::at(0, 0)).unwrap().is_wall());
        // Gap between the first two horizontal runs on row 4.
        assert!(!g.node(Point::at(4, 6)).unwrap().is_wall());
    }

    #[test]
    fn maze_is_row_major_and_idempotent() {
        let mut g = default_grid();
        let walled = apply_maze(&mut g);
        assert!(walled.windows(2).all(|w| w[0] < w[1]));
        assert!(apply_maze(&mut g).is_empty());
    }

    #[test]
    fn endpoints_on_segments_are_skipped() {
        let mut g = Grid::new(10, 10).unwrap();
        g.set_start(Point::at(4, 1)).unwrap();
        g.set_finish(Point::at(4, 5)).unwrap();
        let walled = apply_segments(&mut g, &[WallSegment::new(4, 1, 4, 5)]);
        assert_eq!(
            walled,
            vec![Point::at(4, 2), Point::at(4, 3), Point::at(4, 4)]
        );
        assert!(!g.node(Point::at(4, 1)).unwrap().is_wall());
        assert!(!g.node(Point::at(4, 5)).unwrap().is_wall());
    }

    #[test]
    fn segments_are_clipped_to_small_grids() {
        let mut g = Grid::new(6, 6).unwrap();
        let walled = apply_maze(&mut g);
        assert!(walled.iter().all(|&p| g.contains(p)));
        // Column 4 runs from row 1; row 4 runs from column 1.
        assert!(walled.contains(&Point::at(1, 4)));
        assert!(walled.contains(&Point::at(4, 1)));
        assert!(walled.contains(&Point::at(5, 4)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn segment_round_trip() {
        let s = MAZE[0];
        let json = serde_json::to_string(&s).unwrap();
        let back: WallSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
