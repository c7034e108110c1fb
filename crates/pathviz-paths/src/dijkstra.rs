use std::collections::BinaryHeap;

use pathviz_core::{Grid, Point};

use crate::error::SearchError;

/// Reference into the grid arena, ordered for use in a `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    dist: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the max-heap pops the smallest distance first, and the
        // lowest (row-major first) index among equal distances.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source, single-target Dijkstra search with unit step costs.
///
/// `Dijkstra` owns its open list and neighbour buffer so that repeated
/// searches reuse their allocations. It holds no grid state between runs.
#[derive(Debug, Default)]
pub struct Dijkstra {
    open: BinaryHeap<NodeRef>,
    nbuf: Vec<Point>,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self {
            open: BinaryHeap::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Search `grid` from `start` towards `finish`.
    ///
    /// Clears the grid's search state, then finalizes cells in order of
    /// increasing distance (row-major among ties) until the finish is
    /// finalized or no reachable cell is left. Returns the finalized cells
    /// in that order. Walls are never finalized; a walled start yields an
    /// empty trace.
    ///
    /// On return every finalized node carries its final distance and a
    /// back-link towards the start. Start and finish flags are untouched.
    pub fn search(
        &mut self,
        grid: &mut Grid,
        start: Point,
        finish: Point,
    ) -> Result<Vec<Point>, SearchError> {
        let si = grid.check(start)?;
        let fi = grid.check(finish)?;
        if si == fi {
            return Err(SearchError::SameEndpoints(start));
        }

        grid.clear_search_state();
        self.open.clear();
        let mut trace = Vec::new();

        if let Some(n) = grid.node_mut(start) {
            if n.is_wall() {
                log::debug!("dijkstra: start {start} is a wall, nothing to search");
                return Ok(trace);
            }
            n.set_distance(0);
        }
        self.open.push(NodeRef { idx: si, dist: 0 });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = self.open.pop() {
            let cp = grid.point(current.idx);
            let Some(node) = grid.node_mut(cp) else {
                continue;
            };
            // Skip stale entries superseded by a shorter distance.
            if node.is_visited() || current.dist > node.distance() {
                continue;
            }
            node.mark_visited();
            trace.push(cp);
            log::trace!("dijkstra: finalized {cp} at distance {}", current.dist);

            if current.idx == fi {
                break;
            }

            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let Some(n) = grid.node_mut(np) else {
                    continue;
                };
                if n.is_visited() || n.is_wall() {
                    continue;
                }
                let candidate = current.dist + 1;
                if candidate < n.distance() {
                    n.set_distance(candidate);
                    n.set_previous(Some(cp));
                    self.open.push(NodeRef {
                        idx: ni,
                        dist: candidate,
                    });
                }
            }
        }

        self.nbuf = nbuf;
        log::debug!(
            "dijkstra: {start} -> {finish}: {} cells finalized, finish {}",
            trace.len(),
            if is_reachable(&trace, finish) {
                "reached"
            } else {
                "unreachable"
            }
        );
        Ok(trace)
    }
}

/// Run a one-off [`Dijkstra::search`].
pub fn search(grid: &mut Grid, start: Point, finish: Point) -> Result<Vec<Point>, SearchError> {
    Dijkstra::new().search(grid, start, finish)
}

/// Whether `finish` was finalized, i.e. appears in the `trace`.
#[inline]
pub fn is_reachable(trace: &[Point], finish: Point) -> bool {
    trace.contains(&finish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan;
    use pathviz_core::UNREACHABLE;
    use pathviz_maze::Layout;

    fn layout(s: &str) -> (Grid, Point, Point) {
        let l = Layout::parse(s).unwrap();
        let g = l.to_grid().unwrap();
        (g, l.start().unwrap(), l.finish().unwrap())
    }

    fn distance(g: &Grid, p: Point) -> i32 {
        g.node(p).unwrap().distance()
    }

    #[test]
    fn open_3x3_corner_to_corner() {
        let (mut g, s, f) = layout(
            "
            S..
            ...
            ..F
            ",
        );
        let trace = search(&mut g, s, f).unwrap();
        assert!(is_reachable(&trace, f));
        assert_eq!(distance(&g, f), 4);
        assert_eq!(
            trace,
            vec![
                Point::at(0, 0),
                Point::at(0, 1),
                Point::at(1, 0),
                Point::at(0, 2),
                Point::at(1, 1),
                Point::at(2, 0),
                Point::at(1, 2),
                Point::at(2, 1),
                Point::at(2, 2),
            ]
        );
    }

    #[test]
    fn trace_distances_never_decrease() {
        let (mut g, s, f) = layout(
            "
            ..........
            ....S.....
            ..........
            ..........
            .........F
            ",
        );
        let trace = search(&mut g, s, f).unwrap();
        let dists: Vec<i32> = trace.iter().map(|&p| distance(&g, p)).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
        for &p in &trace {
            assert_eq!(distance(&g, p), manhattan(s, p));
        }
    }

    #[test]
    fn stops_at_finish() {
        let (mut g, s, f) = layout(
            "
            SF...
            .....
            .....
            ",
        );
        let trace = search(&mut g, s, f).unwrap();
        assert_eq!(trace, vec![s, f]);
        assert_eq!(trace.last(), Some(&f));
        // Cells past the finish were discovered at most, never finalized.
        assert!(!g.node(Point::at(2, 4)).unwrap().is_visited());
        assert_eq!(distance(&g, Point::at(2, 4)), UNREACHABLE);
    }

    #[test]
    fn walls_are_never_finalized() {
        let (mut g, s, f) = layout(
            "
            S.#..
            .##..
            ...#F
            .#...
            ",
        );
        let trace = search(&mut g, s, f).unwrap();
        assert!(is_reachable(&trace, f));
        for p in g.walls() {
            assert!(!trace.contains(&p));
            let n = g.node(p).unwrap();
            assert!(!n.is_visited());
            assert_eq!(n.distance(), UNREACHABLE);
        }
        assert_eq!(distance(&g, f), 8);
    }

    #[test]
    fn walled_in_start_is_alone() {
        let (mut g, s, f) = layout(
            "
            .#...
            #S#..
            .#..F
            ",
        );
        let trace = search(&mut g, s, f).unwrap();
        assert_eq!(trace, vec![s]);
        assert!(!is_reachable(&trace, f));
        assert_eq!(distance(&g, f), UNREACHABLE);
    }

    #[test]
    fn walled_start_yields_empty_trace() {
        let (mut g, s, f) = layout("S..\n..F");
        g.set_wall(s, true).unwrap();
        let trace = search(&mut g, s, f).unwrap();
        assert!(trace.is_empty());
        assert!(!is_reachable(&trace, f));
    }

    #[test]
    fn unreachable_finish_exhausts_region() {
        let (mut g, s, f) = layout(
            "
            S.#..
            ..#.F
            ..#..
            ",
        );
        let trace = search(&mut g, s, f).unwrap();
        assert!(!is_reachable(&trace, f));
        assert_eq!(trace.len(), 6);
        assert!(trace.iter().all(|p| p.col() < 2));
    }

    #[test]
    fn adjacent_endpoints() {
        let (mut g, s, f) = layout(
            "
            ...
            .SF
            ...
            ",
        );
        let trace = search(&mut g, s, f).unwrap();
        assert!(trace.contains(&s));
        assert!(trace.contains(&f));
        assert_eq!(distance(&g, f), 1);
        assert_eq!(g.node(f).unwrap().previous(), Some(s));
    }

    #[test]
    fn repeated_searches_are_identical() {
        let (mut g, s, f) = layout(
            "
            S...#....
            .##.#.##.
            ....#..#.
            .#.....#F
            ",
        );
        let mut engine = Dijkstra::new();
        let first = engine.search(&mut g, s, f).unwrap();
        let snapshot = g.clone();
        let second = engine.search(&mut g, s, f).unwrap();
        assert_eq!(first, second);
        assert_eq!(g, snapshot);
    }

    #[test]
    fn endpoint_flags_untouched() {
        let (mut g, s, f) = layout("S.\n.F");
        search(&mut g, s, f).unwrap();
        assert_eq!(g.start(), Some(s));
        assert_eq!(g.finish(), Some(f));
        assert!(g.node(s).unwrap().is_start());
        assert!(g.node(f).unwrap().is_finish());
        assert_eq!(g.node(s).unwrap().previous(), None);
    }

    #[test]
    fn out_of_bounds_endpoint_is_rejected() {
        let (mut g, s, _) = layout("S.\n.F");
        let err = search(&mut g, s, Point::at(5, 5)).unwrap_err();
        assert!(matches!(err, SearchError::Grid(_)));
    }

    #[test]
    fn same_endpoints_are_rejected() {
        let (mut g, s, _) = layout("S.\n.F");
        assert_eq!(
            search(&mut g, s, s),
            Err(SearchError::SameEndpoints(s))
        );
    }

    #[test]
    fn node_ref_pops_lowest_distance_then_row_major() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 5, dist: 2 });
        heap.push(NodeRef { idx: 9, dist: 1 });
        heap.push(NodeRef { idx: 3, dist: 1 });
        heap.push(NodeRef { idx: 0, dist: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|n| n.idx).collect();
        assert_eq!(order, vec![3, 9, 5, 0]);
    }
}
