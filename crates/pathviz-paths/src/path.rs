use pathviz_core::{Grid, Point};

use crate::distance::manhattan;
use crate::error::SearchError;

/// Rebuild the shortest path found by the last search, from start to
/// `finish` inclusive.
///
/// Follows back-links from `finish` until a node without one (the start).
/// `finish` must have been finalized by the last search; an unreached
/// finish is reported as [`SearchError::NotReached`] rather than producing
/// a degenerate path.
pub fn reconstruct_path(grid: &Grid, finish: Point) -> Result<Vec<Point>, SearchError> {
    grid.check(finish)?;
    let reached = grid.node(finish).is_some_and(|n| n.is_visited());
    if !reached {
        return Err(SearchError::NotReached(finish));
    }

    let mut path = vec![finish];
    let mut cur = finish;
    while let Some(prev) = grid.node(cur).and_then(|n| n.previous()) {
        // A chain longer than the grid has a cycle in it.
        if !grid.contains(prev) || manhattan(cur, prev) != 1 || path.len() >= grid.len() {
            return Err(SearchError::BrokenLink {
                from: cur,
                to: prev,
            });
        }
        path.push(prev);
        cur = prev;
    }

    path.reverse();
    log::debug!("path: {} cells from {} to {finish}", path.len(), path[0]);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_reachable, search};
    use pathviz_maze::Layout;

    fn solved(s: &str) -> (Grid, Vec<Point>, Point, Point) {
        let l = Layout::parse(s).unwrap();
        let mut g = l.to_grid().unwrap();
        let (start, finish) = (l.start().unwrap(), l.finish().unwrap());
        let trace = search(&mut g, start, finish).unwrap();
        (g, trace, start, finish)
    }

    fn assert_valid(g: &Grid, path: &[Point], start: Point, finish: Point) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&finish));
        assert_eq!(
            path.len() as i32,
            g.node(finish).unwrap().distance() + 1
        );
        assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert!(path.iter().all(|&p| !g.node(p).unwrap().is_wall()));
    }

    #[test]
    fn open_3x3_path_has_five_cells() {
        let (g, _, s, f) = solved("S..\n...\n..F");
        let path = reconstruct_path(&g, f).unwrap();
        assert_eq!(path.len(), 5);
        assert_valid(&g, &path, s, f);
    }

    #[test]
    fn adjacent_endpoints_path_has_two_cells() {
        let (g, _, s, f) = solved("...\n.SF\n...");
        assert_eq!(reconstruct_path(&g, f).unwrap(), vec![s, f]);
    }

    #[test]
    fn path_detours_around_walls() {
        let (g, trace, s, f) = solved(
            "
            S.#......
            .##.####.
            ....#..#.
            ###.#.##.
            ......#.F
            ",
        );
        assert!(is_reachable(&trace, f));
        let path = reconstruct_path(&g, f).unwrap();
        assert_valid(&g, &path, s, f);
        assert!(path.len() as i32 > manhattan(s, f) + 1);
    }

    #[test]
    fn path_cells_come_from_the_trace() {
        let (g, trace, s, f) = solved(
            "
            S....
            .###.
            ....F
            ",
        );
        let path = reconstruct_path(&g, f).unwrap();
        assert_valid(&g, &path, s, f);
        assert!(path.iter().all(|p| trace.contains(p)));
    }

    #[test]
    fn unreached_finish_is_an_error() {
        let (g, trace, _, f) = solved("S#.\n##.\n..F");
        assert!(!is_reachable(&trace, f));
        assert_eq!(reconstruct_path(&g, f), Err(SearchError::NotReached(f)));
    }

    #[test]
    fn out_of_bounds_finish_is_an_error() {
        let (g, _, _, _) = solved("S.\n.F");
        assert!(matches!(
            reconstruct_path(&g, Point::at(7, 7)),
            Err(SearchError::Grid(_))
        ));
    }

    #[test]
    fn non_adjacent_back_link_is_an_error() {
        let (mut g, _, _, f) = solved("S..\n...\n..F");
        g.node_mut(f).unwrap().set_previous(Some(Point::at(0, 0)));
        assert_eq!(
            reconstruct_path(&g, f),
            Err(SearchError::BrokenLink {
                from: f,
                to: Point::at(0, 0)
            })
        );
    }

    #[test]
    fn back_link_cycle_is_an_error() {
        let (mut g, _, _, f) = solved("S..\n...\n..F");
        let a = Point::at(1, 2);
        let b = Point::at(0, 2);
        g.node_mut(a).unwrap().set_previous(Some(b));
        g.node_mut(b).unwrap().set_previous(Some(a));
        g.node_mut(f).unwrap().set_previous(Some(a));
        assert!(matches!(
            reconstruct_path(&g, f),
            Err(SearchError::BrokenLink { .. })
        ));
    }
}
