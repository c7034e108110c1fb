use pathviz_core::Point;

/// Manhattan (L1) distance between two points: the length of a shortest
/// path between them on an empty 4-connected grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
