//! Random wall placement.

use pathviz_core::{Grid, Point};
use rand::{Rng, RngExt};

/// Turn each open cell into a wall with probability `density`
/// (clamped to 0.0–1.0). Start and finish are never walled.
///
/// Returns the newly walled cells in row-major order.
pub fn scatter_walls(grid: &mut Grid, rng: &mut impl Rng, density: f64) -> Vec<Point> {
    let density = density.clamp(0.0, 1.0);
    let walled = grid.fill_walls(|_| {
        let r: f64 = rng.random();
        r < density
    });
    log::debug!(
        "scatter: {} cells walled at density {density:.2}",
        walled.len()
    );
    walled
}
