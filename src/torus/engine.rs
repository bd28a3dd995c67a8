//! Generation stepping.

use super::grid::Grid;
use super::rules::next_state;

/// Advances `grid` one generation in place.
///
/// The grid is first cloned into a cycle-scoped snapshot and every cell's
/// next state is computed against that snapshot, so writes made during the
/// pass are never read back as neighbor inputs. Traversal order is
/// irrelevant for the same reason.
pub fn step(grid: &mut Grid) {
    let snapshot = grid.clone();
    for y in 0..snapshot.height() {
        for x in 0..snapshot.width() {
            grid.set(x, y, next_state(&snapshot, x, y));
        }
    }
}

/// Advances `grid` by `generations` steps.
pub fn step_n(grid: &mut Grid, generations: u64) {
    for _ in 0..generations {
        step(grid);
    }
}
