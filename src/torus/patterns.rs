//! Named seed patterns, stamped as lists of relative offsets.

use super::grid::{Cell, Grid};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

/// Diagonal spaceship, period 4, drawn from its top-left corner.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Period-2 oscillator, drawn horizontally.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Still life.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const PATTERNS: &[Pattern] = &[GLIDER, BLINKER, BLOCK, TOAD];

/// Looks a pattern up by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Writes `pattern` onto `grid` relative to the origin. Each cell is
/// wrapped independently, so patterns may straddle the edges.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, origin_x: i32, origin_y: i32) {
    for &(dx, dy) in pattern.cells {
        grid.set(origin_x + dx, origin_y + dy, Cell::Alive);
    }
}

/// Stamps the glider with its top-left corner at the origin.
pub fn stamp_glider(grid: &mut Grid, origin_x: i32, origin_y: i32) {
    stamp(grid, &GLIDER, origin_x, origin_y);
}
