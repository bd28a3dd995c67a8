//! Text rendering of a grid snapshot.

use crate::torus::{Cell, Grid};

/// Maps each cell to one of two glyphs, one grid row per output line.
pub struct Renderer {
    pub alive: char,
    pub dead: char,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            alive: 'o',
            dead: ' ',
        }
    }
}

impl Renderer {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    /// Renders the whole grid row-major, rows separated by `\n`.
    pub fn render(&self, grid: &Grid) -> String {
        let width = grid.width() as usize;
        let height = grid.height() as usize;
        let mut out = String::with_capacity((width + 1) * height);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                out.push(match grid.get(x, y) {
                    Cell::Alive => self.alive,
                    Cell::Dead => self.dead,
                });
            }
            out.push('\n');
        }
        out
    }
}
