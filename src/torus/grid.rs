//! Toroidal grid storage and cell state.

use thiserror::Error;

/// State of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

/// Errors raised when constructing a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
}

/// A fixed-size board wrapped at both edges, stored row-major.
///
/// Coordinates are unbounded: any `i32` pair is reduced onto the torus
/// before lookup, so `(-1, 0)` addresses the rightmost column of row 0.
#[derive(Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; (width as usize) * (height as usize)],
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    // `rem_euclid` wraps offsets of any magnitude, not just the +/-1 the
    // neighbor scan produces.
    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        let x = x.rem_euclid(self.width) as usize;
        let y = y.rem_euclid(self.height) as usize;
        y * (self.width as usize) + x
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, state: Cell) {
        let index = self.index(x, y);
        self.cells[index] = state;
    }

    /// Number of live cells on the board.
    pub fn population(&self) -> u64 {
        self.cells.iter().filter(|cell| cell.is_alive()).count() as u64
    }
}
