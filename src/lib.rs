//! Toroidal Conway's Game of Life engine (B3/S23).

pub mod render;
pub mod torus;

pub use render::Renderer;
pub use torus::{Cell, Grid, GridError};
