pub use self::{falling_block::*, grid::*, shape::*};

pub(crate) mod falling_block;
pub(crate) mod grid;
pub(crate) mod shape;

/// Number of columns in the grid.
pub const GRID_WIDTH: usize = 10;
/// Number of rows in the grid.
pub const GRID_HEIGHT: usize = 20;
