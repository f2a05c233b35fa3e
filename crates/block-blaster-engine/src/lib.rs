//! Simulation engine for Block Blaster, a minimal falling-block puzzle game.
//!
//! Blocks of seven fixed shapes fall one at a time into a 10×20 grid. The
//! player moves and rotates the falling block; once it cannot fall further it
//! locks into the grid, full rows are cleared for 100 points each, and the
//! game ends when a locked block reaches the top row.
//!
//! The crate has no notion of a terminal or a clock: callers feed it intents
//! and elapsed time, and read its state back for rendering.
//!
//! - [`core`] - Shapes, falling blocks and the occupancy grid
//! - [`engine`] - Game rules, scoring and shape generation

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
