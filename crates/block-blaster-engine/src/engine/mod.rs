//! Game rules built on top of the [`core`](crate::core) data structures.
//!
//! - [`Game`] - Grid, falling block, next block, score and fall timer
//! - [`GameStats`] - Score and counters for one game
//! - [`ShapeSource`] - Where spawned block kinds come from
//! - [`RandomShapes`] - Seeded uniform [`ShapeSource`]
//!
//! # Game Flow
//!
//! 1. Create a [`Game`], optionally with a [`ShapeSeed`]
//! 2. Feed player intents (move, rotate, drop) to the falling block
//! 3. Feed elapsed time to [`Game::advance_time`]; the block falls one row per
//!    fall interval and locks when it cannot fall further
//! 4. Full rows are cleared and scored; the next block starts falling
//! 5. Repeat until a locked block leaves a cell of the top row occupied
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use block_blaster_engine::Game;
//!
//! let mut game = Game::new();
//! while !game.is_game_over() {
//!     game.hard_drop();
//!     game.advance_time(Duration::from_millis(500));
//! }
//! assert!(game.stats().locked_blocks() > 0);
//! ```

pub use self::{game::*, game_stats::*, shape_source::*};

mod game;
mod game_stats;
mod shape_source;
