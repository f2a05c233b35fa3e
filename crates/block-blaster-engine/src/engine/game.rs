use std::time::Duration;

use crate::core::{falling_block::FallingBlock, grid::Grid, shape::ShapeKind};

use super::{
    game_stats::GameStats,
    shape_source::{RandomShapes, ShapeSeed, ShapeSource},
};

/// Default time between two gravity steps.
pub const DEFAULT_FALL_INTERVAL: Duration = Duration::from_millis(500);

/// Tunable game parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Time the fall timer must accumulate before a gravity step.
    pub fall_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_interval: DEFAULT_FALL_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    Playing,
    GameOver,
}

/// What [`Game::advance_time`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GravityOutcome {
    /// The fall interval has not elapsed yet, or the game is over.
    Idle,
    /// The falling block moved down one row.
    Fell,
    /// The falling block could not move down and was merged into the grid.
    Locked { cleared_lines: usize },
}

/// Board simulation: grid, falling block, next block, score and fall timer.
///
/// The game over state is not stored. It is read off the grid: the game is
/// over as soon as any cell of the top row is occupied. While the game is over
/// every move is rejected and time does not advance; only [`Game::reset`]
/// starts a new game.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use block_blaster_engine::{Game, GravityOutcome, ShapeSeed};
///
/// let seed: ShapeSeed = "00000000000000000000000000000001".parse().unwrap();
/// let mut game = Game::with_seed(seed);
///
/// game.move_left();
/// game.try_rotate();
///
/// assert_eq!(game.advance_time(Duration::from_millis(200)), GravityOutcome::Idle);
/// assert_eq!(game.advance_time(Duration::from_millis(300)), GravityOutcome::Fell);
///
/// game.hard_drop();
/// assert!(game.advance_time(Duration::from_millis(500)).is_locked());
/// assert!(!game.is_game_over());
/// ```
#[derive(Debug, Clone)]
pub struct Game<S = RandomShapes> {
    grid: Grid,
    falling_block: FallingBlock,
    next_kind: ShapeKind,
    stats: GameStats,
    fall_timer: Duration,
    config: GameConfig,
    source: S,
}

impl Default for Game<RandomShapes> {
    fn default() -> Self {
        Self::new()
    }
}

impl Game<RandomShapes> {
    /// Creates a game with a random seed and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(RandomShapes::new(), GameConfig::default())
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible shape sequence.
    #[must_use]
    pub fn with_seed(seed: ShapeSeed) -> Self {
        Self::with_source(RandomShapes::with_seed(seed), GameConfig::default())
    }
}

impl<S> Game<S>
where
    S: ShapeSource,
{
    /// Creates a game drawing its blocks from `source`.
    ///
    /// The first kind drawn becomes the falling block and the second the next block.
    #[must_use]
    pub fn with_source(mut source: S, config: GameConfig) -> Self {
        let falling_block = FallingBlock::spawn(source.next_kind());
        let next_kind = source.next_kind();
        Self {
            grid: Grid::EMPTY,
            falling_block,
            next_kind,
            stats: GameStats::new(),
            fall_timer: Duration::ZERO,
            config,
            source,
        }
    }

    /// Starts a new game, keeping the shape source and configuration.
    pub fn reset(&mut self) {
        log::info!(
            "reset after {} lines, score {}",
            self.stats.cleared_lines(),
            self.stats.score()
        );
        self.grid = Grid::EMPTY;
        self.falling_block = FallingBlock::spawn(self.source.next_kind());
        self.next_kind = self.source.next_kind();
        self.stats = GameStats::new();
        self.fall_timer = Duration::ZERO;
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn falling_block(&self) -> &FallingBlock {
        &self.falling_block
    }

    #[must_use]
    pub fn next_kind(&self) -> ShapeKind {
        self.next_kind
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Time accumulated toward the next gravity step.
    #[must_use]
    pub fn fall_timer(&self) -> Duration {
        self.fall_timer
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.grid.is_top_row_occupied()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_game_over() {
            GameState::GameOver
        } else {
            GameState::Playing
        }
    }

    /// Checks whether the falling block could be moved by `(dx, dy)`. Changes nothing.
    #[must_use]
    pub fn is_valid_move(&self, dx: i32, dy: i32) -> bool {
        self.falling_block
            .moved(dx, dy)
            .is_some_and(|block| self.grid.fits(&block))
    }

    /// Moves the falling block by `(dx, dy)` if the target position is valid.
    ///
    /// Returns whether the block moved.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_game_over() {
            return false;
        }
        if let Some(moved) = self.falling_block.moved(dx, dy)
            && self.grid.fits(&moved)
        {
            self.falling_block = moved;
            return true;
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Moves the falling block down one row. Never locks it.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotates the falling block 90° clockwise around its anchor if the result fits.
    ///
    /// A rotation that does not fit is discarded.
    pub fn try_rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let rotated = self.falling_block.rotated_right();
        if !self.grid.fits(&rotated) {
            return false;
        }
        self.falling_block = rotated;
        true
    }

    /// Moves the falling block down as far as it goes and returns the number of rows moved.
    ///
    /// The block is not locked here; that happens on the next gravity step.
    pub fn hard_drop(&mut self) -> usize {
        let mut rows = 0;
        while self.soft_drop() {
            rows += 1;
        }
        rows
    }

    /// Feeds elapsed time into the fall timer and runs at most one gravity step.
    ///
    /// Once the timer reaches the fall interval it restarts from zero, and the
    /// block either falls one row or, if it cannot, is locked: it is merged
    /// into the grid, full rows are cleared, the next block starts falling
    /// from the spawn position and a new next block is drawn.
    pub fn advance_time(&mut self, elapsed: Duration) -> GravityOutcome {
        if self.is_game_over() {
            return GravityOutcome::Idle;
        }
        self.fall_timer = self.fall_timer.saturating_add(elapsed);
        if self.fall_timer < self.config.fall_interval {
            return GravityOutcome::Idle;
        }
        self.fall_timer = Duration::ZERO;

        if self.soft_drop() {
            return GravityOutcome::Fell;
        }
        let cleared_lines = self.lock_falling_block();
        GravityOutcome::Locked { cleared_lines }
    }

    /// Writes the falling block's cells into the grid without checking for collisions.
    pub fn merge(&mut self) {
        self.grid.fill_block(&self.falling_block);
    }

    /// Clears every full row, scores it and returns the number of rows cleared.
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.grid.clear_full_rows();
        self.stats.record_cleared_lines(cleared);
        cleared
    }

    fn lock_falling_block(&mut self) -> usize {
        self.merge();
        self.stats.record_locked_block();
        let cleared = self.clear_lines();

        let anchor = self.falling_block.anchor();
        log::debug!(
            "locked {} at ({}, {}), cleared {cleared} lines",
            self.falling_block.kind(),
            anchor.x,
            anchor.y
        );

        self.falling_block = FallingBlock::spawn(self.next_kind);
        self.next_kind = self.source.next_kind();
        log::debug!(
            "spawned {}, next {}",
            self.falling_block.kind(),
            self.next_kind
        );

        if self.is_game_over() {
            log::info!(
                "game over: score {}, {} lines, {} blocks",
                self.stats.score(),
                self.stats.cleared_lines(),
                self.stats.locked_blocks()
            );
        }
        cleared
    }
}
