use serde::Serialize;

/// Points awarded for each cleared row.
pub const SCORE_PER_LINE: usize = 100;

/// Running totals for one game.
///
/// Every cleared row is worth [`SCORE_PER_LINE`] on its own: there are no
/// bonuses for clearing several rows at once.
///
/// # Example
///
/// ```
/// use block_blaster_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_cleared_lines(3);
/// stats.record_locked_block();
///
/// assert_eq!(stats.score(), 300);
/// assert_eq!(stats.cleared_lines(), 3);
/// assert_eq!(stats.locked_blocks(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: usize,
    cleared_lines: usize,
    locked_blocks: usize,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            cleared_lines: 0,
            locked_blocks: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Total rows cleared so far.
    #[must_use]
    pub const fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Number of blocks merged into the grid so far.
    #[must_use]
    pub const fn locked_blocks(&self) -> usize {
        self.locked_blocks
    }

    pub const fn record_cleared_lines(&mut self, lines: usize) {
        self.cleared_lines += lines;
        self.score += lines * SCORE_PER_LINE;
    }

    pub const fn record_locked_block(&mut self) {
        self.locked_blocks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        let stats = GameStats::new();
        assert_eq!(stats, GameStats::default());
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.cleared_lines(), 0);
        assert_eq!(stats.locked_blocks(), 0);
    }

    #[test]
    fn test_score_is_linear_in_lines() {
        let mut stats = GameStats::new();
        stats.record_cleared_lines(1);
        assert_eq!(stats.score(), 100);
        stats.record_cleared_lines(4);
        assert_eq!(stats.score(), 500);
        stats.record_cleared_lines(0);
        assert_eq!(stats.score(), 500);
        assert_eq!(stats.cleared_lines(), 5);
    }

    #[test]
    fn test_serialization_field_names() {
        let mut stats = GameStats::new();
        stats.record_cleared_lines(2);
        stats.record_locked_block();
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "score": 200, "cleared_lines": 2, "locked_blocks": 1 })
        );
    }
}
