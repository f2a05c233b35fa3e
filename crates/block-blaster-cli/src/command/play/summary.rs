use block_blaster_engine::{GameStats, Grid, ShapeSeed};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::app::PlayApp;

/// End-of-session report printed with `--summary`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SessionSummary {
    /// Seed of the shape sequence, reusable with `--seed`
    pub seed: ShapeSeed,
    /// When the session ended (RFC 3339)
    pub finished_at: DateTime<Utc>,
    /// Play time of the last game, excluding time spent on the game over screen
    pub play_time_secs: f64,
    /// Statistics of the last game
    pub stats: GameStats,
    /// Final board as `#`/`.` rows, top row first
    pub grid: Grid,
    pub game_over: bool,
}

impl SessionSummary {
    pub(crate) fn new(seed: ShapeSeed, finished_at: DateTime<Utc>, app: &PlayApp) -> Self {
        Self {
            seed,
            finished_at,
            play_time_secs: app.play_time().as_secs_f64(),
            stats: app.game().stats().clone(),
            grid: app.game().grid().clone(),
            game_over: app.game().is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use block_blaster_engine::{Game, GameConfig, RandomShapes};
    use chrono::TimeZone as _;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::tui::{App as _, Tui};

    #[test]
    fn test_summary_json() {
        let seed: ShapeSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
        let game = Game::with_source(RandomShapes::with_seed(seed), GameConfig::default());
        let mut app = PlayApp::new(game, 60);
        let mut tui = Tui::new();
        app.update(&mut tui, Duration::from_millis(1500));

        let finished_at = Utc.with_ymd_and_hms(2026, 10, 14, 12, 30, 0).unwrap();
        let summary = SessionSummary::new(seed, finished_at, &app);
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["seed"], "0123456789abcdef0123456789abcdef");
        assert_eq!(value["finished_at"], "2026-10-14T12:30:00Z");
        assert_eq!(value["play_time_secs"], 1.5);
        assert_eq!(
            value["stats"],
            serde_json::json!({ "score": 0, "cleared_lines": 0, "locked_blocks": 0 })
        );
        assert_eq!(value["grid"], serde_json::json!(vec![".........."; 20]));
        assert_eq!(value["game_over"], false);
    }

    #[test]
    fn test_summary_records_final_grid() {
        let seed: ShapeSeed = "000000000000000000000000000000ff".parse().unwrap();
        let game = Game::with_source(RandomShapes::with_seed(seed), GameConfig::default());
        let mut app = PlayApp::new(game, 60);
        let mut tui = Tui::new();
        while !app.game().is_game_over() {
            let event = Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
            app.handle_event(&mut tui, event);
            app.update(&mut tui, Duration::from_millis(500));
        }

        let summary = SessionSummary::new(seed, Utc::now(), &app);
        let value = serde_json::to_value(&summary).unwrap();
        let rows = value["grid"].as_array().unwrap();
        assert_eq!(rows.len(), 20);
        assert!(rows[0].as_str().unwrap().contains('#'));
        assert_eq!(value["game_over"], true);
        assert!(value["stats"]["locked_blocks"].as_u64().unwrap() > 0);
    }
}
