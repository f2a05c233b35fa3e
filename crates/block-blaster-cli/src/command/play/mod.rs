use std::{path::PathBuf, time::Duration};

use block_blaster_engine::{Game, GameConfig, RandomShapes, ShapeSeed};
use chrono::Utc;
use rand::Rng as _;

use crate::{tui::Tui, util};

use self::{app::PlayApp, summary::SessionSummary};

mod app;
mod input;
mod summary;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Shape seed as 32 hex digits (random if omitted)
    #[clap(long)]
    seed: Option<ShapeSeed>,
    /// Time between two gravity steps, in milliseconds
    #[clap(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    fall_interval_ms: u64,
    /// Ticks and frames per second
    #[clap(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,
    /// Write logs to this file (filter with `RUST_LOG`)
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Print a JSON summary of the last game to stdout on exit
    #[clap(long, default_value_t = false)]
    summary: bool,
}

impl PlayArg {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            fall_interval: Duration::from_millis(self.fall_interval_ms),
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    if let Some(path) = &arg.log_file {
        util::init_file_logger(path)?;
    }

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    let config = arg.game_config();
    log::info!(
        "starting game: seed {seed}, fall interval {:?}, {} fps",
        config.fall_interval,
        arg.fps
    );

    let game = Game::with_source(RandomShapes::with_seed(seed), config);
    let mut app = PlayApp::new(game, arg.fps);
    Tui::new().run(&mut app)?;

    let summary = SessionSummary::new(seed, Utc::now(), &app);
    log::info!(
        "session finished: score {}, game over {}",
        summary.stats.score(),
        summary.game_over
    );
    if arg.summary {
        util::print_json(&summary)?;
    }
    Ok(())
}
