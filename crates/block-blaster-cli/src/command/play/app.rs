use std::time::Duration;

use block_blaster_engine::{Game, GameState};
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use super::input::Intent;
use crate::{
    tui::{App, Tui},
    ui::widgets::GameDisplay,
};

#[derive(Debug)]
pub(crate) struct PlayApp {
    game: Game,
    fps: u32,
    play_time: Duration,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(game: Game, fps: u32) -> Self {
        Self {
            game,
            fps,
            play_time: Duration::ZERO,
            is_exiting: false,
        }
    }

    pub(crate) fn game(&self) -> &Game {
        &self.game
    }

    /// Time spent playing the current game.
    pub(crate) fn play_time(&self) -> Duration {
        self.play_time
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::MoveLeft => _ = self.game.move_left(),
            Intent::MoveRight => _ = self.game.move_right(),
            Intent::SoftDrop => _ = self.game.soft_drop(),
            Intent::Rotate => _ = self.game.try_rotate(),
            Intent::HardDrop => _ = self.game.hard_drop(),
            Intent::Reset if self.game.is_game_over() => {
                self.game.reset();
                self.play_time = Duration::ZERO;
            }
            Intent::Reset => {}
            Intent::Quit => self.is_exiting = true,
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(f64::from(self.fps));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        if let Some(intent) = Intent::from_event(&event) {
            self.apply(intent);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let game_display = GameDisplay::new(&self.game, self.play_time);
        let help_text = match self.game.state() {
            GameState::Playing => {
                "Controls: ← → (Move) | ↓ (Soft Drop) | ↑ (Rotate) | Space (Hard Drop) | Q (Quit)"
            }
            GameState::GameOver => "Controls: R (Restart) | Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(game_display.height()),
            Constraint::Length(1),
        ])
        .areas::<2>(frame.area());
        frame.render_widget(game_display, main_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, _tui: &mut Tui, elapsed: Duration) {
        if self.game.is_game_over() {
            return;
        }
        self.play_time += elapsed;
        self.game.advance_time(elapsed);
    }
}
