use std::time::Duration;

use block_blaster_engine::{FallingBlock, Game, GameState, GameStats, Grid, ShapeKind, ShapeSource};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{GridDisplay, ShapeDisplay, StatsDisplay, color, style};

pub const GAME_OVER_MESSAGE: [&str; 2] = ["GAME OVER!", "Press R to restart"];

/// Whole play screen: stats on the left, grid in the middle and the next block on the right.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    grid: &'a Grid,
    falling_block: FallingBlock,
    next_kind: ShapeKind,
    stats: &'a GameStats,
    state: GameState,
    play_time: Duration,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> GameDisplay<'a> {
    pub fn new<S>(game: &'a Game<S>, play_time: Duration) -> Self
    where
        S: ShapeSource,
    {
        Self {
            grid: game.grid(),
            falling_block: *game.falling_block(),
            next_kind: game.next_kind(),
            stats: game.stats(),
            state: game.state(),
            play_time,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }

    fn border_style(&self) -> ratatui::style::Color {
        match self.state {
            GameState::Playing => color::WHITE,
            GameState::GameOver => color::RED,
        }
    }

    fn grid_display(&self) -> GridDisplay<'a> {
        GridDisplay::new(self.grid)
            .falling_block(self.falling_block)
            .block(
                Block::bordered()
                    .border_style(self.border_style())
                    .style(style::DEFAULT),
            )
    }

    pub fn height(&self) -> u16 {
        self.grid_display().height()
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let border_style = self.border_style();

        let grid_display = self.grid_display();
        let next_panel = ShapeDisplay::new().kind(self.next_kind).block(
            Block::bordered()
                .title(Line::from("NEXT").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );
        let stats_panel = StatsDisplay::new(self.stats, self.play_time).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats_panel.width()),
            Constraint::Length(grid_display.width()),
            Constraint::Length(next_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats_panel.height())]).areas(left_column);
        let [grid_area] =
            Layout::vertical([Constraint::Length(grid_display.height())]).areas(center_column);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_panel.height())]).areas(right_column);

        let grid_width = grid_display.width();
        stats_panel.render(stats_area, buf);
        grid_display.render(grid_area, buf);
        next_panel.render(next_area, buf);

        if self.state.is_game_over() {
            let popup_style = style::GAME_OVER_POPUP;
            let block = Block::new().style(popup_style);
            let text = Text::from_iter(GAME_OVER_MESSAGE)
                .style(popup_style)
                .centered();
            let area = grid_area.centered(Constraint::Length(grid_width), Constraint::Length(4));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(2)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use block_blaster_engine::GameConfig;

    use super::*;

    struct OnlyO;

    impl ShapeSource for OnlyO {
        fn next_kind(&mut self) -> ShapeKind {
            ShapeKind::O
        }
    }

    fn render(game: &Game<OnlyO>) -> Vec<String> {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        GameDisplay::new(game, Duration::ZERO).render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_panels_are_titled() {
        let game = Game::with_source(OnlyO, GameConfig::default());
        let screen = render(&game).join("\n");
        assert!(screen.contains("STATS"));
        assert!(screen.contains("NEXT"));
        assert!(screen.contains("SCORE:"));
        assert!(!screen.contains(GAME_OVER_MESSAGE[0]));
    }

    #[test]
    fn test_game_over_popup() {
        let mut game = Game::with_source(OnlyO, GameConfig::default());
        while !game.is_game_over() {
            game.hard_drop();
            game.advance_time(Duration::from_secs(1));
        }
        let screen = render(&game);
        for message in GAME_OVER_MESSAGE {
            assert!(screen.iter().any(|line| line.contains(message)), "{message}");
        }
    }
}
