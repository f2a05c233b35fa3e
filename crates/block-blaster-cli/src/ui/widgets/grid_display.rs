use std::iter;

use block_blaster_engine::{FallingBlock, Grid};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{CellDisplay, CellKind};

type Cells = [[CellKind; Grid::WIDTH]; Grid::HEIGHT];

#[derive(Debug)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    falling_block: Option<FallingBlock>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            falling_block: None,
            block: None,
        }
    }

    pub fn falling_block(self, falling_block: FallingBlock) -> Self {
        Self {
            falling_block: Some(falling_block),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        Grid::WIDTH as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        Grid::HEIGHT as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Locked cells with the falling block drawn on top.
    ///
    /// Falling cells above the grid are not shown.
    fn cells(&self) -> Cells {
        let mut cells = [[CellKind::Empty; Grid::WIDTH]; Grid::HEIGHT];
        for (row, grid_row) in iter::zip(&mut cells, self.grid.rows()) {
            for (cell, occupied) in iter::zip(row, grid_row.cells()) {
                if occupied {
                    *cell = CellKind::Locked;
                }
            }
        }
        if let Some(falling_block) = &self.falling_block {
            for (x, y) in falling_block.cells() {
                if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                    && x < Grid::WIDTH
                    && y < Grid::HEIGHT
                {
                    cells[y][x] = CellKind::Falling;
                }
            }
        }
        cells
    }
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..Grid::WIDTH).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..Grid::HEIGHT).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let screen_cells = area
            .layout::<{ Grid::HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Grid::WIDTH }>(&horizontal));

        for (screen_row, row) in iter::zip(screen_cells, self.cells()) {
            for (screen_cell, kind) in iter::zip(screen_row, row) {
                CellDisplay::from_kind(kind, true).render(screen_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use block_blaster_engine::ShapeKind;
    use ratatui::widgets::Block;

    use super::*;
    use crate::ui::widgets::style;

    #[test]
    fn test_falling_block_over_locked_cells() {
        let grid = Grid::from_ascii("#.........");
        let display = GridDisplay::new(&grid).falling_block(FallingBlock::spawn(ShapeKind::T));
        let cells = display.cells();

        assert_eq!(cells[19][0], CellKind::Locked);
        assert_eq!(cells[19][1], CellKind::Empty);
        assert_eq!(cells[0][5], CellKind::Falling);
        assert_eq!(cells[1][4], CellKind::Falling);
        assert_eq!(cells[0][4], CellKind::Empty);
    }

    #[test]
    fn test_cells_above_grid_are_hidden() {
        let grid = Grid::EMPTY;
        let block = FallingBlock::spawn(ShapeKind::O).moved(0, -1).unwrap();
        let display = GridDisplay::new(&grid).falling_block(block);
        let falling = display
            .cells()
            .iter()
            .flatten()
            .filter(|kind| **kind == CellKind::Falling)
            .count();
        assert_eq!(falling, 2);
    }

    #[test]
    fn test_render_into_buffer() {
        let grid = Grid::from_ascii("..........\n.........#");
        let display = GridDisplay::new(&grid).block(Block::bordered());
        assert_eq!((display.width(), display.height()), (22, 22));

        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        (&display).render(area, &mut buf);

        // Inside the border, each grid cell is two columns wide.
        assert_eq!(buf[(19, 20)].style().bg, style::LOCKED.bg);
        assert_eq!(buf[(20, 20)].style().bg, style::LOCKED.bg);
        assert_eq!(buf[(1, 20)].style().bg, style::EMPTY_DOT.bg);
    }
}
