use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// What occupies one on-screen cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    /// Part of a block merged into the grid.
    Locked,
    /// Part of the falling block.
    Falling,
    /// Part of the next-block preview.
    Preview,
}

#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_kind(kind: CellKind, show_dots: bool) -> Self {
        match kind {
            CellKind::Empty if show_dots => Self::new(style::EMPTY_DOT, "."),
            CellKind::Empty => Self::new(style::EMPTY, ""),
            CellKind::Locked => Self::new(style::LOCKED, ""),
            CellKind::Falling => Self::new(style::FALLING, ""),
            CellKind::Preview => Self::new(style::PREVIEW, ""),
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
