use block_blaster_engine::{Shape, ShapeKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::{CellDisplay, CellKind};

/// Preview of a block kind in its spawn orientation, trimmed to its occupied cells.
#[derive(Debug)]
pub struct ShapeDisplay<'a> {
    kind: Option<ShapeKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ShapeDisplay<'a> {
    pub fn new() -> Self {
        Self {
            kind: None,
            block: None,
        }
    }

    pub fn kind(self, kind: ShapeKind) -> Self {
        Self {
            kind: Some(kind),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

/// Offset and size `(x, y, width, height)` of the smallest box holding every occupied cell.
fn occupied_bounds(shape: Shape) -> (u8, u8, u8, u8) {
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (u8::MAX, u8::MAX, 0, 0);
    for (x, y) in shape.cells() {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    if min_x > max_x {
        return (0, 0, 0, 0);
    }
    (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
}

impl Widget for ShapeDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ShapeDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let empty_cell = CellDisplay::from_kind(CellKind::Empty, false);
        Widget::render(&empty_cell, area, buf);

        let Some(kind) = self.kind else {
            return;
        };
        let shape = kind.shape();
        let (offset_x, offset_y, width, height) = occupied_bounds(shape);
        let shape_area = area.centered(
            Constraint::Length(u16::from(width) * CellDisplay::width()),
            Constraint::Length(u16::from(height) * CellDisplay::height()),
        );

        let col_constraints = (0..width).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..height).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let screen_rows = shape_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let occupied_cell = CellDisplay::from_kind(CellKind::Preview, false);
        for (y, screen_row) in screen_rows.enumerate() {
            for (x, screen_cell) in screen_row.into_iter().enumerate() {
                let shape_x = x + usize::from(offset_x);
                let shape_y = y + usize::from(offset_y);
                if shape.is_occupied(shape_x, shape_y) {
                    Widget::render(&occupied_cell, screen_cell, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_trim_empty_rows() {
        assert_eq!(occupied_bounds(ShapeKind::I.shape()), (0, 0, 4, 1));
        assert_eq!(occupied_bounds(ShapeKind::O.shape()), (0, 0, 2, 2));
        assert_eq!(occupied_bounds(ShapeKind::T.shape()), (0, 0, 3, 2));
        assert_eq!(
            occupied_bounds(ShapeKind::T.shape().rotated_right()),
            (1, 0, 2, 3)
        );
    }

    #[test]
    fn test_every_preview_fits_panel() {
        for kind in ShapeKind::ALL {
            let (_, _, width, height) = occupied_bounds(kind.shape());
            assert!(
                width <= 4 && height <= 2,
                "{kind} preview is {width}x{height}"
            );
        }
    }
}
