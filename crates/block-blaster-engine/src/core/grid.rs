use serde::Serialize;

use super::{GRID_HEIGHT, GRID_WIDTH, falling_block::FallingBlock};

const FULL_ROW_MASK: u16 = (1 << GRID_WIDTH) - 1;

/// One grid row, stored as a bitmask where bit `x` marks column `x` as occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridRow {
    bits: u16,
}

impl GridRow {
    pub const EMPTY: Self = Self { bits: 0 };
    pub const FULL: Self = Self {
        bits: FULL_ROW_MASK,
    };

    #[inline]
    #[must_use]
    pub fn is_full(self) -> bool {
        self.bits == FULL_ROW_MASK
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Checks if the cell in column `x` is occupied. Columns past the edge read as empty.
    #[inline]
    #[must_use]
    pub fn is_occupied(self, x: usize) -> bool {
        x < GRID_WIDTH && (self.bits & (1 << x)) != 0
    }

    #[inline]
    fn occupy(&mut self, x: usize) {
        debug_assert!(x < GRID_WIDTH);
        self.bits |= 1 << x;
    }

    /// Iterates over the cells from left to right.
    pub fn cells(self) -> impl Iterator<Item = bool> {
        (0..GRID_WIDTH).map(move |x| self.is_occupied(x))
    }
}

/// Fixed 10×20 occupancy grid.
///
/// Row 0 is the top row. Cells are only ever set by [`Grid::fill_block`] and
/// only ever cleared by [`Grid::clear_full_rows`].
///
/// # Example
///
/// ```
/// use block_blaster_engine::{FallingBlock, Grid, ShapeKind};
///
/// let mut grid = Grid::EMPTY;
/// let block = FallingBlock::spawn(ShapeKind::O).moved(0, 18).unwrap();
/// assert!(grid.fits(&block));
///
/// grid.fill_block(&block);
/// assert!(grid.is_occupied(4, 19));
/// assert!(!grid.fits(&block));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [GridRow; GRID_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const WIDTH: usize = GRID_WIDTH;
    pub const HEIGHT: usize = GRID_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [GridRow::EMPTY; GRID_HEIGHT],
    };

    /// Returns row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= Grid::HEIGHT`.
    #[must_use]
    pub fn row(&self, y: usize) -> GridRow {
        self.rows[y]
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = GridRow> + '_ {
        self.rows.iter().copied()
    }

    /// Checks if cell `(x, y)` is occupied. Coordinates outside the grid read as empty.
    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.rows.get(y).is_some_and(|row| row.is_occupied(x))
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.bits.count_ones() as usize)
            .sum()
    }

    /// Checks whether `block` may occupy its current position.
    ///
    /// Every occupied cell must lie in columns `0..WIDTH` and rows `..HEIGHT`,
    /// and must not overlap an occupied grid cell. Rows above the top edge are
    /// allowed and never collide.
    #[must_use]
    pub fn fits(&self, block: &FallingBlock) -> bool {
        block.cells().all(|(x, y)| self.is_free(x, y))
    }

    fn is_free(&self, x: i32, y: i32) -> bool {
        let Ok(x) = usize::try_from(x) else {
            return false;
        };
        if x >= GRID_WIDTH {
            return false;
        }
        match usize::try_from(y) {
            Ok(y) => y < GRID_HEIGHT && !self.rows[y].is_occupied(x),
            Err(_) => true,
        }
    }

    /// Marks every occupied cell of `block` as occupied in the grid.
    ///
    /// No collision check is made. Cells outside the grid are dropped.
    pub fn fill_block(&mut self, block: &FallingBlock) {
        for (x, y) in block.cells() {
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                && x < GRID_WIDTH
                && y < GRID_HEIGHT
            {
                self.rows[y].occupy(x);
            }
        }
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Rows above a removed row shift down; empty rows fill the top.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut count = 0;
        for y in (0..GRID_HEIGHT).rev() {
            if self.rows[y].is_full() {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y];
            }
        }
        self.rows[..count].fill(GridRow::EMPTY);
        count
    }

    /// Checks whether any cell in the top row is occupied.
    #[must_use]
    pub fn is_top_row_occupied(&self) -> bool {
        !self.rows[0].is_empty()
    }

    /// Creates a grid from ASCII art, mainly for tests.
    ///
    /// `#` is an occupied cell and `.` an empty one. Each non-blank line must
    /// have exactly 10 cells. Lines fill the grid from the bottom up, so the
    /// last line is row 19; up to 20 lines may be given.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert!(
            lines.len() <= GRID_HEIGHT,
            "At most {GRID_HEIGHT} rows allowed, got {}",
            lines.len()
        );

        let mut grid = Self::EMPTY;
        let top = GRID_HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| *c == '#' || *c == '.').collect();
            assert_eq!(
                cells.len(),
                GRID_WIDTH,
                "Each row must have exactly {GRID_WIDTH} cells, got {} at line {i}",
                cells.len(),
            );
            for (x, &c) in cells.iter().enumerate() {
                if c == '#' {
                    grid.rows[top + i].occupy(x);
                }
            }
        }
        grid
    }

    fn row_to_string(row: GridRow) -> String {
        row.cells().map(|c| if c { '#' } else { '.' }).collect()
    }
}

/// Serialized as an array of 20 strings of `#`/`.`, top row first.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.rows.iter().map(|row| Self::row_to_string(*row)))
    }
}
