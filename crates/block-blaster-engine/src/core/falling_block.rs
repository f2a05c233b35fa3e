use super::{
    GRID_WIDTH,
    shape::{Shape, ShapeKind},
};

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const SPAWN_CENTER_X: i32 = (GRID_WIDTH / 2) as i32;

/// Grid coordinate of a shape's top-left corner.
///
/// Coordinates are signed: a rotated shape may have empty leading columns, so
/// its anchor can sit left of column 0 while every occupied cell stays
/// in bounds. Rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

impl Anchor {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the anchor shifted by `(dx, dy)`, or `None` if a coordinate overflows.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

/// The block currently under player control.
///
/// Values are immutable: moving or rotating returns a new block, which the
/// caller validates against the grid before committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingBlock {
    kind: ShapeKind,
    shape: Shape,
    anchor: Anchor,
}

impl FallingBlock {
    /// Creates a block of `kind` at the spawn position, centered horizontally on row 0.
    #[must_use]
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = kind.shape();
        let x = SPAWN_CENTER_X - i32::from(shape.size() / 2);
        Self::new(kind, shape, Anchor::new(x, 0))
    }

    #[must_use]
    pub const fn new(kind: ShapeKind, shape: Shape, anchor: Anchor) -> Self {
        Self {
            kind,
            shape,
            anchor,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns the block shifted by `(dx, dy)`, or `None` if the anchor would overflow.
    #[must_use]
    pub const fn moved(self, dx: i32, dy: i32) -> Option<Self> {
        match self.anchor.offset(dx, dy) {
            Some(anchor) => Some(Self { anchor, ..self }),
            None => None,
        }
    }

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self {
            shape: self.shape.rotated_right(),
            ..self
        }
    }

    /// Iterates over the grid coordinates `(x, y)` of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(|(dx, dy)| (self.anchor.x + i32::from(dx), self.anchor.y + i32::from(dy)))
    }
}
