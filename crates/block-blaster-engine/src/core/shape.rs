use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

/// Side length of the largest shape bounding box (the I-block).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Immutable square occupancy matrix of a block.
///
/// Each row is stored as a bitmask where bit `x` marks column `x` as occupied.
/// The matrix is always square, so rotating it never changes its size and
/// four clockwise rotations give back the original shape.
///
/// # Example
///
/// ```
/// use block_blaster_engine::ShapeKind;
///
/// let t = ShapeKind::T.shape();
/// assert_eq!(t.size(), 3);
/// assert!(t.is_occupied(1, 0));
/// assert_eq!(t.rotated_right().rotated_right().rotated_right().rotated_right(), t);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [u8; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Builds a shape from `#`/`.` rows at compile time.
    ///
    /// Panics (at compile time when used in a constant) if the art is not square
    /// or contains other characters.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_art<const N: usize>(art: [&str; N]) -> Self {
        assert!(N > 0 && N <= MAX_SHAPE_SIZE, "shape size out of range");
        let mut rows = [0; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < N {
            let line = art[y].as_bytes();
            assert!(line.len() == N, "shape art must be square");
            let mut x = 0;
            while x < N {
                match line[x] {
                    b'#' => rows[y] |= 1 << x,
                    b'.' => {}
                    _ => panic!("shape art may only contain '#' and '.'"),
                }
                x += 1;
            }
            y += 1;
        }
        Self {
            size: N as u8,
            rows,
        }
    }

    /// Side length of the bounding box.
    #[must_use]
    pub const fn size(self) -> u8 {
        self.size
    }

    #[must_use]
    pub const fn is_occupied(self, x: usize, y: usize) -> bool {
        let size = self.size as usize;
        x < size && y < size && (self.rows[y] & (1 << x)) != 0
    }

    /// Returns the shape rotated 90° clockwise.
    ///
    /// Cell `(x, y)` moves to `(n - 1 - y, x)`, i.e. `new[x][n-1-y] = old[y][x]`
    /// in row-major notation.
    #[must_use]
    pub const fn rotated_right(self) -> Self {
        let n = self.size as usize;
        let mut rows = [0; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < n {
            let mut x = 0;
            while x < n {
                if self.is_occupied(x, y) {
                    rows[x] |= 1 << (n - 1 - y);
                }
                x += 1;
            }
            y += 1;
        }
        Self {
            size: self.size,
            rows,
        }
    }

    /// Iterates over occupied cells as `(x, y)` offsets from the anchor, row by row.
    pub fn cells(self) -> impl Iterator<Item = (u8, u8)> {
        (0..self.size).flat_map(move |y| {
            (0..self.size)
                .filter(move |&x| self.is_occupied(usize::from(x), usize::from(y)))
                .map(move |x| (x, y))
        })
    }
}

/// The seven fixed block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum ShapeKind {
    /// 2×2 square.
    O = 0,
    /// Straight line of four.
    I = 1,
    T = 2,
    S = 3,
    Z = 4,
    J = 5,
    L = 6,
}

const SHAPES: [Shape; ShapeKind::LEN] = [
    // O
    Shape::from_art(["##", "##"]),
    // I
    Shape::from_art(["####", "....", "....", "...."]),
    // T
    Shape::from_art([".#.", "###", "..."]),
    // S
    Shape::from_art([".##", "##.", "..."]),
    // Z
    Shape::from_art(["##.", ".##", "..."]),
    // J
    Shape::from_art(["#..", "###", "..."]),
    // L
    Shape::from_art(["..#", "###", "..."]),
];

/// Uniform pick among the seven kinds.
impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::LEN)]
    }
}

impl ShapeKind {
    /// Number of block kinds (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Returns the spawn orientation of this kind.
    #[must_use]
    pub const fn shape(self) -> Shape {
        SHAPES[self as usize]
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ShapeKind::O => 'O',
            ShapeKind::I => 'I',
            ShapeKind::T => 'T',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
        }
    }

    /// Parses a kind from its single-character name.
    ///
    /// ```
    /// use block_blaster_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_char('S'), Some(ShapeKind::S));
    /// assert_eq!(ShapeKind::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(ShapeKind::O),
            'I' => Some(ShapeKind::I),
            'T' => Some(ShapeKind::T),
            'S' => Some(ShapeKind::S),
            'Z' => Some(ShapeKind::Z),
            'J' => Some(ShapeKind::J),
            'L' => Some(ShapeKind::L),
            _ => None,
        }
    }
}
