#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Shape dimensions are at most 4, so casting to i32 never truncates
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use crate::game::{SPAWN_X, SPAWN_Y};
use crate::random::Randomizer;

/// Largest bounding box any tetromino occupies in any orientation.
pub const MAX_SHAPE_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl TetrominoType {
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::I,
        TetrominoType::O,
        TetrominoType::T,
        TetrominoType::S,
        TetrominoType::Z,
        TetrominoType::J,
        TetrominoType::L,
    ];

    /// Uniform draw with replacement; no bag.
    pub fn random<R: Randomizer + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.index(Self::ALL.len())]
    }

    #[must_use]
    pub fn base_shape(self) -> Shape {
        match self {
            TetrominoType::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
            TetrominoType::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
            TetrominoType::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            TetrominoType::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            TetrominoType::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            TetrominoType::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            TetrominoType::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    #[must_use]
    pub fn color(self) -> BlockColor {
        match self {
            TetrominoType::I => BlockColor::CYAN,
            TetrominoType::O => BlockColor::YELLOW,
            TetrominoType::T => BlockColor::PURPLE,
            TetrominoType::S => BlockColor::GREEN,
            TetrominoType::Z => BlockColor::RED,
            TetrominoType::J => BlockColor::BLUE,
            TetrominoType::L => BlockColor::ORANGE,
        }
    }
}

/// Opaque color tag carried by board cells. The engine never interprets it;
/// presentation layers read it as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockColor(pub u32);

impl BlockColor {
    pub const CYAN: BlockColor = BlockColor(0x00E5E5);
    pub const YELLOW: BlockColor = BlockColor(0xFFD700);
    pub const PURPLE: BlockColor = BlockColor(0xD946EF);
    pub const GREEN: BlockColor = BlockColor(0x00D500);
    pub const RED: BlockColor = BlockColor(0xFF3030);
    pub const BLUE: BlockColor = BlockColor(0x4169FF);
    pub const ORANGE: BlockColor = BlockColor(0xFF8C00);

    #[must_use]
    pub fn rgb(self) -> u32 {
        self.0
    }
}

/// Occupancy matrix inside a fixed 4x4 box. Cells outside `rows x cols` are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Builds a shape from nonzero/zero rows. All rows must have the same length.
    #[must_use]
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_SIZE);
        let cols = rows[0].len();
        debug_assert!(cols <= MAX_SHAPE_SIZE && rows.iter().all(|r| r.len() == cols));

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                cells[i][j] = value != 0;
            }
        }
        Self {
            cells,
            rows: rows.len(),
            cols,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row][col]
    }

    /// Filled cells as `(row, col)` pairs in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |i| {
            (0..self.cols).filter_map(move |j| self.cells[i][j].then_some((i, j)))
        })
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Clockwise quarter turn: cell (i, j) lands on (j, rows - 1 - i).
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, j) in self.filled() {
            cells[j][self.rows - 1 - i] = true;
        }
        Self {
            cells,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A falling piece. It is a plain value: copying it is how speculative moves
/// are tried before being committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub tetromino_type: TetrominoType,
    pub position: Position,
    shape: Shape,
    color: BlockColor,
}

impl Tetromino {
    #[must_use]
    pub fn new(tetromino_type: TetrominoType) -> Self {
        Self::at(tetromino_type, SPAWN_X, SPAWN_Y)
    }

    #[must_use]
    pub fn at(tetromino_type: TetrominoType, x: i32, y: i32) -> Self {
        Self {
            tetromino_type,
            position: Position { x, y },
            shape: tetromino_type.base_shape(),
            color: tetromino_type.color(),
        }
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn color(&self) -> BlockColor {
        self.color
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Absolute `(x, y)` board coordinates of every filled cell. `y` may be negative.
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let Position { x, y } = self.position;
        self.shape
            .filled()
            .map(move |(row, col)| (x + col as i32, y + row as i32))
    }

    // No collision checks below; callers validate against the board.

    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated();
    }

    pub fn move_left(&mut self) {
        self.position.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.position.x += 1;
    }

    pub fn move_down(&mut self) {
        self.position.y += 1;
    }

    pub fn shift(&mut self, dx: i32) {
        self.position.x += dx;
    }
}
