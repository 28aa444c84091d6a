#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board dimensions are tiny, casts between usize and i32 never truncate or wrap
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use log::debug;

use crate::components::{BlockColor, Tetromino, TetrominoType};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::random::Randomizer;

/// A board cell: `None` is empty, `Some(color)` is occupied with that color.
pub type Cell = Option<BlockColor>;

/// Fixed 10x20 playfield. Row 0 is the top, `BOARD_HEIGHT - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    #[must_use]
    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Returns `None` when `(x, y)` lies outside the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        matches!(self.cell(x, y), Some(Some(_)))
    }

    /// Overwrites one cell. Out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = cell;
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.cells.iter()
    }

    /// A piece fits when every filled cell is inside the side walls, above the
    /// floor, and not on an occupied cell. Cells above the top edge are never
    /// checked for occupancy, which lets pieces spawn partly off-screen.
    #[must_use]
    pub fn is_valid_position(&self, piece: &Tetromino) -> bool {
        piece.blocks().all(|(x, y)| {
            if x < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
                return false;
            }
            y < 0 || self.cells[y as usize][x as usize].is_none()
        })
    }

    /// Merges the piece into the grid. Cells outside the board are dropped.
    pub fn place_piece(&mut self, piece: &Tetromino) {
        let color = piece.color();
        for (x, y) in piece.blocks() {
            if (0..BOARD_WIDTH as i32).contains(&x) && (0..BOARD_HEIGHT as i32).contains(&y) {
                self.cells[y as usize][x as usize] = Some(color);
            }
        }
    }

    #[must_use]
    pub fn is_line_full(&self, y: usize) -> bool {
        self.cells
            .get(y)
            .is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Indices of full rows, top to bottom. Does not modify the board.
    #[must_use]
    pub fn full_lines(&self) -> Vec<usize> {
        (0..BOARD_HEIGHT).filter(|&y| self.is_line_full(y)).collect()
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Scans bottom-up; after a removal the same index is checked again since
    /// the row above has slid into it.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT;
        while y > 0 {
            if self.is_line_full(y - 1) {
                self.remove_line(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        if cleared > 0 {
            debug!("Cleared {cleared} line(s)");
        }
        cleared
    }

    fn remove_line(&mut self, y: usize) {
        for row in (1..=y).rev() {
            self.cells[row] = self.cells[row - 1];
        }
        self.cells[0] = [None; BOARD_WIDTH];
    }

    /// Pushes the stack up by `count` rows and fills the bottom `count` rows
    /// with garbage: every cell occupied with a random piece color except one
    /// gap column per row, or two gaps when `count > 3`.
    ///
    /// Only meaningful for `0 < count < BOARD_HEIGHT`; anything else is a no-op.
    pub fn add_starting_lines<R: Randomizer + ?Sized>(&mut self, count: usize, rng: &mut R) {
        if count == 0 || count >= BOARD_HEIGHT {
            return;
        }

        self.cells.copy_within(count.., 0);

        for y in BOARD_HEIGHT - count..BOARD_HEIGHT {
            let first_gap = rng.index(BOARD_WIDTH);
            // Uniform over the other columns, so it always differs from the first
            let second_gap = (first_gap + 1 + rng.index(BOARD_WIDTH - 1)) % BOARD_WIDTH;

            for x in 0..BOARD_WIDTH {
                self.cells[y][x] = if x == first_gap || (count > 3 && x == second_gap) {
                    None
                } else {
                    Some(TetrominoType::random(rng).color())
                };
            }
        }
        debug!("Seeded {count} starting line(s)");
    }

    /// Topmost row that holds any block, or `BOARD_HEIGHT` when empty.
    #[must_use]
    pub fn highest_block_row(&self) -> usize {
        self.cells
            .iter()
            .position(|row| row.iter().any(Option::is_some))
            .unwrap_or(BOARD_HEIGHT)
    }

    /// How close the stack is to the top, in `[0, 1]`. An empty board is 0.
    #[must_use]
    pub fn fill_level(&self) -> f32 {
        let highest = self.highest_block_row();
        if highest == BOARD_HEIGHT {
            return 0.0;
        }
        (1.0 - highest as f32 / BOARD_HEIGHT as f32).clamp(0.0, 1.0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
