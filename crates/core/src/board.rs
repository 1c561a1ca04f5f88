//! Board module - manages the game grid
//!
//! The board is a 10x21 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..20 (top to bottom).
//! Row 0 is the spawn buffer; pieces may also hang above it (negative y).

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one [`Board::clear_completed_rows`] call
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 21 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether a single cell blocks a piece.
    ///
    /// Columns outside the board and rows at/past the bottom block. Rows above
    /// the top never block.
    pub fn blocks(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Check whether any filled cell of the piece blocks at its anchor
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y, _)| self.blocks(x, y))
    }

    /// Write every filled cell of the piece into the board.
    ///
    /// Callers check [`Board::collides`] first; cells that fall outside the
    /// grid (above the top row) are skipped.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y, kind) in piece.cells() {
            self.set(x, y, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear every complete row, scanning bottom to top.
    ///
    /// After a row is removed the same index is tested again, since it now
    /// holds the row that was above it. Returns the cleared rows as indices
    /// into the board as it was before the call, bottom to top.
    pub fn clear_completed_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                cleared.push(row - cleared.len());
                self.clear_row(row);
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Write color identities (0 = empty) into a row-major grid
    pub fn write_color_grid(
        &self,
        out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x].map_or(0, |kind| kind.color());
            }
        }
    }

    /// Fill a whole row with one kind
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }
        let start = y * BOARD_WIDTH as usize;
        for cell in &mut self.cells[start..start + BOARD_WIDTH as usize] {
            *cell = Some(kind);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Count occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
