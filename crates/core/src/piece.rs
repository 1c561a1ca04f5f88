//! Piece module - a movable tetromino instance
//!
//! A piece owns a copy of its catalog mask, so rotating it never touches the
//! catalog. Moves are validated against the board and rolled back when they
//! collide; rotation only clamps the anchor into the board rectangle.

use crate::board::Board;
use crate::pieces::{filled_cells, rotate_cw, shape_of, Mask};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MASK_SIZE, SPAWN_X, SPAWN_Y};

/// A tetromino with an anchor (top-left corner of its mask) and its own mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub mask: Mask,
}

impl Piece {
    /// Create a new piece of `kind` at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            mask: *shape_of(kind),
        }
    }

    /// Same piece placed at (x, y)
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Move the anchor back to the spawn position, keeping the mask
    pub fn reset_position(&mut self) {
        self.x = SPAWN_X;
        self.y = SPAWN_Y;
    }

    /// Board coordinates `(x, y, kind)` of every filled mask cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        filled_cells(&self.mask).map(move |(i, j, kind)| (self.x + j, self.y + i, kind))
    }

    /// Translate by (dx, dy); rolled back if the new position collides
    pub fn try_shift(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        self.x += dx;
        self.y += dy;
        if board.collides(self) {
            self.x -= dx;
            self.y -= dy;
            return false;
        }
        true
    }

    /// Rotate the mask clockwise and clamp the anchor into the board.
    ///
    /// The clamp keeps the whole 4x4 mask inside the columns, below row 0 and
    /// above the floor. Locked cells are not consulted, so the result may
    /// overlap the stack.
    pub fn rotate(&mut self) {
        self.mask = rotate_cw(&self.mask);

        let size = MASK_SIZE as i8;
        if self.x < 0 {
            self.x = 0;
        } else if self.x + size > BOARD_WIDTH as i8 {
            self.x = BOARD_WIDTH as i8 - size;
        }
        if self.y + size > BOARD_HEIGHT as i8 {
            self.y = BOARD_HEIGHT as i8 - size;
        } else if self.y <= 0 {
            self.y = 1;
        }
    }

    /// Number of rows the piece can fall before it would collide
    pub fn drop_distance(&self, board: &Board) -> i8 {
        let mut cursor = *self;
        let mut distance = 0;
        while !board.collides(&cursor.at(cursor.x, cursor.y + 1)) {
            cursor.y += 1;
            distance += 1;
        }
        distance
    }

    /// The piece translated straight down to its landing row
    pub fn landing(&self, board: &Board) -> Self {
        self.at(self.x, self.y + self.drop_distance(board))
    }
}
