//! Snapshot module - the read-only view handed to renderers
//!
//! A snapshot carries everything a frame needs: the locked cells as color
//! identities, the active/ghost/next/held pieces and the counters. It is
//! plain `Copy` data so renderers never borrow the live game state.

use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Color-identity grid, `board[y][x]`, 0 = empty
pub type ColorGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Session phase as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Created but not started (start menu)
    #[default]
    Ready,
    /// A piece is falling
    Falling,
    /// Board frozen, waiting for restart
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: ColorGrid,
    pub active: Option<Piece>,
    pub ghost: Option<Piece>,
    pub next: Option<Piece>,
    pub held: Option<Piece>,
    pub can_hold: bool,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost: None,
            next: None,
            held: None,
            can_hold: true,
            phase: Phase::Ready,
            score: 0,
            level: 0,
            lines: 0,
        }
    }
}
