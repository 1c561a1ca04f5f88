//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 21 rows (indexed 0-20); row 0 is the hidden spawn buffer
//! - **Spawn anchor**: (`BOARD_WIDTH / 2 - 2`, 0) = (3, 0)
//!
//! # Timing
//!
//! The game advances in whole ticks. One tick is one input poll:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Input poll timeout, doubles as the tick length |
//! | `GRAVITY_INTERVAL` | 10 | Ticks per gravity step at level 1 |
//! | `MAX_LEVEL` | 10 | Level (and gravity) stops increasing here |
//! | `LINE_CLEAR_BANNER_MS` | 600 | Row-clear banner pause |
//! | `LEVEL_UP_BANNER_MS` | 200 | Level-up banner pause |
//!
//! # Examples
//!
//! ```
//! use tty_tetris_types::{PieceKind, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color(), 5);
//! assert_eq!(PieceKind::from_color(5), Some(PieceKind::T));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 21);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (21 rows, including the spawn buffer row)
pub const BOARD_HEIGHT: u8 = 21;

/// Side length of a piece mask
pub const MASK_SIZE: usize = 4;

/// Spawn anchor column for every piece
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Spawn anchor row for every piece
pub const SPAWN_Y: i8 = 0;

/// Input poll timeout in milliseconds; one poll is one tick
pub const TICK_MS: u32 = 100;

/// Gravity interval at level 1, in ticks
pub const GRAVITY_INTERVAL: u32 = 10;

/// Starting level of every session
pub const START_LEVEL: u32 = 1;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 10;

/// Lines required per level (`lines >= LINES_PER_LEVEL * level` levels up)
pub const LINES_PER_LEVEL: u32 = 10;

/// How long the row-clear banner stays up (ms)
pub const LINE_CLEAR_BANNER_MS: u32 = 600;

/// How long each level-up flash step lasts (ms)
pub const LEVEL_UP_BANNER_MS: u32 = 200;

/// Line clear scoring table
///
/// Base points for clearing N lines with one lock:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the current level (which starts at 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
///
/// Each kind carries a color identity (1-7) that is written into the board
/// when the piece locks. The identity is only used for rendering:
/// - **I**: 1, cyan bar
/// - **O**: 2, yellow square
/// - **S**: 3, green
/// - **Z**: 4, red
/// - **T**: 5, magenta
/// - **J**: 6, blue
/// - **L**: 7, orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    T,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order (index = color - 1)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color identity code (1-7)
    pub fn color(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::T => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Look up a kind from its color identity
    ///
    /// # Examples
    ///
    /// ```
    /// use tty_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_color(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_color(0), None);
    /// assert_eq!(PieceKind::from_color(8), None);
    /// ```
    pub fn from_color(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Kind at catalog index `index % 7`
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 7) as usize]
    }
}

/// Player actions understood by the session loop
///
/// Absence of input within a poll ("none") is modelled as `Option::None`
/// by callers, not as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Rotate the piece mask 90° clockwise
    Rotate,
    /// Set the active piece aside (once per spawn)
    Hold,
    /// Start a new session (only honored after game over)
    Restart,
}

/// A cell on the game board or in a piece mask
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Filled cell carrying the kind's color identity
pub type Cell = Option<PieceKind>;

/// Event emitted after a piece locks and rows are cleared.
///
/// Consumed by the presentation layer to show row-clear and level-up banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub leveled_up: bool,
}
