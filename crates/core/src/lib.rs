//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`pieces`]: The seven 4x4 tetromino masks and clockwise mask rotation
//! - [`board`]: 10x21 grid with collision queries, locking and row compaction
//! - [`piece`]: A movable piece with its own mask copy, moves and clamped rotation
//! - [`scoring`]: Line-clear points, level progression and gravity interval
//! - [`rng`]: Uniform random piece selection
//! - [`game_state`]: The session loop state machine
//! - [`snapshot`]: Read-only frame data for renderers
//!
//! # Game Rules
//!
//! - **Random pieces**: each spawn draws uniformly from the seven kinds
//! - **Rotation**: plain 90° clockwise mask rotation with the anchor clamped into the board
//! - **Ghost Piece**: Shows where the current piece will land
//! - **Hold**: Store one piece for later use (once per spawn)
//! - **Scoring**: 40/100/300/1200 times the level
//!
//! # Example
//!
//! ```
//! use tty_tetris_core::GameState;
//! use tty_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.step(Some(GameAction::MoveRight));
//! game.step(Some(GameAction::Rotate));
//! game.step(Some(GameAction::HardDrop));
//!
//! assert!(game.board().occupied_count() > 0);
//! ```
//!
//! # Timing
//!
//! One call to [`GameState::step`](game_state::GameState::step) is one tick.
//! Gravity fires every `gravity_interval` ticks (10 at level 1, one less per level).

pub mod board;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tty_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{GameState, StepOutcome, Transition};
pub use piece::Piece;
pub use pieces::{rotate_cw, shape_of, Mask};
pub use rng::{PieceRng, SimpleRng};
pub use scoring::{calculate_line_score, Scoring};
pub use snapshot::{ColorGrid, GameSnapshot, Phase};
