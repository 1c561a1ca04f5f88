//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure: a snapshot goes in, a framebuffer comes out
//! - 2 chars wide per board cell to offset the terminal glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tty_tetris_core as core;
pub use tty_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, Banner, GameView, Viewport, VISIBLE_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
