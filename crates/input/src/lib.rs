//! Terminal input module.
//!
//! This module is independent of the game core. It maps `crossterm` key
//! events into the game's input vocabulary and exposes input as a
//! non-blocking source: every poll waits at most one tick and reports
//! "no key" when nothing arrived.

pub mod map;
pub mod source;

pub use tty_tetris_types as types;

pub use map::{handle_key_event, map_key, should_quit, KeyInput};
pub use source::{InputSource, ScriptedInput, TerminalInput};
