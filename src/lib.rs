//! Terminal Tetris (workspace facade crate).
//!
//! The game is split across crates under `crates/`; this package re-exports
//! them as `tty_tetris::{core,input,term,types}` and adds the application
//! layer (configuration, logging and the tick-driven game loop).

pub mod app;
pub mod config;
pub mod logging;

pub use tty_tetris_core as core;
pub use tty_tetris_input as input;
pub use tty_tetris_term as term;
pub use tty_tetris_types as types;
