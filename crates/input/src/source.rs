//! Input sources: where key presses come from.
//!
//! The game loop polls once per tick. A poll returns at most one key and
//! waits no longer than the given timeout; `Ok(None)` means the tick passed
//! without input.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{map_key, KeyInput};

/// A non-blocking stream of key presses
pub trait InputSource {
    /// Wait up to `timeout` for one key press
    fn poll(&mut self, timeout: Duration) -> Result<Option<KeyInput>>;
}

/// Key presses read from the terminal through crossterm.
///
/// Release events and non-key events (resize, focus, mouse) are swallowed
/// and reported as "no key" for the tick.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> Result<Option<KeyInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(map_key(key))),
            _ => Ok(None),
        }
    }
}

/// A fixed sequence of polls, for driving the loop in tests.
///
/// Each entry is the result of one poll; once the script runs out every
/// poll fails with `io::ErrorKind::UnexpectedEof`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<KeyInput>>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<KeyInput>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _timeout: Duration) -> Result<Option<KeyInput>> {
        match self.script.pop_front() {
            Some(entry) => Ok(entry),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted").into()),
        }
    }
}
