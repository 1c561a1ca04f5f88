//! Scoring module - line-clear points, level progression and gravity speed
//!
//! Classic rules:
//! - A lock that clears N rows scores `LINE_SCORES[N] * level`.
//! - After `10 * level` total lines the level goes up by one, up to level 10.
//! - Every level gained shortens the gravity interval by one tick.

use crate::types::{
    LockEvent, GRAVITY_INTERVAL, LINES_PER_LEVEL, LINE_SCORES, MAX_LEVEL, START_LEVEL,
};

/// Calculate line clear score
/// lines: number of lines cleared with one lock (capped at 4)
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES[lines.min(4)].saturating_mul(level)
}

/// Score, line count, level and gravity interval of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    score: u32,
    lines: u32,
    level: u32,
    gravity_interval: u32,
}

impl Scoring {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: START_LEVEL,
            gravity_interval: GRAVITY_INTERVAL,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Ticks between gravity steps
    pub fn gravity_interval(&self) -> u32 {
        self.gravity_interval
    }

    /// Account for `cleared` rows removed by one lock
    pub fn record_clear(&mut self, cleared: usize) -> LockEvent {
        if cleared == 0 {
            return LockEvent::default();
        }

        // Points use the level the rows were cleared at.
        let points = calculate_line_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines += cleared as u32;

        let mut leveled_up = false;
        if self.lines >= LINES_PER_LEVEL * self.level && self.level < MAX_LEVEL {
            self.level += 1;
            self.gravity_interval = self.gravity_interval.saturating_sub(1).max(1);
            leveled_up = true;
            log::info!(
                "level up: level={} gravity_interval={}",
                self.level,
                self.gravity_interval
            );
        }

        LockEvent {
            lines_cleared: cleared as u32,
            line_clear_score: points,
            leveled_up,
        }
    }

    /// Reset every counter to the start of a session
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new()
    }
}
