//! Runtime configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TETRIS_TICK_MS` | 100 | Input poll timeout; one poll is one tick |
//! | `TETRIS_SEED` | wall clock | Piece RNG seed |
//! | `TETRIS_SKIP_MENU` | off | `1`/`true` starts playing immediately |
//! | `TETRIS_LOG_PATH` | unset | Log file; logging is off when unset |
//! | `TETRIS_LOG_LEVEL` | `info` | `error`, `warn`, `info`, `debug`, `trace` |

use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use log::LevelFilter;

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub tick_ms: u32,
    pub seed: u32,
    pub skip_menu: bool,
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: 1,
            skip_menu: false,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests).
    ///
    /// Unset variables take their defaults; malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let tick_ms = match get("TETRIS_TICK_MS") {
            Some(v) => {
                let ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("TETRIS_TICK_MS: invalid value: {}", v))?;
                if ms == 0 {
                    return Err(anyhow!("TETRIS_TICK_MS: must be at least 1"));
                }
                ms
            }
            None => TICK_MS,
        };

        let seed = match get("TETRIS_SEED") {
            Some(v) => v
                .parse::<u32>()
                .map_err(|_| anyhow!("TETRIS_SEED: invalid value: {}", v))?,
            None => clock_seed(),
        };

        let skip_menu = get("TETRIS_SKIP_MENU")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_level = match get("TETRIS_LOG_LEVEL") {
            Some(v) => LevelFilter::from_str(&v)
                .map_err(|_| anyhow!("TETRIS_LOG_LEVEL: invalid value: {}", v))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            tick_ms,
            seed,
            skip_menu,
            log_path: get("TETRIS_LOG_PATH"),
            log_level,
        })
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
