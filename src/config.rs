//! Process configuration from environment variables.
//!
//! - `TUI_2048_SIZE`: board side length (default 4, clamped to the supported range)
//! - `TUI_2048_SEED`: RNG seed (default: derived from the clock)
//! - `TUI_2048_LOG`: log level filter (default `info`)
//! - `TUI_2048_LOG_PATH`: log file; logging is off when unset

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub seed: u32,
    pub log_level: LevelFilter,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: clock_seed(),
            log_level: LevelFilter::Info,
            log_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let size = lookup("TUI_2048_SIZE")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(|s| s.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE))
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let seed = lookup("TUI_2048_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_level = lookup("TUI_2048_LOG")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        let log_path = lookup("TUI_2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            size,
            seed,
            log_level,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
