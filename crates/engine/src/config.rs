//! Loop configuration from environment variables.
//!
//! - `SNAKE_TICK_MS`: render tick in milliseconds (default: 100)
//! - `SNAKE_INPUT`: input backend, `crossterm` | `ansi` | `console` (default: crossterm)
//! - `SNAKE_DEBUG_ECHO`: set to "1" or "true" to print the heading below the board
//! - `SNAKE_LOG_PATH`: write logs to this file (default: no logging)

use std::time::Duration;

use thiserror::Error;

use crate::input::InputBackend;
use crate::types::{INPUT_POLL_MS, TICK_MS};

pub const ENV_TICK_MS: &str = "SNAKE_TICK_MS";
pub const ENV_INPUT: &str = "SNAKE_INPUT";
pub const ENV_DEBUG_ECHO: &str = "SNAKE_DEBUG_ECHO";
pub const ENV_LOG_PATH: &str = "SNAKE_LOG_PATH";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown input backend {0:?} (expected crossterm, ansi or console)")]
    UnknownBackend(String),

    #[error("{var} must be a positive number of milliseconds, got {value:?}")]
    InvalidTick { var: &'static str, value: String },
}

/// Frame loop configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    pub tick: Duration,
    pub input: InputBackend,
    /// Upper bound for one crossterm input poll.
    pub input_timeout: Duration,
    pub debug_echo: bool,
    pub log_path: Option<String>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            input: InputBackend::default(),
            input_timeout: Duration::from_millis(INPUT_POLL_MS),
            debug_echo: false,
            log_path: None,
        }
    }
}

impl LoopConfig {
    /// Create from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TICK_MS) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidTick {
                    var: ENV_TICK_MS,
                    value: raw.clone(),
                })?;
            config.tick = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup(ENV_INPUT) {
            config.input =
                InputBackend::from_str(&raw).ok_or(ConfigError::UnknownBackend(raw))?;
        }

        config.debug_echo = lookup(ENV_DEBUG_ECHO)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        config.log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Ok(config)
    }
}
