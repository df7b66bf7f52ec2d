//! Runtime configuration for the policy core
//!
//! Only ambient settings are configurable here. The policy rules themselves
//! are fixed in [`crate::shared::constants`].

use dotenv::dotenv;
use log::LevelFilter;
use std::env;

use crate::shared::constants::{DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV, SUPPORTED_LOG_LEVELS};
use crate::shared::error::{PolicyError, PolicyResult};

/// Core configuration loaded from the environment or a `.env` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: LevelFilter,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
        }
    }
}

impl CoreConfig {
    /// Load configuration from .env (if present) and the process environment
    pub fn from_env() -> PolicyResult<Self> {
        dotenv().ok();

        let level = env::var(LOG_LEVEL_ENV).ok();
        Self::from_log_level(level.as_deref())
    }

    /// Build a configuration from an optional raw log level string
    pub fn from_log_level(level: Option<&str>) -> PolicyResult<Self> {
        let raw = level
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_ascii_lowercase();

        let log_level = match raw.as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            other => {
                return Err(PolicyError::config(format!(
                    "{} must be one of {}, got '{}'",
                    LOG_LEVEL_ENV,
                    SUPPORTED_LOG_LEVELS.join("|"),
                    other
                )))
            }
        };

        Ok(Self { log_level })
    }
}
