//! Constants for the password policy core
//!
//! This module contains all constants used throughout the policy core.

// Strength policy
pub const PASSWORD_MIN_LENGTH: usize = 14;
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

// History policy
pub const PASSWORD_HISTORY_LIMIT: usize = 24;

// Expiration policy
pub const PASSWORD_EXPIRATION_DAYS: i64 = 90;

// Time constants
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

// Fingerprint constants
pub const FINGERPRINT_LOG_PREFIX_LENGTH: usize = 8;

// Demonstration
pub const DEMO_PASSWORD: &str = "StrongPassw0rd!";

// Banner rendering
pub const BANNER_BORDER_CHAR: char = '*';
pub const BANNER_PADDING: usize = 4;

// Logging configuration
pub const LOG_LEVEL_ENV: &str = "PASSWORD_POLICY_LOG_LEVEL";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const SUPPORTED_LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];
