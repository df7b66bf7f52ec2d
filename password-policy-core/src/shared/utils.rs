//! Utility functions for the policy core
//!
//! This module contains common utility functions used throughout the policy core.

use chrono::{DateTime, Utc};

use crate::shared::constants::{BANNER_BORDER_CHAR, BANNER_PADDING, FINGERPRINT_LOG_PREFIX_LENGTH};

/// Get the current time
pub fn current_time() -> DateTime<Utc> {
    Utc::now()
}

/// Render a message framed by a border of asterisks
///
/// The border is as wide as the message plus four characters, so the
/// middle line reads `* <message> *`.
pub fn create_banner(message: &str) -> String {
    let width = message.chars().count() + BANNER_PADDING;
    let border: String = std::iter::repeat(BANNER_BORDER_CHAR).take(width).collect();
    format!("{border}\n{c} {message} {c}\n{border}", c = BANNER_BORDER_CHAR)
}

/// Shorten a hex digest for log output
pub fn short_digest(hex: &str) -> &str {
    match hex.char_indices().nth(FINGERPRINT_LOG_PREFIX_LENGTH) {
        Some((idx, _)) => &hex[..idx],
        None => hex,
    }
}
