//! Password expiration
//!
//! A password expires once more than [`PASSWORD_EXPIRATION_DAYS`] have passed
//! since the last recorded change. A record that was never changed counts as
//! expired.

use chrono::{DateTime, Duration, Utc};

use crate::domain::PasswordRecord;
use crate::shared::constants::{PASSWORD_EXPIRATION_DAYS, SECONDS_PER_DAY};
use crate::shared::utils::current_time;

/// Compares the time since the last change against the expiration threshold
#[derive(Debug, Clone)]
pub struct ExpirationChecker {
    max_age: Duration,
}

impl Default for ExpirationChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpirationChecker {
    pub fn new() -> Self {
        Self {
            max_age: Duration::days(PASSWORD_EXPIRATION_DAYS),
        }
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    pub fn is_expired(&self, record: &PasswordRecord) -> bool {
        self.is_expired_at(record, current_time())
    }

    /// Expiration as seen at `now`
    pub fn is_expired_at(&self, record: &PasswordRecord, now: DateTime<Utc>) -> bool {
        match record.last_changed() {
            None => {
                log::debug!("Password never set, treating as expired");
                true
            }
            Some(changed) => now.signed_duration_since(changed) > self.max_age,
        }
    }

    /// Fractional days since the last change, `None` if never changed
    pub fn days_since_change(&self, record: &PasswordRecord, now: DateTime<Utc>) -> Option<f64> {
        record.last_changed().map(|changed| {
            let elapsed = now.signed_duration_since(changed);
            elapsed.num_milliseconds() as f64 / (SECONDS_PER_DAY as f64 * 1000.0)
        })
    }
}

/// Expiration check for `record` at the current time
pub fn is_expired(record: &PasswordRecord) -> bool {
    ExpirationChecker::new().is_expired(record)
}
