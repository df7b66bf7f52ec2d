//! Password history tracking
//!
//! Records password changes into a [`PasswordRecord`] and answers whether a
//! candidate password matches any retained fingerprint.

use chrono::{DateTime, Utc};

use crate::core::crypto::HashManager;
use crate::domain::PasswordRecord;
use crate::shared::utils::current_time;

/// Appends fingerprints to a record and looks up reuse
#[derive(Debug, Clone, Default)]
pub struct HistoryTracker {
    hasher: HashManager,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self {
            hasher: HashManager::new(),
        }
    }

    /// Record a password change at the current time
    pub fn record_change(&self, record: &mut PasswordRecord, password: &str) {
        self.record_change_at(record, password, current_time());
    }

    /// Record a password change at an explicit time
    pub fn record_change_at(&self, record: &mut PasswordRecord, password: &str, at: DateTime<Utc>) {
        let fingerprint = self.hasher.fingerprint(password);
        log::debug!("Recording fingerprint {}", fingerprint.short());

        if let Some(evicted) = record.push_change(fingerprint, at) {
            log::debug!("History full, evicted fingerprint {}", evicted.short());
        }

        log::info!(
            "Password change recorded ({} of {} history slots used)",
            record.history_len(),
            record.capacity()
        );
    }

    /// True when the password matches any fingerprint still in the history
    pub fn is_reused(&self, record: &PasswordRecord, password: &str) -> bool {
        let fingerprint = self.hasher.fingerprint(password);
        let reused = record.contains(&fingerprint);
        if reused {
            log::debug!("Fingerprint {} found in history", fingerprint.short());
        }
        reused
    }
}

/// Record a password change on `record` at the current time
pub fn record_change(record: &mut PasswordRecord, password: &str) {
    HistoryTracker::new().record_change(record, password);
}

/// Check `password` against the history held in `record`
pub fn is_reused(record: &PasswordRecord, password: &str) -> bool {
    HistoryTracker::new().is_reused(record, password)
}
