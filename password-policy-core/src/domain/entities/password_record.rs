//! Password record entity
//!
//! Holds the state shared by the history and expiration checks for a single
//! user: when the password last changed and the fingerprints of the most
//! recent passwords. The record is owned by the caller and handed to each
//! operation by reference.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use super::Fingerprint;
use crate::shared::constants::PASSWORD_HISTORY_LIMIT;

/// Last-changed timestamp plus a bounded FIFO of past fingerprints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRecord {
    last_changed: Option<DateTime<Utc>>,
    history: VecDeque<Fingerprint>,
}

impl Default for PasswordRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordRecord {
    /// Create an empty record: never changed, no history
    pub fn new() -> Self {
        Self {
            last_changed: None,
            history: VecDeque::with_capacity(PASSWORD_HISTORY_LIMIT),
        }
    }

    pub fn last_changed(&self) -> Option<DateTime<Utc>> {
        self.last_changed
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn capacity(&self) -> usize {
        PASSWORD_HISTORY_LIMIT
    }

    /// Retained fingerprints, oldest first
    pub fn fingerprints(&self) -> impl Iterator<Item = &Fingerprint> {
        self.history.iter()
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.history.contains(fingerprint)
    }

    /// Append a fingerprint and stamp the change time.
    ///
    /// Returns the evicted fingerprint when the history was already full.
    pub fn push_change(&mut self, fingerprint: Fingerprint, at: DateTime<Utc>) -> Option<Fingerprint> {
        let evicted = if self.history.len() >= PASSWORD_HISTORY_LIMIT {
            self.history.pop_front()
        } else {
            None
        };
        self.history.push_back(fingerprint);
        self.last_changed = Some(at);
        evicted
    }
}
