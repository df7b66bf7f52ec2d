//! Change-password use case
//!
//! Runs the checks in order: strength first, then reuse, and only then
//! records the change. Expiration is checked separately by the caller.

use chrono::{DateTime, Utc};

use crate::core::crypto::StrengthChecker;
use crate::core::expiration::ExpirationChecker;
use crate::core::history::HistoryTracker;
use crate::domain::PasswordRecord;
use crate::shared::types::{ChangeOutcome, StrengthReport};
use crate::shared::utils::current_time;

/// Ties the three checks together for a single record
#[derive(Debug, Clone, Default)]
pub struct PasswordPolicyService {
    strength: StrengthChecker,
    history: HistoryTracker,
    expiration: ExpirationChecker,
}

impl PasswordPolicyService {
    pub fn new() -> Self {
        Self {
            strength: StrengthChecker::new_default(),
            history: HistoryTracker::new(),
            expiration: ExpirationChecker::new(),
        }
    }

    pub fn check_strength(&self, password: &str) -> StrengthReport {
        self.strength.check(password)
    }

    pub fn is_reused(&self, record: &PasswordRecord, password: &str) -> bool {
        self.history.is_reused(record, password)
    }

    pub fn record_change(&self, record: &mut PasswordRecord, password: &str) {
        self.history.record_change(record, password);
    }

    pub fn is_expired(&self, record: &PasswordRecord) -> bool {
        self.expiration.is_expired(record)
    }

    pub fn is_expired_at(&self, record: &PasswordRecord, now: DateTime<Utc>) -> bool {
        self.expiration.is_expired_at(record, now)
    }

    pub fn change_password(&self, record: &mut PasswordRecord, password: &str) -> ChangeOutcome {
        self.change_password_at(record, password, current_time())
    }

    /// Change-password flow with an explicit change time
    pub fn change_password_at(
        &self,
        record: &mut PasswordRecord,
        password: &str,
        at: DateTime<Utc>,
    ) -> ChangeOutcome {
        let report = self.strength.check(password);
        if !report.is_strong() {
            log::info!("Password rejected: {} policy issue(s)", report.issues().len());
            return ChangeOutcome::Rejected(report);
        }

        if self.history.is_reused(record, password) {
            log::info!("Password rejected: found in history");
            return ChangeOutcome::Reused;
        }

        self.history.record_change_at(record, password, at);
        ChangeOutcome::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::StrengthIssue;
    use chrono::Duration;

    #[test]
    fn test_weak_password_is_rejected_and_not_recorded() {
        let service = PasswordPolicyService::new();
        let mut record = PasswordRecord::new();

        let outcome = service.change_password(&mut record, "weak");
        match outcome {
            ChangeOutcome::Rejected(report) => {
                assert!(report.has_issue(StrengthIssue::TooShort));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(record.history_len(), 0);
        assert_eq!(record.last_changed(), None);
    }

    #[test]
    fn test_strong_password_is_recorded() {
        let service = PasswordPolicyService::new();
        let mut record = PasswordRecord::new();

        assert_eq!(service.change_password(&mut record, "StrongPassw0rd!"), ChangeOutcome::Updated);
        assert_eq!(record.history_len(), 1);
        assert!(service.is_reused(&record, "StrongPassw0rd!"));
        assert!(!service.is_expired(&record));
    }

    #[test]
    fn test_reused_password_is_refused() {
        let service = PasswordPolicyService::new();
        let mut record = PasswordRecord::new();
        let first = Utc::now() - Duration::days(100);

        service.change_password_at(&mut record, "StrongPassw0rd!", first);
        let outcome = service.change_password(&mut record, "StrongPassw0rd!");

        assert_eq!(outcome, ChangeOutcome::Reused);
        assert_eq!(record.history_len(), 1);
        assert_eq!(record.last_changed(), Some(first));
        assert!(service.is_expired(&record));
    }

    #[test]
    fn test_change_clears_expiration() {
        let service = PasswordPolicyService::new();
        let mut record = PasswordRecord::new();
        let now = Utc::now();

        service.change_password_at(&mut record, "OldPassword-123!", now - Duration::days(120));
        assert!(service.is_expired_at(&record, now));

        assert!(service
            .change_password_at(&mut record, "NewPassword-456!", now)
            .is_updated());
        assert!(!service.is_expired_at(&record, now));
    }

    #[test]
    fn test_individual_operations() {
        let service = PasswordPolicyService::new();
        let mut record = PasswordRecord::new();

        assert!(!service.check_strength("short").is_strong());
        assert!(service.is_expired(&record));

        service.record_change(&mut record, "anything goes here");
        assert!(service.is_reused(&record, "anything goes here"));
    }
}
