use super::{PasswordConfig, PasswordRule};
use crate::shared::types::{StrengthIssue, StrengthReport};

/// Evaluates candidate passwords against the fixed strength rules
#[derive(Debug, Clone, Default)]
pub struct StrengthChecker {
    config: PasswordConfig,
}

impl StrengthChecker {
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(PasswordConfig::default())
    }

    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    /// Check every rule and collect the failures.
    ///
    /// Rules are evaluated independently, so a single call reports every
    /// problem with the password.
    pub fn check(&self, password: &str) -> StrengthReport {
        let issues: Vec<StrengthIssue> = PasswordRule::ALL
            .iter()
            .filter(|rule| !rule.is_satisfied_by(password, &self.config))
            .map(PasswordRule::issue)
            .collect();

        log::debug!("Strength check finished with {} issue(s)", issues.len());
        StrengthReport::new(issues)
    }
}

/// Check a password and return `(meets_policy, issues)`
pub fn check_password_strength(password: &str) -> (bool, Vec<String>) {
    StrengthChecker::new_default().check(password).into_parts()
}
