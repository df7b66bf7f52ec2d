use std::fmt;

use crate::shared::constants::PASSWORD_MIN_LENGTH;

/// A single failed strength rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthIssue {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

impl StrengthIssue {
    pub fn message(&self) -> String {
        match self {
            StrengthIssue::TooShort => format!(
                "Password must be at least {} characters long.",
                PASSWORD_MIN_LENGTH
            ),
            StrengthIssue::MissingUppercase => {
                "Password must contain at least one uppercase letter.".to_string()
            }
            StrengthIssue::MissingLowercase => {
                "Password must contain at least one lowercase letter.".to_string()
            }
            StrengthIssue::MissingDigit => "Password must contain at least one digit.".to_string(),
            StrengthIssue::MissingSpecial => {
                "Password must contain at least one special character.".to_string()
            }
        }
    }
}

impl fmt::Display for StrengthIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Outcome of a strength check, issues kept in rule order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrengthReport {
    issues: Vec<StrengthIssue>,
}

impl StrengthReport {
    pub fn new(issues: Vec<StrengthIssue>) -> Self {
        Self { issues }
    }

    /// True when no rule failed
    pub fn is_strong(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[StrengthIssue] {
        &self.issues
    }

    pub fn has_issue(&self, issue: StrengthIssue) -> bool {
        self.issues.contains(&issue)
    }

    /// Human-readable message for every failed rule
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(StrengthIssue::message).collect()
    }

    /// Split into the `(meets_policy, issues)` pair
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.is_strong(), self.messages())
    }
}

/// Result of running the full change-password flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Password failed the strength rules; nothing was recorded
    Rejected(StrengthReport),
    /// Password matches a retained fingerprint; nothing was recorded
    Reused,
    /// Password was accepted and recorded
    Updated,
}

impl ChangeOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, ChangeOutcome::Updated)
    }
}
