use lazy_static::lazy_static;
use regex::Regex;

use super::PasswordConfig;
use crate::shared::types::StrengthIssue;

lazy_static! {
    static ref UPPERCASE_PATTERN: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref LOWERCASE_PATTERN: Regex = Regex::new(r"[a-z]").unwrap();
    // Unicode-aware: any decimal digit (Nd), not only 0-9.
    static ref DIGIT_PATTERN: Regex = Regex::new(r"\d").unwrap();
}

/// One strength rule of the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    /// Every rule, in the order issues are reported
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::Special,
    ];

    pub fn is_satisfied_by(&self, password: &str, config: &PasswordConfig) -> bool {
        match self {
            // Length counts characters, not bytes.
            PasswordRule::MinLength => password.chars().count() >= config.min_length(),
            PasswordRule::Uppercase => UPPERCASE_PATTERN.is_match(password),
            PasswordRule::Lowercase => LOWERCASE_PATTERN.is_match(password),
            PasswordRule::Digit => DIGIT_PATTERN.is_match(password),
            PasswordRule::Special => password.chars().any(|c| config.is_special(c)),
        }
    }

    pub fn issue(&self) -> StrengthIssue {
        match self {
            PasswordRule::MinLength => StrengthIssue::TooShort,
            PasswordRule::Uppercase => StrengthIssue::MissingUppercase,
            PasswordRule::Lowercase => StrengthIssue::MissingLowercase,
            PasswordRule::Digit => StrengthIssue::MissingDigit,
            PasswordRule::Special => StrengthIssue::MissingSpecial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn satisfied(rule: PasswordRule, password: &str) -> bool {
        rule.is_satisfied_by(password, &PasswordConfig::default())
    }

    #[test]
    fn test_min_length() {
        assert!(!satisfied(PasswordRule::MinLength, ""));
        assert!(!satisfied(PasswordRule::MinLength, &"a".repeat(13)));
        assert!(satisfied(PasswordRule::MinLength, &"a".repeat(14)));
        // 14 characters, more than 14 bytes
        assert!(satisfied(PasswordRule::MinLength, &"é".repeat(14)));
        // 13 characters, 26 bytes
        assert!(!satisfied(PasswordRule::MinLength, &"é".repeat(13)));
    }

    #[test]
    fn test_character_classes() {
        assert!(satisfied(PasswordRule::Uppercase, "abcD"));
        assert!(!satisfied(PasswordRule::Uppercase, "abcd"));
        assert!(!satisfied(PasswordRule::Uppercase, "ÉÀ"));

        assert!(satisfied(PasswordRule::Lowercase, "ABCd"));
        assert!(!satisfied(PasswordRule::Lowercase, "ABCD"));

        assert!(satisfied(PasswordRule::Digit, "abc7"));
        assert!(!satisfied(PasswordRule::Digit, "abc"));

        assert!(satisfied(PasswordRule::Special, "abc?"));
        assert!(!satisfied(PasswordRule::Special, "abc-_ ~"));
    }

    #[test]
    fn test_digit_rule_accepts_unicode_decimal_digits() {
        // ARABIC-INDIC DIGIT THREE
        assert!(satisfied(PasswordRule::Digit, "abc\u{0663}"));
        // FULLWIDTH DIGIT SEVEN, DEVANAGARI DIGIT FIVE
        assert!(satisfied(PasswordRule::Digit, "\u{FF17}"));
        assert!(satisfied(PasswordRule::Digit, "\u{096B}"));

        // Numeric but not decimal digits
        assert!(!satisfied(PasswordRule::Digit, "\u{00BD}"));
        assert!(!satisfied(PasswordRule::Digit, "\u{2167}"));
        assert!(!satisfied(PasswordRule::Digit, "\u{00B2}"));
    }

    #[test]
    fn test_rule_order_and_issues() {
        let issues: Vec<StrengthIssue> = PasswordRule::ALL.iter().map(PasswordRule::issue).collect();
        assert_eq!(
            issues,
            vec![
                StrengthIssue::TooShort,
                StrengthIssue::MissingUppercase,
                StrengthIssue::MissingLowercase,
                StrengthIssue::MissingDigit,
                StrengthIssue::MissingSpecial,
            ]
        );
    }
}
