use crate::shared::constants::{
    PASSWORD_EXPIRATION_DAYS, PASSWORD_HISTORY_LIMIT, PASSWORD_MIN_LENGTH,
    PASSWORD_SPECIAL_CHARACTERS,
};

/// The fixed password policy.
///
/// Values come from [`crate::shared::constants`] and cannot be changed at
/// runtime; the struct exists so the policy can be passed around and printed
/// as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    min_length: usize,
    special_characters: &'static str,
    history_limit: usize,
    expiration_days: i64,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: PASSWORD_MIN_LENGTH,
            special_characters: PASSWORD_SPECIAL_CHARACTERS,
            history_limit: PASSWORD_HISTORY_LIMIT,
            expiration_days: PASSWORD_EXPIRATION_DAYS,
        }
    }
}

impl PasswordConfig {
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn special_characters(&self) -> &'static str {
        self.special_characters
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn expiration_days(&self) -> i64 {
        self.expiration_days
    }

    pub fn is_special(&self, c: char) -> bool {
        self.special_characters.contains(c)
    }
}
