//! Password-facing crypto for the policy core
//!
//! Strength rules and the fingerprint digest used for reuse detection.

pub mod hashing;
pub mod password;

// Re-export all public items from submodules
pub use hashing::*;
pub use password::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_and_hasher_agree_on_demo_password() {
        let checker = StrengthChecker::new_default();
        let hasher = HashManager::new();

        assert!(checker.check(crate::shared::DEMO_PASSWORD).is_strong());
        assert_eq!(hasher.fingerprint(crate::shared::DEMO_PASSWORD).as_str().len(), 64);
    }
}
