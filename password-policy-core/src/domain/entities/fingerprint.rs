//! Password fingerprint value object

use std::fmt;

use crate::shared::utils::short_digest;

/// Lowercase hex digest of a password, compared for equality only
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Wrap raw digest bytes
    pub fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters only, for log lines
    pub fn short(&self) -> &str {
        short_digest(&self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digest_is_lowercase_hex() {
        let fingerprint = Fingerprint::from_digest(&[0xAB; 32]);
        assert_eq!(fingerprint.as_str().len(), 64);
        assert!(fingerprint.as_str().chars().all(|c| c == 'a' || c == 'b'));
        assert_eq!(fingerprint.short(), "abababab");
    }

    #[test]
    fn test_display() {
        let fingerprint = Fingerprint::from_digest(&[0u8; 32]);
        assert_eq!(fingerprint.to_string(), "0".repeat(64));
    }
}
