use sha2::{Digest, Sha256};

use crate::domain::Fingerprint;

/// Computes password fingerprints for reuse detection.
///
/// SHA-256 is a fast digest. It is used here only to compare passwords
/// against history and is not suitable for storing credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashManager;

impl HashManager {
    pub fn new() -> Self {
        Self
    }

    /// Hash data with SHA256
    pub fn sha256(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }

    /// Fingerprint of the UTF-8 bytes of a password
    pub fn fingerprint(&self, password: &str) -> Fingerprint {
        Fingerprint::from_digest(&self.sha256(password.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        let manager = HashManager::new();
        let data = b"Hello, World!";

        let hash = manager.sha256(data);
        assert_eq!(hash.len(), 32);
        assert_ne!(hash, data);
    }

    #[test]
    fn test_known_fingerprint() {
        let manager = HashManager::new();
        assert_eq!(
            manager.fingerprint("").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            manager.fingerprint("abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let manager = HashManager::new();
        assert_eq!(
            manager.fingerprint("StrongPassw0rd!"),
            manager.fingerprint("StrongPassw0rd!")
        );
    }

    #[test]
    fn test_fingerprint_is_case_sensitive() {
        let manager = HashManager::new();
        assert_ne!(
            manager.fingerprint("StrongPassw0rd!"),
            manager.fingerprint("strongpassw0rd!")
        );
    }

    #[test]
    fn test_unicode_password() {
        let manager = HashManager::new();
        let fingerprint = manager.fingerprint("密码🔐Passw0rd!");
        assert_eq!(fingerprint.as_str().len(), 64);
    }
}
