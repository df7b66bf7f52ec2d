//! Hashing functionality for the policy core
//!
//! This module turns plaintext passwords into fingerprints.

pub mod hash_manager;

// Re-export all public items from submodules
pub use hash_manager::*;
