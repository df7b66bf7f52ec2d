//! Domain entities and value objects
//!
//! This module contains the core domain entities and value objects
//! that represent the business concepts in the policy core.

pub mod fingerprint;
pub mod password_record;

// Re-export entities
pub use fingerprint::*;
pub use password_record::*;
