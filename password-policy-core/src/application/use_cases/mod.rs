//! Application use cases
//!
//! This module contains the use cases that orchestrate the policy checks.

pub mod change_password;

// Re-export use cases
pub use change_password::*;
