//! Password strength rules for the policy core
//!
//! This module holds the fixed policy, its individual rules, and the checker
//! that evaluates a candidate password against all of them.

pub mod password_config;
pub mod password_rule;
pub mod strength_checker;

// Re-export all public items from submodules
pub use password_config::*;
pub use password_rule::*;
pub use strength_checker::*;
