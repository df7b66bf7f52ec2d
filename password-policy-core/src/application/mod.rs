//! Application layer - use cases
//!
//! This module contains the application logic built on top of the core checks.

pub mod use_cases;

// Re-export application components
pub use use_cases::*;
