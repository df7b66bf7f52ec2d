//! Domain layer - entities and value objects
//!
//! This module contains the state the policy checks operate on.

pub mod entities;

// Re-export domain components
pub use entities::*;
