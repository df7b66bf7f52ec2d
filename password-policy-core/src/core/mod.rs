//! Core policy functionality
//!
//! This module contains the three policy checks: strength rules (with the
//! fingerprint digest under `crypto`), reuse history, and expiration.

pub mod crypto;
pub mod history;
pub mod expiration;
