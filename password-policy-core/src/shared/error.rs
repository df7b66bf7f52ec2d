//! Error handling for the policy core
//!
//! Policy checks themselves never fail; this type covers the surfaces around
//! them that can (configuration and logger setup).

use thiserror::Error;

/// Policy core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PolicyError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<log::SetLoggerError> for PolicyError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::internal(format!("Logger error: {}", err))
    }
}

/// Result alias used across the policy core
pub type PolicyResult<T> = Result<T, PolicyError>;
