//! Error types for the SD2 engine
//!
//! This module defines the error types used throughout the engine,
//! mostly for texture table lookups and singleton management.

use std::fmt;

/// Result type for SD2 engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// SD2 engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (lock poisoning, platform failures)
    BackendError(String),

    /// Invalid resource (stale texture key, wrong texture usage, duplicate name)
    InvalidResource(String),

    /// Invalid parameter (zero-sized texture, mismatched target dimensions)
    InvalidParameter(String),

    /// Initialization failed (engine, texture manager)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
