//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// No handler is registered for this method at this path.
    ///
    /// Covers both an unknown path and a known path without a handler
    /// for the requested method.
    #[error("no route matched: {method} {path}")]
    NotFound { method: String, path: String },

    /// The path cannot be used as a route key.
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// The method is empty or not a single token.
    #[error("invalid method {0:?}")]
    InvalidMethod(String),
}

impl RouterError {
    /// Returns `true` for the lookup-miss outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
