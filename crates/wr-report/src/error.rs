//! Error types for report configuration.

use thiserror::Error;

/// Result type for report configuration operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while loading or validating a report configuration.
///
/// Report assembly itself is infallible.
#[derive(Error, Debug)]
pub enum ReportError {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
