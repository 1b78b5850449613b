//! Error types for Weather Report.
//!
//! Errors carry:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Remediation hints for humans
//!
//! The statistics engine itself never fails: empty or degenerate input is
//! answered with a zeroed report. Every variant here belongs to the layers
//! around it (request parsing, configuration, ingestion, lookup).
//!
//! # Agent-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 21,
//!   "category": "input",
//!   "message": "invalid report date '2024-13-01 00:00:00' (expected yyyy-MM-dd HH:mm:ss)"
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::SubjectKind;

/// Result type alias for Weather Report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Configuration file errors (parameters, report settings).
    Config,
    /// Malformed request input (dates, intervals).
    Input,
    /// Measurement data errors (ingestion, unknown subjects).
    Data,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Data => write!(f, "data"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Weather Report.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid gateway parameters: {0}")]
    InvalidParameters(String),

    // Input errors (20-29)
    #[error("invalid report date '{value}' (expected yyyy-MM-dd HH:mm:ss)")]
    InvalidDate { value: String },

    #[error("invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: String, end: String },

    // Data errors (30-39)
    #[error("invalid measurement record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("{kind} {code} not found")]
    SubjectNotFound { kind: SubjectKind, code: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Input errors
    /// - 30-39: Data errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidParameters(_) => 11,
            Error::InvalidDate { .. } => 21,
            Error::InvalidInterval { .. } => 22,
            Error::InvalidRecord { .. } => 30,
            Error::SubjectNotFound { .. } => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidParameters(_) => ErrorCategory::Config,
            Error::InvalidDate { .. } | Error::InvalidInterval { .. } => ErrorCategory::Input,
            Error::InvalidRecord { .. } | Error::SubjectNotFound { .. } => ErrorCategory::Data,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) => "Run 'wr-core check' to validate configuration files.",
            Error::InvalidParameters(_) => {
                "Fix the gateway parameters file: standard deviations must be non-negative and battery charge within 0-100."
            }
            Error::InvalidDate { .. } => "Pass dates as 'yyyy-MM-dd HH:mm:ss', e.g. '2024-03-01 00:00:00'.",
            Error::InvalidInterval { .. } => "Swap --start and --end, or drop one bound.",
            Error::InvalidRecord { .. } => "Check the CSV row: timestamp,network,gateway,sensor,value.",
            Error::SubjectNotFound { .. } => "No measurements reference this code. Check the code and the data file.",
            Error::Io(_) => "Check that the file exists and is readable.",
            Error::Json(_) => "Invalid JSON in file. Check syntax with 'jq . <file>'.",
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Config(_) => "Configuration Error",
            Error::InvalidParameters(_) => "Invalid Gateway Parameters",
            Error::InvalidDate { .. } => "Invalid Date",
            Error::InvalidInterval { .. } => "Invalid Interval",
            Error::InvalidRecord { .. } => "Invalid Measurement Record",
            Error::SubjectNotFound { .. } => "Subject Not Found",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Parse Error",
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Remediation hint.
    pub remediation: String,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            remediation: err.remediation().to_string(),
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}
