//! Error types for the gl-conform core.
//!
//! These are failures of the harness itself (unknown test names, unreadable
//! result files). A driver that violates the GL spec is never an error here;
//! it shows up as a failed check in the [`Report`](crate::report::Report).

use thiserror::Error;

/// Errors produced by harness operations.
#[derive(Debug, Error)]
pub enum ConformError {
    /// A test name was not found in the registry.
    #[error("unknown test: {0}")]
    UnknownTest(String),

    /// A status string was not one of `pass`, `fail`, `skip`.
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    /// A results or profile file could not be read or written.
    #[error("i/o error on {path}: {message}")]
    Io { path: String, message: String },

    /// A results or profile file was not valid JSON for the expected shape.
    #[error("malformed {what}: {message}")]
    Malformed { what: String, message: String },

    /// The native backend could not be brought up on the supplied context.
    #[error("backend unavailable: {0}")]
    Backend(String),
}
