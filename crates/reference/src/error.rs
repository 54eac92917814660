//! Errors raised while loading a reference profile.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("cannot read profile {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed profile: {0}")]
    Parse(String),

    /// The profile parsed but describes an impossible context.
    #[error("invalid profile: {0}")]
    Invalid(String),
}
