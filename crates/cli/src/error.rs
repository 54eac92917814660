//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  every test passed
//! - 1:  at least one test failed
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: registry error (unknown test name)
//! - 11: I/O error (profile or results file)
//! - 12: input error (malformed profile or results JSON)
//! - 13: serialization error
//! - 77: nothing failed and nothing passed

use gl_conform_core::{ConformError, Status};
use gl_conform_reference::ReferenceError;
use std::fmt;

/// Exit code for an aggregate verdict.
pub fn verdict_exit_code(status: Status) -> i32 {
    match status {
        Status::Pass => 0,
        Status::Fail => 1,
        Status::Skip => 77,
    }
}

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A registry error (unknown test name).
    Registry(ConformError),
    /// An I/O error (reading a profile, reading or writing results).
    Io(String),
    /// A user input error (malformed profile or results file).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Registry(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Registry(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ConformError> for CliError {
    fn from(e: ConformError) -> Self {
        match e {
            ConformError::Io { .. } => CliError::Io(e.to_string()),
            ConformError::Malformed { .. } => CliError::Input(e.to_string()),
            other => CliError::Registry(other),
        }
    }
}

impl From<ReferenceError> for CliError {
    fn from(e: ReferenceError) -> Self {
        match e {
            ReferenceError::Io { .. } => CliError::Io(e.to_string()),
            ReferenceError::Parse(_) | ReferenceError::Invalid(_) => CliError::Input(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Status::Pass), 0);
        assert_eq!(verdict_exit_code(Status::Fail), 1);
        assert_eq!(verdict_exit_code(Status::Skip), 77);
    }

    #[test]
    fn registry_error_exit_code_is_10() {
        let err = CliError::Registry(ConformError::UnknownTest("foo".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad profile".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_conform_error_io_routes_to_cli_io() {
        let conform_err = ConformError::Io {
            path: "results.json".into(),
            message: "disk full".into(),
        };
        let cli_err = CliError::from(conform_err);
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_conform_error_malformed_routes_to_cli_input() {
        let conform_err = ConformError::Malformed {
            what: "results".into(),
            message: "expected value".into(),
        };
        assert_eq!(CliError::from(conform_err).exit_code(), 12);
    }

    #[test]
    fn from_conform_error_unknown_test_routes_to_cli_registry() {
        let cli_err = CliError::from(ConformError::UnknownTest("xyz".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("xyz"));
    }

    #[test]
    fn from_reference_error_routes_by_kind() {
        let io = ReferenceError::Io {
            path: "p.json".into(),
            message: "missing".into(),
        };
        assert_eq!(CliError::from(io).exit_code(), 11);
        assert_eq!(CliError::from(ReferenceError::Parse("eof".into())).exit_code(), 12);
        assert_eq!(CliError::from(ReferenceError::Invalid("major 0".into())).exit_code(), 12);
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
