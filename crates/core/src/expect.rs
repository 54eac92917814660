//! Expectation entries: what the GL spec says a call must produce.
//!
//! Tables of [`Entry`] values are written as `static` data next to each test
//! so they can be compared line by line with the GL tables they come from.

use crate::error_code::ErrorCode;
use crate::gl::{self, GLenum};

/// Admissible outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The call must raise exactly this classification.
    Error(ErrorCode),
    /// The call must raise one of these classifications (`NoError` allowed).
    AnyError(&'static [ErrorCode]),
    /// The call must succeed and return one of these values.
    OneOf(&'static [i64]),
    /// The call must succeed; any value is legal.
    Any,
}

impl Expectation {
    /// Shorthand for a check that must not raise an error.
    pub const NO_ERROR: Expectation = Expectation::Error(ErrorCode::NoError);

    /// Whether `error` is an acceptable classification for this expectation.
    pub fn admits_error(&self, error: ErrorCode) -> bool {
        match self {
            Expectation::Error(expected) => *expected == error,
            Expectation::AnyError(set) => set.contains(&error),
            Expectation::OneOf(_) | Expectation::Any => error == ErrorCode::NoError,
        }
    }

    /// Whether `value` is admissible. Error expectations accept any value.
    pub fn admits_value(&self, value: i64) -> bool {
        match self {
            Expectation::OneOf(set) => set.contains(&value),
            _ => true,
        }
    }

    /// Human readable form for diagnostics, using GL spellings.
    pub fn describe(&self) -> String {
        match self {
            Expectation::Error(code) => code.to_string(),
            Expectation::AnyError(set) => set
                .iter()
                .map(ErrorCode::to_string)
                .collect::<Vec<_>>()
                .join(" or "),
            Expectation::OneOf(set) => {
                let values: Vec<String> = set.iter().map(|v| value_label(*v)).collect();
                format!("one of [{}]", values.join(", "))
            }
            Expectation::Any => "any value".to_string(),
        }
    }
}

/// Label for a returned value: small integers print as numbers, values in
/// the enum range print with their `GL_*` spelling when one exists.
pub fn value_label(value: i64) -> String {
    if (0x0100..=0xFFFF).contains(&value) {
        if let Some(name) = gl::enum_name(value as GLenum) {
            return format!("{name} (0x{value:04X})");
        }
    }
    value.to_string()
}

/// One row of an expectation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Name of the parameter or operation variant under test.
    pub name: &'static str,
    pub expectation: Expectation,
}

impl Entry {
    pub const fn new(name: &'static str, expectation: Expectation) -> Self {
        Self { name, expectation }
    }

    pub const fn error(name: &'static str, code: ErrorCode) -> Self {
        Self::new(name, Expectation::Error(code))
    }
}

/// Converts a table of `GLenum` values to the `i64` domain queries return.
pub fn enum_values(values: &[GLenum]) -> Vec<i64> {
    values.iter().map(|v| i64::from(*v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ERROR_OR_INVALID_OPERATION: &[ErrorCode] =
        &[ErrorCode::NoError, ErrorCode::InvalidOperation];

    #[test]
    fn exact_error_admits_only_itself() {
        let e = Expectation::Error(ErrorCode::InvalidValue);
        assert!(e.admits_error(ErrorCode::InvalidValue));
        assert!(!e.admits_error(ErrorCode::NoError));
        assert!(!e.admits_error(ErrorCode::InvalidEnum));
    }

    #[test]
    fn missing_error_is_not_admitted() {
        let e = Expectation::Error(ErrorCode::InvalidOperation);
        assert!(!e.admits_error(ErrorCode::NoError));
    }

    #[test]
    fn error_set_admits_members() {
        let e = Expectation::AnyError(NO_ERROR_OR_INVALID_OPERATION);
        assert!(e.admits_error(ErrorCode::NoError));
        assert!(e.admits_error(ErrorCode::InvalidOperation));
        assert!(!e.admits_error(ErrorCode::InvalidEnum));
    }

    #[test]
    fn value_sets_require_success() {
        let e = Expectation::OneOf(&[0, 1]);
        assert!(e.admits_error(ErrorCode::NoError));
        assert!(!e.admits_error(ErrorCode::InvalidEnum));
        assert!(e.admits_value(1));
        assert!(!e.admits_value(2));
        assert!(Expectation::Any.admits_value(-7));
    }

    #[test]
    fn describe_names_gl_values() {
        let e = Expectation::AnyError(NO_ERROR_OR_INVALID_OPERATION);
        assert_eq!(e.describe(), "GL_NO_ERROR or GL_INVALID_OPERATION");

        let set: &'static [i64] = &[0, gl::FULL_SUPPORT as i64];
        let d = Expectation::OneOf(set).describe();
        assert!(d.contains("GL_FULL_SUPPORT"), "{d}");
        assert!(d.starts_with("one of [0, "), "{d}");
    }

    #[test]
    fn small_values_print_as_numbers() {
        assert_eq!(value_label(128), "128");
        assert_eq!(value_label(-1), "-1");
    }

    #[test]
    fn enum_values_widen() {
        assert_eq!(enum_values(&[gl::RED, gl::NONE]), vec![0x1903, 0]);
    }
}
