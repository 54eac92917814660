//! Classification of the values returned by `glGetError`.

use crate::gl::{self, GLenum};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One GL error classification.
///
/// `Unknown` keeps whatever a driver returned outside the registry so that
/// diagnostics can still show the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    NoError,
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    StackOverflow,
    StackUnderflow,
    OutOfMemory,
    InvalidFramebufferOperation,
    ContextLost,
    Unknown(u32),
}

impl ErrorCode {
    /// Classifies a raw `glGetError` value.
    pub fn from_raw(value: GLenum) -> Self {
        match value {
            gl::NO_ERROR => ErrorCode::NoError,
            gl::INVALID_ENUM => ErrorCode::InvalidEnum,
            gl::INVALID_VALUE => ErrorCode::InvalidValue,
            gl::INVALID_OPERATION => ErrorCode::InvalidOperation,
            gl::STACK_OVERFLOW => ErrorCode::StackOverflow,
            gl::STACK_UNDERFLOW => ErrorCode::StackUnderflow,
            gl::OUT_OF_MEMORY => ErrorCode::OutOfMemory,
            gl::INVALID_FRAMEBUFFER_OPERATION => ErrorCode::InvalidFramebufferOperation,
            gl::CONTEXT_LOST => ErrorCode::ContextLost,
            other => ErrorCode::Unknown(other),
        }
    }

    /// The raw value `glGetError` would return for this classification.
    pub fn to_raw(self) -> GLenum {
        match self {
            ErrorCode::NoError => gl::NO_ERROR,
            ErrorCode::InvalidEnum => gl::INVALID_ENUM,
            ErrorCode::InvalidValue => gl::INVALID_VALUE,
            ErrorCode::InvalidOperation => gl::INVALID_OPERATION,
            ErrorCode::StackOverflow => gl::STACK_OVERFLOW,
            ErrorCode::StackUnderflow => gl::STACK_UNDERFLOW,
            ErrorCode::OutOfMemory => gl::OUT_OF_MEMORY,
            ErrorCode::InvalidFramebufferOperation => gl::INVALID_FRAMEBUFFER_OPERATION,
            ErrorCode::ContextLost => gl::CONTEXT_LOST,
            ErrorCode::Unknown(raw) => raw,
        }
    }

    /// `GL_*` spelling, or `None` for unknown values.
    pub fn name(self) -> Option<&'static str> {
        match self {
            ErrorCode::NoError => Some("GL_NO_ERROR"),
            ErrorCode::Unknown(_) => None,
            other => gl::enum_name(other.to_raw()),
        }
    }

    pub fn is_error(self) -> bool {
        self != ErrorCode::NoError
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown error 0x{:04X}", self.to_raw()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_no_error() {
        assert_eq!(ErrorCode::from_raw(0), ErrorCode::NoError);
        assert!(!ErrorCode::NoError.is_error());
    }

    #[test]
    fn known_codes_keep_their_raw_value() {
        for raw in gl::INVALID_ENUM..=gl::CONTEXT_LOST {
            let code = ErrorCode::from_raw(raw);
            assert!(!matches!(code, ErrorCode::Unknown(_)), "0x{raw:04X}");
            assert_eq!(code.to_raw(), raw);
        }
    }

    #[test]
    fn unknown_code_is_preserved() {
        let code = ErrorCode::from_raw(0x1234);
        assert_eq!(code, ErrorCode::Unknown(0x1234));
        assert_eq!(code.to_raw(), 0x1234);
        assert!(code.is_error());
        assert!(code.name().is_none());
    }

    #[test]
    fn display_uses_gl_spelling() {
        assert_eq!(ErrorCode::NoError.to_string(), "GL_NO_ERROR");
        assert_eq!(ErrorCode::InvalidEnum.to_string(), "GL_INVALID_ENUM");
        assert_eq!(
            ErrorCode::InvalidFramebufferOperation.to_string(),
            "GL_INVALID_FRAMEBUFFER_OPERATION"
        );
        assert!(ErrorCode::Unknown(0xABCD).to_string().contains("0xABCD"));
    }
}
