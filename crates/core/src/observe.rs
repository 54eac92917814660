//! Turns the GL error register into an explicit per-call result.
//!
//! GL keeps errors in context-global flags that any later call can observe.
//! [`observe`] scopes that state to a single invocation: pending flags are
//! drained before the call, the call runs, the register is read once, and
//! whatever is left afterwards is drained too. The next observation then
//! starts from a clean register.

use crate::api::GlApi;
use crate::error_code::ErrorCode;

/// Upper bound on `glGetError` reads while draining. GL keeps at most one
/// flag per error kind, so a conformant driver empties well before this.
pub const MAX_DRAIN: usize = 16;

/// Result of one observed invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Observed<T> {
    /// Whatever the call returned (or wrote through its out parameters).
    pub value: T,
    /// The first error the call raised, or `NoError`.
    pub error: ErrorCode,
    /// Errors that were already pending before the call. Non-empty means an
    /// earlier step leaked state into this one.
    pub stale: Vec<ErrorCode>,
    /// Further errors still pending after `error` was read.
    pub trailing: Vec<ErrorCode>,
}

impl<T> Observed<T> {
    pub fn is_clean(&self) -> bool {
        self.stale.is_empty() && self.trailing.is_empty()
    }
}

/// Reads and clears every pending error flag, returning them in order.
pub fn drain_errors(gl: &mut dyn GlApi) -> Vec<ErrorCode> {
    let mut drained = Vec::new();
    for _ in 0..MAX_DRAIN {
        match ErrorCode::from_raw(gl.get_error()) {
            ErrorCode::NoError => break,
            other => drained.push(other),
        }
    }
    if drained.len() == MAX_DRAIN {
        log::warn!("error register still not empty after {MAX_DRAIN} reads");
    }
    drained
}

/// Runs `call` with a drained error register and reports what it raised.
pub fn observe<T, F>(gl: &mut dyn GlApi, call: F) -> Observed<T>
where
    F: FnOnce(&mut dyn GlApi) -> T,
{
    let stale = drain_errors(gl);
    if !stale.is_empty() {
        log::debug!("discarding {} stale error(s): {stale:?}", stale.len());
    }
    let value = call(gl);
    let error = ErrorCode::from_raw(gl.get_error());
    let trailing = if error.is_error() {
        drain_errors(gl)
    } else {
        Vec::new()
    };
    Observed {
        value,
        error,
        stale,
        trailing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedGl;

    #[test]
    fn observe_reports_error_raised_by_call() {
        let mut gl = ScriptedGl::default();
        let obs = observe(&mut gl, |gl| gl.read_buffer(0xDEAD));
        assert_eq!(obs.error, ErrorCode::InvalidEnum);
        assert!(obs.is_clean());
    }

    #[test]
    fn observe_reports_no_error_for_clean_call() {
        let mut gl = ScriptedGl::default();
        let obs = observe(&mut gl, |gl| gl.get_integer(crate::gl::MAX_DRAW_BUFFERS));
        assert_eq!(obs.error, ErrorCode::NoError);
        assert_eq!(obs.value, 8);
    }

    #[test]
    fn observe_separates_stale_errors() {
        let mut gl = ScriptedGl::default();
        gl.push_error(crate::gl::OUT_OF_MEMORY);
        let obs = observe(&mut gl, |_| ());
        assert_eq!(obs.error, ErrorCode::NoError);
        assert_eq!(obs.stale, vec![ErrorCode::OutOfMemory]);
        assert!(!obs.is_clean());
    }

    #[test]
    fn observe_drains_trailing_errors() {
        let mut gl = ScriptedGl::default();
        let obs = observe(&mut gl, |gl| {
            gl.read_buffer(0xDEAD);
            gl.get_integer(0xDEAD);
        });
        assert_eq!(obs.error, ErrorCode::InvalidEnum);
        assert_eq!(obs.trailing, vec![ErrorCode::InvalidEnum]);
        assert_eq!(gl.get_error(), crate::gl::NO_ERROR);
    }

    #[test]
    fn drain_stops_on_stuck_register() {
        let mut gl = ScriptedGl::default();
        gl.stuck_error = Some(crate::gl::CONTEXT_LOST);
        let drained = drain_errors(&mut gl);
        assert_eq!(drained.len(), MAX_DRAIN);
    }
}
