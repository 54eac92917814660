//! `gl-1.0/simple-readbuffer`: a single `ReadBuffer` call works.

use gl_conform_core::config::{KhrNoError, Skip, TestConfig};
use gl_conform_core::error_code::ErrorCode;
use gl_conform_core::gl;
use gl_conform_core::{CheckRunner, ConformanceTest, Visual};

pub struct SimpleReadbuffer;

impl ConformanceTest for SimpleReadbuffer {
    fn name(&self) -> &'static str {
        "gl-1.0/simple-readbuffer"
    }

    fn description(&self) -> &'static str {
        "ReadBuffer on the window's color buffer raises no error"
    }

    fn config(&self) -> TestConfig {
        TestConfig::new()
            .compat(10)
            .visual(Visual::RGB | Visual::DOUBLE)
            .khr_no_error(KhrNoError::NoErrors)
    }

    fn run(&self, runner: &mut CheckRunner<'_>) -> Result<(), Skip> {
        // A window drawn through an FBO has no FRONT buffer to select.
        let src = if runner.gl().surface().uses_fbo {
            gl::COLOR_ATTACHMENT0
        } else {
            gl::FRONT
        };
        runner.expect_error(
            format!("ReadBuffer({})", gl::enum_label(src)),
            ErrorCode::NoError,
            |ctx| ctx.read_buffer(src),
        );
        Ok(())
    }
}
