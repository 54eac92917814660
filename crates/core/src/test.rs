//! The `ConformanceTest` trait every shipped test implements.
//!
//! A test is static data (name, description, requirements) plus a body that
//! drives a [`CheckRunner`]. The trait is object-safe so the registry can
//! hand out `Box<dyn ConformanceTest>` by name.

use crate::check::CheckRunner;
use crate::config::{Skip, TestConfig};

/// One conformance test.
pub trait ConformanceTest {
    /// Registry name, e.g. `gl-4.5/named-framebuffer-draw-buffers-errors`.
    fn name(&self) -> &'static str;

    /// One-line summary for listings.
    fn description(&self) -> &'static str;

    /// Requirements checked before [`run`](Self::run) is called.
    fn config(&self) -> TestConfig;

    /// Performs every check. Returning `Err` marks the test skipped unless a
    /// check already failed.
    fn run(&self, runner: &mut CheckRunner<'_>) -> Result<(), Skip>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_code::ErrorCode;
    use crate::gl;
    use crate::report::Status;
    use crate::testing::ScriptedGl;

    struct ReadFront;

    impl ConformanceTest for ReadFront {
        fn name(&self) -> &'static str {
            "mock/read-front"
        }

        fn description(&self) -> &'static str {
            "ReadBuffer(FRONT) raises no error"
        }

        fn config(&self) -> TestConfig {
            TestConfig::new().compat(10)
        }

        fn run(&self, runner: &mut CheckRunner<'_>) -> Result<(), Skip> {
            runner.expect_error("front", ErrorCode::NoError, |gl| gl.read_buffer(gl::FRONT));
            Ok(())
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let test: Box<dyn ConformanceTest> = Box::new(ReadFront);
        let mut g = ScriptedGl::default();
        let mut runner = CheckRunner::new(&mut g);
        assert!(test.run(&mut runner).is_ok());
        assert_eq!(runner.report().verdict(), Status::Pass);
        assert_eq!(test.name(), "mock/read-front");
        assert_eq!(test.config().gl_compat_version, Some(10));
    }
}
