//! Runs tests against one context and turns reports into results.

use crate::api::GlApi;
use crate::check::CheckRunner;
use crate::observe::drain_errors;
use crate::report::Status;
use crate::results::{RunResults, TestResult};
use crate::test::ConformanceTest;
use std::time::Instant;

/// Runs a single test: requirement gate, body, verdict.
pub fn run_test(test: &dyn ConformanceTest, gl: &mut dyn GlApi) -> TestResult {
    let name = test.name();
    if let Err(skip) = test.config().check(&*gl) {
        log::info!("{name}: skip ({skip})");
        return TestResult::skipped(skip.reason);
    }

    let leaked = drain_errors(gl);
    if !leaked.is_empty() {
        log::debug!("{name}: cleared {leaked:?} left by a previous test");
    }

    log::info!("{name}: start");
    let start = Instant::now();
    let mut runner = CheckRunner::new(gl);
    let outcome = test.run(&mut runner);
    let mut report = runner.into_report();
    if let Err(skip) = outcome {
        report.mark_skipped(skip.reason);
    }
    let elapsed = start.elapsed().as_secs_f64();

    let verdict = report.verdict();
    match verdict {
        Status::Fail => log::warn!(
            "{name}: fail ({} of {} checks failed)",
            report.failures().count(),
            report.records().len()
        ),
        _ => log::info!("{name}: {verdict} in {elapsed:.3}s"),
    }

    let (subtests, out) = report.into_parts();
    TestResult {
        result: verdict,
        subtests,
        out,
        time: elapsed,
    }
}

/// Runs every test in order on the same context.
pub fn run_all<'t, I>(name: &str, tests: I, gl: &mut dyn GlApi) -> RunResults
where
    I: IntoIterator<Item = &'t dyn ConformanceTest>,
{
    let mut results = RunResults::new(name);
    for test in tests {
        let result = run_test(test, gl);
        results.insert(test.name(), result);
    }
    let totals = results.totals();
    log::info!(
        "{name}: {} pass, {} fail, {} skip",
        totals.pass,
        totals.fail,
        totals.skip
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KhrNoError, Skip, TestConfig};
    use crate::error_code::ErrorCode;
    use crate::gl;
    use crate::testing::ScriptedGl;

    struct Fixed {
        name: &'static str,
        config: TestConfig,
        src: u32,
        skip_at_runtime: bool,
    }

    impl ConformanceTest for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "fixture"
        }

        fn config(&self) -> TestConfig {
            self.config.clone()
        }

        fn run(&self, runner: &mut CheckRunner<'_>) -> Result<(), Skip> {
            if self.skip_at_runtime {
                runner.require_extension("GL_missing")?;
            }
            runner.subtest("read", |r| {
                r.expect_error("read", ErrorCode::NoError, |gl| gl.read_buffer(self.src));
            });
            Ok(())
        }
    }

    fn fixed(name: &'static str, src: u32) -> Fixed {
        Fixed {
            name,
            config: TestConfig::new(),
            src,
            skip_at_runtime: false,
        }
    }

    #[test]
    fn passing_test_has_subtests_and_time() {
        let mut g = ScriptedGl::default();
        let result = run_test(&fixed("ok", gl::FRONT), &mut g);
        assert_eq!(result.result, Status::Pass);
        assert_eq!(result.subtests.get("read"), Some(Status::Pass));
        assert!(result.time >= 0.0);
    }

    #[test]
    fn failing_test_carries_diagnostics() {
        let mut g = ScriptedGl::default();
        let result = run_test(&fixed("bad", 0xDEAD), &mut g);
        assert_eq!(result.result, Status::Fail);
        assert!(result.out.iter().any(|l| l.contains("GL_INVALID_ENUM")));
    }

    #[test]
    fn unmet_config_skips_without_running() {
        let mut g = ScriptedGl::default();
        g.surface.no_error = true;
        let mut test = fixed("gated", gl::FRONT);
        test.config = TestConfig::new().khr_no_error(KhrNoError::HasErrors);
        let result = run_test(&test, &mut g);
        assert_eq!(result.result, Status::Skip);
        assert!(result.subtests.is_empty());
        assert_eq!(g.calls, 0);
    }

    #[test]
    fn runtime_skip_becomes_skip_verdict() {
        let mut g = ScriptedGl::default();
        let mut test = fixed("late", gl::FRONT);
        test.skip_at_runtime = true;
        let result = run_test(&test, &mut g);
        assert_eq!(result.result, Status::Skip);
        assert!(result.out[0].contains("GL_missing"));
    }

    #[test]
    fn leaked_errors_do_not_reach_next_test() {
        let mut g = ScriptedGl::default();
        g.push_error(gl::INVALID_OPERATION);
        let result = run_test(&fixed("clean", gl::FRONT), &mut g);
        assert_eq!(result.result, Status::Pass);
    }

    #[test]
    fn run_all_collects_every_test() {
        let mut g = ScriptedGl::default();
        let a = fixed("a", gl::FRONT);
        let b = fixed("b", 0xDEAD);
        let tests: Vec<&dyn ConformanceTest> = vec![&a, &b];
        let results = run_all("mock", tests, &mut g);
        assert_eq!(results.tests.len(), 2);
        assert_eq!(results.tests["a"].result, Status::Pass);
        assert_eq!(results.tests["b"].result, Status::Fail);
        assert_eq!(results.verdict(), Status::Fail);
    }
}
