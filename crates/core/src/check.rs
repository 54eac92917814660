//! Check Runner: invokes the GL capability once per expectation and records
//! the verdict.
//!
//! A [`CheckRunner`] holds exclusive access to the context for one test.
//! Every check goes through [`observe`], so each one starts from a drained
//! error register and cannot see errors from its neighbours. Checks never
//! abort the run; a mismatch is recorded and the next check proceeds.

use crate::api::GlApi;
use crate::config::Skip;
use crate::error_code::ErrorCode;
use crate::expect::{value_label, Entry, Expectation};
use crate::observe::{observe, Observed};
use crate::report::{CheckRecord, Report, Status};

/// The only value a query may return when the resource is unsupported.
const UNSUPPORTED_RESPONSE: &[i64] = &[0];

/// Runs checks against one context and accumulates a [`Report`].
pub struct CheckRunner<'a> {
    gl: &'a mut dyn GlApi,
    report: Report,
    subtest: Option<String>,
}

impl<'a> CheckRunner<'a> {
    pub fn new(gl: &'a mut dyn GlApi) -> Self {
        Self {
            gl,
            report: Report::new(),
            subtest: None,
        }
    }

    /// Direct access for calls whose errors are not under test.
    pub fn gl(&mut self) -> &mut dyn GlApi {
        &mut *self.gl
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_report(self) -> Report {
        self.report
    }

    pub fn note(&mut self, line: impl Into<String>) {
        let line = line.into();
        log::info!("{line}");
        self.report.note(line);
    }

    /// Runs `call` and requires it to raise exactly `expected`.
    pub fn expect_error<F>(&mut self, label: impl Into<String>, expected: ErrorCode, call: F) -> bool
    where
        F: FnOnce(&mut dyn GlApi),
    {
        self.expect(label, Expectation::Error(expected), call)
    }

    /// Runs `call` and requires one of `allowed` (which may include
    /// `NoError`).
    pub fn expect_any_error<F>(
        &mut self,
        label: impl Into<String>,
        allowed: &'static [ErrorCode],
        call: F,
    ) -> bool
    where
        F: FnOnce(&mut dyn GlApi),
    {
        self.expect(label, Expectation::AnyError(allowed), call)
    }

    /// Runs `call` and requires its error classification to satisfy
    /// `expectation`.
    pub fn expect<F>(&mut self, label: impl Into<String>, expectation: Expectation, call: F) -> bool
    where
        F: FnOnce(&mut dyn GlApi),
    {
        let label = label.into();
        let obs = observe(&mut *self.gl, call);
        self.note_leaks(&label, &obs);
        let passed = expectation.admits_error(obs.error);
        self.push(label, expectation.describe(), obs.error.to_string(), passed)
    }

    /// Runs a query and requires it to succeed with an admissible value.
    pub fn expect_value<F>(&mut self, label: impl Into<String>, admissible: Expectation, call: F) -> bool
    where
        F: FnOnce(&mut dyn GlApi) -> i64,
    {
        let label = label.into();
        let obs = observe(&mut *self.gl, call);
        self.note_leaks(&label, &obs);
        let passed = admissible.admits_error(obs.error) && admissible.admits_value(obs.value);
        let observed = if obs.error.is_error() {
            obs.error.to_string()
        } else {
            value_label(obs.value)
        };
        self.push(label, admissible.describe(), observed, passed)
    }

    /// Like [`expect_value`](Self::expect_value), except that when the
    /// resource is unsupported the only legal answer is zero.
    pub fn expect_supported_value<F>(
        &mut self,
        label: impl Into<String>,
        supported: bool,
        admissible: Expectation,
        call: F,
    ) -> bool
    where
        F: FnOnce(&mut dyn GlApi) -> i64,
    {
        if supported {
            self.expect_value(label, admissible, call)
        } else {
            let label = format!("{} (unsupported)", label.into());
            self.expect_value(label, Expectation::OneOf(UNSUPPORTED_RESPONSE), call)
        }
    }

    /// Runs a table of entries. `call` performs the operation for one entry;
    /// each entry is checked against its own expectation.
    pub fn check_entries<F>(&mut self, entries: &[Entry], mut call: F) -> bool
    where
        F: FnMut(&mut dyn GlApi, &Entry),
    {
        let mut pass = true;
        for entry in entries {
            pass &= self.expect(entry.name, entry.expectation, |gl| call(gl, entry));
        }
        pass
    }

    /// Runs a setup step that must not raise an error and returns its value.
    /// A failing setup is recorded but the test carries on.
    pub fn setup<T, F>(&mut self, label: impl Into<String>, call: F) -> T
    where
        F: FnOnce(&mut dyn GlApi) -> T,
    {
        let label = label.into();
        let obs = observe(&mut *self.gl, call);
        self.note_leaks(&label, &obs);
        let passed = obs.error == ErrorCode::NoError;
        self.push(
            label,
            ErrorCode::NoError.to_string(),
            obs.error.to_string(),
            passed,
        );
        obs.value
    }

    /// Groups the checks `body` performs into a named subtest. The subtest
    /// passes only if every check inside it passed.
    pub fn subtest<F>(&mut self, name: impl Into<String>, body: F) -> bool
    where
        F: FnOnce(&mut Self),
    {
        let name = name.into();
        let failures_before = self.report.failures().count();
        let outer = self.subtest.replace(name.clone());
        body(self);
        self.subtest = outer;

        let pass = self.report.failures().count() == failures_before;
        let status = Status::from_pass(pass);
        log::info!("subtest {name}: {status}");
        self.report.subtest(name, status);
        pass
    }

    /// Records a subtest verdict computed by the caller.
    pub fn subtest_result(&mut self, name: impl Into<String>, status: Status) {
        let name = name.into();
        log::info!("subtest {name}: {status}");
        self.report.subtest(name, status);
    }

    pub fn require_extension(&self, name: &str) -> Result<(), Skip> {
        if self.gl.has_extension(name) {
            Ok(())
        } else {
            Err(Skip::new(format!("{name} not supported")))
        }
    }

    pub fn require_version(&self, major: u32, minor: u32) -> Result<(), Skip> {
        let version = self.gl.version();
        if version.at_least(major, minor) {
            Ok(())
        } else {
            Err(Skip::new(format!(
                "GL {major}.{minor} required, context is {version}"
            )))
        }
    }

    fn note_leaks<T>(&mut self, label: &str, obs: &Observed<T>) {
        if !obs.stale.is_empty() {
            let line = format!("{label}: discarded stale errors {:?} before the call", obs.stale);
            log::debug!("{line}");
            self.report.note(line);
        }
        if !obs.trailing.is_empty() {
            let line = format!("{label}: further errors after the first: {:?}", obs.trailing);
            log::debug!("{line}");
            self.report.note(line);
        }
    }

    fn push(&mut self, label: String, expected: String, observed: String, passed: bool) -> bool {
        let record = CheckRecord {
            subtest: self.subtest.clone(),
            label,
            expected,
            observed,
            passed,
        };
        if passed {
            log::debug!("{record}");
        } else {
            log::warn!("{record}");
        }
        self.report.record(record);
        passed
    }
}
