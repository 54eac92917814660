//! Result Aggregator: per-check verdicts folded into one test verdict.
//!
//! Aggregation is a logical AND that never short-circuits: every check is
//! recorded before the verdict is computed, so one run surfaces every
//! failure. Skipped checks do not count towards the AND.

use crate::error::ConformError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Verdict of one check, subtest, or test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
    Skip,
}

impl Status {
    /// Combines two verdicts: any failure fails, otherwise any pass passes,
    /// otherwise the result is a skip.
    pub fn merge(self, other: Status) -> Status {
        match (self, other) {
            (Status::Fail, _) | (_, Status::Fail) => Status::Fail,
            (Status::Pass, _) | (_, Status::Pass) => Status::Pass,
            _ => Status::Skip,
        }
    }

    pub fn from_pass(pass: bool) -> Status {
        if pass {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Fail => "fail",
            Status::Skip => "skip",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ConformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass" => Ok(Status::Pass),
            "fail" => Ok(Status::Fail),
            "skip" => Ok(Status::Skip),
            other => Err(ConformError::UnknownStatus(other.to_string())),
        }
    }
}

/// Folds verdicts with [`Status::merge`]. An empty sequence passes.
pub fn aggregate<I>(statuses: I) -> Status
where
    I: IntoIterator<Item = Status>,
{
    statuses
        .into_iter()
        .reduce(Status::merge)
        .unwrap_or(Status::Pass)
}

/// Named sub-results in the order they were first reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subtests {
    entries: Vec<(String, Status)>,
}

impl Subtests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `status` for `name`. Reporting the same name again merges
    /// the verdicts, so a later pass cannot hide an earlier failure.
    pub fn insert(&mut self, name: impl Into<String>, status: Status) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = existing.merge(status),
            None => self.entries.push((name, status)),
        }
    }

    pub fn get(&self, name: &str) -> Option<Status> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Status)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }

    pub fn statuses(&self) -> impl Iterator<Item = Status> + '_ {
        self.entries.iter().map(|(_, s)| *s)
    }
}

impl Serialize for Subtests {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, status) in &self.entries {
            map.serialize_entry(name, status)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Subtests {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SubtestsVisitor;

        impl<'de> Visitor<'de> for SubtestsVisitor {
            type Value = Subtests;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of subtest name to status")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Subtests, A::Error> {
                let mut subtests = Subtests::new();
                while let Some((name, status)) = access.next_entry::<String, Status>()? {
                    subtests.insert(name, status);
                }
                Ok(subtests)
            }
        }

        deserializer.deserialize_map(SubtestsVisitor)
    }
}

/// One executed check: what was expected, what was observed, and the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// Enclosing subtest, if the check ran inside one.
    pub subtest: Option<String>,
    pub label: String,
    pub expected: String,
    pub observed: String,
    pub passed: bool,
}

impl fmt::Display for CheckRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed { "ok" } else { "FAILED" };
        write!(
            f,
            "{verdict}: {}: expected {} but observed {}",
            self.label, self.expected, self.observed
        )
    }
}

/// Everything one test run produced.
#[derive(Debug, Clone, Default)]
pub struct Report {
    records: Vec<CheckRecord>,
    subtests: Subtests,
    diagnostics: Vec<String>,
    skipped: Option<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: CheckRecord) {
        if !record.passed {
            self.diagnostics.push(record.to_string());
        }
        self.records.push(record);
    }

    pub fn subtest(&mut self, name: impl Into<String>, status: Status) {
        self.subtests.insert(name, status);
    }

    /// Adds a free-form diagnostic line to the output.
    pub fn note(&mut self, line: impl Into<String>) {
        self.diagnostics.push(line.into());
    }

    pub fn mark_skipped(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        self.diagnostics.push(format!("skip: {reason}"));
        self.skipped = Some(reason);
    }

    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    pub fn subtests(&self) -> &Subtests {
        &self.subtests
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn skip_reason(&self) -> Option<&str> {
        self.skipped.as_deref()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckRecord> {
        self.records.iter().filter(|r| !r.passed)
    }

    /// Test-level verdict. Fails if any check or subtest failed; otherwise a
    /// recorded skip wins; otherwise the AND of everything that ran.
    pub fn verdict(&self) -> Status {
        let ran = aggregate(
            self.records
                .iter()
                .map(|r| Status::from_pass(r.passed))
                .chain(self.subtests.statuses()),
        );
        match (ran, &self.skipped) {
            (Status::Fail, _) => Status::Fail,
            (_, Some(_)) => Status::Skip,
            (status, None) => status,
        }
    }

    pub fn into_parts(self) -> (Subtests, Vec<String>) {
        (self.subtests, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, passed: bool) -> CheckRecord {
        CheckRecord {
            subtest: None,
            label: label.into(),
            expected: "GL_INVALID_VALUE".into(),
            observed: if passed { "GL_INVALID_VALUE" } else { "GL_NO_ERROR" }.into(),
            passed,
        }
    }

    #[test]
    fn merge_prefers_fail_then_pass() {
        assert_eq!(Status::Pass.merge(Status::Fail), Status::Fail);
        assert_eq!(Status::Skip.merge(Status::Pass), Status::Pass);
        assert_eq!(Status::Skip.merge(Status::Skip), Status::Skip);
        assert_eq!(Status::Fail.merge(Status::Skip), Status::Fail);
    }

    #[test]
    fn aggregate_of_nothing_passes() {
        assert_eq!(aggregate(Vec::<Status>::new()), Status::Pass);
    }

    #[test]
    fn aggregate_ignores_skips() {
        assert_eq!(aggregate([Status::Skip, Status::Pass]), Status::Pass);
        assert_eq!(aggregate([Status::Skip, Status::Skip]), Status::Skip);
    }

    #[test]
    fn status_parses_from_lowercase_strings() {
        assert_eq!("pass".parse::<Status>().unwrap(), Status::Pass);
        assert_eq!("FAIL".parse::<Status>().unwrap(), Status::Fail);
        assert_eq!(" skip ".parse::<Status>().unwrap(), Status::Skip);
        assert!("crash".parse::<Status>().is_err());
    }

    #[test]
    fn subtests_keep_insertion_order() {
        let mut s = Subtests::new();
        s.insert("zeta", Status::Pass);
        s.insert("alpha", Status::Fail);
        let names: Vec<&str> = s.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn reinserting_subtest_cannot_hide_failure() {
        let mut s = Subtests::new();
        s.insert("GL_READ_PIXELS", Status::Fail);
        s.insert("GL_READ_PIXELS", Status::Pass);
        assert_eq!(s.get("GL_READ_PIXELS"), Some(Status::Fail));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn subtests_serialize_as_object() {
        let mut s = Subtests::new();
        s.insert("foo", Status::Pass);
        s.insert("bar", Status::Skip);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json, serde_json::json!({"foo": "pass", "bar": "skip"}));
    }

    #[test]
    fn subtests_deserialize_strings_to_statuses() {
        let s: Subtests = serde_json::from_str(r#"{"foo": "pass", "bar": "fail"}"#).unwrap();
        assert_eq!(s.get("foo"), Some(Status::Pass));
        assert_eq!(s.get("bar"), Some(Status::Fail));
    }

    #[test]
    fn report_fails_if_any_record_fails() {
        let mut r = Report::new();
        r.record(record("a", true));
        r.record(record("b", false));
        r.record(record("c", true));
        assert_eq!(r.verdict(), Status::Fail);
        assert_eq!(r.failures().count(), 1);
        assert_eq!(r.records().len(), 3);
    }

    #[test]
    fn report_failure_produces_diagnostic_with_names() {
        let mut r = Report::new();
        r.record(record("glNamedFramebufferDrawBuffers(n = -1)", false));
        let line = &r.diagnostics()[0];
        assert!(line.contains("n = -1"), "{line}");
        assert!(line.contains("GL_INVALID_VALUE"), "{line}");
        assert!(line.contains("GL_NO_ERROR"), "{line}");
    }

    #[test]
    fn report_skip_without_failures_is_skip() {
        let mut r = Report::new();
        r.mark_skipped("GL_ARB_vertex_attrib_64bit not supported");
        assert_eq!(r.verdict(), Status::Skip);
        assert!(r.skip_reason().unwrap().contains("64bit"));
    }

    #[test]
    fn skip_after_passing_checks_is_skip() {
        let mut r = Report::new();
        r.record(record("glTexImage3DMultisample(samples = 0)", true));
        r.subtest("GL_SAMPLES", Status::Pass);
        r.mark_skipped("GL_ARB_framebuffer_object not supported");
        assert_eq!(r.verdict(), Status::Skip);
    }

    #[test]
    fn report_failure_beats_skip() {
        let mut r = Report::new();
        r.record(record("setup", false));
        r.mark_skipped("later requirement missing");
        assert_eq!(r.verdict(), Status::Fail);
    }

    #[test]
    fn failed_subtest_fails_report() {
        let mut r = Report::new();
        r.record(record("a", true));
        r.subtest("rule", Status::Fail);
        assert_eq!(r.verdict(), Status::Fail);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn status() -> impl Strategy<Value = Status> {
            prop_oneof![Just(Status::Pass), Just(Status::Fail), Just(Status::Skip)]
        }

        proptest! {
            #[test]
            fn aggregate_fails_iff_any_fails(statuses in prop::collection::vec(status(), 0..32)) {
                let any_fail = statuses.contains(&Status::Fail);
                prop_assert_eq!(aggregate(statuses.clone()) == Status::Fail, any_fail);
            }

            #[test]
            fn aggregate_passes_iff_no_fail_and_some_pass_or_empty(
                statuses in prop::collection::vec(status(), 0..32)
            ) {
                let expect_pass = !statuses.contains(&Status::Fail)
                    && (statuses.is_empty() || statuses.contains(&Status::Pass));
                prop_assert_eq!(aggregate(statuses) == Status::Pass, expect_pass);
            }

            #[test]
            fn aggregate_is_order_independent(mut statuses in prop::collection::vec(status(), 0..32)) {
                let forward = aggregate(statuses.clone());
                statuses.reverse();
                prop_assert_eq!(forward, aggregate(statuses));
            }

            #[test]
            fn report_records_every_check(passes in prop::collection::vec(any::<bool>(), 1..40)) {
                let mut r = Report::new();
                for (i, p) in passes.iter().enumerate() {
                    r.record(record(&format!("check {i}"), *p));
                }
                prop_assert_eq!(r.records().len(), passes.len());
                prop_assert_eq!(r.failures().count(), passes.iter().filter(|p| !**p).count());
                prop_assert_eq!(r.verdict() == Status::Fail, passes.contains(&false));
            }
        }
    }
}
