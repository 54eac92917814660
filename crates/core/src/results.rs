//! Result files: the JSON written after a run and read back by `summary`.
//!
//! The layout follows the usual conformance-runner shape: a top-level
//! object with the run name and a `tests` map from test name to
//! `{ "result", "subtests", "out", "time" }`.
//!
//! Test names are `/`-separated group paths. [`RunResults::group_totals`]
//! counts results per group, with a test that has subtests counted as a
//! group of its own.

use crate::error::ConformError;
use crate::report::{aggregate, Status, Subtests};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Key of the whole run in [`RunResults::group_totals`].
pub const ROOT_GROUP: &str = "root";

/// Separator between group names in a test name.
pub const GROUP_SEPARATOR: char = '/';

/// Outcome of one test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub result: Status,
    #[serde(default)]
    pub subtests: Subtests,
    /// Diagnostic lines, one per failed check or note.
    #[serde(default)]
    pub out: Vec<String>,
    /// Wall-clock seconds.
    #[serde(default)]
    pub time: f64,
}

impl TestResult {
    pub fn new(result: Status) -> Self {
        Self {
            result,
            subtests: Subtests::new(),
            out: Vec::new(),
            time: 0.0,
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        let mut result = Self::new(Status::Skip);
        result.out.push(format!("skip: {}", reason.into()));
        result
    }

    /// The worst of `result` and the subtests. A failed subtest fails the
    /// test whatever `result` says; otherwise `result` stands, so a test
    /// that recorded a skip after passing subtests stays a skip.
    pub fn status(&self) -> Status {
        if self.subtests.statuses().any(|s| s == Status::Fail) {
            Status::Fail
        } else {
            self.result
        }
    }
}

/// Per-status counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
}

impl Totals {
    pub fn add(&mut self, status: Status) {
        match status {
            Status::Pass => self.pass += 1,
            Status::Fail => self.fail += 1,
            Status::Skip => self.skip += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.pass + self.fail + self.skip
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// `path` and every group above it, outermost first: `a/b/c` yields `a`,
/// `a/b`, `a/b/c`. An empty path yields nothing.
fn group_chain<'a>(path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    path.match_indices(GROUP_SEPARATOR)
        .map(move |(i, _)| &path[..i])
        .chain((!path.is_empty()).then_some(path))
}

fn parent_group(name: &str) -> &str {
    name.rsplit_once(GROUP_SEPARATOR)
        .map_or("", |(parent, _)| parent)
}

/// Every test result from one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResults {
    pub name: String,
    #[serde(default)]
    pub tests: BTreeMap<String, TestResult>,
}

impl RunResults {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, test: impl Into<String>, result: TestResult) {
        self.tests.insert(test.into(), result);
    }

    /// One count per test, by [`TestResult::status`].
    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();
        for result in self.tests.values() {
            totals.add(result.status());
        }
        totals
    }

    /// Totals for [`ROOT_GROUP`] and for every group path. A test without
    /// subtests counts once in each group above it. A test with subtests
    /// is a group itself: each subtest counts in it and in every group
    /// above it, and the test's own result is not counted.
    pub fn group_totals(&self) -> BTreeMap<String, Totals> {
        let mut groups = BTreeMap::new();
        groups.insert(ROOT_GROUP.to_string(), Totals::default());
        for (name, test) in &self.tests {
            let (node, statuses): (&str, Vec<Status>) = if test.subtests.is_empty() {
                (parent_group(name), vec![test.status()])
            } else {
                (name.as_str(), test.subtests.statuses().collect())
            };
            for status in statuses {
                for group in std::iter::once(ROOT_GROUP).chain(group_chain(node)) {
                    groups
                        .entry(group.to_string())
                        .or_default()
                        .add(status);
                }
            }
        }
        groups
    }

    /// AND of every test verdict, skips excluded. All skipped is a skip.
    pub fn verdict(&self) -> Status {
        aggregate(self.tests.values().map(TestResult::status))
    }

    pub fn to_json(&self) -> Result<String, ConformError> {
        serde_json::to_string_pretty(self).map_err(|e| ConformError::Malformed {
            what: "results".into(),
            message: e.to_string(),
        })
    }

    /// Parses a results file. Each stored `result` is reconciled with its
    /// subtests, so a file claiming `pass` over a failed subtest loads as
    /// `fail`.
    pub fn from_json(text: &str) -> Result<Self, ConformError> {
        let mut run: Self = serde_json::from_str(text).map_err(|e| ConformError::Malformed {
            what: "results file".into(),
            message: e.to_string(),
        })?;
        for (name, test) in &mut run.tests {
            let status = test.status();
            if status != test.result {
                log::warn!("{name}: stored result {} but a subtest failed", test.result);
                test.result = status;
            }
        }
        Ok(run)
    }

    pub fn write(&self, path: &Path) -> Result<(), ConformError> {
        let text = self.to_json()?;
        fs::write(path, text).map_err(|e| ConformError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        log::info!("wrote {} results to {}", self.tests.len(), path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConformError> {
        let text = fs::read_to_string(path).map_err(|e| ConformError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&text)
    }
}
