//! Static requirements a test declares before its body runs.
//!
//! A [`TestConfig`] names the context the test needs: minimum GL version per
//! profile, extensions, visual attributes, and whether it relies on errors
//! being generated. [`TestConfig::check`] compares that against the context
//! and produces a [`Skip`] when the environment cannot exercise the test.

use crate::api::{GlApi, Profile, Visual};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a test relates to `KHR_no_error` contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KhrNoError {
    /// The test checks generated errors and cannot run without them.
    HasErrors,
    /// The test raises no errors and is valid on a no-error context.
    NoErrors,
    DontCare,
}

/// The environment cannot run a test (or part of one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skip {
    pub reason: String,
}

impl Skip {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Requirements of one test. Versions use `10 * major + minor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfig {
    pub gl_compat_version: Option<u32>,
    pub gl_core_version: Option<u32>,
    pub gl_es_version: Option<u32>,
    pub required_extensions: Vec<String>,
    pub visual: Visual,
    pub khr_no_error: KhrNoError,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            gl_compat_version: None,
            gl_core_version: None,
            gl_es_version: None,
            required_extensions: Vec::new(),
            visual: Visual::RGB,
            khr_no_error: KhrNoError::DontCare,
        }
    }
}

impl TestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compat(mut self, version: u32) -> Self {
        self.gl_compat_version = Some(version);
        self
    }

    pub fn core(mut self, version: u32) -> Self {
        self.gl_core_version = Some(version);
        self
    }

    pub fn es(mut self, version: u32) -> Self {
        self.gl_es_version = Some(version);
        self
    }

    pub fn extension(mut self, name: &str) -> Self {
        self.required_extensions.push(name.to_string());
        self
    }

    pub fn visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }

    pub fn khr_no_error(mut self, mode: KhrNoError) -> Self {
        self.khr_no_error = mode;
        self
    }

    /// Checks every requirement against `gl`. Returns the first unmet one.
    pub fn check(&self, gl: &dyn GlApi) -> Result<(), Skip> {
        let version = gl.version();
        let number = version.as_number();

        let any_version =
            self.gl_compat_version.is_some() || self.gl_core_version.is_some() || self.gl_es_version.is_some();
        if any_version {
            let compat_ok = self
                .gl_compat_version
                .is_some_and(|v| version.profile == Profile::Compatibility && number >= v);
            let core_ok = self
                .gl_core_version
                .is_some_and(|v| version.profile != Profile::Es && number >= v);
            let es_ok = self
                .gl_es_version
                .is_some_and(|v| version.profile == Profile::Es && number >= v);
            if !(compat_ok || core_ok || es_ok) {
                return Err(Skip::new(format!(
                    "context {version} does not satisfy {}",
                    self.version_requirement()
                )));
            }
        }

        if let Some(missing) = self
            .required_extensions
            .iter()
            .find(|ext| !gl.has_extension(ext))
        {
            return Err(Skip::new(format!("{missing} not supported")));
        }

        let surface = gl.surface();
        if !surface.visual.contains(self.visual) {
            let missing = self.visual.difference(surface.visual);
            return Err(Skip::new(format!("visual lacks {missing:?}")));
        }

        if self.khr_no_error == KhrNoError::HasErrors && surface.no_error {
            return Err(Skip::new(
                "test checks GL errors but the context uses KHR_no_error",
            ));
        }

        Ok(())
    }

    /// Readable summary of the version requirement, e.g. `GL 4.5 core`.
    pub fn version_requirement(&self) -> String {
        let mut parts = Vec::new();
        if let Some(v) = self.gl_compat_version {
            parts.push(format!("GL {}.{} compat", v / 10, v % 10));
        }
        if let Some(v) = self.gl_core_version {
            parts.push(format!("GL {}.{} core", v / 10, v % 10));
        }
        if let Some(v) = self.gl_es_version {
            parts.push(format!("GLES {}.{}", v / 10, v % 10));
        }
        if parts.is_empty() {
            "any GL".to_string()
        } else {
            parts.join(" or ")
        }
    }
}
