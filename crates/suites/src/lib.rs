#![deny(unsafe_code)]
//! Test registry: maps test names to the shipped conformance tests.
//!
//! This crate sits between `gl-conform-core` (which defines the
//! `ConformanceTest` trait) and the binaries that run tests by name, so
//! dispatch is written once.

pub mod draw_buffers;
pub mod internalformat_query2;
pub mod readbuffer;
pub mod texture_multisample;
pub mod zero_vertex_attrib;

use gl_conform_core::config::{Skip, TestConfig};
use gl_conform_core::error::ConformError;
use gl_conform_core::{CheckRunner, ConformanceTest};

/// All test names, in run order.
const TEST_NAMES: &[&str] = &[
    "gl-1.0/simple-readbuffer",
    "gl-4.5/named-framebuffer-draw-buffers-errors",
    "arb_texture_multisample/errors",
    "arb_internalformat_query2/generic-pname-checks",
    "arb_vertex_attrib_64bit/zero-vertex-attrib",
];

/// Enumeration of every shipped test.
///
/// Use [`TestKind::from_name`] for string-based lookup (CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    SimpleReadbuffer,
    NamedFramebufferDrawBuffersErrors,
    TextureMultisampleErrors,
    GenericPnameChecks,
    ZeroVertexAttrib,
}

impl TestKind {
    /// Looks a test up by its registry name.
    ///
    /// Returns `ConformError::UnknownTest` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ConformError> {
        match name {
            "gl-1.0/simple-readbuffer" => Ok(TestKind::SimpleReadbuffer),
            "gl-4.5/named-framebuffer-draw-buffers-errors" => Ok(TestKind::NamedFramebufferDrawBuffersErrors),
            "arb_texture_multisample/errors" => Ok(TestKind::TextureMultisampleErrors),
            "arb_internalformat_query2/generic-pname-checks" => Ok(TestKind::GenericPnameChecks),
            "arb_vertex_attrib_64bit/zero-vertex-attrib" => Ok(TestKind::ZeroVertexAttrib),
            _ => Err(ConformError::UnknownTest(name.to_string())),
        }
    }

    /// Returns a slice of all recognized test names.
    pub fn list_tests() -> &'static [&'static str] {
        TEST_NAMES
    }

    /// Every test, in run order.
    pub fn all() -> Vec<TestKind> {
        vec![
            TestKind::SimpleReadbuffer,
            TestKind::NamedFramebufferDrawBuffersErrors,
            TestKind::TextureMultisampleErrors,
            TestKind::GenericPnameChecks,
            TestKind::ZeroVertexAttrib,
        ]
    }

    /// The implementation behind this kind.
    pub fn test(self) -> Box<dyn ConformanceTest> {
        match self {
            TestKind::SimpleReadbuffer => Box::new(readbuffer::SimpleReadbuffer),
            TestKind::NamedFramebufferDrawBuffersErrors => {
                Box::new(draw_buffers::NamedFramebufferDrawBuffersErrors)
            }
            TestKind::TextureMultisampleErrors => Box::new(texture_multisample::TextureMultisampleErrors),
            TestKind::GenericPnameChecks => Box::new(internalformat_query2::GenericPnameChecks),
            TestKind::ZeroVertexAttrib => Box::new(zero_vertex_attrib::ZeroVertexAttrib),
        }
    }
}

impl ConformanceTest for TestKind {
    fn name(&self) -> &'static str {
        self.test().name()
    }

    fn description(&self) -> &'static str {
        self.test().description()
    }

    fn config(&self) -> TestConfig {
        self.test().config()
    }

    fn run(&self, runner: &mut CheckRunner<'_>) -> Result<(), Skip> {
        self.test().run(runner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_finds_every_listed_test() {
        for name in TestKind::list_tests() {
            let kind = TestKind::from_name(name).unwrap();
            assert_eq!(kind.name(), *name);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = TestKind::from_name("gl-9.9/nonexistent");
        assert!(matches!(result, Err(ConformError::UnknownTest(_))));
    }

    #[test]
    fn all_matches_list_order() {
        let names: Vec<&str> = TestKind::all().iter().map(|k| k.name()).collect();
        assert_eq!(names, TestKind::list_tests());
    }

    #[test]
    fn every_test_has_a_description_and_version() {
        for kind in TestKind::all() {
            assert!(!kind.description().is_empty());
            assert_ne!(kind.config().version_requirement(), "any GL", "{}", kind.name());
        }
    }

    #[test]
    fn object_safety() {
        let boxed: Box<dyn ConformanceTest> = Box::new(TestKind::ZeroVertexAttrib);
        assert_eq!(boxed.name(), "arb_vertex_attrib_64bit/zero-vertex-attrib");
    }
}
