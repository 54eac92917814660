#![deny(unsafe_code)]
//! Core of the gl-conform conformance runner.
//!
//! Provides the GL enumerant tables, the `GlApi` capability every backend
//! implements, the `observe` error side channel, the `CheckRunner` that
//! executes expectation tables, and the `Report`/`Status` aggregation that
//! turns checks into one verdict per test. The optional `native` feature
//! adds a `glow` backend for live drivers.

pub mod api;
pub mod check;
pub mod config;
pub mod error;
pub mod error_code;
pub mod expect;
pub mod gl;
pub mod harness;
pub mod observe;
pub mod report;
pub mod results;
pub mod test;

#[cfg(feature = "native")]
pub mod native;

#[cfg(test)]
mod testing;

pub use api::{GlApi, GlVersion, Profile, SurfaceInfo, Visual};
pub use check::CheckRunner;
pub use config::{KhrNoError, Skip, TestConfig};
pub use error::ConformError;
pub use error_code::ErrorCode;
pub use expect::{Entry, Expectation};
pub use observe::{observe, Observed};
pub use report::{aggregate, CheckRecord, Report, Status, Subtests};
pub use results::{RunResults, TestResult, Totals, ROOT_GROUP};
pub use test::ConformanceTest;
