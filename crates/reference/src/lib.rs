#![deny(unsafe_code)]
//! Software reference GL for gl-conform.
//!
//! `ReferenceGl` implements `GlApi` with the error rules of GL 4.5 for every
//! entry point the shipped tests call. A [`ReferenceProfile`] picks the
//! version, extensions, limits and surface, and may carry [`Quirk`]s that
//! break single rules so the tests can be seen to catch them.

mod attrib;
mod context;
mod error;
pub mod formats;
mod framebuffer;
mod profile;
mod query;
mod quirk;
mod texture;

pub use context::ReferenceGl;
pub use error::ReferenceError;
pub use profile::{Limits, ReferenceProfile, ALL_EXTENSIONS, MAX_VERTEX_ATTRIBS_LIMIT};
pub use quirk::{Quirk, INADMISSIBLE_VALUE};
