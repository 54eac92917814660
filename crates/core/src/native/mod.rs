//! Native driver backend.
//!
//! Only available with the `native` feature. Context creation belongs to
//! the embedder; this module takes a loader for an already current context.

mod backend;
mod entry_points;

pub use backend::GlowBackend;
