//! Process-level setup shared by the demo binary and anything embedding the crate.
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use self::tracing::*;
