//! Lifecycle module.
//!
//! Suite markers, the marker registry and lifecycle resolution.

pub use harness_core::lifecycle::*;
