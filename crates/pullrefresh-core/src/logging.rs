#![forbid(unsafe_code)]

//! Logging re-exports.
//!
//! With the `tracing` feature on, the `tracing` macros are re-exported here
//! so dependents can log through `pullrefresh_core` without naming the crate.
//! Without it this module is empty and call sites compile out.
//!
//! Levels used across the workspace:
//! - `debug`: gesture and lifecycle transitions
//! - `trace`: per-move updates and skipped renders
//! - `info`: auto-complete timeouts
//! - `warn`: rejected configuration

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, trace, warn};
