#![forbid(unsafe_code)]

//! Core: key event model and logging plumbing shared by the peekcard crates.

pub mod event;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
