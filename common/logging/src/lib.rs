#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Simple logging utilities for the definition layer.
//!
//! Trace output is off unless the `TRACEDEF_TRACE` environment variable is
//! set, so embedding applications pay nothing by default.

use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

/// Returns whether trace output is enabled for this process.
///
/// The `TRACEDEF_TRACE` environment variable is consulted once, on first call.
pub fn enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var_os("TRACEDEF_TRACE").is_some())
}

/// Prints a trace message to stderr with module prefix.
pub fn trace(module: &str, msg: &str) {
    if enabled() {
        eprintln!("[TRACE][{}] {}", module, msg);
    }
}
