//! Turning lower-level errors into human-readable failure text.
//!
//! Native builds append the error's `Debug` rendering, which usually names
//! the error kind (`ParseIntError { kind: InvalidDigit }`). WebAssembly
//! builds, where the host already reports its own structured errors, keep
//! only the message. The choice is made at compile time through
//! [`ActiveFormat`]; nothing in the outcome combinators depends on it.

use std::error::Error;

/// A strategy for describing a caught error.
pub trait FailureFormat {
    /// Render `error` as failure text.
    fn describe(error: &dyn Error) -> String;
}

/// Message followed by the bracketed `Debug` form of the error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFormat;

impl FailureFormat for NativeFormat {
    fn describe(error: &dyn Error) -> String {
        format!("{error} [{error:?}]")
    }
}

/// The error message alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptFormat;

impl FailureFormat for ScriptFormat {
    fn describe(error: &dyn Error) -> String {
        error.to_string()
    }
}

/// Formatter used by the adapters on this target.
#[cfg(not(target_family = "wasm"))]
pub type ActiveFormat = NativeFormat;

/// Formatter used by the adapters on this target.
#[cfg(target_family = "wasm")]
pub type ActiveFormat = ScriptFormat;

/// Describe `error` with the [`ActiveFormat`] for this target.
#[must_use]
pub fn describe_failure(error: &dyn Error) -> String {
    ActiveFormat::describe(error)
}
