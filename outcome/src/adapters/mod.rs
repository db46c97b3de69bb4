//! Thin wrappers that report fallible library calls through [`Outcome`].
//!
//! Each adapter catches the lower-level error at its boundary and returns
//! a failed `Outcome<_, AdapterError>` instead; none of them panic. The
//! parsing and decoding work itself is delegated to the standard library,
//! `serde_json`, `base64` or the caller's own future.

pub mod collections;
#[cfg(feature = "base64")]
pub mod encoding;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod fs;
#[cfg(feature = "json")]
pub mod json;
pub mod parse;

use crate::{AdapterError, Outcome, fail};

/// Log a rejection and wrap it in a failed outcome.
fn reject<T>(error: AdapterError) -> Outcome<T, AdapterError> {
    tracing::debug!(%error, "adapter rejected input");
    fail(error)
}
