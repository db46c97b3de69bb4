//! The error payload carried by adapter failures.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Why an adapter could not produce a value.
///
/// Every variant renders a human-readable message, so a failed
/// `Outcome<T, AdapterError>` can always be stringified by
/// [`crate::Outcome::get`] or flattened with
/// `map_err(|e| e.to_string())`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AdapterError {
    /// Text could not be converted into the requested primitive.
    #[error("cannot parse '{input}' as {target}: {detail}")]
    Parse {
        /// The rejected text.
        input: String,
        /// Name of the type the text was meant to become.
        target: &'static str,
        /// Description of the underlying parse error.
        detail: String,
    },

    /// A sequence was indexed past its end.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// A map or document had no entry for the key.
    #[error("key not found: {key}")]
    MissingKey {
        /// The key, rendered for display.
        key: String,
    },

    /// Reading a file failed.
    #[error("cannot read '{path}': {detail}")]
    Io {
        /// Path that was being read.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        detail: String,
    },

    /// Encoded input (for example base64) was malformed.
    #[error("invalid encoded data: {detail}")]
    Decode {
        /// Description of the decoding error.
        detail: String,
    },

    /// A JSON document could not be parsed, navigated or deserialized.
    #[error("JSON error: {detail}")]
    Json {
        /// Description of the JSON error.
        detail: String,
    },

    /// The transport behind an asynchronous request reported an error.
    #[error("request failed: {detail}")]
    Transport {
        /// Description of the transport error.
        detail: String,
    },

    /// The asynchronous request was dropped before it produced a response.
    #[error("request was cancelled before a response arrived")]
    Cancelled,
}
