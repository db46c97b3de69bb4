//! Named constructors that describe a lower-level error with the active
//! failure formatter.

use std::error::Error;
use std::fmt::Debug;

use camino::Utf8Path;

use super::AdapterError;
use crate::describe_failure;

impl AdapterError {
    /// Parse failure for `input` targeting type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::AdapterError;
    ///
    /// let source = "12a".parse::<u8>().unwrap_err();
    /// let err = AdapterError::parse::<u8>("12a", &source);
    /// assert!(err.to_string().starts_with("cannot parse '12a' as u8: "));
    /// ```
    #[must_use]
    pub fn parse<T>(input: &str, source: &dyn Error) -> Self {
        Self::Parse {
            input: input.to_owned(),
            target: std::any::type_name::<T>(),
            detail: describe_failure(source),
        }
    }

    /// Out-of-bounds access at `index` into a sequence of `len` items.
    #[must_use]
    pub const fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Missing entry for `key`, rendered with its `Debug` form.
    #[must_use]
    pub fn missing_key<K: Debug + ?Sized>(key: &K) -> Self {
        Self::MissingKey {
            key: format!("{key:?}"),
        }
    }

    /// I/O failure while reading `path`.
    #[must_use]
    pub fn io(path: &Utf8Path, source: &std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            detail: describe_failure(source),
        }
    }

    /// Malformed encoded input.
    #[must_use]
    pub fn decode(source: &dyn Error) -> Self {
        Self::Decode {
            detail: describe_failure(source),
        }
    }

    /// JSON failure caused by `source`.
    #[must_use]
    pub fn json(source: &dyn Error) -> Self {
        Self::Json {
            detail: describe_failure(source),
        }
    }

    /// JSON document shape did not match what the caller asked for.
    #[must_use]
    pub fn json_shape(detail: impl Into<String>) -> Self {
        Self::Json {
            detail: detail.into(),
        }
    }

    /// Transport failure behind an asynchronous request.
    #[must_use]
    pub fn transport(source: &dyn Error) -> Self {
        Self::Transport {
            detail: describe_failure(source),
        }
    }
}
