//! Extracting payloads and running branch-specific blocks.

use std::fmt::Display;

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Return the success payload, or `default` for a failure.
    ///
    /// ```
    /// use outcome::{Outcome, fail};
    ///
    /// let missing: Outcome<u16> = fail("no port".to_owned());
    /// assert_eq!(missing.get_or(8080), 8080);
    /// ```
    #[must_use]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Return the success payload, or compute one from the error.
    ///
    /// `recover` runs at most once and only for a failure.
    #[must_use]
    pub fn get_or_else<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => recover(error),
        }
    }

    /// Run `block` with the success payload; do nothing for a failure.
    pub fn if_success<F>(&self, block: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            block(value);
        }
    }

    /// Run `block` with the error payload; do nothing for a success.
    pub fn if_failure<F>(&self, block: F)
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = self {
            block(error);
        }
    }
}

impl<T, E: Display> Outcome<T, E> {
    /// Return the success payload, panicking on failure.
    ///
    /// Reserve this for outcomes that cannot fail in practice. Ordinary
    /// control flow should use [`Outcome::get_or`], [`crate::attempt!`] or
    /// [`crate::catch!`] instead.
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure. The panic message is the error
    /// payload's `Display` output.
    #[must_use]
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{error}"),
        }
    }

    /// Return the success payload, panicking with context on failure.
    ///
    /// ```should_panic
    /// use outcome::{Outcome, fail};
    ///
    /// let config: Outcome<String> = fail("file is empty".to_owned());
    /// // panics with "loading config: file is empty"
    /// let _ = config.expect("loading config: ");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure. The panic message is `message`
    /// immediately followed by the error payload's `Display` output.
    #[must_use]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{message}{error}"),
        }
    }
}
