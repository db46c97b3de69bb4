//! Combinators that derive a new outcome from an existing one.

use super::Outcome;

impl<T, E> Outcome<T, E> {
    /// Apply `f` to the success payload; a failure passes through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Apply `f` to the error payload; a success passes through untouched.
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chain a fallible step onto a success.
    ///
    /// A failure is returned as-is and `f` is never called, so a chain of
    /// `and_then` calls stops at the first failing step.
    ///
    /// ```
    /// use outcome::{Outcome, fail, succeed};
    ///
    /// fn positive(n: i32) -> Outcome<i32> {
    ///     if n > 0 { succeed(n) } else { fail("must be positive".to_owned()) }
    /// }
    ///
    /// assert_eq!(succeed(4).and_then(positive), succeed(4));
    /// assert_eq!(succeed(-2).and_then(positive), fail("must be positive".to_owned()));
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Try a fallback when this outcome failed.
    ///
    /// A success is returned as-is and `f` is never called.
    pub fn or_else<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Observe the success payload, then hand back the same outcome.
    ///
    /// The outcome is moved in and returned unchanged, so it suits chains.
    /// Use [`Outcome::inspect_ok`] to observe a binding without moving it.
    pub fn tap_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Observe the error payload, then hand back the same outcome.
    ///
    /// See [`Outcome::inspect_err`] for the borrowing form.
    pub fn tap_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Observe the success payload through a borrow.
    ///
    /// ```
    /// use outcome::{Outcome, succeed};
    ///
    /// struct Token(String);
    ///
    /// let token: Outcome<Token> = succeed(Token("abc".to_owned()));
    /// let mut seen = 0;
    /// token.inspect_ok(|t| seen = t.0.len()).inspect_err(|_| seen = 0);
    /// assert_eq!(seen, 3);
    /// assert!(token.is_success());
    /// ```
    pub fn inspect_ok<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            f(value);
        }
        self
    }

    /// Observe the error payload through a borrow.
    pub fn inspect_err<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = self {
            f(error);
        }
        self
    }

    /// Keep the success payload and drop any error.
    #[must_use]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }
}
