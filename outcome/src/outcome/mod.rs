//! The [`Outcome`] type, its constructors and payload accessors.
//!
//! Inspection helpers live in `extract` and the transformation combinators in
//! `transform`; both only add inherent methods to [`Outcome`].

mod extract;
mod transform;

use serde::{Deserialize, Serialize};

/// The result of a computation that either succeeded with a `T` or failed
/// with an `E`.
///
/// Only the payload matching the variant exists, so an outcome can never be
/// both, or neither. Combinators consume the outcome and build a new one; no
/// method mutates a payload in place.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, fail, succeed};
///
/// let parsed: Outcome<u8> = succeed(7);
/// let failed: Outcome<u8> = fail("not a number".to_owned());
///
/// assert_eq!(parsed.map(|n| n * 2).get_or(0), 14);
/// assert_eq!(failed.map(|n| n * 2).get_or(0), 0);
/// ```
#[must_use = "an outcome may be a failure that should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome<T, E = String> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error payload.
    Failure(E),
}

/// Build a successful outcome holding `value`.
pub const fn succeed<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Build a failed outcome holding `error`.
///
/// When nothing else pins the error type it defaults to `String` through the
/// declared type of the binding or function, for example `Outcome<u32>`.
pub const fn fail<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Build a failure of error type `E2` whose success type matches `witness`.
///
/// The witness is only used to fix `T`; its payload is never read, so a
/// successful witness is fine.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, fail_as, succeed};
///
/// #[derive(Debug, PartialEq)]
/// enum Rejected {
///     TooLarge,
/// }
///
/// let witness: Outcome<u32> = succeed(3);
/// let rejected = fail_as(&witness, Rejected::TooLarge);
/// assert_eq!(rejected, Outcome::<u32, Rejected>::Failure(Rejected::TooLarge));
/// ```
pub const fn fail_as<T, E, E2>(witness: &Outcome<T, E>, error: E2) -> Outcome<T, E2> {
    witness.fail_as(error)
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` when the outcome is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` when the outcome is a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the success payload, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the error payload, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Take the error payload, discarding a success.
    #[must_use]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrow both payloads, producing an outcome of references.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Method form of [`fail_as`].
    pub const fn fail_as<E2>(&self, error: E2) -> Outcome<T, E2> {
        Outcome::Failure(error)
    }

    /// Convert into a standard [`Result`], so the native `?` operator can be
    /// used in `Result`-returning code.
    ///
    /// # Errors
    ///
    /// Returns the error payload when the outcome is a failure.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
