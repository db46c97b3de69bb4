//! A success-or-failure outcome type and the combinators built around it.
//!
//! [`Outcome`] is either a [`Outcome::Success`] carrying a `T` or a
//! [`Outcome::Failure`] carrying an `E` (a `String` unless stated otherwise).
//! The [`attempt!`] macro returns early from an outcome-returning function on
//! failure, and [`catch!`] hands a failure to a recovery block that either
//! substitutes a value or returns.
//!
//! ```
//! use outcome::{Outcome, attempt, fail, succeed};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32> {
//!     if b == 0 {
//!         return fail("division by zero".to_owned());
//!     }
//!     succeed(a / b)
//! }
//!
//! fn chained_division(a: i32, b: i32, c: i32) -> Outcome<i32> {
//!     let first = attempt!(divide(a, b));
//!     let second = attempt!(divide(first, c));
//!     succeed(second)
//! }
//!
//! assert_eq!(chained_division(100, 10, 2), succeed(5));
//! assert_eq!(chained_division(100, 0, 2), fail("division by zero".to_owned()));
//! ```
//!
//! The [`adapters`] module wraps fallible standard-library and third-party
//! calls (parsing, lookups, JSON, files, base64, fetches) so they report
//! through [`Outcome`] with an [`AdapterError`] payload.

mod control;
mod error;
mod format;
mod outcome;

pub mod adapters;

pub use error::AdapterError;
pub use format::{ActiveFormat, FailureFormat, NativeFormat, ScriptFormat, describe_failure};
pub use outcome::{Outcome, fail, fail_as, succeed};
