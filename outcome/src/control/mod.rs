//! Early-return and inline-recovery macros for outcome-returning functions.
//!
//! Both macros expand to a plain `match`, so a `return` inside them leaves
//! the function that invoked the macro. The failure they return is typed by
//! the enclosing function's declared return type through ordinary type
//! inference.

/// Unwrap a successful outcome or return its failure from the enclosing
/// function.
///
/// The enclosing function must return `Outcome<R, E2>` where
/// `E2: From<E>`; the error is converted with [`From::from`], which is the
/// identity when the error types match. Using the macro anywhere else fails
/// to compile.
///
/// ```
/// use outcome::{Outcome, attempt, fail, succeed};
///
/// fn divide(a: i32, b: i32) -> Outcome<i32> {
///     if b == 0 { fail("division by zero".to_owned()) } else { succeed(a / b) }
/// }
///
/// fn describe(a: i32, b: i32) -> Outcome<String> {
///     let quotient = attempt!(divide(a, b));
///     succeed(format!("{a} / {b} = {quotient}"))
/// }
///
/// assert_eq!(describe(9, 3), succeed("9 / 3 = 3".to_owned()));
/// assert_eq!(describe(9, 0), fail("division by zero".to_owned()));
/// ```
///
/// A function returning `()` cannot propagate the failure:
///
/// ```compile_fail
/// use outcome::{Outcome, attempt, succeed};
///
/// fn read() -> Outcome<u8> { succeed(1) }
///
/// fn main() {
///     let byte = attempt!(read());
///     assert_eq!(byte, 1);
/// }
/// ```
#[macro_export]
macro_rules! attempt {
    ($outcome:expr $(,)?) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            }
        }
    };
}

/// Unwrap a successful outcome or evaluate a recovery expression.
///
/// On failure the whole failed outcome is bound to the given name, which is
/// only in scope inside the recovery expression. The recovery must either
/// leave the enclosing function (`return`, `break`, a panic) or evaluate to a
/// value of the success type; anything else is a type error.
///
/// ```
/// use outcome::{Outcome, catch, fail, succeed};
///
/// fn port(raw: Outcome<u16>) -> Outcome<String> {
///     let port = catch!(raw, failure => {
///         if failure.failure().is_some_and(|e| e.is_empty()) {
///             8080
///         } else {
///             return failure.map(|p| p.to_string());
///         }
///     });
///     succeed(format!("listening on {port}"))
/// }
///
/// assert_eq!(port(succeed(9000)), succeed("listening on 9000".to_owned()));
/// assert_eq!(port(fail(String::new())), succeed("listening on 8080".to_owned()));
/// assert_eq!(port(fail("refused".to_owned())), fail("refused".to_owned()));
/// ```
///
/// A recovery that falls through with `()` is rejected:
///
/// ```compile_fail
/// use outcome::{Outcome, catch, succeed};
///
/// let raw: Outcome<u16> = succeed(80);
/// let port: u16 = catch!(raw, _failure => {});
/// ```
#[macro_export]
macro_rules! catch {
    ($outcome:expr, $failure:ident => $recover:expr $(,)?) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $failure @ $crate::Outcome::Failure(_) => $recover,
        }
    };
}
