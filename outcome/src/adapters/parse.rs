//! Parsing text into primitives.
//!
//! ```
//! use outcome::adapters::parse::{parse_bool, parse_int};
//!
//! assert_eq!(parse_int::<u16>("8080").get_or(0), 8080);
//! assert!(parse_bool("yes").is_failure());
//! ```

use std::error::Error;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use super::reject;
use crate::{AdapterError, Outcome, succeed};

/// Parse `input` with `T`'s [`FromStr`] implementation.
pub fn parse_as<T>(input: &str) -> Outcome<T, AdapterError>
where
    T: FromStr,
    T::Err: Error,
{
    input
        .parse::<T>()
        .map_or_else(|err| reject(AdapterError::parse::<T>(input, &err)), succeed)
}

/// Parse an integer such as `"-42"`.
pub fn parse_int<T>(input: &str) -> Outcome<T, AdapterError>
where
    T: FromStr<Err = ParseIntError>,
{
    parse_as(input)
}

/// Parse a floating-point number such as `"2.5"` or `"inf"`.
pub fn parse_float<T>(input: &str) -> Outcome<T, AdapterError>
where
    T: FromStr<Err = ParseFloatError>,
{
    parse_as(input)
}

/// Parse exactly `"true"` or `"false"`.
pub fn parse_bool(input: &str) -> Outcome<bool, AdapterError> {
    parse_as(input)
}
