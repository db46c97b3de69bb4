//! Base64 decoding.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::reject;
use crate::{AdapterError, Outcome, succeed};

/// Decode standard, padded base64 into bytes.
///
/// ```
/// use outcome::adapters::encoding::decode_base64;
///
/// assert_eq!(decode_base64("aGk=").get_or_else(|_| Vec::new()), b"hi".to_vec());
/// ```
pub fn decode_base64(input: &str) -> Outcome<Vec<u8>, AdapterError> {
    STANDARD
        .decode(input)
        .map_or_else(|err| reject(AdapterError::decode(&err)), succeed)
}

/// Decode base64 whose payload is UTF-8 text.
pub fn decode_base64_utf8(input: &str) -> Outcome<String, AdapterError> {
    decode_base64(input).and_then(|bytes| {
        String::from_utf8(bytes).map_or_else(|err| reject(AdapterError::decode(&err)), succeed)
    })
}
