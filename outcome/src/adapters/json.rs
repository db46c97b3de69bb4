//! JSON parsing, key access and deserialization.
//!
//! ```
//! use outcome::adapters::json::{field_as, parse_json};
//!
//! let doc = parse_json(r#"{"name": "relay", "port": 4222}"#);
//! let port = doc.and_then(|value| field_as::<u16>(&value, "port"));
//! assert_eq!(port.get_or(0), 4222);
//! ```

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::reject;
use crate::{AdapterError, Outcome, succeed};

/// Parse `text` into an untyped JSON document.
pub fn parse_json(text: &str) -> Outcome<Value, AdapterError> {
    from_json(text)
}

/// Deserialize `text` into `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Outcome<T, AdapterError> {
    serde_json::from_str(text).map_or_else(|err| reject(AdapterError::json(&err)), succeed)
}

/// Deserialize raw `bytes` into `T`.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Outcome<T, AdapterError> {
    serde_json::from_slice(bytes).map_or_else(|err| reject(AdapterError::json(&err)), succeed)
}

/// Borrow the member `key` of a JSON object.
///
/// Fails with [`AdapterError::MissingKey`] when the object has no such
/// member, and with [`AdapterError::Json`] when `value` is not an object.
pub fn field<'a>(value: &'a Value, key: &str) -> Outcome<&'a Value, AdapterError> {
    let Value::Object(members) = value else {
        return reject(AdapterError::json_shape(format!(
            "expected an object when reading '{key}', found {}",
            kind_of(value)
        )));
    };
    members
        .get(key)
        .map_or_else(|| reject(AdapterError::missing_key(key)), succeed)
}

/// Deserialize the member `key` of a JSON object into `T`.
pub fn field_as<T: DeserializeOwned>(value: &Value, key: &str) -> Outcome<T, AdapterError> {
    field(value, key).and_then(|member| {
        <T as Deserialize>::deserialize(member)
            .map_or_else(|err| reject(AdapterError::json(&err)), succeed)
    })
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
