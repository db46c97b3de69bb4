//! Reading whole files.

use camino::Utf8Path;

use super::reject;
use crate::{AdapterError, Outcome, succeed};

/// Read a UTF-8 text file.
pub fn read_to_string(path: impl AsRef<Utf8Path>) -> Outcome<String, AdapterError> {
    let file = path.as_ref();
    std::fs::read_to_string(file).map_or_else(|err| reject(AdapterError::io(file, &err)), succeed)
}

/// Read a file as raw bytes.
pub fn read_bytes(path: impl AsRef<Utf8Path>) -> Outcome<Vec<u8>, AdapterError> {
    let file = path.as_ref();
    std::fs::read(file).map_or_else(|err| reject(AdapterError::io(file, &err)), succeed)
}
