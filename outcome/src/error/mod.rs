//! Errors reported by the adapters.

mod constructors;
mod types;

pub use types::AdapterError;
