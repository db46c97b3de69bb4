//! Test helpers shared across crates in the outcome workspace.
//!
//! [`calls`] records side effects from callbacks so tests can assert how
//! often, and in which order, they ran. [`panic`] captures the message of a
//! deliberate panic.

pub mod calls;
pub mod panic;
