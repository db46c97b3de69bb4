//! Capturing panic messages from code expected to panic.

use std::panic::{AssertUnwindSafe, catch_unwind};

use anyhow::{Result, anyhow};

/// Runs `f` and returns the message of the panic it raised.
///
/// Both `&'static str` and formatted `String` payloads are understood.
///
/// # Examples
///
/// ```
/// use outcome_test_helpers::panic::capture_message;
///
/// let message = capture_message(|| panic!("bad {}", 42)).expect("closure panics");
/// assert_eq!(message, "bad 42");
/// ```
///
/// # Errors
///
/// Returns an error when `f` completes without panicking, or when the panic
/// payload is not a string.
pub fn capture_message<F, R>(f: F) -> Result<String>
where
    F: FnOnce() -> R,
{
    let Err(payload) = catch_unwind(AssertUnwindSafe(f)) else {
        return Err(anyhow!("closure completed without panicking"));
    };
    if let Some(message) = payload.downcast_ref::<String>() {
        return Ok(message.clone());
    }
    payload
        .downcast_ref::<&'static str>()
        .map(|message| (*message).to_owned())
        .ok_or_else(|| anyhow!("panic payload is not a string"))
}

#[cfg(test)]
mod tests {
    use super::capture_message;

    #[test]
    fn reports_missing_panics() {
        assert!(capture_message(|| 1).is_err());
    }

    #[test]
    fn reads_static_payloads() {
        let message = capture_message(|| panic!("static"));
        assert_eq!(message.ok().as_deref(), Some("static"));
    }
}
