//! A shared log for observing callback side effects.
//!
//! # Examples
//!
//! ```
//! use outcome_test_helpers::calls::CallLog;
//!
//! let log = CallLog::new();
//! let record = |step: &str| log.record(step);
//! record("parse");
//! record("validate");
//! assert_eq!(log.entries(), vec!["parse", "validate"]);
//! assert_eq!(log.count("parse"), 1);
//! ```

use parking_lot::Mutex;

/// Ordered record of named calls.
///
/// Recording takes `&self`, so any number of closures can borrow the same
/// log while a combinator chain runs.
#[derive(Debug, Default)]
pub struct CallLog {
    entries: Mutex<Vec<String>>,
}

impl CallLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Append an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    /// Snapshot of every entry in recording order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of entries equal to `entry`.
    #[must_use]
    pub fn count(&self, entry: &str) -> usize {
        self.entries.lock().iter().filter(|e| *e == entry).count()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CallLog;

    #[test]
    fn counts_only_matching_entries() {
        let log = CallLog::new();
        assert!(log.is_empty());
        log.record("a");
        log.record(String::from("b"));
        log.record("a");
        assert_eq!(log.count("a"), 2);
        assert_eq!(log.count("c"), 0);
        assert_eq!(log.entries(), vec!["a", "b", "a"]);
    }
}
