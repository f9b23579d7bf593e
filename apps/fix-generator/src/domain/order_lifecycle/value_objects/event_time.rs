//! Logical event timestamps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event time in epoch milliseconds (FIX tag 60).
///
/// Written on the wire as a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTime(i64);

impl EventTime {
    /// Create from epoch milliseconds.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Epoch milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Time `step_ms` milliseconds later.
    #[must_use]
    pub const fn advanced_by(self, step_ms: u32) -> Self {
        Self(self.0.saturating_add(step_ms as i64))
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_additive() {
        let t = EventTime::from_millis(1_000);
        assert_eq!(t.advanced_by(7).as_millis(), 1_007);
        assert!(t.advanced_by(1) > t);
    }

    #[test]
    fn advance_saturates() {
        let t = EventTime::from_millis(i64::MAX - 1);
        assert_eq!(t.advanced_by(10).as_millis(), i64::MAX);
    }

    #[test]
    fn display_is_integer_millis() {
        assert_eq!(EventTime::from_millis(1_700_000_000_123).to_string(), "1700000000123");
    }
}
