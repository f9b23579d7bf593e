//! Clock Port (Driven Port)
//!
//! Source of the starting event time of each synthesized order.

use crate::domain::order_lifecycle::value_objects::EventTime;

/// Port for reading the current time.
pub trait Clock: Send + Sync {
    /// Current time as epoch milliseconds.
    fn now(&self) -> EventTime;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> EventTime {
        EventTime::from_millis(chrono::Utc::now().timestamp_millis())
    }
}

/// Clock frozen at a single instant, for reproducible runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(EventTime);

impl FixedClock {
    /// Create a clock that always reads `millis`.
    #[must_use]
    pub const fn at_millis(millis: i64) -> Self {
        Self(EventTime::from_millis(millis))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> EventTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock::at_millis(1_000);
        assert_eq!(clock.now(), EventTime::from_millis(1_000));
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now().as_millis() > 1_577_836_800_000);
    }
}
