//! Settable time source.
//!
//! Holds a single instant that only moves when told to. Shareable across
//! threads; readers never block.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use crate::domain::foundation::Timestamp;
use crate::ports::{Clock, ClockError};

/// Clock frozen at a configurable instant.
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    /// Creates a clock frozen at `millis` since the Unix epoch.
    pub fn at_millis(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    /// Creates a clock frozen at `instant`.
    pub fn at(instant: Timestamp) -> Self {
        Self::at_millis(instant.as_unix_millis())
    }

    /// Moves the clock to `instant`.
    pub fn set(&self, instant: Timestamp) {
        self.millis.store(instant.as_unix_millis(), Ordering::Relaxed);
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let delta = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.millis
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |m| {
                Some(m.saturating_add(delta))
            })
            .ok();
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<Timestamp, ClockError> {
        let millis = self.millis.load(Ordering::Relaxed);
        Timestamp::from_unix_millis(millis)
            .ok_or_else(|| ClockError::unavailable(format!("{} ms is out of range", millis)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_configured_instant() {
        let clock = FixedClock::at_millis(2_200);
        assert_eq!(clock.now().unwrap().as_unix_millis(), 2_200);
        assert_eq!(clock.now().unwrap().as_unix_millis(), 2_200);
    }

    #[test]
    fn fixed_clock_can_be_moved() {
        let clock = FixedClock::at_millis(0);
        clock.advance(Duration::from_millis(11_000));
        assert_eq!(clock.now().unwrap().as_unix_millis(), 11_000);

        clock.set(Timestamp::from_unix_millis(500).unwrap());
        assert_eq!(clock.now().unwrap().as_unix_millis(), 500);
    }

    #[test]
    fn out_of_range_instant_reports_unavailable() {
        let clock = FixedClock::at_millis(i64::MAX);
        assert!(matches!(clock.now(), Err(ClockError::Unavailable(_))));
    }
}
