//! Wall-clock time source.

use crate::domain::foundation::Timestamp;
use crate::ports::{Clock, ClockError};

/// Reads the system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<Timestamp, ClockError> {
        Ok(Timestamp::now())
    }
}
