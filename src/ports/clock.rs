//! Clock port - injectable source of "now".
//!
//! Stage progress is a pure function of time. Reading time through this
//! port lets tests supply fixed instants instead of the system clock.

use thiserror::Error;

use crate::domain::foundation::Timestamp;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Unavailable` when the underlying source cannot
    /// produce a time.
    fn now(&self) -> Result<Timestamp, ClockError>;
}

/// Errors reading the clock.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("clock source unavailable: {0}")]
    Unavailable(String),
}

impl ClockError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        ClockError::Unavailable(reason.into())
    }
}
