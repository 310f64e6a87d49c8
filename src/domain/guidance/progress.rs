//! Stage progress - which flow stage is "active" at a given instant.
//!
//! The active stage is derived purely from absolute time:
//!
//! ```text
//! active = floor(now_ms / period_ms) mod stage_count
//! ```
//!
//! There is no counter to advance or reset. Any view that starts rendering
//! converges immediately on the same index as every other view for the same
//! instant, and two calls with the same arguments always agree.
//!
//! `stage_count == 0` (and a zero period) yield `None`, the "no active
//! stage" sentinel, instead of dividing by zero.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Time each stage stays highlighted before the indicator moves on.
pub const DEFAULT_STAGE_PERIOD: Duration = Duration::from_millis(2200);

/// Computes the active stage index for an instant.
///
/// Returns `None` when there are no stages or the period is shorter than
/// one millisecond. Instants before the Unix epoch cycle the same way as
/// later ones.
pub fn active_index(now: Timestamp, stage_count: usize, period: Duration) -> Option<usize> {
    let period_ms = period_millis(period)?;
    if stage_count == 0 {
        return None;
    }

    let tick = i128::from(now.as_unix_millis()).div_euclid(period_ms);
    let index = tick.rem_euclid(stage_count as i128);
    usize::try_from(index).ok()
}

/// Snapshot of the progress indicator for one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageProgress {
    /// Index of the active stage.
    pub index: usize,
    /// Label of the active stage ("Current stage: ...").
    pub label: String,
    /// Number of stages in the flow.
    pub stage_count: usize,
    /// Milliseconds until the indicator advances to the next stage.
    pub next_change_in_ms: u64,
    /// Milliseconds each stage stays active.
    pub stage_period_ms: u64,
}

/// Computes the full progress snapshot for a stage list at an instant.
pub fn stage_progress<S: AsRef<str>>(
    now: Timestamp,
    stages: &[S],
    period: Duration,
) -> Option<StageProgress> {
    let index = active_index(now, stages.len(), period)?;
    let period_ms = period_millis(period)?;
    let elapsed = i128::from(now.as_unix_millis()).rem_euclid(period_ms);

    Some(StageProgress {
        index,
        label: stages[index].as_ref().to_string(),
        stage_count: stages.len(),
        next_change_in_ms: u64::try_from(period_ms - elapsed).ok()?,
        stage_period_ms: u64::try_from(period_ms).ok()?,
    })
}

fn period_millis(period: Duration) -> Option<i128> {
    match i128::try_from(period.as_millis()) {
        Ok(0) | Err(_) => None,
        Ok(ms) => Some(ms),
    }
}

/// Stage progress bound to an injected time source.
///
/// Cheap to clone; holds no state besides the clock handle and the period.
#[derive(Clone)]
pub struct StageProgressClock {
    clock: Arc<dyn Clock>,
    period: Duration,
}

impl StageProgressClock {
    /// Creates a progress clock reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>, period: Duration) -> Self {
        Self { clock, period }
    }

    /// Time each stage stays active.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Active index for the current instant.
    ///
    /// Fails closed: if the time source is unavailable the sentinel `None`
    /// is returned rather than an error.
    pub fn active_index(&self, stage_count: usize) -> Option<usize> {
        let now = self.now()?;
        active_index(now, stage_count, self.period)
    }

    /// Progress snapshot for the current instant. Fails closed like
    /// [`active_index`](Self::active_index).
    pub fn progress<S: AsRef<str>>(&self, stages: &[S]) -> Option<StageProgress> {
        let now = self.now()?;
        stage_progress(now, stages, self.period)
    }

    fn now(&self) -> Option<Timestamp> {
        match self.clock.now() {
            Ok(now) => Some(now),
            Err(e) => {
                tracing::warn!(error = %e, "Clock source unavailable; no active stage");
                None
            }
        }
    }
}

impl std::fmt::Debug for StageProgressClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageProgressClock")
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}
