//! Clock adapters.
//!
//! - `SystemClock` - wall clock for production
//! - `FixedClock` - settable instant for tests and deterministic rendering

mod fixed_clock;
mod system_clock;

pub use fixed_clock::FixedClock;
pub use system_clock::SystemClock;
