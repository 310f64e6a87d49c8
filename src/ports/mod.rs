//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - source of the current instant for stage progress
//! - `ClassificationClient` - remote classifier returning domain and action
//! - `FeedbackClient` - records votes on recommended actions

mod classification_client;
mod clock;
mod feedback_client;
mod service_error;

pub use classification_client::{Classification, ClassificationClient, ClassificationRequest};
pub use clock::{Clock, ClockError};
pub use feedback_client::{FeedbackClient, FeedbackReceipt};
pub use service_error::ServiceError;
