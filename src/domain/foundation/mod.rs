//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, keys, and error types that form the
//! vocabulary of the Law Agent domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ActionKey, DomainKey, StateKey};
pub use timestamp::Timestamp;
