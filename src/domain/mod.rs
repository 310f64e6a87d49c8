//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (keys, timestamp, errors)
//! - `guidance` - Domain-keyed guidance bundles, flow layout and stage progress
//! - `feedback` - Votes on recommended actions

pub mod feedback;
pub mod foundation;
pub mod guidance;
