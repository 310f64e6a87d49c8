//! HTTP adapters - REST API implementations.

pub mod guidance;

pub use guidance::{guidance_router, GuidanceAppState};
