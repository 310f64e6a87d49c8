//! Adapters - Implementations of ports and the inbound HTTP surface.
//!
//! - `clock` - system and fixed time sources
//! - `content` - guidance content loaded from YAML
//! - `http` - axum routes over the application handlers
//! - `law_agent_api` - classification and feedback clients

pub mod clock;
pub mod content;
pub mod http;
pub mod law_agent_api;
