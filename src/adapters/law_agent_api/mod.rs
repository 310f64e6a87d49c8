//! Law Agent decision service adapters.
//!
//! - `HttpLawAgentClient` - reqwest client for `/decide` and `/feedback`
//! - `MockLawAgentClient` - queued responses and call tracking for tests

mod http_client;
mod mock_client;

pub use http_client::{HttpClientConfig, HttpLawAgentClient};
pub use mock_client::MockLawAgentClient;
