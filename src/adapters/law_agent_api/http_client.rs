//! HTTP client for the Law Agent decision service.
//!
//! Implements both service ports against the same base URL:
//!
//! - `POST {base_url}/decide` - classification
//! - `POST {base_url}/feedback` - votes
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpClientConfig::new("http://127.0.0.1:8000")
//!     .with_timeout(Duration::from_secs(15));
//!
//! let client = HttpLawAgentClient::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::feedback::FeedbackSubmission;
use crate::domain::foundation::{ActionKey, DomainKey, StateKey};
use crate::ports::{
    Classification, ClassificationClient, ClassificationRequest, FeedbackClient, FeedbackReceipt,
    ServiceError,
};

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the decision service, without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpClientConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-backed implementation of the service ports.
#[derive(Debug, Clone)]
pub struct HttpLawAgentClient {
    config: HttpClientConfig,
    client: Client,
}

impl HttpLawAgentClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidRequest` if the HTTP client cannot be
    /// constructed (e.g. TLS backend failure).
    pub fn new(config: HttpClientConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::InvalidRequest(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "Calling Law Agent service");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let response = check_status(response).await?;

        response
            .json::<R>()
            .await
            .map_err(|e| ServiceError::parse(e.to_string()))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout {
                timeout_secs: self.config.timeout.as_secs() as u32,
            }
        } else if e.is_connect() {
            ServiceError::unavailable(format!("Connection failed: {}", e))
        } else {
            ServiceError::network(e.to_string())
        }
    }
}

async fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), %body, "Law Agent service returned an error");

    if status.is_server_error() {
        Err(ServiceError::unavailable(format!("{}: {}", status, body)))
    } else {
        Err(ServiceError::rejected(status.as_u16(), body))
    }
}

/// Wire shape of the `/decide` response.
#[derive(Debug, Deserialize)]
struct DecideResponse {
    domain: String,
    chosen_action: String,
    state_key: String,
}

impl TryFrom<DecideResponse> for Classification {
    type Error = ServiceError;

    fn try_from(raw: DecideResponse) -> Result<Self, Self::Error> {
        let invalid = |e: crate::domain::foundation::ValidationError| ServiceError::parse(e.to_string());
        Ok(Classification {
            domain: DomainKey::new(raw.domain).map_err(invalid)?,
            chosen_action: ActionKey::new(raw.chosen_action).map_err(invalid)?,
            state_key: StateKey::new(raw.state_key).map_err(invalid)?,
        })
    }
}

#[async_trait]
impl ClassificationClient for HttpLawAgentClient {
    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<Classification, ServiceError> {
        let raw: DecideResponse = self.post_json("decide", request).await?;
        let classification = Classification::try_from(raw)?;

        tracing::info!(
            domain = %classification.domain,
            action = %classification.chosen_action,
            "Situation classified"
        );
        Ok(classification)
    }
}

#[async_trait]
impl FeedbackClient for HttpLawAgentClient {
    async fn submit(&self, feedback: &FeedbackSubmission) -> Result<FeedbackReceipt, ServiceError> {
        let receipt: FeedbackReceipt = self.post_json("feedback", feedback).await?;

        tracing::info!(
            state_key = %feedback.state_key,
            vote = %feedback.vote,
            reward = receipt.reward,
            "Feedback recorded"
        );
        Ok(receipt)
    }
}
