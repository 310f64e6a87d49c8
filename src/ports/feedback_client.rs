//! Feedback Client Port - sends votes on recommended actions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::feedback::FeedbackSubmission;

use super::ServiceError;

/// Port for recording a vote against a state/action pair.
#[async_trait]
pub trait FeedbackClient: Send + Sync {
    /// Submits a vote.
    async fn submit(&self, feedback: &FeedbackSubmission) -> Result<FeedbackReceipt, ServiceError>;
}

/// Acknowledgement returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReceipt {
    /// Service status string (e.g. "recorded").
    pub status: String,
    /// Reward the service derived from the vote.
    pub reward: f64,
}
