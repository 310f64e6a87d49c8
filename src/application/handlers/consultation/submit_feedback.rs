//! SubmitFeedbackHandler - Command handler for votes on a recommendation.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackSubmission, Vote};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{FeedbackClient, FeedbackReceipt};

use super::service_failure;

/// Seconds reported when the client does not measure time spent.
pub const DEFAULT_TIME_SPENT_SECS: u32 = 120;

/// Command to record a vote.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackCommand {
    pub state_key: String,
    pub action_key: String,
    pub vote: Vote,
    pub time_spent_secs: Option<u32>,
    pub follow_up: bool,
}

/// Handler for feedback submission.
pub struct SubmitFeedbackHandler {
    client: Arc<dyn FeedbackClient>,
}

impl SubmitFeedbackHandler {
    pub fn new(client: Arc<dyn FeedbackClient>) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// - `EmptyField` if either key is blank
    /// - `FeedbackRejected`, `ServiceUnavailable` or `Timeout` when the
    ///   service fails
    pub async fn handle(&self, cmd: SubmitFeedbackCommand) -> Result<FeedbackReceipt, DomainError> {
        let submission = FeedbackSubmission::new(cmd.state_key, cmd.action_key, cmd.vote)?
            .with_time_spent(cmd.time_spent_secs.unwrap_or(DEFAULT_TIME_SPENT_SECS))
            .with_follow_up(cmd.follow_up);

        self.client
            .submit(&submission)
            .await
            .map_err(|e| service_failure(e, ErrorCode::FeedbackRejected))
    }
}
