//! Mock Law Agent client for testing.
//!
//! Implements both service ports with queued responses and call tracking,
//! so handlers can be exercised without a running decision service.
//!
//! # Example
//!
//! ```ignore
//! let client = MockLawAgentClient::new()
//!     .with_classification("rent_dispute", "send_legal_notice", "rent_dispute|citizen|india");
//!
//! let verdict = client.classify(&request).await?;
//! assert_eq!(verdict.domain.as_str(), "rent_dispute");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::feedback::FeedbackSubmission;
use crate::domain::foundation::{ActionKey, DomainKey, StateKey, ValidationError};
use crate::ports::{
    Classification, ClassificationClient, ClassificationRequest, FeedbackClient, FeedbackReceipt,
    ServiceError,
};

/// Configurable fake of the decision service.
#[derive(Debug, Clone, Default)]
pub struct MockLawAgentClient {
    classifications: Arc<Mutex<VecDeque<Result<Classification, ServiceError>>>>,
    receipts: Arc<Mutex<VecDeque<Result<FeedbackReceipt, ServiceError>>>>,
    classify_calls: Arc<Mutex<Vec<ClassificationRequest>>>,
    feedback_calls: Arc<Mutex<Vec<FeedbackSubmission>>>,
}

fn classification(
    domain: &str,
    chosen_action: &str,
    state_key: &str,
) -> Result<Classification, ValidationError> {
    Ok(Classification {
        domain: DomainKey::new(domain)?,
        chosen_action: ActionKey::new(chosen_action)?,
        state_key: StateKey::new(state_key)?,
    })
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockLawAgentClient {
    /// Creates a mock with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful classification.
    ///
    /// Blank keys are rejected by the key constructors; the queued entry
    /// becomes a parse error in that case, as a real service would produce.
    pub fn with_classification(
        self,
        domain: &str,
        chosen_action: &str,
        state_key: &str,
    ) -> Self {
        let verdict = classification(domain, chosen_action, state_key)
            .map_err(|e| ServiceError::parse(e.to_string()));

        lock(&self.classifications).push_back(verdict);
        self
    }

    /// Queues a classification failure.
    pub fn with_classification_error(self, error: ServiceError) -> Self {
        lock(&self.classifications).push_back(Err(error));
        self
    }

    /// Queues a feedback receipt.
    pub fn with_receipt(self, status: &str, reward: f64) -> Self {
        lock(&self.receipts).push_back(Ok(FeedbackReceipt {
            status: status.to_string(),
            reward,
        }));
        self
    }

    /// Queues a feedback failure.
    pub fn with_feedback_error(self, error: ServiceError) -> Self {
        lock(&self.receipts).push_back(Err(error));
        self
    }

    /// Classification requests received so far.
    pub fn classify_calls(&self) -> Vec<ClassificationRequest> {
        lock(&self.classify_calls).clone()
    }

    /// Feedback submissions received so far.
    pub fn feedback_calls(&self) -> Vec<FeedbackSubmission> {
        lock(&self.feedback_calls).clone()
    }
}

#[async_trait]
impl ClassificationClient for MockLawAgentClient {
    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<Classification, ServiceError> {
        lock(&self.classify_calls).push(request.clone());
        lock(&self.classifications)
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::unavailable("no classification queued")))
    }
}

#[async_trait]
impl FeedbackClient for MockLawAgentClient {
    async fn submit(&self, feedback: &FeedbackSubmission) -> Result<FeedbackReceipt, ServiceError> {
        lock(&self.feedback_calls).push(feedback.clone());
        lock(&self.receipts).pop_front().unwrap_or_else(|| {
            Ok(FeedbackReceipt {
                status: "recorded".to_string(),
                reward: 0.0,
            })
        })
    }
}
