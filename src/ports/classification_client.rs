//! Classification Client Port - the legal-situation classifier.
//!
//! The classifier is an opaque oracle: it receives the user's description
//! plus context and returns a legal domain, the action it recommends among
//! the candidates, and a state key to attach feedback to. How it decides is
//! none of the client's business.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActionKey, DomainKey, StateKey};

use super::ServiceError;

/// Port for classifying a described legal situation.
///
/// Dropping the returned future aborts the request, so callers tearing down
/// a view simply drop it.
#[async_trait]
pub trait ClassificationClient: Send + Sync {
    /// Classifies the situation described in `request`.
    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<Classification, ServiceError>;
}

/// Request body sent to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    /// Who is asking (e.g. "citizen").
    pub user_type: String,
    /// Jurisdiction (e.g. "india").
    pub region: String,
    /// Free-text description of the situation.
    pub user_input: String,
    /// Actions the classifier may choose from.
    pub candidate_actions: Vec<String>,
}

impl ClassificationRequest {
    /// Creates a request with no candidate actions.
    pub fn new(
        user_type: impl Into<String>,
        region: impl Into<String>,
        user_input: impl Into<String>,
    ) -> Self {
        Self {
            user_type: user_type.into(),
            region: region.into(),
            user_input: user_input.into(),
            candidate_actions: Vec::new(),
        }
    }

    /// Adds a candidate action.
    pub fn with_candidate(mut self, action: impl Into<String>) -> Self {
        self.candidate_actions.push(action.into());
        self
    }

    /// Replaces the candidate actions.
    pub fn with_candidates<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidate_actions = actions.into_iter().map(Into::into).collect();
        self
    }
}

/// Classifier verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub domain: DomainKey,
    pub chosen_action: ActionKey,
    pub state_key: StateKey,
}
