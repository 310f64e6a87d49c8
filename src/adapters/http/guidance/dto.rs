//! Request and response DTOs for guidance endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{
    ConsultationResult, GetGuidanceResult, GuidanceView, StageProgressView,
};
use crate::domain::feedback::Vote;
use crate::domain::guidance::{Glossary, StageLayout, StageProgress, TimelineEntry};
use crate::ports::FeedbackReceipt;

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/consultations`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskLawAgentRequest {
    /// Free-text description of the situation.
    pub user_input: String,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Body of `POST /api/feedback`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub state_key: String,
    pub action_key: String,
    pub vote: Vote,
    /// Seconds spent reading the guidance; a fixed estimate is used if absent.
    #[serde(default, alias = "time_spent")]
    pub time_spent_secs: Option<u32>,
    #[serde(default)]
    pub follow_up: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Guidance for one domain.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceResponse {
    pub domain: String,
    pub display_name: String,
    pub fallback: bool,
    pub steps: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub glossary: Glossary,
    pub flow_stages: Vec<String>,
    pub estimated_total_days: u32,
    pub layout: StageLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<StageProgress>,
}

impl From<GuidanceView> for GuidanceResponse {
    fn from(view: GuidanceView) -> Self {
        Self {
            domain: view.domain.to_string(),
            display_name: view.display_name,
            fallback: view.fallback,
            steps: view.steps,
            timeline: view.timeline,
            glossary: view.glossary,
            flow_stages: view.flow_stages,
            estimated_total_days: view.estimated_total_days,
            layout: view.layout,
            progress: None,
        }
    }
}

impl From<GetGuidanceResult> for GuidanceResponse {
    fn from(result: GetGuidanceResult) -> Self {
        Self {
            progress: result.progress,
            ..Self::from(result.guidance)
        }
    }
}

/// Active stage of a domain's flow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageProgressResponse {
    pub domain: String,
    pub fallback: bool,
    /// `null` when no stage is active.
    pub progress: Option<StageProgress>,
}

impl From<StageProgressView> for StageProgressResponse {
    fn from(view: StageProgressView) -> Self {
        Self {
            domain: view.domain.to_string(),
            fallback: view.fallback,
            progress: view.progress,
        }
    }
}

/// Result of a consultation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationResponse {
    /// Domain the classifier returned (may differ from `guidance.domain`).
    pub domain: String,
    pub domain_display_name: String,
    pub chosen_action: String,
    pub action_display_name: String,
    pub state_key: String,
    pub guidance: GuidanceResponse,
}

impl From<ConsultationResult> for ConsultationResponse {
    fn from(result: ConsultationResult) -> Self {
        Self {
            domain: result.classification.domain.to_string(),
            domain_display_name: result.domain_display_name,
            chosen_action: result.classification.chosen_action.to_string(),
            action_display_name: result.action_display_name,
            state_key: result.classification.state_key.to_string(),
            guidance: result.guidance.into(),
        }
    }
}

/// Acknowledgement of a vote.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub status: String,
    pub reward: f64,
}

impl From<FeedbackReceipt> for FeedbackResponse {
    fn from(receipt: FeedbackReceipt) -> Self {
        Self {
            status: receipt.status,
            reward: receipt.reward,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_request_accepts_wire_field_names() {
        let request: FeedbackRequest = serde_json::from_str(
            r#"{"state_key":"k","action_key":"send_legal_notice","vote":"up","time_spent":90}"#,
        )
        .unwrap();

        assert_eq!(request.vote, Vote::Up);
        assert_eq!(request.time_spent_secs, Some(90));
        assert!(!request.follow_up);
    }

    #[test]
    fn feedback_request_rejects_unknown_vote() {
        let result: Result<FeedbackRequest, _> = serde_json::from_str(
            r#"{"state_key":"k","action_key":"a","vote":"maybe"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn ask_request_context_is_optional() {
        let request: AskLawAgentRequest =
            serde_json::from_str(r#"{"user_input":"my landlord kept my deposit"}"#).unwrap();
        assert!(request.user_type.is_none());
        assert!(request.region.is_none());
    }

    #[test]
    fn error_response_serializes_without_details_when_none() {
        let response = ErrorResponse::new("TIMEOUT", "Request timed out");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
        assert!(json.contains("\"error_code\":\"TIMEOUT\""));
    }
}
