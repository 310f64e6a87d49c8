//! HTTP handlers for guidance endpoints.
//!
//! These handlers connect Axum routes to application layer query/command handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    AskLawAgentCommand, AskLawAgentHandler, ConsultationDefaults, GetGuidanceHandler,
    GetGuidanceQuery, GetStageProgressHandler, GetStageProgressQuery, SubmitFeedbackCommand,
    SubmitFeedbackHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::guidance::{GuidanceSynthesizer, StageProgressClock};
use crate::ports::{ClassificationClient, FeedbackClient};

use super::dto::{
    AskLawAgentRequest, ConsultationResponse, ErrorResponse, FeedbackRequest, FeedbackResponse,
    GuidanceResponse, StageProgressResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct GuidanceAppState {
    pub synthesizer: Arc<GuidanceSynthesizer>,
    pub progress_clock: StageProgressClock,
    pub classifier: Arc<dyn ClassificationClient>,
    pub feedback_client: Arc<dyn FeedbackClient>,
    pub consultation_defaults: ConsultationDefaults,
    /// Pass upstream failure messages through to clients.
    pub verbose_errors: bool,
}

impl GuidanceAppState {
    pub fn get_guidance_handler(&self) -> GetGuidanceHandler {
        GetGuidanceHandler::new(self.synthesizer.clone(), self.progress_clock.clone())
    }

    pub fn get_stage_progress_handler(&self) -> GetStageProgressHandler {
        GetStageProgressHandler::new(self.synthesizer.clone(), self.progress_clock.clone())
    }

    pub fn ask_law_agent_handler(&self) -> AskLawAgentHandler {
        AskLawAgentHandler::new(
            self.classifier.clone(),
            self.synthesizer.clone(),
            self.consultation_defaults.clone(),
        )
    }

    pub fn submit_feedback_handler(&self) -> SubmitFeedbackHandler {
        SubmitFeedbackHandler::new(self.feedback_client.clone())
    }

    fn api_error(&self, error: DomainError) -> ApiError {
        ApiError {
            error,
            verbose: self.verbose_errors,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/guidance/:domain - Guidance for a domain plus the active stage
pub async fn get_guidance(
    State(state): State<GuidanceAppState>,
    Path(domain): Path<String>,
) -> impl IntoResponse {
    let result = state
        .get_guidance_handler()
        .handle(GetGuidanceQuery::for_domain(domain));

    Json(GuidanceResponse::from(result))
}

/// GET /api/guidance/:domain/progress - Active stage only
pub async fn get_stage_progress(
    State(state): State<GuidanceAppState>,
    Path(domain): Path<String>,
) -> impl IntoResponse {
    let view = state
        .get_stage_progress_handler()
        .handle(GetStageProgressQuery {
            domain: Some(domain),
        });

    Json(StageProgressResponse::from(view))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/consultations - Classify a situation and return its guidance
pub async fn ask_law_agent(
    State(state): State<GuidanceAppState>,
    Json(request): Json<AskLawAgentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = AskLawAgentCommand {
        user_input: request.user_input,
        user_type: request.user_type,
        region: request.region,
    };

    let result = state
        .ask_law_agent_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(ConsultationResponse::from(result)))
}

/// POST /api/feedback - Record a vote on the recommended action
pub async fn submit_feedback(
    State(state): State<GuidanceAppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SubmitFeedbackCommand {
        state_key: request.state_key,
        action_key: request.action_key,
        vote: request.vote,
        time_spent_secs: request.time_spent_secs,
        follow_up: request.follow_up,
    };

    let receipt = state
        .submit_feedback_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(Json(FeedbackResponse::from(receipt)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts domain errors into HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
    verbose: bool,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.error.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
            ErrorCode::ClassificationFailed | ErrorCode::FeedbackRejected => {
                StatusCode::BAD_GATEWAY
            }
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::warn!(code = %self.error.code, message = %self.error.message, "Request failed upstream");
        }

        // Upstream messages may leak service internals; validation messages never do.
        let message = if self.verbose || status.is_client_error() {
            self.error.message.clone()
        } else {
            "The Law Agent service could not complete the request".to_string()
        };

        let code = self.error.code.to_string();
        let body = if self.error.details.is_empty() {
            ErrorResponse::new(code, message)
        } else {
            let details = serde_json::to_value(&self.error.details).unwrap_or_default();
            ErrorResponse::with_details(code, message, details)
        };

        (status, Json(body)).into_response()
    }
}
