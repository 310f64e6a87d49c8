//! Axum router configuration for guidance endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    ask_law_agent, get_guidance, get_stage_progress, health, submit_feedback, GuidanceAppState,
};

/// Create the guidance API routes, to be nested under `/api`.
///
/// # Routes
/// - `GET /guidance/:domain` - Guidance plus active stage
/// - `GET /guidance/:domain/progress` - Active stage only
/// - `POST /consultations` - Classify and return guidance
/// - `POST /feedback` - Record a vote
pub fn guidance_routes() -> Router<GuidanceAppState> {
    Router::new()
        .route("/guidance/:domain", get(get_guidance))
        .route("/guidance/:domain/progress", get(get_stage_progress))
        .route("/consultations", post(ask_law_agent))
        .route("/feedback", post(submit_feedback))
}

/// Create the complete router: `/health` plus the API under `/api`.
///
/// # Example
///
/// ```ignore
/// let app = guidance_router().with_state(state);
/// axum::serve(listener, app).await?;
/// ```
pub fn guidance_router() -> Router<GuidanceAppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", guidance_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::clock::FixedClock;
    use crate::adapters::law_agent_api::MockLawAgentClient;
    use crate::application::ConsultationDefaults;
    use crate::domain::guidance::{
        builtin_registry, FlowLayoutEngine, GuidanceSynthesizer, StageProgressClock,
        DEFAULT_STAGE_PERIOD,
    };

    fn test_state() -> GuidanceAppState {
        let client = Arc::new(MockLawAgentClient::new());
        GuidanceAppState {
            synthesizer: Arc::new(GuidanceSynthesizer::new(
                Arc::new(builtin_registry().unwrap()),
                FlowLayoutEngine::default(),
            )),
            progress_clock: StageProgressClock::new(
                Arc::new(FixedClock::at_millis(0)),
                DEFAULT_STAGE_PERIOD,
            ),
            classifier: client.clone(),
            feedback_client: client,
            consultation_defaults: ConsultationDefaults::default(),
            verbose_errors: false,
        }
    }

    #[test]
    fn guidance_router_creates_router() {
        let _: Router<()> = guidance_router().with_state(test_state());
    }

    #[tokio::test]
    async fn health_responds_ok() {
        let app = guidance_router().with_state(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = guidance_router().with_state(test_state());

        let response = app
            .oneshot(Request::builder().uri("/api/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
