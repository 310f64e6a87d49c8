//! HTTP adapter for guidance and consultation endpoints.
//!
//! Exposes the guidance engine via REST API:
//! - `GET /health` - Liveness check
//! - `GET /api/guidance/:domain` - Guidance for a domain, with the active stage
//! - `GET /api/guidance/:domain/progress` - Active stage only (animation tick)
//! - `POST /api/consultations` - Classify a described situation and return guidance
//! - `POST /api/feedback` - Vote on the recommended action

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AskLawAgentRequest, ConsultationResponse, ErrorResponse, FeedbackRequest, FeedbackResponse,
    GuidanceResponse, StageProgressResponse,
};
pub use handlers::{ApiError, GuidanceAppState};
pub use routes::{guidance_router, guidance_routes};
