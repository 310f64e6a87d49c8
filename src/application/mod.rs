//! Application layer - Queries, Commands, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Queries read authored guidance; commands talk to the Law Agent service.

pub mod handlers;

pub use handlers::{
    // Guidance queries
    GetGuidanceHandler, GetGuidanceQuery, GetGuidanceResult, GetStageProgressHandler,
    GetStageProgressQuery,
    GuidanceView, StageProgressView,
    // Consultation commands
    AskLawAgentCommand, AskLawAgentHandler, ConsultationDefaults, ConsultationResult,
    SubmitFeedbackCommand, SubmitFeedbackHandler,
};
