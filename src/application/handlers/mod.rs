//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod consultation;
pub mod guidance;

pub use consultation::{
    AskLawAgentCommand, AskLawAgentHandler, ConsultationDefaults, ConsultationResult,
    SubmitFeedbackCommand, SubmitFeedbackHandler,
};
pub use guidance::{
    GetGuidanceHandler, GetGuidanceQuery, GetGuidanceResult, GetStageProgressHandler,
    GetStageProgressQuery,
    GuidanceView, StageProgressView,
};
