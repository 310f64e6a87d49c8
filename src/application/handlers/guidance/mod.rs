//! Guidance query handlers.

mod get_guidance;
mod get_stage_progress;

pub use get_guidance::{GetGuidanceHandler, GetGuidanceQuery, GetGuidanceResult, GuidanceView};
pub use get_stage_progress::{GetStageProgressHandler, GetStageProgressQuery, StageProgressView};
