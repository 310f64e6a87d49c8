//! GetGuidanceHandler - Query handler for the guidance shown after classification.

use std::sync::Arc;

use crate::domain::foundation::DomainKey;
use crate::domain::guidance::{
    Glossary, GuidanceSynthesizer, StageLayout, StageProgress, StageProgressClock,
    SynthesizedGuidance, TimelineEntry,
};

/// Query for the guidance of one domain.
///
/// `None` or an unknown domain yields the default guidance.
#[derive(Debug, Clone, Default)]
pub struct GetGuidanceQuery {
    pub domain: Option<String>,
}

impl GetGuidanceQuery {
    pub fn for_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
        }
    }
}

/// Owned snapshot of synthesized guidance.
#[derive(Debug, Clone, PartialEq)]
pub struct GuidanceView {
    pub domain: DomainKey,
    pub display_name: String,
    pub fallback: bool,
    pub steps: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub glossary: Glossary,
    pub flow_stages: Vec<String>,
    pub estimated_total_days: u32,
    pub layout: StageLayout,
}

impl From<SynthesizedGuidance<'_>> for GuidanceView {
    fn from(guidance: SynthesizedGuidance<'_>) -> Self {
        Self {
            domain: guidance.domain.clone(),
            display_name: guidance.domain.display_name(),
            fallback: guidance.fallback,
            steps: guidance.steps.to_vec(),
            timeline: guidance.timeline.to_vec(),
            glossary: guidance.glossary.clone(),
            flow_stages: guidance.flow_stages.to_vec(),
            estimated_total_days: guidance.estimated_total_days,
            layout: guidance.layout,
        }
    }
}

/// Guidance together with the stage active at the time of the query.
#[derive(Debug, Clone, PartialEq)]
pub struct GetGuidanceResult {
    pub guidance: GuidanceView,
    pub progress: Option<StageProgress>,
}

/// Handler for retrieving guidance.
///
/// Infallible: the registry always has a default to fall back on, and a
/// failing clock only drops the progress indicator.
pub struct GetGuidanceHandler {
    synthesizer: Arc<GuidanceSynthesizer>,
    clock: StageProgressClock,
}

impl GetGuidanceHandler {
    pub fn new(synthesizer: Arc<GuidanceSynthesizer>, clock: StageProgressClock) -> Self {
        Self { synthesizer, clock }
    }

    pub fn handle(&self, query: GetGuidanceQuery) -> GetGuidanceResult {
        let synthesized = self.synthesizer.synthesize_optional(query.domain.as_deref());
        let progress = self.clock.progress(synthesized.flow_stages);

        GetGuidanceResult {
            guidance: synthesized.into(),
            progress,
        }
    }
}
