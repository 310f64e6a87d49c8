//! GuidanceSynthesizer - the single seam between classification and rendering.
//!
//! Given a domain label, returns steps, timeline, glossary, flow stages and
//! the flow layout, all drawn from the same bundle in the same call so they
//! can never disagree.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::DomainKey;

use super::bundle::TimelineEntry;
use super::layout::{FlowLayoutEngine, StageLayout};
use super::registry::GuidanceRegistry;

/// Guidance for one classified domain, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedGuidance<'a> {
    /// Domain whose content is being served.
    pub domain: &'a DomainKey,
    /// True when the requested domain had no authored content.
    pub fallback: bool,
    pub steps: &'a [String],
    pub timeline: &'a [TimelineEntry],
    pub glossary: &'a BTreeMap<String, String>,
    pub flow_stages: &'a [String],
    /// Sum of timeline durations, in days.
    pub estimated_total_days: u32,
    pub layout: StageLayout,
}

/// Combines registry lookup and flow layout.
#[derive(Debug, Clone)]
pub struct GuidanceSynthesizer {
    registry: Arc<GuidanceRegistry>,
    layout: FlowLayoutEngine,
}

impl GuidanceSynthesizer {
    pub fn new(registry: Arc<GuidanceRegistry>, layout: FlowLayoutEngine) -> Self {
        Self { registry, layout }
    }

    /// The registry guidance is drawn from.
    pub fn registry(&self) -> &GuidanceRegistry {
        &self.registry
    }

    /// Synthesizes guidance for a domain.
    ///
    /// Never fails: unknown, empty or blank domains receive the default
    /// bundle with `fallback` set.
    pub fn synthesize(&self, domain: &str) -> SynthesizedGuidance<'_> {
        let found = self.registry.lookup(domain);
        let bundle = found.bundle;

        SynthesizedGuidance {
            domain: found.domain,
            fallback: found.fallback,
            steps: bundle.steps(),
            timeline: bundle.timeline(),
            glossary: bundle.glossary(),
            flow_stages: bundle.flow_stages(),
            estimated_total_days: bundle.estimated_total_days(),
            layout: self.layout.layout(bundle.flow_stages()),
        }
    }

    /// Like [`synthesize`](Self::synthesize), accepting a missing domain.
    pub fn synthesize_optional(&self, domain: Option<&str>) -> SynthesizedGuidance<'_> {
        self.synthesize(domain.unwrap_or_default())
    }
}
