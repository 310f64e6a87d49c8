//! GetStageProgressHandler - Query handler for the active flow stage.

use std::sync::Arc;

use crate::domain::foundation::DomainKey;
use crate::domain::guidance::{GuidanceSynthesizer, StageProgress, StageProgressClock};

/// Query for the active stage of a domain's flow.
#[derive(Debug, Clone, Default)]
pub struct GetStageProgressQuery {
    pub domain: Option<String>,
}

/// Active stage of the flow being served for a domain.
#[derive(Debug, Clone, PartialEq)]
pub struct StageProgressView {
    pub domain: DomainKey,
    pub fallback: bool,
    /// `None` when no stage can be active (clock failure).
    pub progress: Option<StageProgress>,
}

/// Handler reading the flow stages from the same bundle the guidance comes
/// from, so the indicator always walks the stages being displayed.
pub struct GetStageProgressHandler {
    synthesizer: Arc<GuidanceSynthesizer>,
    clock: StageProgressClock,
}

impl GetStageProgressHandler {
    pub fn new(synthesizer: Arc<GuidanceSynthesizer>, clock: StageProgressClock) -> Self {
        Self { synthesizer, clock }
    }

    pub fn handle(&self, query: GetStageProgressQuery) -> StageProgressView {
        let found = self
            .synthesizer
            .registry()
            .lookup(query.domain.as_deref().unwrap_or_default());

        StageProgressView {
            domain: found.domain.clone(),
            fallback: found.fallback,
            progress: self.clock.progress(found.bundle.flow_stages()),
        }
    }
}
