//! GuidanceBundle - the unit of guidance content keyed by legal domain.
//!
//! A bundle carries everything the client shows for one classified domain:
//! ordered action steps, a day-based timeline, a glossary of legal terms and
//! the stages of the procedural flow diagram. Bundles are validated once at
//! construction and are immutable afterwards.

use std::collections::BTreeMap;

use serde::Serialize;

use super::errors::BundleError;

/// Glossary of legal terms. Terms are unique; ordering is not significant.
pub type Glossary = BTreeMap<String, String>;

/// One entry of the estimated timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// What happens during this period.
    pub label: String,
    /// Estimated duration in days.
    pub days: u32,
}

impl TimelineEntry {
    /// Creates a timeline entry.
    pub fn new(label: impl Into<String>, days: u32) -> Self {
        Self {
            label: label.into(),
            days,
        }
    }
}

/// Guidance content for a single legal domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceBundle {
    steps: Vec<String>,
    timeline: Vec<TimelineEntry>,
    glossary: Glossary,
    flow_stages: Vec<String>,
}

impl GuidanceBundle {
    /// Creates a bundle, enforcing content invariants.
    ///
    /// # Errors
    ///
    /// - `EmptySteps` / `EmptyStageList` when either list is empty
    /// - `BlankStep`, `BlankStage`, `BlankTimelineLabel`, `BlankGlossaryTerm`
    ///   when an entry is whitespace only
    pub fn new(
        steps: Vec<String>,
        timeline: Vec<TimelineEntry>,
        glossary: Glossary,
        flow_stages: Vec<String>,
    ) -> Result<Self, BundleError> {
        if steps.is_empty() {
            return Err(BundleError::EmptySteps);
        }
        if flow_stages.is_empty() {
            return Err(BundleError::EmptyStageList);
        }
        if let Some(index) = first_blank(&steps) {
            return Err(BundleError::BlankStep { index });
        }
        if let Some(index) = first_blank(&flow_stages) {
            return Err(BundleError::BlankStage { index });
        }
        if let Some(index) = timeline.iter().position(|e| e.label.trim().is_empty()) {
            return Err(BundleError::BlankTimelineLabel { index });
        }
        if glossary.keys().any(|term| term.trim().is_empty()) {
            return Err(BundleError::BlankGlossaryTerm);
        }

        Ok(Self {
            steps,
            timeline,
            glossary,
            flow_stages,
        })
    }

    /// Ordered instructions for the user. Never empty.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Estimated timeline in chronological order.
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// Legal terms and their definitions.
    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    /// Stages of the procedural flow diagram. Never empty.
    pub fn flow_stages(&self) -> &[String] {
        &self.flow_stages
    }

    /// Total of all timeline durations, in days.
    pub fn estimated_total_days(&self) -> u32 {
        self.timeline
            .iter()
            .fold(0u32, |total, entry| total.saturating_add(entry.days))
    }
}

fn first_blank(items: &[String]) -> Option<usize> {
    items.iter().position(|s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn valid_bundle() -> GuidanceBundle {
        let mut glossary = Glossary::new();
        glossary.insert("Legal Notice".to_string(), "A formal written communication.".to_string());

        GuidanceBundle::new(
            strings(&["Prepare a legal notice", "Send notice via an advocate"]),
            vec![TimelineEntry::new("Notice drafting", 3), TimelineEntry::new("Notice period", 15)],
            glossary,
            strings(&["Legal Notice", "Waiting Period"]),
        )
        .unwrap()
    }

    #[test]
    fn new_accepts_valid_content() {
        let bundle = valid_bundle();
        assert_eq!(bundle.steps().len(), 2);
        assert_eq!(bundle.timeline().len(), 2);
        assert_eq!(bundle.flow_stages(), &["Legal Notice", "Waiting Period"]);
        assert!(bundle.glossary().contains_key("Legal Notice"));
    }

    #[test]
    fn new_rejects_empty_steps() {
        let result = GuidanceBundle::new(vec![], vec![], Glossary::new(), strings(&["Stage"]));
        assert_eq!(result, Err(BundleError::EmptySteps));
    }

    #[test]
    fn new_rejects_empty_stage_list() {
        let result = GuidanceBundle::new(strings(&["Step"]), vec![], Glossary::new(), vec![]);
        assert_eq!(result, Err(BundleError::EmptyStageList));
    }

    #[test]
    fn new_rejects_blank_entries() {
        let result =
            GuidanceBundle::new(strings(&["Step", "  "]), vec![], Glossary::new(), strings(&["S"]));
        assert_eq!(result, Err(BundleError::BlankStep { index: 1 }));

        let result =
            GuidanceBundle::new(strings(&["Step"]), vec![], Glossary::new(), strings(&["", "S"]));
        assert_eq!(result, Err(BundleError::BlankStage { index: 0 }));

        let result = GuidanceBundle::new(
            strings(&["Step"]),
            vec![TimelineEntry::new(" ", 2)],
            Glossary::new(),
            strings(&["S"]),
        );
        assert_eq!(result, Err(BundleError::BlankTimelineLabel { index: 0 }));

        let mut glossary = Glossary::new();
        glossary.insert(String::new(), "orphan definition".to_string());
        let result = GuidanceBundle::new(strings(&["Step"]), vec![], glossary, strings(&["S"]));
        assert_eq!(result, Err(BundleError::BlankGlossaryTerm));
    }

    #[test]
    fn empty_timeline_and_glossary_are_allowed() {
        let bundle =
            GuidanceBundle::new(strings(&["Step"]), vec![], Glossary::new(), strings(&["S"])).unwrap();
        assert!(bundle.timeline().is_empty());
        assert_eq!(bundle.estimated_total_days(), 0);
    }

    #[test]
    fn estimated_total_days_sums_timeline() {
        assert_eq!(valid_bundle().estimated_total_days(), 18);
    }

    #[test]
    fn estimated_total_days_saturates() {
        let bundle = GuidanceBundle::new(
            strings(&["Step"]),
            vec![TimelineEntry::new("a", u32::MAX), TimelineEntry::new("b", 1)],
            Glossary::new(),
            strings(&["S"]),
        )
        .unwrap();
        assert_eq!(bundle.estimated_total_days(), u32::MAX);
    }

    #[test]
    fn serializes_with_camel_case_flow_stages() {
        let json = serde_json::to_value(valid_bundle()).unwrap();
        assert!(json.get("flowStages").is_some());
        assert_eq!(json["timeline"][0]["label"], "Notice drafting");
        assert_eq!(json["timeline"][0]["days"], 3);
    }
}
