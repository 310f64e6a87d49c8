//! YAML guidance content loader.
//!
//! Lets content authors ship guidance without a rebuild. The file lists every
//! domain bundle and names the one served as the generic default:
//!
//! ```yaml
//! default_domain: general_legal
//! domains:
//!   - domain: rent_dispute
//!     steps: ["Collect your rent agreement", "Send a legal notice"]
//!     timeline:
//!       - { label: "Legal notice period", days: 15 }
//!     glossary:
//!       Legal Notice: "A formal written communication before legal action."
//!     flowStages: ["Rent Dispute", "Legal Notice", "Court Filing"]
//!   - domain: general_legal
//!     steps: ["Understand your legal position"]
//!     flowStages: ["Issue Identified", "Resolution"]
//! ```
//!
//! The file is validated as a whole: one bad bundle fails the load rather
//! than silently dropping a domain.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tokio::fs;

use crate::domain::guidance::{
    Glossary, GuidanceBundle, GuidanceError, GuidanceRegistry, TimelineEntry,
};

/// Errors raised while loading guidance content.
#[derive(Debug, thiserror::Error)]
pub enum ContentLoadError {
    #[error("Failed to read guidance content from {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed guidance content: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Default domain '{0}' has no bundle in the content file")]
    UnknownDefault(String),

    #[error("Invalid guidance content: {0}")]
    Invalid(#[from] GuidanceError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContentFile {
    default_domain: String,
    domains: Vec<DomainContent>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DomainContent {
    domain: String,
    steps: Vec<String>,
    #[serde(default)]
    timeline: Vec<TimelineContent>,
    #[serde(default, deserialize_with = "unique_glossary")]
    glossary: Glossary,
    #[serde(alias = "flow_stages", rename = "flowStages")]
    flow_stages: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimelineContent {
    label: String,
    days: u32,
}

/// Reads a glossary mapping, failing on a repeated term instead of keeping
/// the last definition.
fn unique_glossary<'de, D>(deserializer: D) -> Result<Glossary, D::Error>
where
    D: Deserializer<'de>,
{
    struct GlossaryVisitor;

    impl<'de> Visitor<'de> for GlossaryVisitor {
        type Value = Glossary;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a mapping of glossary terms to definitions")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Glossary, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut glossary = Glossary::new();
            while let Some((term, definition)) = map.next_entry::<String, String>()? {
                if glossary.contains_key(&term) {
                    return Err(de::Error::custom(format!(
                        "duplicate glossary term '{}'",
                        term
                    )));
                }
                glossary.insert(term, definition);
            }
            Ok(glossary)
        }
    }

    deserializer.deserialize_map(GlossaryVisitor)
}

/// Parses guidance content from a YAML string.
///
/// # Errors
///
/// - `Parse` when the document does not match the content schema
/// - `UnknownDefault` when `default_domain` is not among `domains`
/// - `Invalid` when a bundle breaks a content invariant or a domain repeats
pub fn load_registry_from_str(yaml: &str) -> Result<GuidanceRegistry, ContentLoadError> {
    let file: ContentFile = serde_yaml::from_str(yaml)?;
    let default_domain = file.default_domain.trim();

    if !file.domains.iter().any(|d| d.domain.trim() == default_domain) {
        return Err(ContentLoadError::UnknownDefault(file.default_domain));
    }

    let mut builder = GuidanceRegistry::builder();
    let mut default_registered = false;
    for content in file.domains {
        let domain = content.domain.trim().to_string();
        let bundle = GuidanceBundle::new(
            content.steps,
            content
                .timeline
                .into_iter()
                .map(|t| TimelineEntry::new(t.label, t.days))
                .collect(),
            content.glossary,
            content.flow_stages,
        )
        .map_err(|source| GuidanceError::invalid_bundle(domain.as_str(), source))?;

        if domain == default_domain && !default_registered {
            builder.register_default(domain, bundle)?;
            default_registered = true;
        } else {
            builder.register(domain, bundle)?;
        }
    }

    Ok(builder.build()?)
}

/// Reads and parses guidance content from a file.
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`load_registry_from_str`].
pub async fn load_registry_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<GuidanceRegistry, ContentLoadError> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| ContentLoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let registry = load_registry_from_str(&yaml)?;
    tracing::info!(path = %path.display(), domains = registry.len(), "Guidance content loaded");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guidance::BundleError;
    use tempfile::TempDir;

    const CONTENT: &str = r#"
default_domain: general_legal
domains:
  - domain: rent_dispute
    steps:
      - Collect your rent agreement and payment receipts.
      - Send a legal notice to the landlord.
    timeline:
      - { label: "Legal notice period", days: 15 }
      - { label: "Court filing", days: 30 }
    glossary:
      Legal Notice: A formal written communication before legal action.
    flowStages: [Rent Dispute, Legal Notice, Court Filing]
  - domain: general_legal
    steps: [Understand your legal position]
    flow_stages: [Issue Identified, Resolution]
"#;

    #[test]
    fn loads_domains_and_default() {
        let registry = load_registry_from_str(CONTENT).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.default_domain().as_str(), "general_legal");

        let rent = registry.get("rent_dispute").unwrap();
        assert_eq!(rent.steps().len(), 2);
        assert_eq!(rent.estimated_total_days(), 45);
        assert_eq!(rent.flow_stages()[1], "Legal Notice");
        assert!(rent.glossary().contains_key("Legal Notice"));
    }

    #[test]
    fn timeline_and_glossary_are_optional() {
        let registry = load_registry_from_str(CONTENT).unwrap();
        let general = registry.default_bundle();

        assert!(general.timeline().is_empty());
        assert!(general.glossary().is_empty());
    }

    #[test]
    fn rejects_default_without_bundle() {
        let yaml = r#"
default_domain: nowhere
domains:
  - domain: rent_dispute
    steps: [a]
    flowStages: [b]
"#;
        assert!(matches!(
            load_registry_from_str(yaml),
            Err(ContentLoadError::UnknownDefault(d)) if d == "nowhere"
        ));
    }

    #[test]
    fn rejects_bundle_with_no_stages() {
        let yaml = r#"
default_domain: general_legal
domains:
  - domain: general_legal
    steps: [a]
    flowStages: []
"#;
        match load_registry_from_str(yaml) {
            Err(ContentLoadError::Invalid(GuidanceError::InvalidBundle { domain, source })) => {
                assert_eq!(domain, "general_legal");
                assert_eq!(source, BundleError::EmptyStageList);
            }
            other => panic!("expected invalid bundle, got {:?}", other),
        }
    }

    #[test]
    fn rejects_duplicate_domains() {
        let yaml = r#"
default_domain: general_legal
domains:
  - { domain: general_legal, steps: [a], flowStages: [b] }
  - { domain: general_legal, steps: [c], flowStages: [d] }
"#;
        assert!(matches!(
            load_registry_from_str(yaml),
            Err(ContentLoadError::Invalid(GuidanceError::DuplicateDomain(_)))
        ));
    }

    #[test]
    fn rejects_duplicate_glossary_terms() {
        let yaml = r#"
default_domain: general_legal
domains:
  - domain: general_legal
    steps: [a]
    glossary:
      Legal Notice: first definition
      Legal Notice: second definition
    flowStages: [b]
"#;
        let err = load_registry_from_str(yaml).unwrap_err();
        assert!(matches!(err, ContentLoadError::Parse(_)));
        assert!(err.to_string().contains("duplicate glossary term 'Legal Notice'"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let yaml = r#"
default_domain: general_legal
domains:
  - { domain: general_legal, steps: [a], flowStages: [b], colour: red }
"#;
        assert!(matches!(
            load_registry_from_str(yaml),
            Err(ContentLoadError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("guidance.yaml");
        std::fs::write(&path, CONTENT).unwrap();

        let registry = load_registry_from_path(&path).await.unwrap();
        assert!(registry.contains("rent_dispute"));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.yaml");

        assert!(matches!(
            load_registry_from_path(&path).await,
            Err(ContentLoadError::Io { .. })
        ));
    }
}
