//! Guidance Registry - immutable domain → guidance table with a default entry.
//!
//! The registry is assembled once at startup through [`RegistryBuilder`] and
//! shared by reference (usually `Arc<GuidanceRegistry>`) for the rest of the
//! process. There is no mutation API on a built registry.
//!
//! Lookups are total: a domain without authored content resolves to the
//! designated default bundle and the result is flagged as a fallback so the
//! caller can tell the user the guidance is generic.
//!
//! # Example
//!
//! ```
//! use law_agent::domain::guidance::builtin_registry;
//!
//! let registry = builtin_registry().expect("built-in content is valid");
//!
//! let rent = registry.lookup("rent_dispute");
//! assert!(!rent.fallback);
//! assert_eq!(rent.bundle.flow_stages().len(), 5);
//!
//! let other = registry.lookup("maritime_salvage");
//! assert!(other.fallback);
//! assert_eq!(other.domain.as_str(), "general_legal");
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::domain::foundation::DomainKey;

use super::bundle::GuidanceBundle;
use super::errors::GuidanceError;

/// Read-only table of guidance bundles keyed by domain.
#[derive(Debug, Clone)]
pub struct GuidanceRegistry {
    /// All bundles, including the default one.
    entries: HashMap<DomainKey, GuidanceBundle>,

    /// Key of the bundle served for unrecognized domains.
    default_domain: DomainKey,

    /// Unauthored domains already reported at warn level.
    reported: Arc<ReportedMisses>,
}

/// Upper bound on distinct unauthored domains reported at warn level.
const MAX_REPORTED_MISSES: usize = 256;

/// Remembers which unauthored domains have been warned about, so repeated
/// lookups (one per progress tick) stay at debug level.
#[derive(Debug, Default)]
struct ReportedMisses(Mutex<HashSet<String>>);

impl ReportedMisses {
    /// Returns true only the first time a domain misses.
    fn first_miss(&self, domain: &str) -> bool {
        let Ok(mut seen) = self.0.lock() else {
            return false;
        };
        if seen.len() >= MAX_REPORTED_MISSES || seen.contains(domain) {
            return false;
        }
        seen.insert(domain.to_string())
    }
}

/// Result of a registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidanceLookup<'a> {
    /// Domain whose bundle was actually served.
    pub domain: &'a DomainKey,

    /// The resolved bundle.
    pub bundle: &'a GuidanceBundle,

    /// True when the requested domain had no authored content.
    pub fallback: bool,
}

impl<'a> GuidanceLookup<'a> {
    /// True when the served bundle is the generic default, whether requested
    /// directly or reached by fallback.
    pub fn is_generic(&self, registry: &GuidanceRegistry) -> bool {
        self.domain == registry.default_domain()
    }
}

impl GuidanceRegistry {
    /// Starts building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolves guidance for a domain, falling back to the default bundle.
    ///
    /// Blank input is treated exactly like an unknown domain.
    pub fn lookup(&self, domain: &str) -> GuidanceLookup<'_> {
        if let Some((key, bundle)) = self.entries.get_key_value(domain) {
            return GuidanceLookup {
                domain: key,
                bundle,
                fallback: false,
            };
        }

        if domain.trim().is_empty() {
            tracing::debug!("No domain supplied; serving default guidance");
        } else if self.reported.first_miss(domain) {
            tracing::warn!(
                domain = %domain,
                default = %self.default_domain,
                "No guidance authored for domain; serving default (requires content authoring)"
            );
        } else {
            tracing::debug!(domain = %domain, "Serving default guidance for unauthored domain");
        }

        GuidanceLookup {
            domain: &self.default_domain,
            bundle: self.default_bundle(),
            fallback: true,
        }
    }

    /// Returns the bundle for an exact domain, without fallback.
    pub fn get(&self, domain: &str) -> Option<&GuidanceBundle> {
        self.entries.get(domain)
    }

    /// Checks whether a domain has authored content.
    pub fn contains(&self, domain: &str) -> bool {
        self.entries.contains_key(domain)
    }

    /// Key of the designated default bundle.
    pub fn default_domain(&self) -> &DomainKey {
        &self.default_domain
    }

    /// The designated default bundle.
    pub fn default_bundle(&self) -> &GuidanceBundle {
        // Presence is guaranteed by RegistryBuilder::build.
        &self.entries[&self.default_domain]
    }

    /// All registered domain keys, sorted.
    pub fn domains(&self) -> Vec<&DomainKey> {
        let mut keys: Vec<&DomainKey> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    /// Returns the domains from `candidates` that have no authored content.
    ///
    /// Useful for reporting classifier labels that still need guidance written.
    pub fn missing_domains<'c>(&self, candidates: &[&'c str]) -> Vec<&'c str> {
        candidates
            .iter()
            .copied()
            .filter(|domain| !self.contains(domain))
            .collect()
    }

    /// Number of registered bundles, including the default.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A built registry always holds at least the default bundle.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One-shot builder for [`GuidanceRegistry`].
///
/// Rejects duplicate keys as they are registered and refuses to build
/// without a designated default.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: HashMap<DomainKey, GuidanceBundle>,
    default_domain: Option<DomainKey>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bundle for a domain.
    ///
    /// # Errors
    ///
    /// - `InvalidDomainKey` if the key is blank
    /// - `DuplicateDomain` if the key was already registered
    pub fn register(
        &mut self,
        domain: impl Into<String>,
        bundle: GuidanceBundle,
    ) -> Result<&mut Self, GuidanceError> {
        let key = DomainKey::new(domain)?;
        if self.entries.contains_key(&key) {
            return Err(GuidanceError::DuplicateDomain(key.to_string()));
        }
        self.entries.insert(key, bundle);
        Ok(self)
    }

    /// Registers a bundle and designates it as the default.
    ///
    /// # Errors
    ///
    /// As [`register`](Self::register), plus `DefaultAlreadyDesignated` when
    /// called twice.
    pub fn register_default(
        &mut self,
        domain: impl Into<String>,
        bundle: GuidanceBundle,
    ) -> Result<&mut Self, GuidanceError> {
        let key = DomainKey::new(domain)?;
        if let Some(existing) = &self.default_domain {
            return Err(GuidanceError::DefaultAlreadyDesignated {
                first: existing.to_string(),
                second: key.to_string(),
            });
        }
        self.register(key.as_str(), bundle)?;
        self.default_domain = Some(key);
        Ok(self)
    }

    /// Finalizes the registry.
    ///
    /// # Errors
    ///
    /// Returns `MissingDefault` if no default bundle was designated.
    pub fn build(self) -> Result<GuidanceRegistry, GuidanceError> {
        let default_domain = self.default_domain.ok_or(GuidanceError::MissingDefault)?;

        tracing::info!(
            domains = self.entries.len(),
            default = %default_domain,
            "Guidance registry built"
        );

        Ok(GuidanceRegistry {
            entries: self.entries,
            default_domain,
            reported: Arc::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guidance::bundle::{Glossary, TimelineEntry};
    use proptest::prelude::*;

    fn bundle(stages: &[&str]) -> GuidanceBundle {
        GuidanceBundle::new(
            vec!["Understand your legal position".to_string()],
            vec![TimelineEntry::new("Next legal step", 30)],
            Glossary::new(),
            stages.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    fn sample_registry() -> GuidanceRegistry {
        let mut builder = GuidanceRegistry::builder();
        builder
            .register("rent_dispute", bundle(&["Legal Notice", "Final Order"]))
            .unwrap()
            .register_default("general_legal", bundle(&["Issue Identified", "Resolution"]))
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn lookup_known_domain_is_not_fallback() {
        let registry = sample_registry();
        let found = registry.lookup("rent_dispute");

        assert!(!found.fallback);
        assert_eq!(found.domain.as_str(), "rent_dispute");
        assert_eq!(found.bundle.flow_stages()[0], "Legal Notice");
        assert!(!found.is_generic(&registry));
    }

    #[test]
    fn lookup_unknown_domain_returns_default() {
        let registry = sample_registry();
        let found = registry.lookup("unknown_domain_xyz");

        assert!(found.fallback);
        assert!(found.is_generic(&registry));
        assert_eq!(found.bundle, registry.lookup("general_legal").bundle);
    }

    #[test]
    fn lookup_blank_domain_behaves_like_unknown() {
        let registry = sample_registry();
        for blank in ["", "   "] {
            let found = registry.lookup(blank);
            assert!(found.fallback);
            assert_eq!(found.domain, registry.default_domain());
        }
    }

    #[test]
    fn lookup_default_key_directly_is_generic_but_not_fallback() {
        let registry = sample_registry();
        let found = registry.lookup("general_legal");

        assert!(!found.fallback);
        assert!(found.is_generic(&registry));
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let registry = sample_registry();
        assert!(registry.lookup("Rent_Dispute").fallback);
        assert!(registry.lookup(" rent_dispute").fallback);
    }

    #[test]
    fn register_rejects_duplicate_key() {
        let mut builder = GuidanceRegistry::builder();
        builder.register("family_law", bundle(&["Mediation"])).unwrap();

        let err = builder.register("family_law", bundle(&["Judgment"])).unwrap_err();
        assert_eq!(err, GuidanceError::DuplicateDomain("family_law".to_string()));
    }

    #[test]
    fn register_default_rejects_key_already_registered() {
        let mut builder = GuidanceRegistry::builder();
        builder.register("general_legal", bundle(&["A"])).unwrap();

        let err = builder.register_default("general_legal", bundle(&["B"])).unwrap_err();
        assert!(matches!(err, GuidanceError::DuplicateDomain(_)));
    }

    #[test]
    fn register_default_twice_is_rejected() {
        let mut builder = GuidanceRegistry::builder();
        builder.register_default("general_legal", bundle(&["A"])).unwrap();

        let err = builder.register_default("other_default", bundle(&["B"])).unwrap_err();
        assert!(matches!(err, GuidanceError::DefaultAlreadyDesignated { .. }));
    }

    #[test]
    fn register_rejects_blank_key() {
        let mut builder = GuidanceRegistry::builder();
        let err = builder.register("  ", bundle(&["A"])).unwrap_err();
        assert!(matches!(err, GuidanceError::InvalidDomainKey(_)));
    }

    #[test]
    fn build_without_default_fails() {
        let mut builder = GuidanceRegistry::builder();
        builder.register("rent_dispute", bundle(&["A"])).unwrap();

        assert_eq!(builder.build().unwrap_err(), GuidanceError::MissingDefault);
    }

    #[test]
    fn domains_are_sorted_and_include_default() {
        let registry = sample_registry();
        let domains: Vec<&str> = registry.domains().iter().map(|d| d.as_str()).collect();

        assert_eq!(domains, vec!["general_legal", "rent_dispute"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn missing_domains_reports_unauthored_labels() {
        let registry = sample_registry();
        let missing = registry.missing_domains(&["rent_dispute", "family_law", "employment_law"]);

        assert_eq!(missing, vec!["family_law", "employment_law"]);
    }

    #[test]
    fn unauthored_domain_is_reported_once() {
        let registry = sample_registry();

        registry.lookup("maritime_salvage");
        registry.lookup("maritime_salvage");

        assert!(!registry.reported.first_miss("maritime_salvage"));
        assert!(registry.reported.first_miss("space_law"));
    }

    #[test]
    fn blank_and_known_domains_are_never_reported() {
        let registry = sample_registry();

        registry.lookup("");
        registry.lookup("rent_dispute");

        assert!(registry.reported.first_miss(""));
        assert!(registry.reported.first_miss("rent_dispute"));
    }

    #[test]
    fn reported_misses_are_bounded() {
        let reported = ReportedMisses::default();
        for i in 0..MAX_REPORTED_MISSES {
            assert!(reported.first_miss(&format!("domain_{}", i)));
        }

        assert!(!reported.first_miss("one_too_many"));
    }

    proptest! {
        #[test]
        fn unknown_domains_resolve_like_the_default(domain in ".{0,24}") {
            let registry = sample_registry();
            prop_assume!(!registry.contains(&domain));

            let found = registry.lookup(&domain);
            let default = registry.lookup("general_legal");

            prop_assert!(found.fallback);
            prop_assert_eq!(found.domain, default.domain);
            prop_assert_eq!(found.bundle, default.bundle);
        }
    }
}
