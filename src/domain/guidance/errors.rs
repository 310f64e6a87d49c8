//! Errors raised while assembling guidance content.
//!
//! All of these surface at registry build time. Once a registry exists,
//! lookups and synthesis are infallible.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// A single bundle violates a content invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleError {
    #[error("bundle has no steps")]
    EmptySteps,

    #[error("bundle has no flow stages")]
    EmptyStageList,

    #[error("step {index} is blank")]
    BlankStep { index: usize },

    #[error("flow stage {index} is blank")]
    BlankStage { index: usize },

    #[error("timeline entry {index} has a blank label")]
    BlankTimelineLabel { index: usize },

    #[error("glossary contains a blank term")]
    BlankGlossaryTerm,
}

/// Registry construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuidanceError {
    #[error("invalid guidance for domain '{domain}': {source}")]
    InvalidBundle {
        domain: String,
        #[source]
        source: BundleError,
    },

    #[error("domain '{0}' is registered more than once")]
    DuplicateDomain(String),

    #[error("no default guidance bundle was designated")]
    MissingDefault,

    #[error("default guidance bundle designated twice ('{first}' and '{second}')")]
    DefaultAlreadyDesignated { first: String, second: String },

    #[error("invalid domain key: {0}")]
    InvalidDomainKey(#[from] ValidationError),
}

impl GuidanceError {
    /// Wraps a bundle error with the domain it was authored for.
    pub fn invalid_bundle(domain: impl Into<String>, source: BundleError) -> Self {
        GuidanceError::InvalidBundle {
            domain: domain.into(),
            source,
        }
    }
}
