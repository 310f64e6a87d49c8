//! Strongly-typed key value objects.
//!
//! Keys coming back from the classification service are opaque strings.
//! They are compared only for equality; the wrappers exist so a domain key
//! can never be passed where a state key is expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::ValidationError;

/// Classifier-assigned label identifying the category of a legal issue.
///
/// Examples: `rent_dispute`, `family_law`, `employment_law`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainKey(String);

impl DomainKey {
    /// Creates a new DomainKey, returning error if blank.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::empty_field("domain"));
        }
        Ok(Self(key))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form of the key ("rent_dispute" -> "rent dispute").
    pub fn display_name(&self) -> String {
        humanize_key(&self.0)
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets registries keyed by DomainKey be queried with a plain &str.
impl Borrow<str> for DomainKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Key identifying the classifier state a recommendation was made in.
///
/// Produced by the classification service as `domain|user_type|region`;
/// the client treats it as opaque and echoes it back with feedback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateKey(String);

impl StateKey {
    /// Creates a new StateKey, returning error if empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::empty_field("state_key"));
        }
        Ok(Self(key))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key of a recommended legal action (e.g. `send_legal_notice`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionKey(String);

impl ActionKey {
    /// Creates a new ActionKey, returning error if empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::empty_field("action_key"));
        }
        Ok(Self(key))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form of the action ("send_legal_notice" -> "send legal notice").
    pub fn display_name(&self) -> String {
        humanize_key(&self.0)
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! string_conversions {
    ($($key:ident),*) => {$(
        impl TryFrom<String> for $key {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$key> for String {
            fn from(key: $key) -> Self {
                key.0
            }
        }
    )*};
}

string_conversions!(DomainKey, StateKey, ActionKey);

fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}
