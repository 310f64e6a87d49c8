//! Feedback on a recommended action.
//!
//! After reading guidance the user can vote on whether the recommended
//! action was helpful. The vote is sent, together with the state and action
//! keys the classifier returned, so the service can learn which actions
//! work for which situations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::foundation::{ActionKey, StateKey, ValidationError};

/// Thumbs up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Up => "up",
            Vote::Down => "down",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Vote {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Vote::Up),
            "down" => Ok(Vote::Down),
            _ => Err(ValidationError::invalid_format(
                "vote",
                "expected 'up' or 'down'",
            )),
        }
    }
}

/// A validated vote on a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    pub state_key: StateKey,
    pub action_key: ActionKey,
    pub vote: Vote,
    /// Seconds the user spent with the guidance before voting.
    #[serde(rename = "time_spent")]
    pub time_spent_secs: u32,
    /// Whether the user asked a follow-up question.
    pub follow_up: bool,
}

impl FeedbackSubmission {
    /// Creates a submission from raw keys.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if either key is blank.
    pub fn new(
        state_key: impl Into<String>,
        action_key: impl Into<String>,
        vote: Vote,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            state_key: StateKey::new(state_key)?,
            action_key: ActionKey::new(action_key)?,
            vote,
            time_spent_secs: 0,
            follow_up: false,
        })
    }

    /// Sets the time spent, in seconds.
    pub fn with_time_spent(mut self, secs: u32) -> Self {
        self.time_spent_secs = secs;
        self
    }

    /// Marks that the user followed up.
    pub fn with_follow_up(mut self, follow_up: bool) -> Self {
        self.follow_up = follow_up;
        self
    }
}
