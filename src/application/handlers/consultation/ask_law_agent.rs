//! AskLawAgentHandler - Command handler for a user's consultation.
//!
//! Sends the user's description to the classifier, then synthesizes the
//! guidance for whatever domain comes back. A domain without authored content
//! still produces guidance (the default), flagged as a fallback.

use std::sync::Arc;

use crate::application::handlers::guidance::GuidanceView;
use crate::config::LawAgentApiConfig;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::guidance::GuidanceSynthesizer;
use crate::ports::{Classification, ClassificationClient, ClassificationRequest};

use super::service_failure;

/// Context sent with every classification unless the command overrides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationDefaults {
    pub user_type: String,
    pub region: String,
    pub candidate_actions: Vec<String>,
}

impl From<&LawAgentApiConfig> for ConsultationDefaults {
    fn from(config: &LawAgentApiConfig) -> Self {
        Self {
            user_type: config.user_type.clone(),
            region: config.region.clone(),
            candidate_actions: config.candidate_actions_list(),
        }
    }
}

impl Default for ConsultationDefaults {
    fn default() -> Self {
        Self::from(&LawAgentApiConfig::default())
    }
}

/// Command to ask the Law Agent about a situation.
#[derive(Debug, Clone)]
pub struct AskLawAgentCommand {
    pub user_input: String,
    pub user_type: Option<String>,
    pub region: Option<String>,
}

impl AskLawAgentCommand {
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            user_type: None,
            region: None,
        }
    }
}

/// Classifier verdict plus the guidance to render for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultationResult {
    pub classification: Classification,
    /// "rent dispute" for `rent_dispute`.
    pub domain_display_name: String,
    /// "send legal notice" for `send_legal_notice`.
    pub action_display_name: String,
    pub guidance: GuidanceView,
}

/// Handler for consultations.
pub struct AskLawAgentHandler {
    classifier: Arc<dyn ClassificationClient>,
    synthesizer: Arc<GuidanceSynthesizer>,
    defaults: ConsultationDefaults,
}

impl AskLawAgentHandler {
    pub fn new(
        classifier: Arc<dyn ClassificationClient>,
        synthesizer: Arc<GuidanceSynthesizer>,
        defaults: ConsultationDefaults,
    ) -> Self {
        Self {
            classifier,
            synthesizer,
            defaults,
        }
    }

    /// # Errors
    ///
    /// - `EmptyField` if the description is blank (the service is not called)
    /// - `ClassificationFailed`, `ServiceUnavailable` or `Timeout` when the
    ///   classifier fails
    pub async fn handle(&self, cmd: AskLawAgentCommand) -> Result<ConsultationResult, DomainError> {
        let user_input = cmd.user_input.trim();
        if user_input.is_empty() {
            return Err(ValidationError::empty_field("user_input").into());
        }

        let request = ClassificationRequest::new(
            non_blank_or(cmd.user_type, &self.defaults.user_type),
            non_blank_or(cmd.region, &self.defaults.region),
            user_input,
        )
        .with_candidates(self.defaults.candidate_actions.iter().cloned());

        let classification = self
            .classifier
            .classify(&request)
            .await
            .map_err(|e| service_failure(e, ErrorCode::ClassificationFailed))?;

        let guidance = GuidanceView::from(
            self.synthesizer
                .synthesize(classification.domain.as_str()),
        );

        tracing::debug!(
            domain = %classification.domain,
            fallback = guidance.fallback,
            "Consultation answered"
        );

        Ok(ConsultationResult {
            domain_display_name: classification.domain.display_name(),
            action_display_name: classification.chosen_action.display_name(),
            classification,
            guidance,
        })
    }
}

fn non_blank_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::law_agent_api::MockLawAgentClient;
    use crate::domain::guidance::{builtin_registry, FlowLayoutEngine, DEFAULT_DOMAIN};
    use crate::ports::ServiceError;

    fn handler(client: &MockLawAgentClient) -> AskLawAgentHandler {
        AskLawAgentHandler::new(
            Arc::new(client.clone()),
            Arc::new(GuidanceSynthesizer::new(
                Arc::new(builtin_registry().unwrap()),
                FlowLayoutEngine::default(),
            )),
            ConsultationDefaults::default(),
        )
    }

    #[test]
    fn defaults_follow_api_config_defaults() {
        let defaults = ConsultationDefaults::default();

        assert_eq!(defaults.user_type, "citizen");
        assert_eq!(defaults.region, "india");
        assert_eq!(
            defaults.candidate_actions,
            LawAgentApiConfig::default().candidate_actions_list()
        );
    }

    #[test]
    fn defaults_take_configured_context() {
        let config = LawAgentApiConfig {
            user_type: "landlord".to_string(),
            region: "karnataka".to_string(),
            candidate_actions: "file_eviction_case, negotiate_settlement".to_string(),
            ..LawAgentApiConfig::default()
        };

        let defaults = ConsultationDefaults::from(&config);

        assert_eq!(defaults.user_type, "landlord");
        assert_eq!(defaults.region, "karnataka");
        assert_eq!(
            defaults.candidate_actions,
            vec!["file_eviction_case", "negotiate_settlement"]
        );
    }

    #[tokio::test]
    async fn classifies_and_returns_matching_guidance() {
        let client = MockLawAgentClient::new().with_classification(
            "rent_dispute",
            "send_legal_notice",
            "rent_dispute|citizen|india",
        );

        let result = handler(&client)
            .handle(AskLawAgentCommand::new("My landlord is not returning my deposit"))
            .await
            .unwrap();

        assert_eq!(result.classification.domain.as_str(), "rent_dispute");
        assert_eq!(result.domain_display_name, "rent dispute");
        assert_eq!(result.action_display_name, "send legal notice");
        assert_eq!(result.guidance.domain.as_str(), "rent_dispute");
        assert!(!result.guidance.fallback);
    }

    #[tokio::test]
    async fn sends_defaults_and_candidates() {
        let client = MockLawAgentClient::new().with_classification("rent_dispute", "a", "k");

        handler(&client)
            .handle(AskLawAgentCommand::new("  eviction notice  "))
            .await
            .unwrap();

        let calls = client.classify_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].user_type, "citizen");
        assert_eq!(calls[0].region, "india");
        assert_eq!(calls[0].user_input, "eviction notice");
        assert_eq!(
            calls[0].candidate_actions,
            vec!["send_legal_notice", "negotiate_settlement", "file_eviction_case"]
        );
    }

    #[tokio::test]
    async fn command_overrides_context() {
        let client = MockLawAgentClient::new().with_classification("family_law", "a", "k");
        let mut cmd = AskLawAgentCommand::new("custody question");
        cmd.user_type = Some("lawyer".to_string());
        cmd.region = Some("  ".to_string());

        handler(&client).handle(cmd).await.unwrap();

        let calls = client.classify_calls();
        assert_eq!(calls[0].user_type, "lawyer");
        assert_eq!(calls[0].region, "india");
    }

    #[tokio::test]
    async fn unauthored_domain_gets_default_guidance() {
        let client = MockLawAgentClient::new().with_classification(
            "consumer_protection",
            "negotiate_settlement",
            "consumer_protection|citizen|india",
        );

        let result = handler(&client)
            .handle(AskLawAgentCommand::new("defective phone"))
            .await
            .unwrap();

        assert_eq!(result.classification.domain.as_str(), "consumer_protection");
        assert_eq!(result.guidance.domain.as_str(), DEFAULT_DOMAIN);
        assert!(result.guidance.fallback);
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_calling_service() {
        let client = MockLawAgentClient::new();

        let err = handler(&client)
            .handle(AskLawAgentCommand::new("   "))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(client.classify_calls().is_empty());
    }

    #[tokio::test]
    async fn service_failure_is_mapped() {
        let client = MockLawAgentClient::new()
            .with_classification_error(ServiceError::rejected(400, "bad request"));

        let err = handler(&client)
            .handle(AskLawAgentCommand::new("anything"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ClassificationFailed);
    }
}
