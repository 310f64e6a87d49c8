//! Consultation command handlers.
//!
//! Both handlers call the remote Law Agent service and translate its
//! failures into `DomainError`s with upstream error codes.

mod ask_law_agent;
mod submit_feedback;

pub use ask_law_agent::{
    AskLawAgentCommand, AskLawAgentHandler, ConsultationDefaults, ConsultationResult,
};
pub use submit_feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ServiceError;

/// Maps a service failure to a domain error.
///
/// Transport failures keep their own codes; everything else the service
/// reports is attributed to `rejected_code`.
fn service_failure(err: ServiceError, rejected_code: ErrorCode) -> DomainError {
    let code = match &err {
        ServiceError::Timeout { .. } => ErrorCode::Timeout,
        ServiceError::Unavailable { .. } | ServiceError::Network(_) => {
            ErrorCode::ServiceUnavailable
        }
        ServiceError::Rejected { .. }
        | ServiceError::Parse(_)
        | ServiceError::InvalidRequest(_) => rejected_code,
    };
    DomainError::new(code, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_keep_their_codes() {
        let timeout = service_failure(
            ServiceError::Timeout { timeout_secs: 30 },
            ErrorCode::ClassificationFailed,
        );
        assert_eq!(timeout.code, ErrorCode::Timeout);

        let down = service_failure(
            ServiceError::network("reset by peer"),
            ErrorCode::FeedbackRejected,
        );
        assert_eq!(down.code, ErrorCode::ServiceUnavailable);
    }

    #[test]
    fn service_rejections_use_caller_code() {
        let err = service_failure(
            ServiceError::rejected(422, "bad payload"),
            ErrorCode::FeedbackRejected,
        );
        assert_eq!(err.code, ErrorCode::FeedbackRejected);
        assert!(err.message.contains("422"));
    }
}
