//! Submission outcomes and the per-binding state machine.

use reqwest::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Message delivered to the error callback for any transport-level failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Payload handed to the error callback when no server payload is available.
pub fn generic_failure() -> Value {
    json!({ "message": GENERIC_ERROR_MESSAGE })
}

/// Why a submission never produced a usable server payload.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form action could not be resolved to a URL.
    #[error("invalid form action '{action}': {source}")]
    InvalidAction {
        action: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, timeout or protocol failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not JSON.
    #[error("response with status {status} is not valid JSON: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Result of a single submission round-trip.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// 2xx response with a JSON body.
    Success { status: StatusCode, body: Value },
    /// Non-2xx response with a JSON body.
    Rejected { status: StatusCode, body: Value },
    /// No usable response.
    Failed(SubmitError),
}

impl SubmitOutcome {
    /// Route the outcome: `Ok` goes to the success callback, `Err` to the error callback.
    ///
    /// Transport failures collapse to [`generic_failure`] regardless of cause.
    pub fn into_payload(self) -> Result<Value, Value> {
        match self {
            SubmitOutcome::Success { body, .. } => Ok(body),
            SubmitOutcome::Rejected { body, .. } => Err(body),
            SubmitOutcome::Failed(_) => Err(generic_failure()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success { .. })
    }

    /// Metric label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            SubmitOutcome::Success { .. } => "success",
            SubmitOutcome::Rejected { .. } => "rejected",
            SubmitOutcome::Failed(_) => "failed",
        }
    }
}

/// Where the latest submission of a bound form stands.
///
/// ```text
/// Idle → Submitting → Succeeded
///                   → Failed
/// ```
/// A new submit event re-enters `Submitting` from either terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_routes_body() {
        let outcome = SubmitOutcome::Success {
            status: StatusCode::OK,
            body: json!({"id": 1}),
        };
        assert_eq!(outcome.into_payload(), Ok(json!({"id": 1})));
    }

    #[test]
    fn test_rejection_keeps_server_detail() {
        let outcome = SubmitOutcome::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: json!({"error": "invalid"}),
        };
        assert_eq!(outcome.label(), "rejected");
        assert_eq!(outcome.into_payload(), Err(json!({"error": "invalid"})));
    }

    #[test]
    fn test_failure_is_generic() {
        let source = serde_json::from_str::<Value>("<html>").unwrap_err();
        let outcome = SubmitOutcome::Failed(SubmitError::Decode { status: 500, source });
        assert_eq!(
            outcome.into_payload(),
            Err(json!({"message": "An error occurred"}))
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!SubmissionState::Idle.is_terminal());
        assert!(!SubmissionState::Submitting.is_terminal());
        assert!(SubmissionState::Succeeded.is_terminal());
        assert!(SubmissionState::Failed.is_terminal());
    }
}
