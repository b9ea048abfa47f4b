use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::state::FieldError;
use crate::services::ClientError;

/// Body POSTed to the validate endpoint before submission.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ValidationRequest {
    /// Absent keys stay off the wire; the validator treats a missing id
    /// and no id the same way.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome_definition_id: Option<String>,
    pub data: BTreeMap<String, String>,
}

/// Validator verdict. The server is authoritative; client errors are
/// whatever it returned, verbatim.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationResponse {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// What the renderer does with a validation round.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationDecision {
    /// Submission proceeds to the host page.
    Proceed,
    /// Submission is blocked; display these errors inline.
    Blocked(Vec<FieldError>),
}

/// Map a validation round-trip outcome to a decision.
///
/// A failed request (network or parse) resolves to `Proceed`: the
/// authoritative server-side check still runs at submission time, so the
/// pre-check fails open rather than blocking the user. Preserved
/// contract, not a bug.
pub fn resolve_validation(
    outcome: Result<ValidationResponse, ClientError>,
) -> ValidationDecision {
    match outcome {
        Ok(response) if !response.valid => ValidationDecision::Blocked(response.errors),
        Ok(_) => ValidationDecision::Proceed,
        Err(err) => {
            tracing::warn!("pre-submit validation unavailable, failing open: {err}");
            ValidationDecision::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_blocks_with_server_errors() {
        let response = ValidationResponse {
            valid: false,
            errors: vec![FieldError {
                field: "x".into(),
                message: "required".into(),
            }],
        };
        match resolve_validation(Ok(response)) {
            ValidationDecision::Blocked(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "x");
            }
            other => panic!("expected Blocked, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_response_proceeds() {
        let response = ValidationResponse {
            valid: true,
            errors: vec![],
        };
        assert_eq!(resolve_validation(Ok(response)), ValidationDecision::Proceed);
    }

    #[test]
    fn test_transport_failure_fails_open() {
        // A network outage silently permits submission of unvalidated
        // data; enforcement falls back to the server-side check.
        let err = ClientError::Http("connection refused".into());
        assert_eq!(resolve_validation(Err(err)), ValidationDecision::Proceed);
    }

    #[test]
    fn test_request_omits_absent_definition_id() {
        let request = ValidationRequest {
            outcome_definition_id: None,
            data: BTreeMap::from([("name".to_string(), "Ada".to_string())]),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("outcome_definition_id").is_none());

        let request = ValidationRequest {
            outcome_definition_id: Some("event-feedback".to_string()),
            data: BTreeMap::new(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["outcome_definition_id"], "event-feedback");
    }

    #[test]
    fn test_response_without_errors_array_parses() {
        let response: ValidationResponse = serde_json::from_str(r#"{"valid": true}"#).unwrap();
        assert!(response.valid);
        assert!(response.errors.is_empty());
    }
}
