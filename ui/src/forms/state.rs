use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::scalar_to_string;

/// A single field-level validation failure, as returned by the validator
/// or supplied by the host page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Mutable per-renderer form state: the current values keyed by field id
/// and the latest round of validation errors.
///
/// `errors` is replaced wholesale after each validation round; stale
/// errors never survive a successful validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: BTreeMap<String, Value>,
    pub errors: Vec<FieldError>,
}

impl FormState {
    pub fn with_values(values: BTreeMap<String, Value>, errors: Vec<FieldError>) -> Self {
        Self { values, errors }
    }

    pub fn set_value(&mut self, field_id: &str, value: Value) {
        self.values.insert(field_id.to_string(), value);
    }

    /// String rendition of a field's current value, empty when unset.
    pub fn value_str(&self, field_id: &str) -> String {
        self.values
            .get(field_id)
            .map(scalar_to_string)
            .unwrap_or_default()
    }

    pub fn error_for(&self, field_id: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field_id)
    }

    pub fn has_error(&self, field_id: &str) -> bool {
        self.error_for(field_id).is_some()
    }

    pub fn replace_errors(&mut self, errors: Vec<FieldError>) {
        self.errors = errors;
    }

    /// Re-seed from host-supplied attributes. Both values and errors are
    /// replaced wholesale; edits made since the last seed do not survive.
    pub fn reseed(&mut self, values: BTreeMap<String, Value>, errors: Vec<FieldError>) {
        self.values = values;
        self.errors = errors;
    }

    /// Flatten current values to the string map the validator and the
    /// host page both consume.
    pub fn submission_data(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), scalar_to_string(v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_errors_replaced_wholesale() {
        let mut state = FormState::default();
        state.replace_errors(vec![FieldError {
            field: "email".into(),
            message: "required".into(),
        }]);
        assert!(state.has_error("email"));

        state.replace_errors(vec![]);
        assert!(!state.has_error("email"));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_reseed_supersedes_earlier_attributes() {
        use crate::utils::parse::parse_json_or_default;

        // Mounted with empty attributes.
        let mut state = FormState::with_values(
            parse_json_or_default(""),
            parse_json_or_default(""),
        );
        state.set_value("x", json!("draft"));
        assert!(!state.has_error("x"));

        // Host rewrites both attributes after a server round trip.
        state.reseed(
            parse_json_or_default(r#"{"x": "server copy"}"#),
            parse_json_or_default(r#"[{"field": "x", "message": "required"}]"#),
        );
        assert_eq!(state.value_str("x"), "server copy");
        assert!(state.has_error("x"));

        // And clears them again.
        state.reseed(parse_json_or_default(""), parse_json_or_default(""));
        assert_eq!(state.value_str("x"), "");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_value_str_handles_non_string_values() {
        let mut state = FormState::default();
        state.set_value("count", json!(3));
        state.set_value("agree", json!(true));
        assert_eq!(state.value_str("count"), "3");
        assert_eq!(state.value_str("agree"), "true");
        assert_eq!(state.value_str("missing"), "");
    }

    #[test]
    fn test_submission_data_flattens_values() {
        let mut state = FormState::default();
        state.set_value("name", json!("Ada"));
        state.set_value("seats", json!(2));
        let data = state.submission_data();
        assert_eq!(data.get("name").map(String::as_str), Some("Ada"));
        assert_eq!(data.get("seats").map(String::as_str), Some("2"));
    }
}
