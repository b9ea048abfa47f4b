use serde::Deserialize;
use serde_json::Value;

/// Declarative description of form fields, fetched once per renderer
/// lifetime from the outcome-definition endpoint and treated as
/// immutable for that lifetime.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FieldSchema {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl FieldDef {
    /// Visible label, falling back to the field id.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// A select/radio option: either a plain scalar or `{value, label}`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldOption {
    Labeled { value: String, label: String },
    Plain(Value),
}

impl FieldOption {
    /// Submission value; selection matches by equality on this string.
    pub fn value(&self) -> String {
        match self {
            FieldOption::Labeled { value, .. } => value.clone(),
            FieldOption::Plain(v) => scalar_to_string(v),
        }
    }

    pub fn label(&self) -> String {
        match self {
            FieldOption::Labeled { label, .. } => label.clone(),
            FieldOption::Plain(v) => scalar_to_string(v),
        }
    }
}

/// Render a scalar JSON value without the quoting `Value::to_string`
/// would add around strings.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Truthiness for checkbox prefill: JSON false/null/""/0 are unchecked.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_deserializes_mixed_options() {
        let schema: FieldSchema = serde_json::from_value(json!({
            "id": "outcome-42",
            "fields": [
                {"id": "notes", "type": "textarea", "required": true},
                {"id": "rating", "type": "select",
                 "options": [{"value": "1", "label": "Poor"}, "good", 5]},
            ]
        }))
        .unwrap();

        assert_eq!(schema.id.as_deref(), Some("outcome-42"));
        assert_eq!(schema.fields.len(), 2);

        let rating = &schema.fields[1];
        assert_eq!(rating.options[0].value(), "1");
        assert_eq!(rating.options[0].label(), "Poor");
        assert_eq!(rating.options[1].value(), "good");
        assert_eq!(rating.options[2].value(), "5");
    }

    #[test]
    fn test_unknown_type_is_forwarded_verbatim() {
        let field: FieldDef =
            serde_json::from_value(json!({"id": "when", "type": "datetime-local"})).unwrap();
        assert_eq!(field.field_type, "datetime-local");
    }

    #[test]
    fn test_display_label_falls_back_to_id() {
        let field: FieldDef = serde_json::from_value(json!({"id": "email", "type": "email"})).unwrap();
        assert_eq!(field.display_label(), "email");
    }

    #[test]
    fn test_truthiness_for_checkbox_prefill() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("1")));
        assert!(is_truthy(&json!(1)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&Value::Null));
    }
}
