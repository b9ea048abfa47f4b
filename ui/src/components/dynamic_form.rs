use dioxus::prelude::*;
use serde_json::Value;

use crate::console_error;
use crate::forms::schema::is_truthy;
use crate::forms::{
    resolve_validation, FieldDef, FieldSchema, FormState, ValidationDecision, ValidationRequest,
};
use crate::services::{RegistryApi, RegistryClient};
use crate::utils::navigation::submit_to_current_page;
use crate::utils::parse::parse_json_or_default;

#[derive(Props, PartialEq, Clone)]
pub struct DynamicFormRendererProps {
    /// Outcome-definition endpoint serving the field schema.
    pub schema_url: String,
    /// JSON-encoded prefilled values; malformed JSON degrades to `{}`.
    #[props(default)]
    pub form_data: String,
    /// JSON-encoded server-supplied validation errors; malformed JSON
    /// degrades to `[]`.
    #[props(default)]
    pub validation_errors: String,
}

/// Schema-driven form renderer.
///
/// Fetches the field schema lazily on first render and memoizes it for
/// the component's lifetime; a later `schema_url` change does not
/// re-fetch (known limitation, preserved). `form_data` and
/// `validation_errors` stay live: a change re-seeds values and errors
/// wholesale. Pre-submit validation runs against the remote validator
/// and fails open on transport errors.
#[component]
pub fn DynamicFormRenderer(props: DynamicFormRendererProps) -> Element {
    // Snapshot on first render so attribute churn cannot trigger a
    // second fetch for this instance.
    let schema_url = use_hook(|| props.schema_url.clone());

    let mut state = use_signal(|| {
        FormState::with_values(
            parse_json_or_default(&props.form_data),
            parse_json_or_default(&props.validation_errors),
        )
    });
    let submitting = use_signal(|| false);

    // Hosts rewrite these attributes between renders (a server round
    // trip hands back fresh values and errors); mirror each change into
    // the live state.
    let raw_attributes = (props.form_data.clone(), props.validation_errors.clone());
    use_effect(use_reactive!(|raw_attributes| {
        let values = parse_json_or_default(&raw_attributes.0);
        let errors = parse_json_or_default(&raw_attributes.1);
        let changed = {
            let current = state.peek();
            current.values != values || current.errors != errors
        };
        if changed {
            state.with_mut(|s| s.reseed(values, errors));
        }
    }));

    let schema_resource = use_resource(move || {
        let url = schema_url.clone();
        async move {
            let result = RegistryClient::new().fetch_schema(&url).await;
            if let Err(err) = &result {
                // Terminal: no automatic retry.
                console_error!("Error loading schema: {}", err);
            }
            result
        }
    });

    let rendered = match &*schema_resource.read() {
        None => rsx! {
            div { class: "form-loading", "Loading schema..." }
        },
        Some(Err(_)) => rsx! {
            div { class: "error", "Error loading form schema" }
        },
        Some(Ok(schema)) => rsx! {
            SchemaForm {
                schema: schema.clone(),
                state: state,
                submitting: submitting,
            }
        },
    };
    rendered
}

#[derive(Props, PartialEq, Clone)]
struct SchemaFormProps {
    schema: FieldSchema,
    state: Signal<FormState>,
    submitting: Signal<bool>,
}

#[component]
fn SchemaForm(props: SchemaFormProps) -> Element {
    let schema = props.schema;
    let mut state = props.state;
    let mut submitting = props.submitting;

    let schema_id = schema.id.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let data = state().submission_data();
        let request = ValidationRequest {
            outcome_definition_id: schema_id.clone(),
            data: data.clone(),
        };
        submitting.set(true);
        spawn(async move {
            let outcome = RegistryClient::new().validate_outcome(&request).await;
            match resolve_validation(outcome) {
                ValidationDecision::Proceed => {
                    // Authoritative write goes through the page's own
                    // request cycle, not the pre-validation channel.
                    submit_to_current_page(&data);
                }
                ValidationDecision::Blocked(errors) => {
                    state.with_mut(|s| s.replace_errors(errors));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "form-container",

            if !state().errors.is_empty() {
                div {
                    class: "error-summary",
                    h3 { "Please correct the following errors:" }
                    ul {
                        for error in state().errors {
                            li { "{error.message}" }
                        }
                    }
                }
            }

            form {
                method: "POST",
                onsubmit: on_submit,

                for field in schema.fields {
                    FormField {
                        field: field,
                        state: state,
                    }
                }

                button {
                    r#type: "submit",
                    disabled: submitting(),
                    "Continue"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct FormFieldProps {
    field: FieldDef,
    state: Signal<FormState>,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let field = props.field;
    let state = props.state;
    let error = state().error_for(&field.id).cloned();
    let container_class = if error.is_some() {
        "form-field has-error"
    } else {
        "form-field"
    };
    let required_mark = if field.required { " *" } else { "" };
    let error_view = error.map(|error| {
        rsx! {
            div { class: "field-error", "{error.message}" }
        }
    });

    rsx! {
        div {
            class: "{container_class}",
            label {
                r#for: "{field.id}",
                "{field.display_label()}{required_mark}"
            }
            FieldControl { field: field.clone(), state: state }
            {error_view}
        }
    }
}

/// Polymorphic control rendering over the schema `type`. Unknown types
/// are forwarded verbatim as the input's native type.
#[component]
fn FieldControl(props: FormFieldProps) -> Element {
    let field = props.field;
    let mut state = props.state;
    let field_id = field.id.clone();
    let value = state().value_str(&field.id);

    match field.field_type.as_str() {
        "textarea" => rsx! {
            textarea {
                name: "{field.id}",
                id: "{field.id}",
                required: field.required,
                value: "{value}",
                oninput: move |evt| {
                    state.with_mut(|s| s.set_value(&field_id, Value::String(evt.value())));
                },
            }
        },
        "select" => rsx! {
            select {
                name: "{field.id}",
                id: "{field.id}",
                required: field.required,
                onchange: move |evt| {
                    state.with_mut(|s| s.set_value(&field_id, Value::String(evt.value())));
                },
                option {
                    value: "",
                    selected: value.is_empty(),
                    "Select..."
                }
                for opt in field.options.iter() {
                    option {
                        value: "{opt.value()}",
                        selected: value == opt.value(),
                        "{opt.label()}"
                    }
                }
            }
        },
        "radio" => rsx! {
            for opt in field.options.clone() {
                div {
                    class: "radio-option",
                    input {
                        r#type: "radio",
                        name: "{field.id}",
                        id: "{field.id}_{opt.value()}",
                        value: "{opt.value()}",
                        checked: value == opt.value(),
                        onchange: {
                            let field_id = field.id.clone();
                            let opt_value = opt.value();
                            move |_| {
                                state.with_mut(|s| {
                                    s.set_value(&field_id, Value::String(opt_value.clone()))
                                });
                            }
                        },
                    }
                    label {
                        r#for: "{field.id}_{opt.value()}",
                        "{opt.label()}"
                    }
                }
            }
        },
        "checkbox" => {
            let checked = state()
                .values
                .get(&field.id)
                .map(is_truthy)
                .unwrap_or(false);
            rsx! {
                input {
                    r#type: "checkbox",
                    name: "{field.id}",
                    id: "{field.id}",
                    value: "1",
                    checked: checked,
                    onchange: move |evt| {
                        state.with_mut(|s| {
                            // Checked emits the fixed sentinel; unchecked
                            // drops the entry like a native form would.
                            if evt.checked() {
                                s.set_value(&field_id, Value::String("1".to_string()));
                            } else {
                                s.values.remove(&field_id);
                            }
                        });
                    },
                }
            }
        }
        // Pass-through polymorphism: the native type attribute equals
        // the schema type verbatim.
        other => rsx! {
            input {
                r#type: "{other}",
                name: "{field.id}",
                id: "{field.id}",
                value: "{value}",
                required: field.required,
                min: field.min.map(format_number),
                max: field.max.map(format_number),
                oninput: move |evt| {
                    state.with_mut(|s| s.set_value(&field_id, Value::String(evt.value())));
                },
            }
        },
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
