use dioxus::prelude::*;

use crate::console_info;
use crate::utils::navigation::full_page_navigate;
use crate::workflow::{Step, WorkflowConfig, WorkflowNavigation};

#[derive(Props, PartialEq, Clone)]
pub struct StepProgressTrackerProps {
    /// Raw attribute strings as the host page supplies them; parsing is
    /// lenient and never raises past the component boundary.
    #[props(default)]
    pub current_step: String,
    #[props(default)]
    pub total_steps: String,
    /// Comma-joined step names, positional.
    #[props(default)]
    pub step_names: String,
    /// Comma-joined step URLs, parallel to `step_names`.
    #[props(default)]
    pub step_urls: String,
    /// Comma-joined 1-based indices of explicitly completed steps.
    #[props(default)]
    pub completed_steps: String,
    /// Enhanced navigation channel. When wired, the host receives the
    /// navigation event and performs the request itself; when absent the
    /// tracker falls back to a full-page navigation.
    pub on_navigate: Option<EventHandler<WorkflowNavigation>>,
}

/// Breadcrumb-style progress tracker. Backward navigation only:
/// completed steps with a URL are links, everything else is inert.
#[component]
pub fn StepProgressTracker(props: StepProgressTrackerProps) -> Element {
    let config = WorkflowConfig::from_attributes(
        &props.current_step,
        &props.total_steps,
        &props.step_names,
        &props.step_urls,
        &props.completed_steps,
    );
    let steps = config.steps();
    let total = config.total_steps;
    let current = config.current_step;
    let on_navigate = props.on_navigate;

    rsx! {
        nav {
            class: "progress-container",
            role: "navigation",
            aria_label: "Workflow progress",
            for step in steps {
                StepMarker {
                    step: step.clone(),
                    current_step: current,
                    on_navigate: on_navigate,
                }
                if step.index < total {
                    div { class: "separator", aria_hidden: "true" }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct StepMarkerProps {
    step: Step,
    current_step: u32,
    on_navigate: Option<EventHandler<WorkflowNavigation>>,
}

#[component]
fn StepMarker(props: StepMarkerProps) -> Element {
    let step = props.step;
    let status_class = step.status.as_str();
    let aria_label = step.aria_label();

    if step.is_navigable() {
        let url = step.url.clone().unwrap_or_default();
        let name = step.name.clone();
        let index = step.index;
        let from_step = props.current_step;
        let on_navigate = props.on_navigate;

        rsx! {
            a {
                class: "step {status_class}",
                href: "{url}",
                tabindex: "0",
                aria_label: "{aria_label}",
                onclick: move |evt| {
                    evt.prevent_default();
                    let event = WorkflowNavigation {
                        from_step,
                        to_step: index,
                        step_name: name.clone(),
                    };
                    console_info!(
                        "Workflow navigation: step {} -> step {} ({})",
                        event.from_step, event.to_step, event.step_name
                    );
                    match on_navigate {
                        // Event first, then the host issues the request.
                        Some(handler) => handler.call(event),
                        None => full_page_navigate(&url),
                    }
                },
                span { class: "step-number", aria_hidden: "true", "{step.index}" }
                span { class: "step-name", "{step.name}" }
            }
        }
    } else {
        rsx! {
            div {
                class: "step {status_class}",
                tabindex: "-1",
                aria_label: "{aria_label}",
                span { class: "step-number", aria_hidden: "true", "{step.index}" }
                span { class: "step-name", "{step.name}" }
            }
        }
    }
}
