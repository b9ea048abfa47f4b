use dioxus::prelude::*;

use crate::attendance::AttendanceSaved;
use crate::components::{AttendanceTracker, DynamicFormRenderer, StepProgressTracker, StudentInfo};
use crate::console_info;
use crate::utils::navigation::full_page_navigate;
use crate::workflow::WorkflowNavigation;

const REGISTRY_CSS: Asset = asset!("/assets/styling/registry.css");

/// Host page wiring the three registry widgets together for one event
/// workflow. The server normally renders this composition with live
/// records; this root carries the same wiring with a sample roster.
#[component]
pub fn RegistryApp() -> Element {
    let step_urls = "/events,/event/evt-001/outcomes,";

    let on_navigate = EventHandler::new(move |nav: WorkflowNavigation| {
        console_info!(
            "Host navigation: {} (step {} -> {})",
            nav.step_name,
            nav.from_step,
            nav.to_step
        );
        let urls: Vec<&str> = step_urls.split(',').collect();
        if let Some(url) = urls.get(nav.to_step as usize - 1).filter(|u| !u.is_empty()) {
            full_page_navigate(url);
        }
    });

    let students = vec![
        StudentInfo {
            id: "stu-1".to_string(),
            name: "Ada Byrne".to_string(),
            grade: Some("4".to_string()),
            family_name: Some("Byrne".to_string()),
        },
        StudentInfo {
            id: "stu-2".to_string(),
            name: "Miles Okafor".to_string(),
            grade: Some("4".to_string()),
            family_name: Some("Okafor".to_string()),
        },
        StudentInfo {
            id: "stu-3".to_string(),
            name: "June Park".to_string(),
            grade: Some("5".to_string()),
            family_name: Some("Park".to_string()),
        },
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRY_CSS }

        div {
            class: "registry-container",

            h1 { class: "registry-title", "Event Registry" }

            StepProgressTracker {
                current_step: "3".to_string(),
                total_steps: "3".to_string(),
                step_names: "Details,Outcomes,Attendance".to_string(),
                step_urls: step_urls.to_string(),
                completed_steps: "1,2".to_string(),
                on_navigate: on_navigate,
            }

            section {
                class: "outcome-section",
                h2 { "Outcome" }
                DynamicFormRenderer {
                    schema_url: "/outcome/definition/event-feedback.json".to_string(),
                }
            }

            section {
                class: "attendance-section",
                h2 { "Attendance" }
                AttendanceTracker {
                    event_id: "evt-001".to_string(),
                    total_students: "3".to_string(),
                    students: students,
                    on_saved: move |saved: AttendanceSaved| {
                        console_info!("Attendance saved for {} students", saved.total_marked);
                    },
                }
            }
        }
    }
}
