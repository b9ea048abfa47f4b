use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::attendance::{
    AttendanceAction, AttendanceSaved, AttendanceState, AttendanceStatus, SubmissionState,
};
use crate::components::attendance::{EntityStatusRow, StudentInfo};
use crate::components::display::{LoadingIndicator, MessageBanner};
use crate::console_debug;
use crate::services::{RegistryApi, RegistryClient};
use crate::utils::parse::{parse_json_or_default, parse_u32_or};

#[derive(Props, PartialEq, Clone)]
pub struct AttendanceTrackerProps {
    pub event_id: String,
    /// Raw attribute string; bad input degrades to `0`.
    #[props(default)]
    pub total_students: String,
    pub students: Vec<StudentInfo>,
    /// JSON-encoded entity-id to status map for resuming a partially
    /// completed session; malformed JSON degrades to `{}`.
    #[props(default)]
    pub initial_attendance: String,
    pub on_saved: Option<EventHandler<AttendanceSaved>>,
}

/// Attendance tracker for one event: aggregates status changes bubbled
/// from the rows, gates the save control until every entity is marked,
/// and drives the submission state machine.
#[component]
pub fn AttendanceTracker(props: AttendanceTrackerProps) -> Element {
    let total = parse_u32_or(&props.total_students, 0) as usize;

    let mut state = use_signal({
        let event_id = props.event_id.clone();
        let raw_seed = props.initial_attendance.clone();
        move || {
            let mut initial = AttendanceState::new(event_id, total);
            let seed: BTreeMap<String, AttendanceStatus> = parse_json_or_default(&raw_seed);
            if !seed.is_empty() {
                initial.apply(AttendanceAction::Seed(seed));
            }
            initial
        }
    });

    let dispatch = EventHandler::new(move |action: AttendanceAction| {
        state.with_mut(|s| s.apply(action));
    });

    let on_saved = props.on_saved;
    let submit_event_id = props.event_id.clone();
    let on_submit = move |_| {
        let current = state();
        if !current.can_submit() {
            return;
        }
        let data = current.submission_data();
        let event_id = submit_event_id.clone();
        dispatch.call(AttendanceAction::BeginSubmit);
        spawn(async move {
            match RegistryClient::new().submit_attendance(&event_id, &data).await {
                Ok(response) if response.success => {
                    dispatch.call(AttendanceAction::SubmitSucceeded {
                        total_marked: response.total_marked,
                    });
                    if let Some(handler) = on_saved {
                        handler.call(AttendanceSaved {
                            total_marked: response.total_marked,
                            attendance_data: data,
                        });
                    }
                }
                Ok(response) => {
                    let reason = response
                        .error
                        .unwrap_or_else(|| "Failed to save attendance".to_string());
                    dispatch.call(AttendanceAction::SubmitFailed(reason));
                }
                Err(err) => {
                    dispatch.call(AttendanceAction::SubmitFailed(err.to_string()));
                }
            }
        });
    };

    let current = state();
    let progress_pct = current.progress() * 100.0;
    let submit_class = if current.submission == SubmissionState::Succeeded {
        "btn btn-secondary"
    } else {
        "btn btn-success"
    };

    rsx! {
        div {
            class: "attendance-tracker",

            div {
                class: "student-list",
                for student in props.students.clone() {
                    EntityStatusRow {
                        student: student.clone(),
                        status: current.status_of(&student.id),
                        on_change: move |change: crate::attendance::AttendanceChanged| {
                            console_debug!(
                                "Attendance changed: {} -> {}",
                                change.student_name,
                                change.status.as_str()
                            );
                            dispatch.call(AttendanceAction::Mark {
                                entity_id: change.student_id,
                                status: change.status,
                            });
                        },
                    }
                }
            }

            div {
                class: "submit-section",
                div {
                    class: "summary",
                    span { class: "count present", "{current.present()}" }
                    " Present, "
                    span { class: "count absent", "{current.absent()}" }
                    " Absent, "
                    span { class: "count unmarked", "{current.unmarked()}" }
                    " Unmarked"
                }

                div {
                    class: "progress-bar",
                    div {
                        class: "progress-fill",
                        style: "width: {progress_pct}%",
                    }
                }

                if current.is_submitting() {
                    LoadingIndicator { message: "Saving attendance...".to_string() }
                }

                button {
                    r#type: "button",
                    class: "{submit_class}",
                    disabled: !current.can_submit(),
                    onclick: on_submit,
                    "{current.submit_label()}"
                }

                a {
                    href: "/teacher/",
                    class: "btn btn-secondary",
                    "Back to Dashboard"
                }

                div {
                    class: "message-area",
                    {current.message.clone().map(|message| rsx! {
                        MessageBanner { message: message }
                    })}
                }
            }
        }
    }
}
