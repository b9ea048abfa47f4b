use dioxus::prelude::*;

use crate::attendance::{AttendanceChanged, AttendanceStatus};

/// Identity fields for one tracked entity, read-only in the row.
#[derive(Clone, PartialEq, Debug)]
pub struct StudentInfo {
    pub id: String,
    pub name: String,
    pub grade: Option<String>,
    pub family_name: Option<String>,
}

#[derive(Props, PartialEq, Clone)]
pub struct EntityStatusRowProps {
    pub student: StudentInfo,
    pub status: Option<AttendanceStatus>,
    pub on_change: EventHandler<AttendanceChanged>,
}

/// One roster row: identity display plus two mutually exclusive status
/// controls. Activating a control bubbles the change upward; at most one
/// control is active at a time.
#[component]
pub fn EntityStatusRow(props: EntityStatusRowProps) -> Element {
    let student = props.student;
    let status = props.status;
    let on_change = props.on_change;
    let grade = student.grade.clone().unwrap_or_else(|| "N/A".to_string());
    let family = student.family_name.clone().unwrap_or_default();

    let button = |target: AttendanceStatus, label: &'static str| {
        let active = if status == Some(target) { " active" } else { "" };
        let class = format!("attendance-btn {}{}", target.as_str(), active);
        let student_id = student.id.clone();
        let student_name = student.name.clone();
        rsx! {
            button {
                r#type: "button",
                class: "{class}",
                aria_label: "Mark {student_name} as {target.as_str()}",
                onclick: move |_| {
                    on_change.call(AttendanceChanged {
                        student_id: student_id.clone(),
                        status: target,
                        student_name: student_name.clone(),
                    });
                },
                "{label}"
            }
        }
    };

    rsx! {
        div {
            class: "student-item",
            div {
                class: "student-info",
                div { class: "student-name", "{student.name}" }
                div {
                    class: "student-details",
                    "Grade: {grade} | Family: {family}"
                }
            }
            div {
                class: "attendance-buttons",
                {button(AttendanceStatus::Present, "Present")}
                {button(AttendanceStatus::Absent, "Absent")}
            }
        }
    }
}
