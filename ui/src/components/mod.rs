//! Dioxus components for the registry widgets:
//!
//! - **step_progress**: breadcrumb tracker for multi-step workflows
//! - **dynamic_form**: schema-driven form renderer with pre-submit validation
//! - **attendance**: per-event attendance tracker and its entity rows
//! - **display**: loading indicator and message banner

pub mod attendance;
pub mod display;
pub mod dynamic_form;
pub mod step_progress;

pub use attendance::{AttendanceTracker, EntityStatusRow, StudentInfo};
pub use dynamic_form::DynamicFormRenderer;
pub use step_progress::StepProgressTracker;
