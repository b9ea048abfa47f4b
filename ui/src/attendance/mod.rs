//! Per-event attendance tracking: the aggregate count state machine and
//! the submission lifecycle it gates.

pub mod events;
pub mod types;

pub use events::{AttendanceChanged, AttendanceSaved};
pub use types::{AttendanceAction, AttendanceState, AttendanceStatus, StatusMessage, SubmissionState};
