use std::collections::BTreeMap;

use super::types::AttendanceStatus;

/// Bubbled from a row to the tracker when a status control is activated.
#[derive(Clone, PartialEq, Debug)]
pub struct AttendanceChanged {
    pub student_id: String,
    pub status: AttendanceStatus,
    pub student_name: String,
}

/// Emitted upward by the tracker after a successful save.
#[derive(Clone, PartialEq, Debug)]
pub struct AttendanceSaved {
    pub total_marked: u32,
    pub attendance_data: BTreeMap<String, String>,
}
