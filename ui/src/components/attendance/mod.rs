pub mod entity_row;
pub mod tracker;

pub use entity_row::{EntityStatusRow, StudentInfo};
pub use tracker::AttendanceTracker;
