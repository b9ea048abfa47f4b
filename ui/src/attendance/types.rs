use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Marked status of a single entity. Unmarked entities simply have no
/// entry in the map.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

/// Lifecycle of the save operation. `Succeeded` is terminal for a
/// tracker instance; `Failed` returns to a submittable state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// User-visible banner content below the submit control.
#[derive(Clone, PartialEq, Debug)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

/// Actions reduced into [`AttendanceState`].
#[derive(Clone, Debug)]
pub enum AttendanceAction {
    /// Upsert one entity's status (last write wins).
    Mark {
        entity_id: String,
        status: AttendanceStatus,
    },
    /// Replace the entire entry map at once, e.g. when resuming a
    /// partially completed session. Does not touch the submission state.
    Seed(BTreeMap<String, AttendanceStatus>),
    BeginSubmit,
    SubmitSucceeded { total_marked: u32 },
    SubmitFailed(String),
}

/// Aggregate attendance state for one event.
///
/// Invariant: `present() + absent() + unmarked() == total_entities`
/// after every action.
#[derive(Clone, PartialEq, Debug)]
pub struct AttendanceState {
    pub event_id: String,
    pub total_entities: usize,
    pub entries: BTreeMap<String, AttendanceStatus>,
    pub submission: SubmissionState,
    pub message: Option<StatusMessage>,
}

impl AttendanceState {
    pub fn new(event_id: impl Into<String>, total_entities: usize) -> Self {
        Self {
            event_id: event_id.into(),
            total_entities,
            entries: BTreeMap::new(),
            submission: SubmissionState::Idle,
            message: None,
        }
    }

    pub fn present(&self) -> usize {
        self.entries
            .values()
            .filter(|s| **s == AttendanceStatus::Present)
            .count()
    }

    pub fn absent(&self) -> usize {
        self.entries
            .values()
            .filter(|s| **s == AttendanceStatus::Absent)
            .count()
    }

    pub fn unmarked(&self) -> usize {
        self.total_entities.saturating_sub(self.entries.len())
    }

    /// Fraction of entities marked, `0.0` for an empty roster.
    pub fn progress(&self) -> f64 {
        if self.total_entities == 0 {
            0.0
        } else {
            (self.present() + self.absent()) as f64 / self.total_entities as f64
        }
    }

    /// The submit control is enabled iff every entity is marked and no
    /// submission is in flight or already saved.
    pub fn can_submit(&self) -> bool {
        self.unmarked() == 0
            && matches!(
                self.submission,
                SubmissionState::Idle | SubmissionState::Failed
            )
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn status_of(&self, entity_id: &str) -> Option<AttendanceStatus> {
        self.entries.get(entity_id).copied()
    }

    /// Entry map as plain strings, the shape the save endpoint expects.
    pub fn submission_data(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(id, status)| (id.clone(), status.as_str().to_string()))
            .collect()
    }

    pub fn apply(&mut self, action: AttendanceAction) {
        match action {
            AttendanceAction::Mark { entity_id, status } => {
                self.entries.insert(entity_id, status);
            }
            AttendanceAction::Seed(entries) => {
                self.entries = entries;
            }
            AttendanceAction::BeginSubmit => {
                // Gated by the disabled-control contract; a stray action
                // while submitting or after success is ignored.
                if self.can_submit() {
                    self.submission = SubmissionState::Submitting;
                    self.message = None;
                }
            }
            AttendanceAction::SubmitSucceeded { total_marked } => {
                self.submission = SubmissionState::Succeeded;
                self.message = Some(StatusMessage::Success(format!(
                    "Attendance saved for {} students.",
                    total_marked
                )));
            }
            AttendanceAction::SubmitFailed(reason) => {
                self.submission = SubmissionState::Failed;
                self.message = Some(StatusMessage::Error(reason));
            }
        }
    }

    /// Label for the submit control in each lifecycle phase.
    pub fn submit_label(&self) -> String {
        match self.submission {
            SubmissionState::Submitting => "Saving...".to_string(),
            SubmissionState::Succeeded => "Attendance Saved ✓".to_string(),
            _ => {
                if self.unmarked() == 0 {
                    "✓ Save Attendance (Complete)".to_string()
                } else {
                    format!("Save Attendance ({} remaining)", self.unmarked())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(state: &mut AttendanceState, id: &str, status: AttendanceStatus) {
        state.apply(AttendanceAction::Mark {
            entity_id: id.to_string(),
            status,
        });
    }

    fn assert_count_invariant(state: &AttendanceState) {
        assert_eq!(
            state.present() + state.absent() + state.unmarked(),
            state.total_entities
        );
    }

    #[test]
    fn test_count_invariant_across_event_sequences() {
        let mut state = AttendanceState::new("evt-1", 3);
        assert_count_invariant(&state);

        mark(&mut state, "a", AttendanceStatus::Present);
        assert_count_invariant(&state);
        mark(&mut state, "b", AttendanceStatus::Absent);
        assert_count_invariant(&state);

        // Duplicate event for the same entity overwrites idempotently.
        mark(&mut state, "a", AttendanceStatus::Absent);
        assert_count_invariant(&state);
        assert_eq!(state.present(), 0);
        assert_eq!(state.absent(), 2);
        assert_eq!(state.unmarked(), 1);
    }

    #[test]
    fn test_submit_gated_until_all_marked() {
        let mut state = AttendanceState::new("evt-1", 2);
        assert!(!state.can_submit());

        mark(&mut state, "a", AttendanceStatus::Present);
        assert!(!state.can_submit());

        // Re-toggling the same entity leaves the other unmarked.
        mark(&mut state, "a", AttendanceStatus::Absent);
        assert!(!state.can_submit());

        mark(&mut state, "b", AttendanceStatus::Present);
        assert!(state.can_submit());
    }

    #[test]
    fn test_seed_round_trip() {
        let mut state = AttendanceState::new("evt-1", 2);
        state.apply(AttendanceAction::Seed(BTreeMap::from([
            ("a".to_string(), AttendanceStatus::Present),
            ("b".to_string(), AttendanceStatus::Absent),
        ])));

        assert_eq!(state.present(), 1);
        assert_eq!(state.absent(), 1);
        assert_eq!(state.unmarked(), 0);
        assert!(state.can_submit());
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_seed_replaces_whole_map() {
        let mut state = AttendanceState::new("evt-1", 2);
        mark(&mut state, "a", AttendanceStatus::Present);
        state.apply(AttendanceAction::Seed(BTreeMap::from([(
            "b".to_string(),
            AttendanceStatus::Absent,
        )])));
        assert_eq!(state.status_of("a"), None);
        assert_eq!(state.absent(), 1);
        assert_eq!(state.unmarked(), 1);
    }

    #[test]
    fn test_submission_lifecycle_success_is_terminal() {
        let mut state = AttendanceState::new("evt-5", 1);
        mark(&mut state, "a", AttendanceStatus::Present);

        state.apply(AttendanceAction::BeginSubmit);
        assert_eq!(state.submission, SubmissionState::Submitting);
        assert!(state.is_submitting());
        assert!(!state.can_submit());

        state.apply(AttendanceAction::SubmitSucceeded { total_marked: 5 });
        assert_eq!(state.submission, SubmissionState::Succeeded);
        assert!(!state.is_submitting());
        assert!(matches!(state.message, Some(StatusMessage::Success(_))));

        // No reset pathway: a further submit attempt is ignored.
        assert!(!state.can_submit());
        state.apply(AttendanceAction::BeginSubmit);
        assert_eq!(state.submission, SubmissionState::Succeeded);
    }

    #[test]
    fn test_failed_submission_is_retryable() {
        let mut state = AttendanceState::new("evt-1", 1);
        mark(&mut state, "a", AttendanceStatus::Absent);

        state.apply(AttendanceAction::BeginSubmit);
        state.apply(AttendanceAction::SubmitFailed("boom".to_string()));

        assert_eq!(state.submission, SubmissionState::Failed);
        assert!(!state.is_submitting());
        assert!(state.can_submit());
        assert!(matches!(state.message, Some(StatusMessage::Error(_))));

        // Retry clears the prior message on entry to Submitting.
        state.apply(AttendanceAction::BeginSubmit);
        assert_eq!(state.submission, SubmissionState::Submitting);
        assert!(state.message.is_none());
    }

    #[test]
    fn test_begin_submit_ignored_while_unmarked_remain() {
        let mut state = AttendanceState::new("evt-1", 2);
        mark(&mut state, "a", AttendanceStatus::Present);
        state.apply(AttendanceAction::BeginSubmit);
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_empty_roster_progress_is_zero() {
        let state = AttendanceState::new("evt-1", 0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_submit_labels_track_lifecycle() {
        let mut state = AttendanceState::new("evt-1", 2);
        assert_eq!(state.submit_label(), "Save Attendance (2 remaining)");

        mark(&mut state, "a", AttendanceStatus::Present);
        mark(&mut state, "b", AttendanceStatus::Present);
        assert_eq!(state.submit_label(), "✓ Save Attendance (Complete)");

        state.apply(AttendanceAction::BeginSubmit);
        assert_eq!(state.submit_label(), "Saving...");

        state.apply(AttendanceAction::SubmitSucceeded { total_marked: 2 });
        assert_eq!(state.submit_label(), "Attendance Saved ✓");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            r#""present""#
        );
        let status: AttendanceStatus = serde_json::from_str(r#""absent""#).unwrap();
        assert_eq!(status, AttendanceStatus::Absent);
    }
}
