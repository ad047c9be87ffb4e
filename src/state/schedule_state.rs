//! Schedule snapshot state management.
//!
//! Owns the loaded snapshot and gates every mutation of it. The snapshot is
//! read-mostly: the only in-place writes during a session are flight remarks
//! edits and control-directive appends, both of which bump a revision
//! counter so derived layout caches know to recompute.

use std::path::PathBuf;

use rapron::{ScheduleData, TaskLifecycleEvent};

/// State related to the loaded schedule snapshot.
///
/// Responsibilities:
/// - Managing snapshot lifetime
/// - Tracking the source file path (None for demo schedules)
/// - Serializing all snapshot mutations through two entry points
/// - Versioning the snapshot for cache invalidation
#[derive(Default)]
pub struct ScheduleState {
    /// The currently loaded snapshot (if any)
    schedule: Option<ScheduleData>,
    /// Path to the loaded file (None for demo schedules)
    file_path: Option<PathBuf>,
    /// Bumped on load and on every mutation
    revision: u64,
}

impl ScheduleState {
    /// Creates a new schedule state with no loaded snapshot.
    pub fn new() -> Self {
        Self {
            schedule: None,
            file_path: None,
            revision: 0,
        }
    }

    /// Loads a new snapshot, replacing any previous one.
    pub fn load_schedule(&mut self, data: ScheduleData, path: Option<PathBuf>) {
        self.schedule = Some(data);
        self.file_path = path;
        self.revision += 1;
    }

    /// Clears all schedule state.
    pub fn clear(&mut self) {
        self.schedule = None;
        self.file_path = None;
        self.revision += 1;
    }

    // ===== Queries =====

    /// Returns the loaded snapshot, if any.
    pub fn schedule(&self) -> Option<&ScheduleData> {
        self.schedule.as_ref()
    }

    /// Returns the source file path, if the snapshot came from a file.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Returns the current snapshot revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ===== Mutation entry points =====

    /// Replaces a flight's free-text remarks. Empty text clears them.
    ///
    /// Returns false when the flight is unknown (state unchanged).
    pub fn set_remarks(&mut self, flight_id: &str, remarks: String) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        let Some(flight) = schedule.flight_mut(flight_id) else {
            return false;
        };

        flight.remarks = if remarks.trim().is_empty() {
            None
        } else {
            Some(remarks)
        };
        self.revision += 1;
        true
    }

    /// Prepends a control-directive entry to an event's lifecycle log.
    ///
    /// The log is append-only and ordered most-recent-first, so new entries
    /// go to the front. Returns false when the flight or event is unknown.
    pub fn append_control(
        &mut self,
        flight_id: &str,
        event_id: &str,
        entry: TaskLifecycleEvent,
    ) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        let Some(event) = schedule
            .flight_mut(flight_id)
            .and_then(|f| f.event_mut(event_id))
        else {
            return false;
        };

        event.lifecycle.insert(0, entry);
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapron::generate_demo_schedule;
    use rapron::model::LifecycleKind;

    fn loaded() -> ScheduleState {
        let mut state = ScheduleState::new();
        state.load_schedule(generate_demo_schedule(42, 0), None);
        state
    }

    fn control_entry(id: &str) -> TaskLifecycleEvent {
        TaskLifecycleEvent {
            id: id.to_string(),
            kind: LifecycleKind::Control,
            timestamp: "02-05 10:30".to_string(),
            description: "请及时到位".to_string(),
        }
    }

    #[test]
    fn test_load_bumps_revision() {
        let mut state = ScheduleState::new();
        assert_eq!(state.revision(), 0);
        state.load_schedule(generate_demo_schedule(42, 0), None);
        assert_eq!(state.revision(), 1);
        assert!(state.schedule().is_some());
        assert!(state.file_path().is_none());
    }

    #[test]
    fn test_set_remarks_replaces_and_bumps() {
        let mut state = loaded();
        let before = state.revision();

        assert!(state.set_remarks("3", "优先保障".to_string()));
        assert_eq!(state.revision(), before + 1);
        assert_eq!(
            state.schedule().unwrap().flight("3").unwrap().remarks.as_deref(),
            Some("优先保障")
        );

        // Whitespace-only text clears the remarks.
        assert!(state.set_remarks("3", "  ".to_string()));
        assert!(state.schedule().unwrap().flight("3").unwrap().remarks.is_none());
    }

    #[test]
    fn test_set_remarks_unknown_flight_is_noop() {
        let mut state = loaded();
        let before = state.revision();
        assert!(!state.set_remarks("no-such-flight", "x".to_string()));
        assert_eq!(state.revision(), before);
    }

    #[test]
    fn test_append_control_prepends() {
        let mut state = loaded();
        let before_len = state
            .schedule()
            .unwrap()
            .flight("1")
            .unwrap()
            .event("e1")
            .unwrap()
            .lifecycle
            .len();

        assert!(state.append_control("1", "e1", control_entry("c1")));

        let log = &state
            .schedule()
            .unwrap()
            .flight("1")
            .unwrap()
            .event("e1")
            .unwrap()
            .lifecycle;
        assert_eq!(log.len(), before_len + 1);
        assert_eq!(log[0].id, "c1");
        assert_eq!(log[0].kind, LifecycleKind::Control);
    }

    #[test]
    fn test_append_control_unknown_event_is_noop() {
        let mut state = loaded();
        let before = state.revision();
        assert!(!state.append_control("1", "no-such-event", control_entry("c1")));
        assert_eq!(state.revision(), before);
    }
}
