//! Application-level coordination and workflow management.
//!
//! Handles high-level operations: snapshot loading, clock refresh, the two
//! snapshot mutations (remarks, control directives), and selection handling
//! for the detail panel and capsule modal.

use std::path::PathBuf;

use eframe::egui;
use rapron::model::LifecycleKind;
use rapron::{ScheduleData, TaskLifecycleEvent};

use crate::app::AppState;
use crate::domain::auto_scroll::timeline_viewport_width;
use crate::io::{AsyncLoader, ControlDispatcher, ControlSubmission, LoadResult};
use crate::utils::{control_entry_id, control_timestamp};

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous snapshot loading.
    ///
    /// Immediately clears previous schedule data to show the loading indicator.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_schedule_state();
        loader.start_file_load(path, ctx);
    }

    /// Generates and loads the in-memory demo snapshot.
    pub fn open_demo_schedule(state: &mut AppState, loader: &mut AsyncLoader) {
        state.reset_schedule_state();
        let data = loader.load_demo_schedule();
        Self::apply_loaded_schedule(state, data, None);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop. Returns true if a load
    /// operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { data, path } => {
                Self::apply_loaded_schedule(state, data, path);
                true
            }
            LoadResult::Error(error_msg) => {
                state.error_message = Some(format!("Error loading schedule: {}", error_msg));
                state.schedule.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Installs a freshly loaded snapshot and re-derives dependent state.
    fn apply_loaded_schedule(state: &mut AppState, data: ScheduleData, path: Option<PathBuf>) {
        state.axis.adopt_schedule(&data.metadata);
        state.filter.set_selected_date(data.metadata.date.clone());
        state.schedule.load_schedule(data, path);
        state.selection.clear();
        state.draft.reset();
        state.scroll.reset();
        state.error_message = None;
        state.layout_cache.invalidate();
    }

    /// Refreshes the wall clock when its interval has elapsed and keeps the
    /// deferred now-marker alignment armed. `align_to_now` only re-arms when
    /// the marker actually moved (or after a snapshot load reset it), so
    /// calling this every frame covers both the per-minute refresh and the
    /// initial on-mount scroll.
    ///
    /// # Arguments
    /// * `window_width` - Current window width, for the alignment target
    pub fn refresh_clock(state: &mut AppState, window_width: f32) {
        if state.clock.needs_refresh() {
            state.clock.refresh();
        }
        if !state.clock.time_label().is_empty() {
            let now_px = state.clock.now_px(state.axis.config());
            state
                .scroll
                .align_to_now(now_px, timeline_viewport_width(window_width));
        }
    }

    // ===== Selection handling =====

    /// Handles a click on a flight's info card: opens the detail panel.
    pub fn handle_flight_card_click(state: &mut AppState, flight_id: String) {
        state.draft.cancel_remarks_edit();
        state.selection.select_flight(flight_id);
    }

    /// Handles a click on an event pill: opens the capsule modal.
    pub fn handle_event_pill_click(state: &mut AppState, flight_id: String, event_id: String) {
        state.draft.clear_control();
        state.selection.select_event(flight_id, event_id);
    }

    // ===== Snapshot mutations =====

    /// Saves the remarks draft to the selected flight.
    pub fn save_remarks(state: &mut AppState) {
        let Some(flight_id) = state.selection.selected_flight_id().map(str::to_string) else {
            state.draft.cancel_remarks_edit();
            return;
        };
        let text = state.draft.take_remarks();
        state.schedule.set_remarks(&flight_id, text);
    }

    /// Submits the control-directive draft for the selected event.
    ///
    /// Rejected as a no-op when the text is empty/whitespace, no event is
    /// selected, or a previous submission is still in flight. On success the
    /// entry travels through the simulated persistence delay and is
    /// prepended by [`Self::check_control_completion`].
    pub fn submit_control(
        state: &mut AppState,
        dispatcher: &mut ControlDispatcher,
        ctx: &egui::Context,
    ) -> bool {
        if state.draft.control_text().trim().is_empty() {
            return false;
        }
        if dispatcher.is_dispatching() {
            return false;
        }
        let Some((flight_id, event_id)) = state.selection.selected_event() else {
            return false;
        };

        let submission = ControlSubmission {
            flight_id: flight_id.to_string(),
            event_id: event_id.to_string(),
            entry: TaskLifecycleEvent {
                id: control_entry_id(),
                kind: LifecycleKind::Control,
                timestamp: control_timestamp(),
                description: state.draft.control_text().to_string(),
            },
        };

        dispatcher.start(submission, ctx);
        true
    }

    /// Applies a delivered control submission to the snapshot.
    ///
    /// Called once per frame. Returns true when an entry was appended.
    pub fn check_control_completion(
        state: &mut AppState,
        dispatcher: &mut ControlDispatcher,
    ) -> bool {
        let Some(submission) = dispatcher.check_completion() else {
            return false;
        };
        let applied =
            state
                .schedule
                .append_control(&submission.flight_id, &submission.event_id, submission.entry);
        if applied {
            state.draft.clear_control();
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::control_dispatcher::DISPATCH_DELAY;
    use std::time::Duration;

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let mut loader = AsyncLoader::new();
        ApplicationCoordinator::open_demo_schedule(&mut state, &mut loader);
        state
    }

    #[test]
    fn test_demo_load_adopts_metadata() {
        let state = loaded_state();
        assert!(state.schedule.schedule().is_some());
        assert_eq!(state.filter.selected_date(), "2026-02-05");
        assert_eq!(state.axis.config().day_start_hour, 8);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_submit_empty_control_is_noop() {
        let mut state = loaded_state();
        let mut dispatcher = ControlDispatcher::new();
        let ctx = egui::Context::default();

        state.selection.select_event("1".to_string(), "e1".to_string());
        state.draft.control_text_mut().push_str("   ");

        assert!(!ApplicationCoordinator::submit_control(&mut state, &mut dispatcher, &ctx));
        assert!(!dispatcher.is_dispatching());

        // Lifecycle log is untouched.
        let log_len = state
            .schedule
            .schedule()
            .unwrap()
            .flight("1")
            .unwrap()
            .event("e1")
            .unwrap()
            .lifecycle
            .len();
        assert_eq!(log_len, 8);
    }

    #[test]
    fn test_submit_without_selection_is_noop() {
        let mut state = loaded_state();
        let mut dispatcher = ControlDispatcher::new();
        let ctx = egui::Context::default();

        state.draft.control_text_mut().push_str("请及时到位");
        assert!(!ApplicationCoordinator::submit_control(&mut state, &mut dispatcher, &ctx));
    }

    #[test]
    fn test_control_submission_prepends_after_delay() {
        let mut state = loaded_state();
        let mut dispatcher = ControlDispatcher::new();
        let ctx = egui::Context::default();

        state.selection.select_event("1".to_string(), "e1".to_string());
        state.draft.control_text_mut().push_str("收到请回复");

        assert!(ApplicationCoordinator::submit_control(&mut state, &mut dispatcher, &ctx));
        // A second submit while in flight is rejected.
        assert!(!ApplicationCoordinator::submit_control(&mut state, &mut dispatcher, &ctx));

        std::thread::sleep(DISPATCH_DELAY + Duration::from_millis(100));
        assert!(ApplicationCoordinator::check_control_completion(&mut state, &mut dispatcher));

        let log = &state
            .schedule
            .schedule()
            .unwrap()
            .flight("1")
            .unwrap()
            .event("e1")
            .unwrap()
            .lifecycle;
        assert_eq!(log[0].kind, LifecycleKind::Control);
        assert_eq!(log[0].description, "收到请回复");
        // Draft cleared once the entry landed.
        assert!(state.draft.control_text().is_empty());
    }

    #[test]
    fn test_save_remarks_writes_through() {
        let mut state = loaded_state();
        ApplicationCoordinator::handle_flight_card_click(&mut state, "2".to_string());

        state.draft.begin_remarks_edit("过站时间紧张，请关注保障进度。");
        state.draft.remarks_text_mut().push_str(" 已协调。");
        ApplicationCoordinator::save_remarks(&mut state);

        assert_eq!(
            state.schedule.schedule().unwrap().flight("2").unwrap().remarks.as_deref(),
            Some("过站时间紧张，请关注保障进度。 已协调。")
        );
        assert!(!state.draft.editing_remarks());
    }

    #[test]
    fn test_pill_click_opens_modal() {
        let mut state = loaded_state();
        ApplicationCoordinator::handle_event_pill_click(&mut state, "1".to_string(), "e2".to_string());
        assert!(state.selection.modal_open());
        assert_eq!(state.selection.selected_event(), Some(("1", "e2")));
    }
}
