//! Selection state for the detail panel and the capsule modal.

/// State related to user selection.
///
/// Responsibilities:
/// - Tracking which flight the detail panel shows
/// - Tracking which event the capsule modal shows
/// - Remembering open/closed state of both surfaces
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Flight shown in the detail panel
    selected_flight_id: Option<String>,
    panel_open: bool,
    /// Event shown in the capsule modal, as (flight_id, event_id)
    selected_event: Option<(String, String)>,
    modal_open: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all selection state.
    pub fn clear(&mut self) {
        self.selected_flight_id = None;
        self.panel_open = false;
        self.selected_event = None;
        self.modal_open = false;
    }

    // ===== Queries =====

    pub fn selected_flight_id(&self) -> Option<&str> {
        self.selected_flight_id.as_deref()
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Returns the modal's (flight_id, event_id) target, if any.
    pub fn selected_event(&self) -> Option<(&str, &str)> {
        self.selected_event
            .as_ref()
            .map(|(f, e)| (f.as_str(), e.as_str()))
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    // ===== Mutations =====

    /// Opens the detail panel on a flight.
    pub fn select_flight(&mut self, flight_id: String) {
        self.selected_flight_id = Some(flight_id);
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Opens the capsule modal on an event.
    pub fn select_event(&mut self, flight_id: String, event_id: String) {
        self.selected_event = Some((flight_id, event_id));
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_flight_opens_panel() {
        let mut sel = SelectionState::new();
        sel.select_flight("1".to_string());
        assert_eq!(sel.selected_flight_id(), Some("1"));
        assert!(sel.panel_open());

        sel.close_panel();
        assert!(!sel.panel_open());
        // The selection itself survives a close so reopening shows the same flight.
        assert_eq!(sel.selected_flight_id(), Some("1"));
    }

    #[test]
    fn test_select_event_opens_modal() {
        let mut sel = SelectionState::new();
        sel.select_event("1".to_string(), "e2".to_string());
        assert_eq!(sel.selected_event(), Some(("1", "e2")));
        assert!(sel.modal_open());

        sel.close_modal();
        assert!(!sel.modal_open());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut sel = SelectionState::new();
        sel.select_flight("1".to_string());
        sel.select_event("1".to_string(), "e1".to_string());
        sel.clear();
        assert!(sel.selected_flight_id().is_none());
        assert!(sel.selected_event().is_none());
        assert!(!sel.panel_open());
        assert!(!sel.modal_open());
    }
}
