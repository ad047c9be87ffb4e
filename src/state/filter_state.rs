//! Search and date filter state.

/// State related to the header's flight filter controls.
///
/// The query is matched against flight and codeshare numbers; the selected
/// date names the single operational day on display (snapshots carry one
/// day, so it is informational).
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Search text buffer bound to the header input
    query: String,
    /// Selected date as `YYYY-MM-DD`
    selected_date: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    // ===== Text buffer accessors (for UI bindings) =====

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn selected_date_mut(&mut self) -> &mut String {
        &mut self.selected_date
    }

    // ===== Mutations =====

    pub fn set_selected_date(&mut self, date: String) {
        self.selected_date = date;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }
}
