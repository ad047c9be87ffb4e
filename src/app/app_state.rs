//! Centralized application state for the apron timeline viewer.
//!
//! Composes focused state components that each manage one aspect of the
//! application. The snapshot is an explicitly-owned value with a single
//! mutation gateway ([`crate::state::ScheduleState`]); every consumer
//! receives it by reference, never through a shared global.

use crate::cache::LayoutCache;
use crate::domain::time_axis::TimeScale;
use crate::state::{
    AxisState, ClockState, DraftState, FilterState, ScheduleState, ScrollState, SelectionState,
    ThemeState,
};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// The loaded snapshot and its mutation gateway
    pub schedule: ScheduleState,

    /// Live wall-clock ("now" marker)
    pub clock: ClockState,

    /// Tick scale and day-start configuration
    pub axis: AxisState,

    /// Search query and selected date
    pub filter: FilterState,

    /// Detail panel and capsule modal targets
    pub selection: SelectionState,

    /// Uncommitted text input (control directive, remarks)
    pub draft: DraftState,

    /// Shared scroll offsets and deferred now-marker alignment
    pub scroll: ScrollState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Derived-geometry cache
    pub layout_cache: LayoutCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            schedule: ScheduleState::new(),
            clock: ClockState::new(),
            axis: AxisState::new(),
            filter: FilterState::new(),
            selection: SelectionState::new(),
            draft: DraftState::new(),
            scroll: ScrollState::new(),
            theme: ThemeState::new(),
            error_message: None,
            layout_cache: LayoutCache::new(),
        }
    }

    /// Creates a new AppState with preferences restored from storage.
    pub fn with_preferences(theme_name: String, scale: TimeScale) -> Self {
        Self {
            axis: AxisState::with_scale(scale),
            theme: ThemeState::with_theme(theme_name),
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets the snapshot-related state when loading a new schedule.
    pub fn reset_schedule_state(&mut self) {
        self.schedule.clear();
        self.selection.clear();
        self.draft.reset();
        self.scroll.reset();
        self.error_message = None;
        self.layout_cache.invalidate();
    }
}
