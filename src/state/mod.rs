//! State management modules for the apron timeline viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Schedule state (the loaded snapshot and its two mutation points)
//! - Clock state (per-minute wall-clock refresh)
//! - Axis state (tick scale and day-start configuration)
//! - Filter state (search query, selected date)
//! - Selection state (detail panel and capsule modal targets)
//! - Draft state (control-directive and remarks text buffers)
//! - Scroll state (shared offsets, deferred now-marker alignment)
//! - Theme state (theme manager, current theme)

mod schedule_state;
mod clock_state;
mod axis_state;
mod filter_state;
mod selection_state;
mod draft_state;
mod scroll_state;
mod theme_state;

pub use schedule_state::ScheduleState;
pub use clock_state::ClockState;
pub use axis_state::AxisState;
pub use filter_state::FilterState;
pub use selection_state::SelectionState;
pub use draft_state::DraftState;
pub use scroll_state::ScrollState;
pub use theme_state::ThemeState;
