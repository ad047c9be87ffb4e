//! Time axis state management.
//!
//! Holds the user-selected tick scale and the day-start configuration taken
//! from the loaded snapshot. Changing the scale only changes tick labeling
//! density; pixel geometry is scale-independent by design.

use rapron::ScheduleMetadata;

use crate::domain::time_axis::{AxisConfig, TimeScale};

/// State related to the time axis.
#[derive(Debug, Clone, Default)]
pub struct AxisState {
    scale: TimeScale,
    config: AxisConfig,
}

impl AxisState {
    /// Creates axis state with the default 10-minute scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates axis state with a restored scale selection.
    pub fn with_scale(scale: TimeScale) -> Self {
        Self {
            scale,
            config: AxisConfig::default(),
        }
    }

    // ===== Queries =====

    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    pub fn config(&self) -> AxisConfig {
        self.config
    }

    // ===== Mutations =====

    /// Selects a new tick scale. Returns true when it actually changed.
    pub fn set_scale(&mut self, scale: TimeScale) -> bool {
        let changed = self.scale != scale;
        self.scale = scale;
        changed
    }

    /// Adopts the day-start hour of a freshly loaded snapshot.
    pub fn adopt_schedule(&mut self, metadata: &ScheduleMetadata) {
        self.config = AxisConfig::from_schedule(metadata);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_is_ten_minutes() {
        let state = AxisState::new();
        assert_eq!(state.scale(), TimeScale::Ten);
        assert_eq!(state.config().day_start_hour, 8);
    }

    #[test]
    fn test_set_scale_reports_change() {
        let mut state = AxisState::new();
        assert!(state.set_scale(TimeScale::Thirty));
        assert!(!state.set_scale(TimeScale::Thirty));
        assert_eq!(state.scale(), TimeScale::Thirty);
    }

    #[test]
    fn test_adopt_schedule_day_start() {
        let mut state = AxisState::new();
        let meta = ScheduleMetadata {
            version: "1.0".to_string(),
            airport: "CTU".to_string(),
            date: "2026-02-05".to_string(),
            day_start_hour: 6,
        };
        state.adopt_schedule(&meta);
        assert_eq!(state.config().day_start_hour, 6);
    }
}
