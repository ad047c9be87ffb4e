//! Live wall-clock state.
//!
//! The "now" marker is driven by the local clock, read once per minute. The
//! state stores the last reading; the app's update loop asks for a refresh
//! when the interval has elapsed and schedules a repaint at the next minute
//! boundary. A cooperative check dies with its owner, so no timer can
//! outlive the view it updates.

use std::time::{Duration, Instant};

use chrono::{Local, Timelike};

use crate::domain::time_axis::{rollover_minutes, AxisConfig, PX_PER_MINUTE};

/// How often the wall clock is re-read.
pub const CLOCK_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// State related to the live "now" marker.
#[derive(Debug, Clone)]
pub struct ClockState {
    /// Display label, `HH:MM`
    time_label: String,
    hour: i32,
    minute: i32,
    /// When the clock was last read (None before the first refresh)
    last_refresh: Option<Instant>,
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockState {
    /// Creates a clock state that will refresh on the first update pass.
    pub fn new() -> Self {
        Self {
            time_label: String::new(),
            hour: 0,
            minute: 0,
            last_refresh: None,
        }
    }

    /// True when the refresh interval has elapsed (or nothing was read yet).
    pub fn needs_refresh(&self) -> bool {
        match self.last_refresh {
            Some(at) => at.elapsed() >= CLOCK_REFRESH_INTERVAL,
            None => true,
        }
    }

    /// Re-reads the local wall clock. Returns true when the displayed minute
    /// changed, i.e. when dependent geometry must be re-derived.
    pub fn refresh(&mut self) -> bool {
        let now = Local::now();
        self.refresh_from(now.hour() as i32, now.minute() as i32)
    }

    /// Applies an explicit clock reading (separated from [`Self::refresh`]
    /// so tests can drive the clock).
    pub fn refresh_from(&mut self, hour: i32, minute: i32) -> bool {
        self.last_refresh = Some(Instant::now());
        let changed = hour != self.hour || minute != self.minute || self.time_label.is_empty();
        self.hour = hour;
        self.minute = minute;
        self.time_label = format!("{:02}:{:02}", hour, minute);
        changed
    }

    /// Delay until the next minute boundary, for repaint scheduling.
    pub fn next_refresh_delay(&self) -> Duration {
        let second = Local::now().second() as u64;
        Duration::from_secs(60 - second.min(59))
    }

    // ===== Queries =====

    /// The `HH:MM` display label of the current time.
    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    /// Minutes since the operational day start, rollover-adjusted.
    pub fn now_minutes(&self, cfg: AxisConfig) -> i32 {
        rollover_minutes(self.hour, self.minute, cfg)
    }

    /// Pixel position of the "now" marker.
    pub fn now_px(&self, cfg: AxisConfig) -> f32 {
        self.now_minutes(cfg) as f32 * PX_PER_MINUTE
    }
}
