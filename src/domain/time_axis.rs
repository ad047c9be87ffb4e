//! Time axis mapping.
//!
//! Converts wall-clock `HH:MM` strings to horizontal pixel offsets under the
//! operational-day rollover rule: a time earlier than the configured
//! day-start hour belongs to the following calendar day. The pixel-per-minute
//! ratio is a fixed constant: the tick scale changes label density only,
//! never the geometry, so switching scales cannot move existing pills.

use serde::{Deserialize, Serialize};

use rapron::model::is_no_data;
use rapron::ScheduleMetadata;

/// Horizontal pixels per minute of operational time, for every scale.
pub const PX_PER_MINUTE: f32 = 8.0;

/// Day-start configuration of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConfig {
    /// Hour at which the operational day starts.
    pub day_start_hour: i32,
    /// Minute-of-hour at which the operational day starts.
    pub day_start_min: i32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 8,
            day_start_min: 0,
        }
    }
}

impl AxisConfig {
    /// Builds the axis configuration from a snapshot's metadata.
    pub fn from_schedule(metadata: &ScheduleMetadata) -> Self {
        Self {
            day_start_hour: metadata.day_start_hour,
            day_start_min: 0,
        }
    }

    /// Minutes-of-day of the axis origin.
    pub fn day_start_minutes(&self) -> i32 {
        self.day_start_hour * 60 + self.day_start_min
    }
}

/// User-selectable tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeScale {
    Five,
    Ten,
    Thirty,
    Sixty,
}

impl Default for TimeScale {
    fn default() -> Self {
        TimeScale::Ten
    }
}

impl TimeScale {
    pub const ALL: [TimeScale; 4] = [
        TimeScale::Five,
        TimeScale::Ten,
        TimeScale::Thirty,
        TimeScale::Sixty,
    ];

    /// Minutes represented by one tick.
    pub fn minutes(self) -> i32 {
        match self {
            TimeScale::Five => 5,
            TimeScale::Ten => 10,
            TimeScale::Thirty => 30,
            TimeScale::Sixty => 60,
        }
    }

    /// Selector label (fixed label set).
    pub fn label(self) -> &'static str {
        match self {
            TimeScale::Five => "5分钟",
            TimeScale::Ten => "10分钟",
            TimeScale::Thirty => "30分钟",
            TimeScale::Sixty => "1小时",
        }
    }
}

/// Parses an `HH:MM` (or `H:MM`) string into hour and minute components.
///
/// Returns None for anything that does not parse as two integers split by a
/// colon; malformed input is treated exactly like the no-data sentinel.
pub fn parse_hhmm(time: &str) -> Option<(i32, i32)> {
    let (h, m) = time.split_once(':')?;
    let h: i32 = h.trim().parse().ok()?;
    let m: i32 = m.trim().parse().ok()?;
    Some((h, m))
}

/// Minutes elapsed since the operational day start, honoring rollover.
///
/// Returns None when the string carries no usable time.
pub fn minutes_from_day_start(time: &str, cfg: AxisConfig) -> Option<i32> {
    if is_no_data(time) {
        return None;
    }
    let (h, m) = parse_hhmm(time)?;
    Some(rollover_minutes(h, m, cfg))
}

/// Rollover arithmetic shared with the live-clock path: hours before the day
/// start are shifted to the next calendar day.
pub fn rollover_minutes(hour: i32, minute: i32, cfg: AxisConfig) -> i32 {
    let mut h = hour;
    if h < cfg.day_start_hour {
        h += 24;
    }
    (h - cfg.day_start_hour) * 60 + (minute - cfg.day_start_min)
}

/// Maps a clock time string to its horizontal pixel offset.
///
/// Sentinel, empty, and malformed input all land at offset zero rather than
/// failing, so degenerate data still renders.
pub fn time_to_px(time: &str, cfg: AxisConfig) -> f32 {
    minutes_from_day_start(time, cfg).unwrap_or(0) as f32 * PX_PER_MINUTE
}

/// Signed minute difference `actual - scheduled` on the plain clock (no
/// rollover), as shown by the capsule modal's deviation readout.
pub fn minute_diff(actual: &str, scheduled: &str) -> Option<i32> {
    if is_no_data(actual) || is_no_data(scheduled) {
        return None;
    }
    let (ah, am) = parse_hhmm(actual)?;
    let (sh, sm) = parse_hhmm(scheduled)?;
    Some((ah * 60 + am) - (sh * 60 + sm))
}
