//! Axis tick generation.
//!
//! Produces the ordered label sequence for the sticky time header. Tick
//! spacing is a fixed pixel width regardless of scale: a coarser scale means
//! each tick stands for more minutes at the same visual density. The hour
//! label wraps modulo 24 for display only; the wrap never feeds back into
//! the rollover-sensitive minute accounting.

use crate::domain::time_axis::{AxisConfig, TimeScale};

/// Fixed horizontal spacing between ticks.
pub const TICK_WIDTH_PX: f32 = 80.0;

/// One axis tick: display label and left pixel edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub label: String,
    pub x: f32,
}

/// Generates `count` ticks starting at the operational day start.
pub fn generate_ticks(count: usize, scale: TimeScale, cfg: AxisConfig) -> Vec<Tick> {
    (0..count)
        .map(|i| {
            let total_minutes = cfg.day_start_minutes() + i as i32 * scale.minutes();
            let hour = (total_minutes / 60) % 24;
            let minute = total_minutes % 60;
            Tick {
                label: format!("{:02}:{:02}", hour, minute),
                x: i as f32 * TICK_WIDTH_PX,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> AxisConfig {
        AxisConfig::default()
    }

    #[test]
    fn test_first_tick_is_day_start() {
        let ticks = generate_ticks(3, TimeScale::Ten, cfg());
        assert_eq!(ticks[0].label, "08:00");
        assert_eq!(ticks[0].x, 0.0);
        assert_eq!(ticks[1].label, "08:10");
        assert_eq!(ticks[2].label, "08:20");
    }

    #[test]
    fn test_spacing_is_fixed_per_tick_regardless_of_scale() {
        for scale in TimeScale::ALL {
            let ticks = generate_ticks(4, scale, cfg());
            for (i, tick) in ticks.iter().enumerate() {
                assert_eq!(tick.x, i as f32 * TICK_WIDTH_PX);
            }
        }
    }

    #[test]
    fn test_hour_wraps_modulo_24() {
        // 100 one-hour ticks from 08:00 pass midnight at index 16.
        let ticks = generate_ticks(100, TimeScale::Sixty, cfg());
        assert_eq!(ticks[15].label, "23:00");
        assert_eq!(ticks[16].label, "00:00");
        assert_eq!(ticks[17].label, "01:00");
        // And wrap again a full day later.
        assert_eq!(ticks[40].label, "00:00");
    }

    #[test]
    fn test_scale_changes_label_stride_only() {
        let coarse = generate_ticks(2, TimeScale::Sixty, cfg());
        let fine = generate_ticks(2, TimeScale::Five, cfg());
        assert_eq!(coarse[1].label, "09:00");
        assert_eq!(fine[1].label, "08:05");
        assert_eq!(coarse[1].x, fine[1].x);
    }
}
