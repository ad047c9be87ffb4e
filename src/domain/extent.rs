//! Timeline extent and tick-count calculation.
//!
//! Scans the (filtered) flight collection plus the current wall-clock time
//! to decide how far the axis must extend, with a trailing buffer so the
//! rightmost content never sits flush against the viewport edge.

use rapron::Flight;

use crate::domain::time_axis::{minutes_from_day_start, AxisConfig, TimeScale};

/// Minutes of empty space kept to the right of the last event.
pub const TRAILING_BUFFER_MIN: i32 = 180;

/// Floor on the tick count so sparse or empty datasets still get a usable axis.
pub const MIN_TICKS: usize = 60;

/// Maximum operational-day minute the axis must cover.
///
/// Folds every event's anchor time (scheduled else actual; events with no
/// usable time are skipped) and the current time, then adds the trailing
/// buffer. `now_minutes` must already be rollover-adjusted.
pub fn max_timeline_minutes<'a, I>(flights: I, now_minutes: i32, cfg: AxisConfig) -> i32
where
    I: IntoIterator<Item = &'a Flight>,
{
    let mut max_minutes = 0;

    for flight in flights {
        for event in &flight.events {
            if let Some(time) = event.anchor_time() {
                if let Some(minutes) = minutes_from_day_start(time, cfg) {
                    max_minutes = max_minutes.max(minutes);
                }
            }
        }
    }

    max_minutes = max_minutes.max(now_minutes);
    max_minutes + TRAILING_BUFFER_MIN
}

/// Number of axis ticks needed to span `max_minutes` at the given scale.
pub fn tick_count(max_minutes: i32, scale: TimeScale) -> usize {
    let needed = (max_minutes as f64 / scale.minutes() as f64).ceil() as usize;
    needed.max(MIN_TICKS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapron::model::{EventStatus, EventType, Flight, FlightTimes, FlightType, TimelineEvent};
    use rapron::TIME_NONE;

    fn flight_with_events(times: &[(&str, &str)]) -> Flight {
        let events = times
            .iter()
            .enumerate()
            .map(|(i, (scheduled, actual))| TimelineEvent {
                id: format!("e{}", i),
                label: "落地".to_string(),
                event_type: EventType::Land,
                time_actual: actual.to_string(),
                time_scheduled: Some(scheduled.to_string()),
                status: EventStatus::Completed,
                task_status: None,
                department: None,
                personnel: Vec::new(),
                lifecycle: Vec::new(),
            })
            .collect();

        Flight {
            id: "1".to_string(),
            flight_no: "CA1538".to_string(),
            codeshare: None,
            stand: None,
            gate: None,
            registration: None,
            aircraft_type: None,
            aircraft_category: None,
            route: None,
            flight_type: FlightType::default(),
            arr_info: None,
            dep_info: None,
            times: FlightTimes::default(),
            events,
            annotations: Vec::new(),
            remarks: None,
        }
    }

    fn cfg() -> AxisConfig {
        AxisConfig::default()
    }

    #[test]
    fn test_empty_flight_list_floors_at_now_plus_buffer() {
        let flights: Vec<Flight> = Vec::new();
        let now = 120;
        assert_eq!(max_timeline_minutes(&flights, now, cfg()), now + TRAILING_BUFFER_MIN);
    }

    #[test]
    fn test_events_extend_the_axis() {
        // 13:00 is 300 minutes past the 08:00 day start.
        let flights = vec![flight_with_events(&[("09:00", "09:05"), ("13:00", TIME_NONE)])];
        assert_eq!(max_timeline_minutes(&flights, 60, cfg()), 300 + TRAILING_BUFFER_MIN);
    }

    #[test]
    fn test_now_extends_past_events() {
        let flights = vec![flight_with_events(&[("09:00", "09:05")])];
        let now = 10 * 60;
        assert_eq!(max_timeline_minutes(&flights, now, cfg()), now + TRAILING_BUFFER_MIN);
    }

    #[test]
    fn test_actual_time_used_when_scheduled_missing() {
        let mut flight = flight_with_events(&[("", "14:00")]);
        flight.events[0].time_scheduled = None;
        assert_eq!(
            max_timeline_minutes(std::iter::once(&flight), 0, cfg()),
            360 + TRAILING_BUFFER_MIN
        );
    }

    #[test]
    fn test_no_data_events_are_skipped() {
        let mut flight = flight_with_events(&[(TIME_NONE, TIME_NONE)]);
        flight.events[0].time_scheduled = Some(TIME_NONE.to_string());
        assert_eq!(
            max_timeline_minutes(std::iter::once(&flight), 30, cfg()),
            30 + TRAILING_BUFFER_MIN
        );
    }

    #[test]
    fn test_rolled_over_event_dominates() {
        // 00:30 is 16.5 hours into the operational day.
        let flights = vec![flight_with_events(&[("00:30", TIME_NONE)])];
        assert_eq!(
            max_timeline_minutes(&flights, 0, cfg()),
            16 * 60 + 30 + TRAILING_BUFFER_MIN
        );
    }

    #[test]
    fn test_tick_count_floor() {
        assert_eq!(tick_count(0, TimeScale::Ten), MIN_TICKS);
        assert_eq!(tick_count(100, TimeScale::Sixty), MIN_TICKS);
    }

    #[test]
    fn test_tick_count_scales_with_interval() {
        // 900 minutes at 10 min/tick needs 90 ticks.
        assert_eq!(tick_count(900, TimeScale::Ten), 90);
        // At 5 min/tick the same span needs twice as many.
        assert_eq!(tick_count(900, TimeScale::Five), 180);
        // Ceil: 901 minutes still needs a 91st tick.
        assert_eq!(tick_count(901, TimeScale::Ten), 91);
    }
}
