//! Track allocation for event pills.
//!
//! Events inside one flight row may overlap horizontally once their rendered
//! labels are accounted for. This module packs them into vertical tracks by
//! greedy earliest-fit: events are sorted by start pixel (event id as the
//! tie-break, so allocation is reproducible regardless of input order) and
//! each one takes the lowest-numbered track whose previous occupant has
//! ended. Width is a deterministic character-count estimate, not a measured
//! layout; it only needs to be reproducible and monotonic in label length.

use std::cmp::Ordering;
use std::collections::HashMap;

use rapron::TimelineEvent;

use crate::domain::time_axis::{time_to_px, AxisConfig};

/// Vertical pitch of one track: a 22px pill plus 8px gap.
pub const TRACK_HEIGHT: f32 = 30.0;

/// Offset of the first track below the row top.
pub const PILL_TOP_MARGIN: f32 = 4.0;

/// Estimated width of one label character (CJK-heavy labels, bold text).
const LABEL_CHAR_WIDTH: f32 = 18.0;

/// Horizontal padding around the label block.
const LABEL_PADDING: f32 = 24.0;

/// Fixed width of the scheduled/actual time block of a pill.
const TIME_BLOCK_WIDTH: f32 = 190.0;

/// Safety margin so adjacent pills never touch edge to edge.
const COLLISION_BUFFER: f32 = 10.0;

/// Estimated rendered width of a pill with the given label.
pub fn estimate_pill_width(label: &str) -> f32 {
    label.chars().count() as f32 * LABEL_CHAR_WIDTH + LABEL_PADDING + TIME_BLOCK_WIDTH + COLLISION_BUFFER
}

/// Width actually drawn for a pill: the estimate minus the collision buffer,
/// which is spacing between pills rather than visible body.
pub fn pill_visual_width(label: &str) -> f32 {
    estimate_pill_width(label) - COLLISION_BUFFER
}

/// Width of the label block alone (the colored left part of a pill).
pub fn label_block_width(label: &str) -> f32 {
    label.chars().count() as f32 * LABEL_CHAR_WIDTH + LABEL_PADDING
}

/// Assigns every event to a track (0-based, top to bottom).
///
/// Guarantee: two events sharing a track never have intersecting
/// `[start, start + width)` pixel spans. The greedy order keeps the track
/// count at the maximum number of mutually overlapping events for inputs
/// without start-pixel ties.
pub fn assign_tracks(events: &[TimelineEvent], cfg: AxisConfig) -> HashMap<String, usize> {
    let mut ordered: Vec<(f32, &TimelineEvent)> = events
        .iter()
        .map(|event| {
            let start = time_to_px(event.anchor_time().unwrap_or(""), cfg);
            (start, event)
        })
        .collect();

    ordered.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.id.cmp(&b.1.id))
    });

    let mut track_ends: Vec<f32> = Vec::new();
    let mut tracks = HashMap::new();

    for (start_px, event) in ordered {
        let end_px = start_px + estimate_pill_width(&event.label);

        match track_ends.iter().position(|&end| end <= start_px) {
            Some(track) => {
                track_ends[track] = end_px;
                tracks.insert(event.id.clone(), track);
            }
            None => {
                track_ends.push(end_px);
                tracks.insert(event.id.clone(), track_ends.len() - 1);
            }
        }
    }

    tracks
}

/// Number of tracks a row needs; at least one even with no events.
pub fn track_count(tracks: &HashMap<String, usize>) -> usize {
    tracks.values().max().map(|&max| max + 1).unwrap_or(1)
}

/// Vertical offset of a pill on the given track.
pub fn pill_top(track: usize) -> f32 {
    PILL_TOP_MARGIN + track as f32 * TRACK_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapron::model::{EventStatus, EventType};
    use rapron::TIME_NONE;

    fn event(id: &str, label: &str, scheduled: &str) -> TimelineEvent {
        TimelineEvent {
            id: id.to_string(),
            label: label.to_string(),
            event_type: EventType::Land,
            time_actual: TIME_NONE.to_string(),
            time_scheduled: Some(scheduled.to_string()),
            status: EventStatus::Pending,
            task_status: None,
            department: None,
            personnel: Vec::new(),
            lifecycle: Vec::new(),
        }
    }

    fn cfg() -> AxisConfig {
        AxisConfig::default()
    }

    fn assert_no_overlap(events: &[TimelineEvent], tracks: &HashMap<String, usize>) {
        for a in events {
            for b in events {
                if a.id == b.id || tracks[&a.id] != tracks[&b.id] {
                    continue;
                }
                let a_start = time_to_px(a.anchor_time().unwrap_or(""), cfg());
                let a_end = a_start + estimate_pill_width(&a.label);
                let b_start = time_to_px(b.anchor_time().unwrap_or(""), cfg());
                let b_end = b_start + estimate_pill_width(&b.label);
                assert!(
                    a_end <= b_start || b_end <= a_start,
                    "events {} and {} overlap on track {}",
                    a.id,
                    b.id,
                    tracks[&a.id]
                );
            }
        }
    }

    #[test]
    fn test_width_estimate_is_monotonic_in_label_length() {
        assert!(estimate_pill_width("落") < estimate_pill_width("落地"));
        assert!(estimate_pill_width("落地") < estimate_pill_width("开始卸载"));
    }

    #[test]
    fn test_non_overlapping_events_share_track_zero() {
        // At 8 px/min a pill spans over half an hour, so a comfortably wide
        // gap is needed for two events to coexist on track zero.
        let events = vec![event("e1", "落地", "09:00"), event("e2", "靠桥", "10:00")];
        let tracks = assign_tracks(&events, cfg());
        assert_eq!(tracks["e1"], 0);
        assert_eq!(tracks["e2"], 0);
        assert_eq!(track_count(&tracks), 1);
    }

    #[test]
    fn test_overlap_opens_second_track_and_reuses_first() {
        // Single-char labels are 242px wide. e1 spans 480..722 px, e2 starts
        // inside it at 520 px, e3 starts at 760 px (after e1 has ended) and
        // must drop back to track 0.
        let events = vec![
            event("e1", "落", "09:00"),
            event("e2", "靠", "09:05"),
            event("e3", "推", "09:35"),
        ];
        let tracks = assign_tracks(&events, cfg());
        assert_eq!(tracks["e1"], 0);
        assert_eq!(tracks["e2"], 1);
        assert_eq!(tracks["e3"], 0);
        assert_eq!(track_count(&tracks), 2);
        assert_no_overlap(&events, &tracks);
    }

    #[test]
    fn test_track_count_equals_max_mutual_overlap() {
        // Three pairwise-overlapping events need three tracks.
        let trio = vec![
            event("e1", "落", "09:00"),
            event("e2", "靠", "09:02"),
            event("e3", "推", "09:04"),
        ];
        let tracks = assign_tracks(&trio, cfg());
        assert_eq!(track_count(&tracks), 3);
        assert_no_overlap(&trio, &tracks);
    }

    #[test]
    fn test_no_overlap_invariant_on_dense_row() {
        let events = vec![
            event("e1", "落地", "09:00"),
            event("e2", "靠桥", "09:03"),
            event("e3", "开始卸载", "09:10"),
            event("e4", "登机", "09:31"),
            event("e5", "关舱门", "09:40"),
            event("e6", "推出", "10:15"),
            event("e7", "起飞", "10:16"),
        ];
        let tracks = assign_tracks(&events, cfg());
        assert_no_overlap(&events, &tracks);
        // Every event got a track.
        assert_eq!(tracks.len(), events.len());
    }

    #[test]
    fn test_tie_break_is_input_order_independent() {
        let forward = vec![event("a", "落", "09:00"), event("b", "靠", "09:00")];
        let reversed = vec![event("b", "靠", "09:00"), event("a", "落", "09:00")];

        let t1 = assign_tracks(&forward, cfg());
        let t2 = assign_tracks(&reversed, cfg());
        assert_eq!(t1, t2);
        // Lower id wins the lower track.
        assert_eq!(t1["a"], 0);
        assert_eq!(t1["b"], 1);
    }

    #[test]
    fn test_event_without_time_sits_at_origin() {
        let mut orphan = event("e1", "落", "");
        orphan.time_scheduled = None;
        let events = vec![orphan, event("e2", "靠", "08:00")];
        let tracks = assign_tracks(&events, cfg());
        // Both start at pixel zero, so they must not share a track.
        assert_ne!(tracks["e1"], tracks["e2"]);
    }

    #[test]
    fn test_empty_row_still_has_one_track() {
        let tracks = assign_tracks(&[], cfg());
        assert!(tracks.is_empty());
        assert_eq!(track_count(&tracks), 1);
    }

    #[test]
    fn test_pill_top_steps_by_track_height() {
        assert_eq!(pill_top(0), 4.0);
        assert_eq!(pill_top(1), 34.0);
        assert_eq!(pill_top(2), 64.0);
    }
}
