//! Memoization of derived timeline geometry.
//!
//! The layout pipeline is a pure function of (snapshot, scale, filter, now),
//! so it could be recomputed every frame; this cache avoids redoing the
//! track packing and annotation placement for unchanged inputs. Row
//! geometry depends on (snapshot revision, scale, query); the axis extent
//! additionally depends on the current minute. Results are identical to a
//! fresh computation; this is a performance refinement only.

use std::collections::HashMap;

use rapron::Flight;

use crate::domain::annotations::{layout_annotation, AnnotationLayout};
use crate::domain::extent::{max_timeline_minutes, tick_count};
use crate::domain::row_height::row_height;
use crate::domain::time_axis::{AxisConfig, TimeScale};
use crate::domain::tracks::{assign_tracks, track_count};

/// Derived geometry of one flight row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// Event id -> track index
    pub tracks: HashMap<String, usize>,
    pub track_count: usize,
    /// Renderable annotation baselines, stack offsets already applied.
    /// Unrenderable annotations keep their band slot but produce no entry.
    pub annotations: Vec<AnnotationLayout>,
    pub height: f32,
}

/// Computes a row's geometry from scratch.
pub fn compute_row_layout(flight: &Flight, cfg: AxisConfig) -> RowLayout {
    let tracks = assign_tracks(&flight.events, cfg);
    let track_count = track_count(&tracks);

    let annotations: Vec<AnnotationLayout> = flight
        .annotations
        .iter()
        .enumerate()
        .filter_map(|(index, anno)| layout_annotation(anno, index, cfg))
        .collect();

    let height = row_height(track_count, flight.annotations.len());

    RowLayout {
        tracks,
        track_count,
        annotations,
        height,
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    revision: u64,
    scale: TimeScale,
    query: String,
}

/// Cache for per-row geometry and the axis extent.
#[derive(Default)]
pub struct LayoutCache {
    key: Option<CacheKey>,
    rows: HashMap<String, RowLayout>,
    /// (now_minutes, (max_minutes, tick_count))
    extent: Option<(i32, (i32, usize))>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys the cache to the current inputs, dropping stale entries when the
    /// snapshot, scale, or filter changed.
    pub fn ensure_key(&mut self, revision: u64, scale: TimeScale, query: &str) {
        let key = CacheKey {
            revision,
            scale,
            query: query.to_string(),
        };
        if self.key.as_ref() != Some(&key) {
            self.key = Some(key);
            self.rows.clear();
            self.extent = None;
        }
    }

    /// Returns the cached row layout, computing it on first access.
    pub fn row_layout(&mut self, flight: &Flight, cfg: AxisConfig) -> &RowLayout {
        self.rows
            .entry(flight.id.clone())
            .or_insert_with(|| compute_row_layout(flight, cfg))
    }

    /// Returns `(max_minutes, tick_count)` for the filtered flights,
    /// recomputing when the clock minute has moved.
    pub fn extent<'a, I>(
        &mut self,
        flights: I,
        now_minutes: i32,
        scale: TimeScale,
        cfg: AxisConfig,
    ) -> (i32, usize)
    where
        I: IntoIterator<Item = &'a Flight>,
    {
        if let Some((cached_now, result)) = self.extent {
            if cached_now == now_minutes {
                return result;
            }
        }
        let max_minutes = max_timeline_minutes(flights, now_minutes, cfg);
        let result = (max_minutes, tick_count(max_minutes, scale));
        self.extent = Some((now_minutes, result));
        result
    }

    /// Drops everything (new snapshot loaded).
    pub fn invalidate(&mut self) {
        self.key = None;
        self.rows.clear();
        self.extent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapron::generate_demo_schedule;

    fn cfg() -> AxisConfig {
        AxisConfig::default()
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        // Two runs over an unchanged snapshot must produce identical pixels.
        let schedule = generate_demo_schedule(42, 5);
        let mut cache = LayoutCache::new();
        cache.ensure_key(1, TimeScale::Ten, "");

        let first: Vec<RowLayout> = schedule
            .flights
            .iter()
            .map(|f| cache.row_layout(f, cfg()).clone())
            .collect();
        let second: Vec<RowLayout> = schedule
            .flights
            .iter()
            .map(|f| cache.row_layout(f, cfg()).clone())
            .collect();
        assert_eq!(first, second);

        // And a fresh cache agrees with the cached results.
        let recomputed: Vec<RowLayout> = schedule
            .flights
            .iter()
            .map(|f| compute_row_layout(f, cfg()))
            .collect();
        assert_eq!(first, recomputed);
    }

    #[test]
    fn test_key_change_drops_rows() {
        let schedule = generate_demo_schedule(42, 0);
        let mut cache = LayoutCache::new();

        cache.ensure_key(1, TimeScale::Ten, "");
        let _ = cache.row_layout(&schedule.flights[0], cfg());
        assert_eq!(cache.rows.len(), 1);

        // Same key: entries survive.
        cache.ensure_key(1, TimeScale::Ten, "");
        assert_eq!(cache.rows.len(), 1);

        // Revision bump: entries dropped.
        cache.ensure_key(2, TimeScale::Ten, "");
        assert!(cache.rows.is_empty());

        // Query change likewise.
        let _ = cache.row_layout(&schedule.flights[0], cfg());
        cache.ensure_key(2, TimeScale::Ten, "ca");
        assert!(cache.rows.is_empty());
    }

    #[test]
    fn test_extent_tracks_the_clock() {
        let schedule = generate_demo_schedule(42, 0);
        let mut cache = LayoutCache::new();
        cache.ensure_key(1, TimeScale::Ten, "");

        let at_nine = cache.extent(&schedule.flights, 60, TimeScale::Ten, cfg());
        let cached = cache.extent(&schedule.flights, 60, TimeScale::Ten, cfg());
        assert_eq!(at_nine, cached);

        // A much later clock extends the axis.
        let at_twenty = cache.extent(&schedule.flights, 12 * 60, TimeScale::Ten, cfg());
        assert!(at_twenty.0 > at_nine.0);
    }

    #[test]
    fn test_row_heights_respect_minimum() {
        let schedule = generate_demo_schedule(42, 10);
        let mut cache = LayoutCache::new();
        cache.ensure_key(1, TimeScale::Ten, "");
        for flight in &schedule.flights {
            let layout = cache.row_layout(flight, cfg());
            assert!(layout.height >= crate::domain::row_height::MIN_ROW_HEIGHT);
        }
    }
}
