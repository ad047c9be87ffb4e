//! Row height resolution.
//!
//! A flight row must be tall enough for every pill track and every stacked
//! annotation baseline, and never shorter than the info card beside it.

use crate::domain::annotations::STACK_SPACING;
use crate::domain::tracks::TRACK_HEIGHT;

/// Minimum card height of a flight row.
pub const MIN_ROW_HEIGHT: f32 = 102.0;

/// Extra vertical padding below the last track / above the baselines.
pub const ROW_PADDING: f32 = 10.0;

/// Required pixel height of a row with the given content.
pub fn row_height(track_count: usize, annotation_count: usize) -> f32 {
    let needed =
        track_count as f32 * TRACK_HEIGHT + annotation_count as f32 * STACK_SPACING + ROW_PADDING;
    needed.max(MIN_ROW_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_track_row_uses_minimum() {
        // One track, no annotations: max(102, 30 + 0 + 10).
        assert_eq!(row_height(1, 0), 102.0);
    }

    #[test]
    fn test_minimum_holds_for_small_content() {
        assert_eq!(row_height(0, 0), MIN_ROW_HEIGHT);
        assert_eq!(row_height(2, 0), MIN_ROW_HEIGHT);
        assert_eq!(row_height(1, 2), MIN_ROW_HEIGHT);
    }

    #[test]
    fn test_tall_rows_grow_past_minimum() {
        // 3 tracks + 2 baselines: 90 + 68 + 10 = 168.
        assert_eq!(row_height(3, 2), 168.0);
        // 4 tracks alone: 120 + 10 = 130.
        assert_eq!(row_height(4, 0), 130.0);
    }
}
