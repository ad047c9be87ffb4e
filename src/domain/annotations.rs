//! Annotation baseline placement.
//!
//! An annotation marks a derived interval (release window, takeoff window)
//! as a horizontal bar beneath a row: a left segment, a centered label, a
//! right segment, and the end time rendered just past the bar. Multiple
//! annotations on one row stack upward, each on its own baseline band.

use rapron::model::is_no_data;
use rapron::Annotation;

use crate::domain::time_axis::{time_to_px, AxisConfig};

/// Distance of the first baseline band from the row bottom.
pub const BASE_BOTTOM_OFFSET: f32 = 21.0;

/// Vertical distance between stacked baseline bands.
pub const STACK_SPACING: f32 = 34.0;

/// Segments shorter than this are degenerate slivers and are not drawn.
pub const MIN_SEGMENT_PX: f32 = 10.0;

/// Gap between the bar end and the end-time text.
pub const END_TIME_GAP_PX: f32 = 6.0;

/// Estimated width of one label character.
const LABEL_CHAR_WIDTH: f32 = 16.0;

/// Horizontal padding around the label.
const LABEL_PADDING: f32 = 24.0;

/// Computed geometry of one annotation baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationLayout {
    pub start_px: f32,
    pub end_px: f32,
    /// Center of the bar; the label is centered here.
    pub center_px: f32,
    /// Estimated label width, zero when there is no label.
    pub label_width: f32,
    /// Width of each of the two segments flanking the label.
    pub segment_width: f32,
    /// Where the right segment begins.
    pub right_segment_start_px: f32,
    /// Where the end-time text is anchored.
    pub end_label_px: f32,
    /// Distance of this baseline band from the row bottom.
    pub bottom_offset: f32,
}

impl AnnotationLayout {
    /// Whether the flanking segments are wide enough to draw.
    pub fn segments_visible(&self) -> bool {
        self.segment_width > MIN_SEGMENT_PX
    }
}

/// Estimated rendered width of an annotation label.
pub fn estimate_label_width(label: &str) -> f32 {
    if label.is_empty() {
        0.0
    } else {
        label.chars().count() as f32 * LABEL_CHAR_WIDTH + LABEL_PADDING
    }
}

/// Whether the annotation has both endpoint times and can produce a bar.
pub fn is_renderable(annotation: &Annotation) -> bool {
    annotation
        .start_time
        .as_deref()
        .map(|t| !is_no_data(t))
        .unwrap_or(false)
        && annotation
            .end_time
            .as_deref()
            .map(|t| !is_no_data(t))
            .unwrap_or(false)
}

/// Computes baseline geometry, or None when an endpoint time is missing.
pub fn layout_annotation(
    annotation: &Annotation,
    stack_index: usize,
    cfg: AxisConfig,
) -> Option<AnnotationLayout> {
    let start_time = annotation.start_time.as_deref().filter(|t| !is_no_data(t))?;
    let end_time = annotation.end_time.as_deref().filter(|t| !is_no_data(t))?;

    let start_px = time_to_px(start_time, cfg);
    let end_px = time_to_px(end_time, cfg);
    let width = end_px - start_px;
    let center_px = start_px + width / 2.0;

    let label_width = annotation
        .label
        .as_deref()
        .map(estimate_label_width)
        .unwrap_or(0.0);
    let segment_width = (width - label_width) / 2.0;

    Some(AnnotationLayout {
        start_px,
        end_px,
        center_px,
        label_width,
        segment_width,
        right_segment_start_px: center_px + label_width / 2.0,
        end_label_px: end_px + END_TIME_GAP_PX,
        bottom_offset: BASE_BOTTOM_OFFSET + stack_index as f32 * STACK_SPACING,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapron::model::{AnnotationKind, LineStyle};

    fn annotation(start: Option<&str>, end: Option<&str>, label: Option<&str>) -> Annotation {
        Annotation {
            kind: AnnotationKind::Connector,
            start_event_id: None,
            end_event_id: None,
            start_time: start.map(str::to_string),
            end_time: end.map(str::to_string),
            label: label.map(str::to_string),
            style: LineStyle::Solid,
            color: Some("gray".to_string()),
        }
    }

    fn cfg() -> AxisConfig {
        AxisConfig::default()
    }

    #[test]
    fn test_release_window_geometry() {
        // 09:00..10:00 with an 8:00 day start: 480..960 px, width 480.
        let layout = layout_annotation(&annotation(Some("09:00"), Some("10:00"), Some("放行")), 0, cfg())
            .unwrap();

        assert_eq!(layout.start_px, 480.0);
        assert_eq!(layout.end_px, 960.0);
        assert_eq!(layout.center_px, 720.0);
        // Two chars: 2 * 16 + 24.
        assert_eq!(layout.label_width, 56.0);
        assert_eq!(layout.segment_width, (480.0 - 56.0) / 2.0);
        assert!(layout.segments_visible());
        assert_eq!(layout.right_segment_start_px, 720.0 + 28.0);
        assert_eq!(layout.end_label_px, 960.0 + END_TIME_GAP_PX);
        assert_eq!(layout.bottom_offset, BASE_BOTTOM_OFFSET);
    }

    #[test]
    fn test_missing_endpoint_is_skipped() {
        assert!(layout_annotation(&annotation(None, Some("10:00"), None), 0, cfg()).is_none());
        assert!(layout_annotation(&annotation(Some("09:00"), None, None), 0, cfg()).is_none());
        assert!(layout_annotation(&annotation(Some("--:--"), Some("10:00"), None), 0, cfg()).is_none());
    }

    #[test]
    fn test_narrow_bar_hides_segments() {
        // 5 minutes = 40 px; with a 2-char label the segments are negative.
        let layout = layout_annotation(&annotation(Some("09:00"), Some("09:05"), Some("放行")), 0, cfg())
            .unwrap();
        assert!(!layout.segments_visible());
    }

    #[test]
    fn test_unlabeled_bar_uses_full_width_segments() {
        let layout =
            layout_annotation(&annotation(Some("09:00"), Some("10:00"), None), 0, cfg()).unwrap();
        assert_eq!(layout.label_width, 0.0);
        assert_eq!(layout.segment_width, 240.0);
    }

    #[test]
    fn test_stacking_offsets() {
        let a = annotation(Some("09:00"), Some("10:00"), Some("放行"));
        let first = layout_annotation(&a, 0, cfg()).unwrap();
        let second = layout_annotation(&a, 1, cfg()).unwrap();
        let third = layout_annotation(&a, 2, cfg()).unwrap();

        assert_eq!(first.bottom_offset, 21.0);
        assert_eq!(second.bottom_offset, 21.0 + STACK_SPACING);
        assert_eq!(third.bottom_offset, 21.0 + 2.0 * STACK_SPACING);
    }
}
