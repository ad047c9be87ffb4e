//! Flight row rendering: event pills and annotation baselines.
//!
//! One row is a horizontal band of the board. Pills sit on the tracks the
//! allocator assigned; annotation baselines hang from the row bottom at
//! their stacked offsets. All positions come from the layout cache; this
//! module only paints and reports clicks.

use eframe::egui;
use rapron::model::{is_no_data, LineStyle};
use rapron::{Flight, ThemeColors, TIME_NONE};

use crate::cache::RowLayout;
use crate::domain::annotations::is_renderable;
use crate::domain::time_axis::{time_to_px, AxisConfig};
use crate::domain::tracks::{label_block_width, pill_top, pill_visual_width};
use crate::presentation::color_mapping::pill_colors;

/// Vertical gap between flight rows.
pub const ROW_GAP: f32 = 12.0;

/// Pill body height.
const PILL_HEIGHT: f32 = 22.0;

/// Horizontal gap between the anchor dot and the pill body.
const PILL_DOT_GAP: f32 = 16.0;

/// Result of user interaction with a timeline row.
pub enum RowInteraction {
    /// An event pill was clicked
    PillClicked { event_id: String },
}

/// Renders one flight row into `rect` and reports pill clicks.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `rect` - The row's band; `rect.min.x` is pixel zero of the axis
/// * `flight` - The flight to render
/// * `layout` - Cached geometry (tracks, baselines, height)
/// * `cfg` - Axis configuration for pixel mapping
/// * `colors` - Color palette for the current theme
pub fn render_timeline_row(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    flight: &Flight,
    layout: &RowLayout,
    cfg: AxisConfig,
    colors: &ThemeColors,
) -> Option<RowInteraction> {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 8.0, colors.card_background);
    painter.rect_stroke(
        rect,
        8.0,
        egui::Stroke::new(1.0, colors.border.gamma_multiply(0.6)),
        egui::StrokeKind::Inside,
    );

    render_annotations(&painter, rect, flight, layout, colors);

    let mut interaction = None;
    for event in &flight.events {
        let track = layout.tracks.get(&event.id).copied().unwrap_or(0);
        let left = rect.min.x + time_to_px(event.anchor_time().unwrap_or(""), cfg);
        let top = rect.min.y + pill_top(track);

        // Anchor dot, centered on the event's axis position.
        painter.circle_filled(
            egui::pos2(left, top + PILL_HEIGHT / 2.0),
            5.0,
            colors.green,
        );

        let pill = pill_colors(event.status, colors);
        let body = egui::Rect::from_min_size(
            egui::pos2(left + PILL_DOT_GAP, top),
            egui::vec2(pill_visual_width(&event.label), PILL_HEIGHT),
        );

        painter.rect_filled(body, PILL_HEIGHT / 2.0, pill.light_fill);
        painter.rect_stroke(
            body,
            PILL_HEIGHT / 2.0,
            egui::Stroke::new(1.0, pill.border),
            egui::StrokeKind::Inside,
        );

        // Colored label block on the left of the pill.
        let label_width = label_block_width(&event.label);
        let label_rect =
            egui::Rect::from_min_size(body.min, egui::vec2(label_width, PILL_HEIGHT));
        painter.rect_filled(label_rect, PILL_HEIGHT / 2.0, pill.fill);
        painter.text(
            label_rect.center(),
            egui::Align2::CENTER_CENTER,
            &event.label,
            egui::FontId::proportional(13.0),
            pill.text,
        );

        // Scheduled / actual time block.
        let scheduled = event.time_scheduled.as_deref().unwrap_or(TIME_NONE);
        let times = format!("计 {}  实 {}", scheduled, event.time_actual);
        painter.text(
            egui::pos2(body.min.x + label_width + 6.0, body.center().y),
            egui::Align2::LEFT_CENTER,
            times,
            egui::FontId::monospace(12.0),
            colors.text,
        );

        // Click to open the capsule modal; hover shows a summary.
        let pill_id = ui.id().with(("pill", &flight.id, &event.id));
        let response = ui.interact(body, pill_id, egui::Sense::click());
        if response.clicked() {
            interaction = Some(RowInteraction::PillClicked {
                event_id: event.id.clone(),
            });
        }
        if response.hovered() {
            response.on_hover_ui(|ui| {
                ui.label(format!("{} · {}", event.label, event.status.label()));
                ui.label(format!("计划 {}", scheduled));
                ui.label(format!("实际 {}", event.time_actual));
                if let Some(department) = &event.department {
                    ui.label(department.clone());
                }
            });
        }
    }

    interaction
}

/// Draws the stacked annotation baselines at the bottom of the row.
fn render_annotations(
    painter: &egui::Painter,
    rect: egui::Rect,
    flight: &Flight,
    layout: &RowLayout,
    colors: &ThemeColors,
) {
    // Layouts are in raw annotation order with unrenderable ones skipped, so
    // zipping against the renderable annotations restores the pairing.
    let renderable = flight.annotations.iter().filter(|a| is_renderable(a));

    for (annotation, geom) in renderable.zip(&layout.annotations) {
        let y = rect.max.y - geom.bottom_offset;
        let stroke = egui::Stroke::new(3.0, colors.baseline);

        if geom.segments_visible() {
            let left_from = egui::pos2(rect.min.x + geom.start_px, y);
            let left_to = egui::pos2(rect.min.x + geom.start_px + geom.segment_width, y);
            let right_from = egui::pos2(rect.min.x + geom.right_segment_start_px, y);
            let right_to = egui::pos2(rect.min.x + geom.end_px, y);

            match annotation.style {
                LineStyle::Solid => {
                    painter.line_segment([left_from, left_to], stroke);
                    painter.line_segment([right_from, right_to], stroke);
                }
                LineStyle::Dotted => {
                    painter.add(egui::Shape::dashed_line(&[left_from, left_to], stroke, 4.0, 4.0));
                    painter.add(egui::Shape::dashed_line(&[right_from, right_to], stroke, 4.0, 4.0));
                }
            }
        }

        if let Some(label) = annotation.label.as_deref().filter(|l| !l.is_empty()) {
            painter.text(
                egui::pos2(rect.min.x + geom.center_px, y),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(13.0),
                colors.text,
            );
        }

        if let Some(end_time) = annotation.end_time.as_deref().filter(|t| !is_no_data(t)) {
            painter.text(
                egui::pos2(rect.min.x + geom.end_label_px, y),
                egui::Align2::LEFT_CENTER,
                end_time,
                egui::FontId::monospace(12.0),
                colors.text_dim,
            );
        }
    }
}
