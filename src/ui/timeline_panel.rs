//! Timeline panel UI rendering
//!
//! The central board: a sticky tick header, one Gantt row per filtered
//! flight, the past-time shade, and the red "now" line. Horizontal offset is
//! shared between the header and the rows; the deferred auto-scroll target
//! is applied here once its settle delay elapses.

use eframe::egui;
use rapron::ThemeColors;

use crate::app::AppState;
use crate::domain::filtering::filter_flights;
use crate::domain::ticks::{generate_ticks, TICK_WIDTH_PX};
use crate::rendering::axis_renderer::{render_tick_header, HEADER_HEIGHT};
use crate::rendering::row_renderer::{render_timeline_row, RowInteraction, ROW_GAP};

/// Result of user interaction with the timeline panel
pub enum TimelinePanelInteraction {
    /// An event pill was clicked
    PillClicked { flight_id: String, event_id: String },
}

/// Renders the board: tick header, flight rows, overlays.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `is_loading` - Whether a snapshot load is in flight
/// * `colors` - Color palette for the current theme
pub fn render_timeline_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    is_loading: bool,
    colors: &ThemeColors,
) -> Option<TimelinePanelInteraction> {
    if state.schedule.schedule().is_none() {
        ui.centered_and_justified(|ui| {
            if is_loading {
                ui.spinner();
            } else {
                ui.label("打开航班计划或加载演示数据");
            }
        });
        return None;
    }

    let cfg = state.axis.config();
    let scale = state.axis.scale();
    let query = state.filter.query().to_string();

    state
        .layout_cache
        .ensure_key(state.schedule.revision(), scale, &query);

    let now_minutes = state.clock.now_minutes(cfg);
    let now_px = state.clock.now_px(cfg);
    let now_label = state.clock.time_label().to_string();

    // Axis extent for the filtered snapshot plus "now".
    let (ticks, total_width) = {
        let schedule = state
            .schedule
            .schedule()
            .expect("schedule presence checked above");
        let filtered = filter_flights(&schedule.flights, &query);
        let (_, count) =
            state
                .layout_cache
                .extent(filtered.iter().copied(), now_minutes, scale, cfg);
        (
            generate_ticks(count, scale, cfg),
            count as f32 * TICK_WIDTH_PX,
        )
    };

    // Sticky tick header, horizontally locked to the rows' offset.
    let header_x = state.scroll.offset().x;
    egui::ScrollArea::horizontal()
        .id_salt("tick_header")
        .auto_shrink([false, false])
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .horizontal_scroll_offset(header_x)
        .max_height(HEADER_HEIGHT)
        .show(ui, |ui| {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(total_width, HEADER_HEIGHT),
                egui::Sense::hover(),
            );
            render_tick_header(ui, rect, &ticks, now_px, &now_label, colors);
        });

    // Flight rows, with the deferred alignment applied once due.
    let mut interaction = None;
    let mut rows_area = egui::ScrollArea::both()
        .id_salt("timeline_rows")
        .auto_shrink([false, false]);
    if let Some(target_x) = state.scroll.take_due_target() {
        rows_area = rows_area.horizontal_scroll_offset(target_x);
    }

    let output = rows_area.show(ui, |ui| {
        let content_top = ui.cursor().min;

        let schedule = state
            .schedule
            .schedule()
            .expect("schedule presence checked above");
        for flight in filter_flights(&schedule.flights, &query) {
            let layout = state.layout_cache.row_layout(flight, cfg).clone();
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(total_width, layout.height),
                egui::Sense::hover(),
            );
            if let Some(RowInteraction::PillClicked { event_id }) =
                render_timeline_row(ui, rect, flight, &layout, cfg, colors)
            {
                interaction = Some(TimelinePanelInteraction::PillClicked {
                    flight_id: flight.id.clone(),
                    event_id,
                });
            }
            ui.add_space(ROW_GAP);
        }

        // Overlays over the whole content band.
        let content_rect = egui::Rect::from_min_max(
            content_top,
            egui::pos2(content_top.x + total_width, ui.cursor().min.y),
        );
        let painter = ui.painter_at(content_rect);

        // Elapsed-time tint left of the marker.
        if now_px > 0.0 {
            let past = egui::Rect::from_min_max(
                content_rect.min,
                egui::pos2(content_rect.min.x + now_px, content_rect.max.y),
            );
            painter.rect_filled(past, 0.0, colors.past_shade);
        }

        // The "now" line itself.
        let line_x = content_rect.min.x + now_px;
        painter.line_segment(
            [
                egui::pos2(line_x, content_rect.min.y),
                egui::pos2(line_x, content_rect.max.y),
            ],
            egui::Stroke::new(2.0, colors.now_marker),
        );
    });

    state.scroll.note_offset(output.state.offset);

    interaction
}
