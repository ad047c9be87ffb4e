//! Flight info-card column.
//!
//! The left column of the board: one card per (filtered) flight, sized to
//! the same row heights as the timeline so the two columns stay aligned.
//! Vertical scrolling mirrors the timeline's offset; clicking a card opens
//! the detail panel.

use eframe::egui;
use rapron::{Flight, ThemeColors, TIME_NONE};

use crate::app::AppState;
use crate::domain::filtering::flight_matches;
use crate::presentation::color_mapping::{
    arrival_badge_colors, departure_badge_colors, flight_type_color,
};
use crate::rendering::row_renderer::ROW_GAP;

/// Result of user interaction with the flight list
pub enum FlightListInteraction {
    /// A flight card was clicked
    CardClicked { flight_id: String },
}

/// Renders the card column, scroll-locked to the timeline's vertical offset.
pub fn render_flight_list(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<FlightListInteraction> {
    let mut interaction = None;

    let offset_y = state.scroll.offset().y;
    egui::ScrollArea::vertical()
        .id_salt("flight_cards")
        .auto_shrink([false, false])
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .vertical_scroll_offset(offset_y)
        .show(ui, |ui| {
            state.layout_cache.ensure_key(
                state.schedule.revision(),
                state.axis.scale(),
                state.filter.query(),
            );

            let Some(schedule) = state.schedule.schedule() else {
                ui.label("未加载航班计划");
                return;
            };

            let cfg = state.axis.config();
            for flight in schedule
                .flights
                .iter()
                .filter(|f| flight_matches(f, state.filter.query()))
            {
                let height = state.layout_cache.row_layout(flight, cfg).height;
                if let Some(clicked) = render_flight_card(ui, flight, height, colors) {
                    interaction = Some(clicked);
                }
                ui.add_space(ROW_GAP);
            }
        });

    interaction
}

/// One info card: flight numbers, leg badges, COBT, flight type.
fn render_flight_card(
    ui: &mut egui::Ui,
    flight: &Flight,
    height: f32,
    colors: &ThemeColors,
) -> Option<FlightListInteraction> {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::click());

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 8.0, colors.hover);
    let border = if flight.is_delayed() { colors.red } else { colors.border };
    painter.rect_stroke(rect, 8.0, egui::Stroke::new(1.0, border), egui::StrokeKind::Inside);

    let pad = 10.0;
    let mut cursor = rect.min.y + pad;

    // Row 1: flight numbers
    let primary_color = if flight.arr_info.is_some() { colors.green } else { colors.blue };
    let title_rect = painter.text(
        egui::pos2(rect.min.x + pad, cursor),
        egui::Align2::LEFT_TOP,
        flight.primary_flight_no(),
        egui::FontId::monospace(18.0),
        primary_color,
    );
    if let Some(codeshare) = &flight.codeshare {
        painter.text(
            egui::pos2(title_rect.right() + 4.0, cursor),
            egui::Align2::LEFT_TOP,
            format!("/ {}", codeshare),
            egui::FontId::monospace(18.0),
            colors.blue,
        );
    }
    cursor += 26.0;

    // Row 2: fused leg badges (status + stand/gate)
    let mut badge_x = rect.min.x + pad;
    if let Some(arr) = &flight.arr_info {
        let (dark, light) = arrival_badge_colors(arr.status, colors);
        badge_x = fused_badge(
            &painter,
            egui::pos2(badge_x, cursor),
            arr.status.label(),
            arr.stand.as_deref().unwrap_or("-"),
            dark,
            light,
            colors,
        ) + 8.0;
    }
    if let Some(dep) = &flight.dep_info {
        let (dark, light) = departure_badge_colors(dep.status, colors);
        fused_badge(
            &painter,
            egui::pos2(badge_x, cursor),
            dep.status.label(),
            dep.gate.as_deref().unwrap_or("-"),
            dark,
            light,
            colors,
        );
    }
    cursor += 28.0;

    // Row 3: COBT and the flight-type tag
    let cobt = flight.times.cobt.as_deref().unwrap_or(TIME_NONE);
    painter.text(
        egui::pos2(rect.min.x + pad, cursor),
        egui::Align2::LEFT_TOP,
        format!("COBT {}", cobt),
        egui::FontId::monospace(13.0),
        colors.text_dim,
    );
    painter.text(
        egui::pos2(rect.max.x - pad, cursor),
        egui::Align2::RIGHT_TOP,
        flight.flight_type.label(),
        egui::FontId::proportional(13.0),
        flight_type_color(flight.flight_type, colors),
    );

    if response.hovered() {
        ui.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
    }
    if response.clicked() {
        return Some(FlightListInteraction::CardClicked {
            flight_id: flight.id.clone(),
        });
    }
    None
}

/// Draws a two-part badge `[status | value]`; returns its right edge.
fn fused_badge(
    painter: &egui::Painter,
    pos: egui::Pos2,
    label: &str,
    value: &str,
    dark: egui::Color32,
    light: egui::Color32,
    colors: &ThemeColors,
) -> f32 {
    let label_width = label.chars().count() as f32 * 13.0 + 12.0;
    let value_width = value.chars().count() as f32 * 8.0 + 14.0;
    let height = 20.0;

    let label_rect = egui::Rect::from_min_size(pos, egui::vec2(label_width, height));
    let value_rect = egui::Rect::from_min_size(
        egui::pos2(pos.x + label_width, pos.y),
        egui::vec2(value_width, height),
    );

    painter.rect_filled(label_rect, 4.0, dark);
    painter.rect_filled(value_rect, 4.0, light);
    painter.text(
        label_rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
    painter.text(
        value_rect.center(),
        egui::Align2::CENTER_CENTER,
        value,
        egui::FontId::monospace(12.0),
        colors.text,
    );

    value_rect.right()
}
