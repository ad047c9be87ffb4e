//! Flight detail panel UI rendering
//!
//! The right-hand side panel for the selected flight: numbers and route,
//! the stand/gate/aircraft grid, editable remarks, the milestone times
//! table, and one status card per ground-handling event.

use eframe::egui;
use egui::{RichText, ScrollArea};
use rapron::model::EventStatus;
use rapron::{Flight, ThemeColors, TimelineEvent};

use crate::app::AppState;
use crate::domain::time_axis::minute_diff;
use crate::presentation::color_mapping::pill_colors;
use crate::utils::format_time_with_day;

/// Result of user interaction with the detail panel
pub enum FlightPanelInteraction {
    /// Close button clicked
    Close,
    /// Remarks editor confirmed; the draft should be written through
    SaveRemarks,
}

/// Renders the detail panel for the selected flight.
pub fn render_flight_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    colors: &ThemeColors,
) -> Option<FlightPanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("航班详情");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").clicked() {
                interaction = Some(FlightPanelInteraction::Close);
            }
        });
    });
    ui.separator();

    let Some(flight_id) = state.selection.selected_flight_id().map(str::to_string) else {
        ui.label("选择航班查看详情");
        return interaction;
    };

    let day = state
        .schedule
        .schedule()
        .map(|s| s.metadata.day_of_month().to_string())
        .unwrap_or_default();
    let now_label = state.clock.time_label().to_string();

    let Some(flight) = state
        .schedule
        .schedule()
        .and_then(|s| s.flight(&flight_id))
        .cloned()
    else {
        ui.label("选择航班查看详情");
        return interaction;
    };

    ScrollArea::vertical()
        .id_salt("flight_detail_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            render_flight_header(ui, &flight, colors);
            ui.add_space(8.0);
            render_aircraft_grid(ui, &flight, colors);
            ui.add_space(8.0);

            if let Some(remarks_interaction) = render_remarks(ui, state, &flight, colors) {
                interaction = Some(remarks_interaction);
            }

            ui.add_space(8.0);
            render_times_table(ui, &flight, &day, colors);
            ui.add_space(8.0);
            render_event_cards(ui, &flight, &day, &now_label, colors);
        });

    interaction
}

/// Flight numbers and route, centered like the wall-display card.
fn render_flight_header(ui: &mut egui::Ui, flight: &Flight, colors: &ThemeColors) {
    ui.vertical_centered(|ui| {
        ui.horizontal_top(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 80.0);
            ui.label(
                RichText::new(flight.primary_flight_no())
                    .color(colors.green)
                    .size(24.0)
                    .strong(),
            );
            if let Some(codeshare) = &flight.codeshare {
                ui.label(RichText::new("/").color(colors.text_dim).size(20.0));
                ui.label(RichText::new(codeshare).color(colors.blue).size(24.0).strong());
            }
        });
        if let Some(route) = &flight.route {
            ui.label(RichText::new(route).color(colors.text_dim).size(14.0));
        }
    });
}

/// The five-column stand/gate/aircraft grid.
fn render_aircraft_grid(ui: &mut egui::Ui, flight: &Flight, colors: &ThemeColors) {
    let stand = flight
        .arr_info
        .as_ref()
        .and_then(|a| a.stand.as_deref())
        .or(flight.stand.as_deref())
        .unwrap_or("-");
    let gate = flight
        .dep_info
        .as_ref()
        .and_then(|d| d.gate.as_deref())
        .or(flight.gate.as_deref())
        .unwrap_or("-");

    let items = [
        ("机位", stand),
        ("登机口", gate),
        ("机号", flight.registration.as_deref().unwrap_or("-")),
        ("机型", flight.aircraft_type.as_deref().unwrap_or("-")),
        ("机类", flight.aircraft_category.as_deref().unwrap_or("-")),
    ];

    ui.columns(items.len(), |columns| {
        for (column, (label, value)) in columns.iter_mut().zip(items) {
            column.vertical_centered(|ui| {
                ui.label(RichText::new(label).color(colors.text_dim).size(11.0));
                ui.label(RichText::new(value).strong());
            });
        }
    });
}

/// Remarks block: view mode with an edit link, or the editor with
/// save/cancel. The save path is the panel's only snapshot mutation.
fn render_remarks(
    ui: &mut egui::Ui,
    state: &mut AppState,
    flight: &Flight,
    colors: &ThemeColors,
) -> Option<FlightPanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("航班备注").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if !state.draft.editing_remarks() && ui.small_button("编辑").clicked() {
                state
                    .draft
                    .begin_remarks_edit(flight.remarks.as_deref().unwrap_or(""));
            }
        });
    });

    if state.draft.editing_remarks() {
        egui::TextEdit::multiline(state.draft.remarks_text_mut())
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .hint_text("请输入航班备注信息...")
            .show(ui);
        ui.horizontal(|ui| {
            if ui.button("保存").clicked() {
                interaction = Some(FlightPanelInteraction::SaveRemarks);
            }
            if ui.button("取消").clicked() {
                state.draft.cancel_remarks_edit();
            }
        });
    } else {
        match flight.remarks.as_deref() {
            Some(remarks) => {
                ui.label(remarks);
            }
            None => {
                ui.label(RichText::new("暂无备注信息").color(colors.text_dim).italics());
            }
        }
    }

    interaction
}

/// Milestone times, `HH:MM(DD)` formatted.
fn render_times_table(ui: &mut egui::Ui, flight: &Flight, day: &str, colors: &ThemeColors) {
    let time = |t: &Option<String>| format_time_with_day(t.as_deref(), day);

    egui::Grid::new("times_table")
        .num_columns(3)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label(RichText::new("前站起飞").strong());
            ui.monospace(time(&flight.times.ptd));
            ui.label("");
            ui.end_row();

            ui.label(RichText::new("计划时间").strong());
            ui.monospace(RichText::new(time(&flight.times.sta)).color(colors.green));
            ui.monospace(RichText::new(time(&flight.times.std)).color(colors.blue));
            ui.end_row();

            ui.label(RichText::new("预计时间").strong());
            ui.monospace(RichText::new(time(&flight.times.eta)).color(colors.green));
            ui.monospace(RichText::new(time(&flight.times.etd)).color(colors.blue));
            ui.end_row();

            ui.label(RichText::new("实际时间").strong());
            ui.monospace(RichText::new(time(&flight.times.ata)).color(colors.green));
            ui.monospace(RichText::new(time(&flight.times.atd)).color(colors.blue));
            ui.end_row();

            ui.label(RichText::new("COBT / CTOT / ATOT").strong());
            ui.monospace(format!(
                "{} / {}",
                time(&flight.times.cobt),
                time(&flight.times.ctot)
            ));
            ui.monospace(time(&flight.times.atot));
            ui.end_row();
        });
}

/// One status card per event: dot, label, minute delta, status badge.
fn render_event_cards(
    ui: &mut egui::Ui,
    flight: &Flight,
    day: &str,
    now_label: &str,
    colors: &ThemeColors,
) {
    for event in &flight.events {
        let pill = pill_colors(event.status, colors);
        let delta = event_delta_minutes(event, now_label);

        egui::Frame::default()
            .fill(colors.card_background)
            .stroke(egui::Stroke::new(1.0, pill.border))
            .corner_radius(6.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").color(pill.fill));
                    ui.label(RichText::new(&event.label).strong());
                    if let Some(delta) = delta {
                        ui.label(
                            RichText::new(format!("{}", delta))
                                .color(pill.border)
                                .monospace(),
                        );
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if show_status_badge(event.status) {
                            ui.label(RichText::new(event.status.label()).color(pill.border).size(11.0));
                        }
                    });
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("计划").color(colors.text_dim).size(11.0));
                    ui.monospace(format_time_with_day(event.time_scheduled.as_deref(), day));
                    ui.label(RichText::new("实际").color(colors.text_dim).size(11.0));
                    ui.monospace(format_time_with_day(Some(&event.time_actual), day));
                });
            });
        ui.add_space(4.0);
    }
}

/// Absolute deviation from plan in minutes; running events measure against
/// the live clock.
fn event_delta_minutes(event: &TimelineEvent, now_label: &str) -> Option<i32> {
    let scheduled = event.time_scheduled.as_deref()?;
    let against = if rapron::model::is_no_data(&event.time_actual) {
        now_label
    } else {
        &event.time_actual
    };
    minute_diff(against, scheduled).map(i32::abs)
}

/// Only the legend statuses carry a badge on the card.
fn show_status_badge(status: EventStatus) -> bool {
    matches!(
        status,
        EventStatus::OvertimeCompleted
            | EventStatus::OvertimeIncomplete
            | EventStatus::Alert
            | EventStatus::Warning
    )
}
