//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying memory usage, snapshot source,
//! flight/event totals, and the filtered count when a search is active.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::domain::filtering::flight_matches;
use crate::utils::{format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `is_dispatching` - Whether a control submission is in flight
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, is_dispatching: bool) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if let Some(schedule) = state.schedule.schedule() {
            ui.label(RichText::new("|").strong());

            let source = state
                .schedule
                .file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "演示数据".to_string());

            ui.label(RichText::new(format!(
                "{} | {} {} | Flights: {} | Events: {}",
                source,
                schedule.metadata.airport,
                schedule.metadata.date,
                schedule.flights.len(),
                schedule.total_events(),
            )).strong());

            if !state.filter.query().is_empty() {
                let matched = schedule
                    .flights
                    .iter()
                    .filter(|f| flight_matches(f, state.filter.query()))
                    .count();
                ui.label(RichText::new("|").strong());
                ui.label(
                    RichText::new(format!("Filtered: {} / {} flights", matched, schedule.flights.len()))
                        .strong()
                        .color(egui::Color32::YELLOW),
                );
            }
        } else {
            ui.label(RichText::new("| No schedule loaded").strong());
        }

        if is_dispatching {
            ui.label(RichText::new("|").strong());
            ui.spinner();
            ui.label("指令下发中…");
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if !state.clock.time_label().is_empty() {
                ui.label(RichText::new(state.clock.time_label()).monospace().strong());
            }
        });
    });
}
