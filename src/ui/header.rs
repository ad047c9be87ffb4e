//! Header panel UI rendering
//!
//! Handles the top bar with the status legend, flight search, date field,
//! tick-scale selector, snapshot controls, and theme selector.

use eframe::egui;
use egui::{Color32, RichText};
use std::path::PathBuf;

use crate::app::AppState;
use crate::domain::time_axis::TimeScale;
use crate::presentation::color_mapping::{legend_entries, theme_colors};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a snapshot file to open
    OpenFileRequested(PathBuf),
    /// User clicked the demo schedule button
    OpenDemoRequested,
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let colors = theme_colors(state.theme.theme_manager(), state.theme.current_theme_name()).clone();

    ui.horizontal(|ui| {
        if ui.button("📂 打开航班计划").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Schedule Snapshots", &["json", "br"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🛫 演示数据").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoRequested);
        }

        ui.separator();

        // Status legend
        for (label, color) in legend_entries(&colors) {
            legend_badge(ui, label, color);
        }

        ui.separator();

        // Search box
        ui.label("航班号:");
        egui::TextEdit::singleline(state.filter.query_mut())
            .desired_width(120.0)
            .hint_text("搜索航班号...")
            .show(ui);
        if !state.filter.query().is_empty() && ui.small_button("✖").clicked() {
            state.filter.clear_query();
        }

        // Date field (single operational day; informational)
        ui.label("日期:");
        egui::TextEdit::singleline(state.filter.selected_date_mut())
            .desired_width(90.0)
            .show(ui);

        // Tick scale selector
        ui.label("比例尺:");
        let mut selected = state.axis.scale();
        egui::ComboBox::from_id_salt("time_scale_selector")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for scale in TimeScale::ALL {
                    ui.selectable_value(&mut selected, scale, scale.label());
                }
            });
        state.axis.set_scale(selected);

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("主题:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}

/// One pill-shaped legend entry with its status color.
fn legend_badge(ui: &mut egui::Ui, label: &str, color: egui::Color32) {
    let text = RichText::new(format!("● {}", label)).color(color).size(12.0);
    ui.label(text);
}
