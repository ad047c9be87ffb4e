//! Capsule detail modal UI rendering
//!
//! The centered modal for one ground-handling event: flight numbers, the
//! minute deviation, the lifecycle log rendered as a chat stream (system
//! alerts centered, control directives right, task events left), a row of
//! quick commands, and the control input.

use eframe::egui;
use egui::{Align2, RichText, ScrollArea};
use once_cell::sync::Lazy;
use rapron::model::{LifecycleKind, TaskLifecycleEvent};
use rapron::{ThemeColors, TimelineEvent};

use crate::app::AppState;
use crate::domain::time_axis::minute_diff;
use crate::presentation::color_mapping::lifecycle_colors;

/// Canned control directives offered above the input.
static SHORTCUTS: Lazy<[&str; 4]> = Lazy::new(|| {
    [
        "请及时到位",
        "注意保障时间，特殊情况请及时偏离上报",
        "设备故障，请协调备用设备",
        "收到请回复",
    ]
});

/// Result of user interaction with the capsule modal
pub enum CapsuleModalInteraction {
    /// Modal dismissed
    Close,
    /// Send button clicked; the control draft should be submitted
    SubmitControl,
}

/// Renders the capsule modal for the selected event, if open.
///
/// # Arguments
/// * `ctx` - The egui context (the modal is a floating window)
/// * `state` - Mutable reference to application state
/// * `is_dispatching` - Whether a control submission is in flight
/// * `colors` - Color palette for the current theme
pub fn render_capsule_modal(
    ctx: &egui::Context,
    state: &mut AppState,
    is_dispatching: bool,
    colors: &ThemeColors,
) -> Option<CapsuleModalInteraction> {
    if !state.selection.modal_open() {
        return None;
    }
    let Some((flight_id, event_id)) = state
        .selection
        .selected_event()
        .map(|(f, e)| (f.to_string(), e.to_string()))
    else {
        return None;
    };

    let Some((flight_no, codeshare, event)) = state.schedule.schedule().and_then(|s| {
        let flight = s.flight(&flight_id)?;
        let event = flight.event(&event_id)?.clone();
        Some((
            flight.primary_flight_no().to_string(),
            flight.codeshare.clone(),
            event,
        ))
    }) else {
        return Some(CapsuleModalInteraction::Close);
    };

    let mut interaction = None;

    egui::Window::new("任务详情")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .fixed_size([560.0, 520.0])
        .show(ctx, |ui| {
            render_modal_header(ui, &flight_no, codeshare.as_deref(), &event, colors);
            ui.separator();

            let log_height = ui.available_height() - 110.0;
            ScrollArea::vertical()
                .id_salt("lifecycle_log")
                .max_height(log_height)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    render_lifecycle_stream(ui, &event, colors);
                });

            ui.separator();

            // Quick commands
            ui.horizontal_wrapped(|ui| {
                for shortcut in SHORTCUTS.iter() {
                    if ui.small_button(*shortcut).clicked() {
                        state.draft.apply_shortcut(shortcut);
                    }
                }
            });

            // Control input and send
            ui.horizontal(|ui| {
                egui::TextEdit::multiline(state.draft.control_text_mut())
                    .desired_rows(2)
                    .desired_width(ui.available_width() - 80.0)
                    .hint_text("输入管控指令...")
                    .show(ui);

                let can_send = !is_dispatching && !state.draft.control_text().trim().is_empty();
                let send_label = if is_dispatching { "发送中…" } else { "发送" };
                if ui.add_enabled(can_send, egui::Button::new(send_label)).clicked() {
                    interaction = Some(CapsuleModalInteraction::SubmitControl);
                }

                if ui.button("关闭").clicked() {
                    interaction = Some(CapsuleModalInteraction::Close);
                }
            });
        });

    interaction
}

/// Flight numbers, event label, minute deviation, status text.
fn render_modal_header(
    ui: &mut egui::Ui,
    flight_no: &str,
    codeshare: Option<&str>,
    event: &TimelineEvent,
    colors: &ThemeColors,
) {
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 90.0);
            ui.label(RichText::new(flight_no).color(colors.green).size(22.0).strong());
            if let Some(codeshare) = codeshare {
                ui.label(RichText::new("/").color(colors.text_dim).size(18.0));
                ui.label(RichText::new(codeshare).color(colors.blue).size(22.0).strong());
            }
        });

        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 90.0);
            ui.label(RichText::new(&event.label).strong());

            let scheduled = event.time_scheduled.as_deref().unwrap_or("");
            if let Some(diff) = minute_diff(&event.time_actual, scheduled) {
                let color = if diff > 0 { colors.red } else { colors.green };
                let sign = if diff > 0 { "+" } else { "" };
                ui.separator();
                ui.label(RichText::new(format!("{}{} min", sign, diff)).color(color).monospace());
            }

            ui.separator();
            ui.label(RichText::new(event.status.label()).color(colors.text_dim));

            if let Some(task_status) = event.task_status {
                ui.separator();
                ui.label(RichText::new(task_status.label()).color(colors.blue));
            }
        });

        if event.department.is_some() || !event.personnel.is_empty() {
            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() / 2.0 - 90.0);
                if let Some(department) = &event.department {
                    ui.label(RichText::new(department).color(colors.text_dim).size(12.0));
                }
                if !event.personnel.is_empty() {
                    ui.label(
                        RichText::new(event.personnel.join("、"))
                            .color(colors.text_dim)
                            .size(12.0),
                    );
                }
            });
        }
    });
}

/// The lifecycle log as a chat stream, sorted oldest-first for reading.
fn render_lifecycle_stream(ui: &mut egui::Ui, event: &TimelineEvent, colors: &ThemeColors) {
    let mut entries: Vec<&TaskLifecycleEvent> = event.lifecycle.iter().collect();
    entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    if entries.is_empty() {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("暂无任务记录").color(colors.text_dim).italics());
        });
        return;
    }

    for entry in entries {
        let (fill, text_color) = lifecycle_colors(entry.kind, colors);
        let bubble = |ui: &mut egui::Ui| {
            egui::Frame::default()
                .fill(fill)
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(10, 6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(entry.kind.label()).color(text_color).strong());
                        ui.label(RichText::new(&entry.description).color(text_color));
                    });
                });
        };

        if entry.kind.is_system_alert() {
            // System alerts sit centered with the stamp above.
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&entry.timestamp).color(colors.text_dim).size(10.0));
                bubble(ui);
            });
        } else if entry.kind == LifecycleKind::Control {
            // Control directives come from this console: right-aligned.
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                bubble(ui);
                ui.label(RichText::new(&entry.timestamp).color(colors.text_dim).size(10.0));
            });
        } else {
            // Field-side task events: left-aligned.
            ui.horizontal(|ui| {
                bubble(ui);
                ui.label(RichText::new(&entry.timestamp).color(colors.text_dim).size(10.0));
            });
        }
        ui.add_space(6.0);
    }
}
