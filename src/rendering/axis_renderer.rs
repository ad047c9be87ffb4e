//! Time axis header rendering.
//!
//! Draws the tick labels at their fixed 80px pitch, a light gridline at each
//! tick, and the red "now" chip riding on the marker position.

use eframe::egui;
use rapron::ThemeColors;

use crate::domain::ticks::{Tick, TICK_WIDTH_PX};

/// Height of the sticky axis header.
pub const HEADER_HEIGHT: f32 = 40.0;

/// Renders the tick header into `rect`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `rect` - Allocated header strip; `rect.min.x` is pixel zero of the axis
/// * `ticks` - Tick labels and offsets from the tick generator
/// * `now_px` - Pixel position of the "now" marker
/// * `now_label` - `HH:MM` label shown in the chip
/// * `colors` - Color palette for the current theme
pub fn render_tick_header(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    ticks: &[Tick],
    now_px: f32,
    now_label: &str,
    colors: &ThemeColors,
) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, colors.extreme_background);

    for tick in ticks {
        let x = rect.min.x + tick.x;

        // Cell separator
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            egui::Stroke::new(1.0, colors.border.gamma_multiply(0.5)),
        );

        painter.text(
            egui::pos2(x + TICK_WIDTH_PX / 2.0, rect.center().y),
            egui::Align2::CENTER_CENTER,
            &tick.label,
            egui::FontId::monospace(13.0),
            colors.text_strong,
        );
    }

    // Bottom rule under the header
    painter.line_segment(
        [
            egui::pos2(rect.left(), rect.bottom()),
            egui::pos2(rect.right(), rect.bottom()),
        ],
        egui::Stroke::new(1.0, colors.border),
    );

    render_now_chip(&painter, rect, now_px, now_label, colors);
}

/// Draws the red chip with the current time, centered on the marker.
fn render_now_chip(
    painter: &egui::Painter,
    rect: egui::Rect,
    now_px: f32,
    now_label: &str,
    colors: &ThemeColors,
) {
    if now_label.is_empty() {
        return;
    }

    let center = egui::pos2(rect.min.x + now_px, rect.center().y);
    let chip = egui::Rect::from_center_size(center, egui::vec2(52.0, 22.0));

    painter.rect_filled(chip, 4.0, colors.now_marker);
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        now_label,
        egui::FontId::monospace(13.0),
        egui::Color32::WHITE,
    );
}
