//! Color mapping for pills, badges, and lifecycle bubbles.
//!
//! Status-based colors override the neutral pill base so that the legend
//! states (overtime-complete, overtime-incomplete, alert, warning) stand
//! out. Mapping is deterministic per theme palette.

use egui::Color32;
use rapron::model::{ArrivalStatus, DepartureStatus, EventStatus, FlightType, LifecycleKind};
use rapron::{with_alpha, ThemeColors, ThemeManager};

/// Fill, light-fill, and border colors of an event pill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillColors {
    /// Label block fill
    pub fill: Color32,
    /// Time block fill
    pub light_fill: Color32,
    pub border: Color32,
    /// Label text color on the filled block
    pub text: Color32,
}

/// Returns a reference to the current theme's color palette.
///
/// Falls back to the Light theme when the stored name no longer resolves.
pub fn theme_colors<'a>(theme_manager: &'a ThemeManager, current_theme_name: &str) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.current_theme().colors)
}

/// Colors of an event pill for the given status.
///
/// Legend statuses override the neutral base; everything else renders in
/// the muted card palette so the overrides stand out.
pub fn pill_colors(status: EventStatus, colors: &ThemeColors) -> PillColors {
    let accented = |accent: Color32| PillColors {
        fill: accent,
        light_fill: with_alpha(accent, 26),
        border: accent,
        text: Color32::WHITE,
    };

    match status {
        EventStatus::OvertimeCompleted => accented(colors.yellow),
        EventStatus::OvertimeIncomplete => accented(colors.red),
        EventStatus::Alert => accented(colors.purple),
        EventStatus::Warning => accented(colors.cyan),
        _ => PillColors {
            fill: colors.hover,
            light_fill: colors.card_background,
            border: colors.border,
            text: colors.text,
        },
    }
}

/// Legend entries shown in the header: label and swatch color.
pub fn legend_entries(colors: &ThemeColors) -> [(&'static str, Color32); 4] {
    [
        ("超时完成", colors.yellow),
        ("超时未完成", colors.red),
        ("关联告警", colors.purple),
        ("临期预警", colors.cyan),
    ]
}

/// Bubble fill and text colors of a lifecycle log entry.
pub fn lifecycle_colors(kind: LifecycleKind, colors: &ThemeColors) -> (Color32, Color32) {
    match kind {
        LifecycleKind::Warning => (with_alpha(colors.orange, 26), colors.orange),
        LifecycleKind::Urge => (with_alpha(colors.red, 26), colors.red),
        LifecycleKind::Control => (with_alpha(colors.green, 32), colors.green),
        _ => (with_alpha(colors.blue, 26), colors.blue),
    }
}

/// Badge colors for the fused arrival badge: (dark fill, light fill).
pub fn arrival_badge_colors(status: ArrivalStatus, colors: &ThemeColors) -> (Color32, Color32) {
    if status == ArrivalStatus::Delayed {
        (colors.red, with_alpha(colors.red, 26))
    } else {
        (colors.green, with_alpha(colors.green, 26))
    }
}

/// Badge colors for the fused departure badge: (dark fill, light fill).
pub fn departure_badge_colors(status: DepartureStatus, colors: &ThemeColors) -> (Color32, Color32) {
    if status == DepartureStatus::Delayed {
        (colors.red, with_alpha(colors.red, 26))
    } else {
        (colors.blue, with_alpha(colors.blue, 26))
    }
}

/// Accent color of the flight-type tag on the info card.
pub fn flight_type_color(flight_type: FlightType, colors: &ThemeColors) -> Color32 {
    match flight_type {
        FlightType::Regular => colors.blue,
        FlightType::Cargo => colors.purple,
        FlightType::Extra => colors.orange,
        FlightType::Ferry => colors.cyan,
        FlightType::Diversion => colors.red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> ThemeColors {
        ThemeManager::new().current_theme().colors.clone()
    }

    #[test]
    fn test_legend_statuses_override_base() {
        let colors = palette();
        assert_eq!(pill_colors(EventStatus::OvertimeCompleted, &colors).fill, colors.yellow);
        assert_eq!(pill_colors(EventStatus::OvertimeIncomplete, &colors).fill, colors.red);
        assert_eq!(pill_colors(EventStatus::Alert, &colors).fill, colors.purple);
        assert_eq!(pill_colors(EventStatus::Warning, &colors).fill, colors.cyan);
    }

    #[test]
    fn test_plain_statuses_share_neutral_base() {
        let colors = palette();
        let completed = pill_colors(EventStatus::Completed, &colors);
        let pending = pill_colors(EventStatus::Pending, &colors);
        assert_eq!(completed, pending);
        assert_eq!(completed.fill, colors.hover);
    }

    #[test]
    fn test_delay_turns_badges_red() {
        let colors = palette();
        assert_eq!(arrival_badge_colors(ArrivalStatus::Delayed, &colors).0, colors.red);
        assert_eq!(arrival_badge_colors(ArrivalStatus::Arrived, &colors).0, colors.green);
        assert_eq!(departure_badge_colors(DepartureStatus::Delayed, &colors).0, colors.red);
        assert_eq!(departure_badge_colors(DepartureStatus::Boarding, &colors).0, colors.blue);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let manager = ThemeManager::new();
        let colors = theme_colors(&manager, "definitely-not-a-theme");
        assert_eq!(colors.text, manager.current_theme().colors.text);
    }
}
