//! Theme support for the apron timeline viewer.
//!
//! Provides the color palettes used by the Gantt board, the status legend
//! and the panels, plus a small manager for switching between them. The
//! default "Light" theme matches the operations-room wall display; "Dark"
//! and "Tower Dusk" are for dimmed environments.

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Surfaces
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,
    /// Flight row card fill.
    pub card_background: Color32,

    // Foreground
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Timeline chrome
    /// The "now" line and chip.
    pub now_marker: Color32,
    /// Tint laid over the already-elapsed part of the board.
    pub past_shade: Color32,
    /// Annotation baseline strokes.
    pub baseline: Color32,

    // Status colors (legend order: overtime-complete, overtime-incomplete,
    // alert, warning) plus general accents.
    pub red: Color32,
    pub orange: Color32,
    pub yellow: Color32,
    pub green: Color32,
    pub cyan: Color32,
    pub blue: Color32,
    pub purple: Color32,
    pub gray: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new manager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Tower Dusk".to_string(), tower_dusk_theme());

        Self {
            themes,
            current_theme_name: "Light".to_string(),
        }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme.
    pub fn current_theme(&self) -> &Theme {
        // The constructor guarantees the current name resolves.
        self.themes
            .get(&self.current_theme_name)
            .unwrap_or_else(|| panic!("theme '{}' missing", self.current_theme_name))
    }

    /// Sets the current theme by name.
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.blue;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.cyan;

        visuals.error_fg_color = colors.red;
        visuals.warn_fg_color = colors.orange;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// The default daylight palette of the operations board.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Daylight operations-room palette".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(241, 245, 249),
            panel_background: Color32::from_rgb(248, 250, 252),
            extreme_background: Color32::from_rgb(255, 255, 255),
            card_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(15, 23, 42),
            text_dim: Color32::from_rgb(100, 116, 139),
            text_strong: Color32::from_rgb(2, 6, 23),

            selection: Color32::from_rgb(191, 219, 254),
            hover: Color32::from_rgb(226, 232, 240),
            border: Color32::from_rgb(203, 213, 225),

            now_marker: Color32::from_rgb(239, 68, 68),
            past_shade: Color32::from_rgba_premultiplied(100, 116, 139, 24),
            baseline: Color32::from_rgb(156, 163, 175),

            red: Color32::from_rgb(220, 38, 38),
            orange: Color32::from_rgb(234, 88, 12),
            yellow: Color32::from_rgb(234, 179, 8),
            green: Color32::from_rgb(16, 185, 129),
            cyan: Color32::from_rgb(8, 145, 178),
            blue: Color32::from_rgb(37, 99, 235),
            purple: Color32::from_rgb(147, 51, 234),
            gray: Color32::from_rgb(148, 163, 184),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dimmed palette for night shifts".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(17, 24, 39),
            panel_background: Color32::from_rgb(24, 33, 47),
            extreme_background: Color32::from_rgb(10, 15, 26),
            card_background: Color32::from_rgb(31, 41, 55),

            text: Color32::from_rgb(229, 231, 235),
            text_dim: Color32::from_rgb(148, 163, 184),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(30, 58, 138),
            hover: Color32::from_rgb(51, 65, 85),
            border: Color32::from_rgb(71, 85, 105),

            now_marker: Color32::from_rgb(248, 113, 113),
            past_shade: Color32::from_rgba_premultiplied(148, 163, 184, 18),
            baseline: Color32::from_rgb(107, 114, 128),

            red: Color32::from_rgb(239, 68, 68),
            orange: Color32::from_rgb(249, 115, 22),
            yellow: Color32::from_rgb(250, 204, 21),
            green: Color32::from_rgb(52, 211, 153),
            cyan: Color32::from_rgb(34, 211, 238),
            blue: Color32::from_rgb(96, 165, 250),
            purple: Color32::from_rgb(192, 132, 252),
            gray: Color32::from_rgb(156, 163, 175),
        },
    }
}

/// Low-glare palette tuned for the tower cab around sunset.
fn tower_dusk_theme() -> Theme {
    Theme {
        name: "Tower Dusk".to_string(),
        description: "Low-glare blue-gray palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#1f2633"),
            panel_background: hex_to_color32("#26303f"),
            extreme_background: hex_to_color32("#161c26"),
            card_background: hex_to_color32("#2d3848"),

            text: hex_to_color32("#dbe2ea"),
            text_dim: hex_to_color32("#8a99ac"),
            text_strong: hex_to_color32("#f4f7fa"),

            selection: hex_to_color32("#31486b"),
            hover: hex_to_color32("#374357"),
            border: hex_to_color32("#4a596e"),

            now_marker: hex_to_color32("#ff6b6b"),
            past_shade: Color32::from_rgba_premultiplied(138, 153, 172, 20),
            baseline: hex_to_color32("#7d8da1"),

            red: hex_to_color32("#e5484d"),
            orange: hex_to_color32("#f0883e"),
            yellow: hex_to_color32("#e3b341"),
            green: hex_to_color32("#46a758"),
            cyan: hex_to_color32("#3fb1c5"),
            blue: hex_to_color32("#539bf5"),
            purple: hex_to_color32("#b083f0"),
            gray: hex_to_color32("#768390"),
        },
    }
}

/// Converts a hex color string (like "#1f2633") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_resolve() {
        let manager = ThemeManager::new();
        assert!(manager.get_theme("Light").is_some());
        assert!(manager.get_theme("Dark").is_some());
        assert!(manager.get_theme("Tower Dusk").is_some());
        assert_eq!(manager.current_theme().name, "Light");
    }

    #[test]
    fn test_set_current_theme_rejects_unknown() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_current_theme("Dark").is_ok());
        assert_eq!(manager.current_theme().name, "Dark");
        assert!(manager.set_current_theme("Neon").is_err());
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff0000"), Color32::from_rgb(255, 0, 0));
        assert_eq!(hex_to_color32("abcdef"), Color32::from_rgb(171, 205, 239));
        assert_eq!(hex_to_color32("#zz"), Color32::from_rgb(0, 0, 0));
    }
}
