//! Theme support for the scheduler GUI
//!
//! Built-in colour schemes (Light, Dark, Dracula) and a small manager that
//! looks them up by name and applies them to egui visuals. Each palette also
//! carries the three cell colours the week grid is painted with.
//!
//! # Examples
//!
//! ```
//! use meetslot::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Selected cells: {:?}", dark.colors.cell_selected);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when no preference is stored
pub const DEFAULT_THEME_NAME: &str = "Dark";

/// Complete color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub accent: Color32,

    // Week grid cells
    pub cell_selected: Color32,
    pub cell_business: Color32,
    pub cell_off_hours: Color32,
    pub cell_text: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());

        Self {
            themes,
            fallback: dark_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Light theme; grid colours match a classic white calendar
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with a white calendar grid".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),
            accent: Color32::from_rgb(40, 100, 200),

            cell_selected: hex_to_color32("#FFDAB9"),
            cell_business: Color32::WHITE,
            cell_off_hours: hex_to_color32("#C7C7C7"),
            cell_text: Color32::BLACK,
        },
    }
}

/// Dark theme; the default
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Black background with a light calendar grid".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(0, 0, 0),
            panel_background: Color32::from_rgb(16, 16, 16),
            extreme_background: Color32::from_rgb(0, 0, 0),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),
            accent: Color32::from_rgb(52, 152, 219),

            cell_selected: hex_to_color32("#FFDAB9"),
            cell_business: Color32::WHITE,
            cell_off_hours: hex_to_color32("#C7C7C7"),
            cell_text: Color32::BLACK,
        },
    }
}

/// Creates the Dracula theme
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            // Background: #282a36
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            // Foreground: #f8f8f2, Comment: #6272a4
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            // Current Line: #44475a
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),
            accent: hex_to_color32("#bd93f9"),

            cell_selected: hex_to_color32("#ffb86c"),   // Orange
            cell_business: hex_to_color32("#f8f8f2"),   // Foreground
            cell_off_hours: hex_to_color32("#6272a4"),  // Comment
            cell_text: hex_to_color32("#282a36"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#FFDAB9"), Color32::from_rgb(255, 218, 185));
        assert_eq!(hex_to_color32("bogus"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_theme_lookup_falls_back_to_default() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
        assert_eq!(manager.theme_or_default("Solarized").name, DEFAULT_THEME_NAME);
        assert_eq!(manager.theme_or_default("Light").name, "Light");
    }
}
