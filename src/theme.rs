//! Theme support for the yearline graph.
//!
//! Provides color palettes covering every element the graph draws, a set of
//! built-in themes, and a centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use yearline::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula curve: {:?}", dracula.colors.curve);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering all graph elements
#[derive(Debug, Clone)]
pub struct GraphColors {
    /// Graph background fill
    pub background: Color32,
    /// Base stroke of the growth curve
    pub curve: Color32,
    /// Stroke of the curve span between the init and target markers
    pub strategy_segment: Color32,

    // Marker colors by role
    pub plain_marker: Color32,
    pub boundary_marker: Color32,
    pub init_marker: Color32,
    pub target_marker: Color32,

    /// Dashed vertical guide at the target year
    pub target_guide: Color32,
    /// Dashed vertical guide and badge at the current year
    pub current_guide: Color32,

    // Text and tooltip
    pub label_text: Color32,
    pub tooltip_background: Color32,
    pub tooltip_text: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct GraphTheme {
    pub name: String,
    pub description: String,
    pub colors: GraphColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, GraphTheme>,
    current_theme_name: String,
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
            current_theme_name: "Dark".to_string(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&GraphTheme> {
        self.themes.get(name)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &GraphTheme {
        // Built-in default always present
        self.themes
            .get(&self.current_theme_name)
            .unwrap_or_else(|| &self.themes["Dark"])
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme
fn light_theme() -> GraphTheme {
    GraphTheme {
        name: "Light".to_string(),
        description: "Light palette for bright host pages".to_string(),
        colors: GraphColors {
            background: Color32::from_rgb(250, 250, 250),
            curve: Color32::from_rgb(170, 175, 185),
            strategy_segment: Color32::from_rgb(40, 100, 200),

            plain_marker: Color32::from_rgb(150, 155, 165),
            boundary_marker: Color32::from_rgb(90, 95, 105),
            init_marker: Color32::from_rgb(230, 120, 20),
            target_marker: Color32::from_rgb(40, 160, 40),

            target_guide: Color32::from_rgb(40, 160, 40),
            current_guide: Color32::from_rgb(180, 140, 0),

            label_text: Color32::from_rgb(60, 60, 60),
            tooltip_background: Color32::from_rgb(40, 40, 40),
            tooltip_text: Color32::from_rgb(255, 255, 255),
        },
    }
}

/// Creates the Dark theme (default)
fn dark_theme() -> GraphTheme {
    GraphTheme {
        name: "Dark".to_string(),
        description: "Default dark palette".to_string(),
        colors: GraphColors {
            background: Color32::from_rgb(24, 26, 31),
            curve: Color32::from_rgb(90, 96, 110),
            strategy_segment: Color32::from_rgb(52, 152, 219),

            plain_marker: Color32::from_rgb(120, 126, 140),
            boundary_marker: Color32::from_rgb(200, 205, 215),
            init_marker: Color32::from_rgb(243, 156, 18),
            target_marker: Color32::from_rgb(46, 204, 113),

            target_guide: Color32::from_rgb(46, 204, 113),
            current_guide: Color32::from_rgb(241, 196, 15),

            label_text: Color32::from_rgb(220, 222, 228),
            tooltip_background: Color32::from_rgb(16, 16, 16),
            tooltip_text: Color32::from_rgb(255, 255, 255),
        },
    }
}

/// Creates the Dracula theme
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> GraphTheme {
    GraphTheme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: GraphColors {
            background: hex_to_color32("#282a36"),
            curve: hex_to_color32("#6272a4"),
            strategy_segment: hex_to_color32("#bd93f9"),

            plain_marker: hex_to_color32("#6272a4"),
            boundary_marker: hex_to_color32("#f8f8f2"),
            init_marker: hex_to_color32("#ffb86c"),
            target_marker: hex_to_color32("#50fa7b"),

            target_guide: hex_to_color32("#50fa7b"),
            current_guide: hex_to_color32("#f1fa8c"),

            label_text: hex_to_color32("#f8f8f2"),
            tooltip_background: hex_to_color32("#21222c"),
            tooltip_text: hex_to_color32("#f8f8f2"),
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

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let c = hex_to_color32("#50fa7b");
        assert_eq!((c.r(), c.g(), c.b()), (0x50, 0xfa, 0x7b));
        // Malformed input falls back to black rather than panicking
        assert_eq!(hex_to_color32("oops"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_manager_theme_switching() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.current_theme().name, "Dark");
        assert!(manager.set_current_theme("Dracula").is_ok());
        assert_eq!(manager.current_theme().name, "Dracula");
        assert!(manager.set_current_theme("Solarized").is_err());
        assert_eq!(manager.current_theme().name, "Dracula");
    }

    #[test]
    fn test_list_themes_sorted() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
    }
}
