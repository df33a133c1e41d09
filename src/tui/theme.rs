use ratatui::style::Color;

use crate::model::config::UiConfig;
use crate::model::task::Category;

/// Parsed color theme for the TUI. One palette per display mode; the
/// category colors are shared by both modes unless overridden.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub red: Color,
    pub selection_bg: Color,
    /// Per-category label colors
    pub work: Color,
    pub personal: Color,
    pub urgent: Color,
    pub other: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x16, 0x16, 0x20),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x64, 0x6C, 0xFF),
            dim: Color::Rgb(0x6A, 0x6A, 0x7A),
            green: Color::Rgb(0x22, 0xC5, 0x5E),
            red: Color::Rgb(0xEF, 0x44, 0x44),
            selection_bg: Color::Rgb(0x2A, 0x2A, 0x40),
            work: Color::Rgb(0x64, 0x6C, 0xFF),
            personal: Color::Rgb(0x22, 0xC5, 0x5E),
            urgent: Color::Rgb(0xEF, 0x44, 0x44),
            other: Color::Rgb(0xA8, 0x55, 0xF7),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x2A, 0x2A, 0x33),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            highlight: Color::Rgb(0x53, 0x5B, 0xF1),
            dim: Color::Rgb(0x9A, 0x9A, 0xA6),
            green: Color::Rgb(0x16, 0xA3, 0x4A),
            red: Color::Rgb(0xDC, 0x26, 0x26),
            selection_bg: Color::Rgb(0xE8, 0xE8, 0xF6),
            work: Color::Rgb(0x64, 0x6C, 0xFF),
            personal: Color::Rgb(0x22, 0xC5, 0x5E),
            urgent: Color::Rgb(0xEF, 0x44, 0x44),
            other: Color::Rgb(0xA8, 0x55, 0xF7),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark { Theme::dark() } else { Theme::light() }
    }

    /// Create a theme for the given mode from UI config, falling back to the
    /// built-in palette.
    pub fn from_config(ui: &UiConfig, dark: bool) -> Self {
        let mut theme = Theme::for_mode(dark);

        // Named slot overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "green" => theme.green = color,
                    "red" => theme.red = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        // Category overrides from [ui.category_colors]
        for (id, value) in &ui.category_colors {
            if let (Some(category), Some(color)) = (Category::from_id(id), parse_hex_color(value)) {
                match category {
                    Category::Work => theme.work = color,
                    Category::Personal => theme.personal = color,
                    Category::Urgent => theme.urgent = color,
                    Category::Other => theme.other = color,
                }
            }
        }

        theme
    }

    /// The label color for a category.
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Work => self.work,
            Category::Personal => self.personal,
            Category::Urgent => self.urgent,
            Category::Other => self.other,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
