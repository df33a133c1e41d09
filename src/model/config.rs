use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the data directory. Everything is
/// optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex overrides for named theme slots under [ui.colors]
    /// (background, text, text_bright, highlight, dim, green, red,
    /// selection_bg).
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Hex overrides per category identifier under [ui.category_colors].
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.ui.colors.is_empty());
        assert!(config.ui.category_colors.is_empty());
    }

    #[test]
    fn parses_color_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
[ui.colors]
background = "#000000"

[ui.category_colors]
work = "#112233"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
        assert_eq!(config.ui.category_colors.get("work").unwrap(), "#112233");
    }
}
