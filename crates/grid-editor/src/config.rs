//! Editor configuration.
//!
//! Every field has a default, so hosts only pass the keys they override:
//!
//! ```json
//! { "placeholder_name": "Item", "theme": { "grid_step": 20 } }
//! ```

use crate::tools::PLACEHOLDER_NAME;
use grid_core::document::LAYOUT_FILE_NAME;
use grid_render::GridTheme;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Name for objects drawn while the name field is empty.
    pub placeholder_name: String,
    /// Initial value of the color input.
    pub default_color: String,
    /// File name offered when exporting.
    pub export_file_name: String,
    pub theme: GridTheme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder_name: PLACEHOLDER_NAME.to_string(),
            default_color: "#000000".to_string(),
            export_file_name: LAYOUT_FILE_NAME.to_string(),
            theme: GridTheme::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            EditorConfig::from_json(r#"{"placeholder_name":"Item","theme":{"grid_step":20}}"#)
                .unwrap();
        assert_eq!(config.placeholder_name, "Item");
        assert_eq!(config.export_file_name, "layout.json");
        assert_eq!(config.theme.grid_step, 20);
        assert_eq!(config.theme.preview_outline, "#00d1ff");
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(EditorConfig::from_json(r#"{"theme":{"grid_step":"wide"}}"#).is_err());
    }
}
