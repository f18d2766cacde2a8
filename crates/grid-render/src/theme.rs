//! Colors and spacing used by the grid renderer.

use serde::Deserialize;

/// Visual constants for the grid canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridTheme {
    /// Distance between grid lines in pixels.
    pub grid_step: u32,
    pub grid_color: String,
    pub line_width: f64,
    /// Outline of committed objects.
    pub object_outline: String,
    /// Outline of the in-progress drag rectangle.
    pub preview_outline: String,
    /// Fill opacity of the in-progress drag rectangle.
    pub preview_alpha: f64,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            grid_step: 10,
            grid_color: "#333".to_string(),
            line_width: 1.0,
            object_outline: "#000".to_string(),
            preview_outline: "#00d1ff".to_string(),
            preview_alpha: 0.5,
        }
    }
}
