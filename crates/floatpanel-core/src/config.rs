//! Panel configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Palette;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid panel config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid panel config: {0}")]
    Invalid(String),
}

/// Sizes and typography of the floating panels, in CSS pixels.
///
/// Every field has a default, so a partial JSON object is enough to
/// override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Drag handle height of the debug panel.
    pub handle_height: f64,
    /// Header height of the floating window.
    pub header_height: f64,
    /// Diameter of the circular control buttons.
    pub button_size: f64,
    /// Gap between control buttons.
    pub button_gap: f64,
    pub border_width: f64,
    pub corner_radius: f64,
    pub font_family: String,
    pub font_size: f64,
    pub z_index: i32,
    /// Share of the viewport a maximized window covers.
    pub maximized_fraction: f64,
    #[serde(skip)]
    pub palette: Palette,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            handle_height: 20.0,
            header_height: 25.0,
            button_size: 18.0,
            button_gap: 4.0,
            border_width: 2.0,
            corner_radius: 6.0,
            font_family: "'Fira Code', monospace".to_string(),
            font_size: 18.0,
            z_index: 10000,
            maximized_fraction: 0.98,
            palette: Palette::DARK,
        }
    }
}

impl PanelConfig {
    /// Parse a JSON object, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.maximized_fraction > 0.0 && self.maximized_fraction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "maximized_fraction must be in (0, 1], got {}",
                self.maximized_fraction
            )));
        }
        let sizes = [
            ("handle_height", self.handle_height),
            ("header_height", self.header_height),
            ("button_size", self.button_size),
            ("font_size", self.font_size),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be a non-negative size")));
            }
        }
        Ok(())
    }
}
