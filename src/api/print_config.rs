use serde::{Deserialize, Serialize};

use crate::error::{PrintError, PrintResult};
use crate::render::Color;

/// Printer configuration.
///
/// Serializable so host applications can persist export settings alongside
/// their plot setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Outline color of the canvas frame under `PRINT_FRAME_WITH_SCALES`.
    #[serde(default = "default_frame_color")]
    pub frame_color: Color,
    #[serde(default = "default_frame_pen_width")]
    pub frame_pen_width: f64,
    /// Caps portrait surfaces to a square-or-wider target in the surface
    /// entry point.
    #[serde(default = "default_true")]
    pub cap_portrait_aspect: bool,
    /// Clips each legend item to its grid cell.
    #[serde(default = "default_true")]
    pub legend_clip_items: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            frame_color: default_frame_color(),
            frame_pen_width: default_frame_pen_width(),
            cap_portrait_aspect: true,
            legend_clip_items: true,
        }
    }
}

impl PrintConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_frame_color(mut self, color: Color) -> Self {
        self.frame_color = color;
        self
    }

    #[must_use]
    pub fn with_frame_pen_width(mut self, width: f64) -> Self {
        self.frame_pen_width = width;
        self
    }

    #[must_use]
    pub fn with_cap_portrait_aspect(mut self, enabled: bool) -> Self {
        self.cap_portrait_aspect = enabled;
        self
    }

    #[must_use]
    pub fn with_legend_clip_items(mut self, enabled: bool) -> Self {
        self.legend_clip_items = enabled;
        self
    }

    pub fn validate(self) -> PrintResult<Self> {
        self.frame_color.validate()?;
        if !self.frame_pen_width.is_finite() || self.frame_pen_width <= 0.0 {
            return Err(PrintError::InvalidData(
                "frame pen width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> PrintResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PrintError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> PrintResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| PrintError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_frame_color() -> Color {
    Color::BLACK
}

fn default_frame_pen_width() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}
