use serde::{Deserialize, Serialize};

use crate::error::{PrintError, PrintResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(160.0 / 255.0, 160.0 / 255.0, 164.0 / 255.0);
    pub const DARK_GRAY: Self = Self::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> PrintResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PrintError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke settings of a drawing context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
}

impl Pen {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub point_size: f64,
    #[serde(default)]
    pub bold: bool,
}

impl Font {
    #[must_use]
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            point_size,
            bold: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Pango-style description string, e.g. `"Sans Bold 12"`.
    #[must_use]
    pub fn description(&self) -> String {
        if self.bold {
            format!("{} Bold {}", self.family, self.point_size)
        } else {
            format!("{} {}", self.family, self.point_size)
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Sans", 10.0)
    }
}

/// Horizontal placement of text inside its rectangle; text is always
/// vertically centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Color group handed to scale drawing primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub foreground: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            text: Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Font};

    #[test]
    fn color_channels_outside_unit_range_are_rejected() {
        assert!(Color::rgb(1.2, 0.0, 0.0).validate().is_err());
        assert!(Color::rgba(0.0, 0.0, 0.0, f64::NAN).validate().is_err());
        assert!(Color::GRAY.validate().is_ok());
    }

    #[test]
    fn font_description_includes_weight() {
        assert_eq!(Font::new("Sans", 12.0).description(), "Sans 12");
        assert_eq!(Font::new("Serif", 9.5).bold().description(), "Serif Bold 9.5");
    }
}
