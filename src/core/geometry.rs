use serde::{Deserialize, Serialize};

use crate::error::{PrintError, PrintResult};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeF {
    pub width: f64,
    pub height: f64,
}

impl SizeF {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size is null when either dimension is zero (or negative, or NaN).
    #[must_use]
    pub fn is_null(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle; `right()`/`bottom()` are `x + width`/`y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn size(self) -> SizeF {
        SizeF::new(self.width, self.height)
    }

    #[must_use]
    pub fn area(self) -> f64 {
        if self.is_valid() {
            self.width * self.height
        } else {
            0.0
        }
    }

    /// Valid rectangles have finite coordinates and strictly positive extent.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !self.is_valid()
    }

    /// Shrinks width and height by the given amounts, keeping the origin.
    #[must_use]
    pub fn shrunk(self, dw: f64, dh: f64) -> Self {
        Self::new(self.x, self.y, self.width - dw, self.height - dh)
    }

    #[must_use]
    pub fn with_left(self, left: f64) -> Self {
        Self::from_edges(left, self.top(), self.right(), self.bottom())
    }

    #[must_use]
    pub fn contains_rect(self, other: RectF) -> bool {
        const EPSILON: f64 = 1e-9;
        other.left() >= self.left() - EPSILON
            && other.top() >= self.top() - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }

    /// Pixel-aligned rectangle with every component rounded.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::new(
            self.x.round(),
            self.y.round(),
            self.width.round(),
            self.height.round(),
        )
    }
}

/// Logical pixel density of a device or widget, per direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dpi {
    pub x: f64,
    pub y: f64,
}

impl Dpi {
    pub const STANDARD: Self = Self { x: 96.0, y: 96.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn validate(self) -> PrintResult<Self> {
        if !self.x.is_finite() || !self.y.is_finite() || self.x <= 0.0 || self.y <= 0.0 {
            return Err(PrintError::InvalidDensity {
                x: self.x,
                y: self.y,
            });
        }
        Ok(self)
    }
}

impl Default for Dpi {
    fn default() -> Self {
        Self::STANDARD
    }
}
