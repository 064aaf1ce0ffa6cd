use serde::{Deserialize, Serialize};

use crate::core::{AxisId, Dpi, Orientation, PointF, RectF};
use crate::error::PrintResult;

/// Anisotropic 2D scale between a widget's logical space and a device.
///
/// Forward mapping multiplies by `(sx, sy)`; the inverse divides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTransform {
    sx: f64,
    sy: f64,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CoordinateTransform {
    pub const IDENTITY: Self = Self { sx: 1.0, sy: 1.0 };

    /// Derives `sx = device.x / widget.x` and `sy = device.y / widget.y`.
    pub fn from_densities(device: Dpi, widget: Dpi) -> PrintResult<Self> {
        let device = device.validate()?;
        let widget = widget.validate()?;
        Ok(Self {
            sx: device.x / widget.x,
            sy: device.y / widget.y,
        })
    }

    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self { sx, sy }
    }

    #[must_use]
    pub fn sx(self) -> f64 {
        self.sx
    }

    #[must_use]
    pub fn sy(self) -> f64 {
        self.sy
    }

    /// Factor applied to coordinates running along the given orientation.
    #[must_use]
    pub fn factor(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.sx,
            Orientation::Vertical => self.sy,
        }
    }

    #[must_use]
    pub fn factor_for_axis(self, axis: AxisId) -> f64 {
        self.factor(axis.orientation())
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.sx == 1.0 && self.sy == 1.0
    }

    #[must_use]
    pub fn is_scaling(self) -> bool {
        !self.is_identity()
    }

    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            sx: 1.0 / self.sx,
            sy: 1.0 / self.sy,
        }
    }

    #[must_use]
    pub fn map_point(self, point: PointF) -> PointF {
        PointF::new(point.x * self.sx, point.y * self.sy)
    }

    #[must_use]
    pub fn map_rect(self, rect: RectF) -> RectF {
        RectF::new(
            rect.x * self.sx,
            rect.y * self.sy,
            rect.width * self.sx,
            rect.height * self.sy,
        )
    }
}
