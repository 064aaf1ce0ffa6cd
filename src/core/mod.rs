pub mod axis;
pub mod geometry;
pub mod scale_map;
pub mod transform;

pub use axis::{AxisId, Orientation, PerAxis, ScaleAlignment};
pub use geometry::{Dpi, PointF, RectF, SizeF};
pub use scale_map::{LOG_MIN, ScaleDiv, ScaleMap, ScaleTransformation};
pub use transform::CoordinateTransform;
