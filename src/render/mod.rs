mod frame;
mod null_painter;
mod painter_guard;
mod primitives;
mod recording_painter;

pub use frame::{PaintCommand, PrintFrame};
pub use null_painter::NullPainter;
pub use painter_guard::PainterGuard;
pub use primitives::{Color, Font, Palette, Pen, TextAlign};
pub use recording_painter::{RecordingPainter, RecordingSurface};

use serde::{Deserialize, Serialize};

use crate::core::{CoordinateTransform, Dpi, PointF, RectF};
use crate::error::PrintResult;

/// Kind of paint engine behind a drawing context.
///
/// Raster-like engines (`Raster`, `X11`) and the rest disagree on how a
/// filled rectangle's far edges are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintEngineKind {
    Raster,
    X11,
    Pdf,
    PostScript,
    Svg,
    Other,
}

impl PaintEngineKind {
    /// Whether a full-size background fill lines up with the frame on this
    /// engine; every other engine gets a one-unit smaller fill.
    #[must_use]
    pub const fn fills_full_rect(self) -> bool {
        matches!(self, PaintEngineKind::Raster | PaintEngineKind::X11)
    }
}

/// Stateful drawing context the print pass draws through.
///
/// Geometry passed to drawing calls is in user coordinates and goes through
/// the current world transform. `save`/`restore` push and pop the whole
/// attribute set (transform, clip, pen, font); prefer [`PainterGuard`] over
/// calling them directly.
pub trait Painter {
    /// Inactive contexts are not bound to a device and draw nothing.
    fn is_active(&self) -> bool;

    fn engine_kind(&self) -> PaintEngineKind;

    /// Logical density of the device the context paints on.
    fn device_dpi(&self) -> Dpi;

    fn save(&mut self);

    fn restore(&mut self);

    fn world_transform(&self) -> CoordinateTransform;

    fn set_world_transform(&mut self, transform: CoordinateTransform);

    fn reset_transform(&mut self) {
        self.set_world_transform(CoordinateTransform::IDENTITY);
    }

    /// Replaces the clip region; `rect` is in user coordinates.
    fn set_clip_rect(&mut self, rect: RectF);

    fn set_font(&mut self, font: &Font);

    fn pen(&self) -> Pen;

    fn set_pen(&mut self, pen: Pen);

    fn fill_rect(&mut self, rect: RectF, color: Color);

    /// Outlines `rect` with the current pen and no fill.
    fn draw_rect(&mut self, rect: RectF);

    fn draw_line(&mut self, from: PointF, to: PointF);

    /// Draws `text` inside `rect` with the current font and pen color.
    fn draw_text(&mut self, rect: RectF, align: TextAlign, text: &str);
}

/// Output target that reports its size and can open a drawing context.
pub trait PrintSurface {
    /// Surface size in device pixels.
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Opens a context bound to the surface, runs `paint` and closes it.
    fn paint<T>(&mut self, paint: impl FnOnce(&mut dyn Painter) -> T) -> PrintResult<T>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoPainter, CairoPaintStats, CairoPrintSurface, CairoSurfaceKind};
