use crate::core::{CoordinateTransform, Dpi, PointF, RectF};
use crate::render::{Color, Font, PaintEngineKind, Painter, Pen, TextAlign};

/// Drawing context that only counts calls.
///
/// Used by benchmarks and headless hosts that need the print pass geometry
/// but no output.
#[derive(Debug)]
pub struct NullPainter {
    dpi: Dpi,
    transform: CoordinateTransform,
    pen: Pen,
    saved: Vec<(CoordinateTransform, Pen)>,
    pub draw_calls: usize,
}

impl NullPainter {
    #[must_use]
    pub fn new(dpi: Dpi) -> Self {
        Self {
            dpi,
            transform: CoordinateTransform::IDENTITY,
            pen: Pen::default(),
            saved: Vec::new(),
            draw_calls: 0,
        }
    }
}

impl Default for NullPainter {
    fn default() -> Self {
        Self::new(Dpi::STANDARD)
    }
}

impl Painter for NullPainter {
    fn is_active(&self) -> bool {
        true
    }

    fn engine_kind(&self) -> PaintEngineKind {
        PaintEngineKind::Other
    }

    fn device_dpi(&self) -> Dpi {
        self.dpi
    }

    fn save(&mut self) {
        self.saved.push((self.transform, self.pen));
    }

    fn restore(&mut self) {
        if let Some((transform, pen)) = self.saved.pop() {
            self.transform = transform;
            self.pen = pen;
        }
    }

    fn world_transform(&self) -> CoordinateTransform {
        self.transform
    }

    fn set_world_transform(&mut self, transform: CoordinateTransform) {
        self.transform = transform;
    }

    fn set_clip_rect(&mut self, _rect: RectF) {}

    fn set_font(&mut self, _font: &Font) {}

    fn pen(&self) -> Pen {
        self.pen
    }

    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn fill_rect(&mut self, _rect: RectF, _color: Color) {
        self.draw_calls += 1;
    }

    fn draw_rect(&mut self, _rect: RectF) {
        self.draw_calls += 1;
    }

    fn draw_line(&mut self, _from: PointF, _to: PointF) {
        self.draw_calls += 1;
    }

    fn draw_text(&mut self, _rect: RectF, _align: TextAlign, _text: &str) {
        self.draw_calls += 1;
    }
}
