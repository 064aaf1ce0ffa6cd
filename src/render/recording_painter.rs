use crate::core::{CoordinateTransform, Dpi, PointF, RectF};
use crate::error::{PrintError, PrintResult};
use crate::render::{
    Color, Font, PaintCommand, PaintEngineKind, Painter, Pen, PrintFrame, PrintSurface, TextAlign,
};

#[derive(Debug, Clone, PartialEq)]
struct PainterState {
    transform: CoordinateTransform,
    clip: Option<RectF>,
    pen: Pen,
    font: Font,
}

impl Default for PainterState {
    fn default() -> Self {
        Self {
            transform: CoordinateTransform::IDENTITY,
            clip: None,
            pen: Pen::default(),
            font: Font::default(),
        }
    }
}

/// Headless drawing context that records every call in device coordinates.
///
/// Used by tests and by hosts that want to inspect a print pass without a
/// real backend.
#[derive(Debug)]
pub struct RecordingPainter {
    dpi: Dpi,
    engine: PaintEngineKind,
    active: bool,
    state: PainterState,
    stack: Vec<PainterState>,
    frame: PrintFrame,
}

impl RecordingPainter {
    #[must_use]
    pub fn new(dpi: Dpi, engine: PaintEngineKind) -> Self {
        Self {
            dpi,
            engine,
            active: true,
            state: PainterState::default(),
            stack: Vec::new(),
            frame: PrintFrame::new(),
        }
    }

    /// A context that is not bound to any device.
    #[must_use]
    pub fn inactive() -> Self {
        Self {
            active: false,
            ..Self::new(Dpi::STANDARD, PaintEngineKind::Other)
        }
    }

    #[must_use]
    pub fn frame(&self) -> &PrintFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> PrintFrame {
        self.frame
    }

    /// Number of unmatched `save` calls.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Current clip region in device coordinates.
    #[must_use]
    pub fn clip_rect(&self) -> Option<RectF> {
        self.state.clip
    }

    fn device_rect(&self, rect: RectF) -> RectF {
        self.state.transform.map_rect(rect)
    }
}

impl Painter for RecordingPainter {
    fn is_active(&self) -> bool {
        self.active
    }

    fn engine_kind(&self) -> PaintEngineKind {
        self.engine
    }

    fn device_dpi(&self) -> Dpi {
        self.dpi
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn world_transform(&self) -> CoordinateTransform {
        self.state.transform
    }

    fn set_world_transform(&mut self, transform: CoordinateTransform) {
        self.state.transform = transform;
    }

    fn set_clip_rect(&mut self, rect: RectF) {
        self.state.clip = Some(self.device_rect(rect));
    }

    fn set_font(&mut self, font: &Font) {
        self.state.font = font.clone();
    }

    fn pen(&self) -> Pen {
        self.state.pen
    }

    fn set_pen(&mut self, pen: Pen) {
        self.state.pen = pen;
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        let rect = self.device_rect(rect);
        self.frame.push(PaintCommand::FillRect {
            rect,
            color,
            clip: self.state.clip,
        });
    }

    fn draw_rect(&mut self, rect: RectF) {
        let rect = self.device_rect(rect);
        self.frame.push(PaintCommand::StrokeRect {
            rect,
            pen: self.state.pen,
            clip: self.state.clip,
        });
    }

    fn draw_line(&mut self, from: PointF, to: PointF) {
        let transform = self.state.transform;
        self.frame.push(PaintCommand::Line {
            from: transform.map_point(from),
            to: transform.map_point(to),
            pen: self.state.pen,
            clip: self.state.clip,
        });
    }

    fn draw_text(&mut self, rect: RectF, align: TextAlign, text: &str) {
        let rect = self.device_rect(rect);
        self.frame.push(PaintCommand::Text {
            rect,
            text: text.to_owned(),
            align,
            font: self.state.font.clone(),
            color: self.state.pen.color,
            clip: self.state.clip,
        });
    }
}

/// In-memory print surface backed by [`RecordingPainter`].
#[derive(Debug)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    dpi: Dpi,
    engine: PaintEngineKind,
    frame: PrintFrame,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32, dpi: Dpi, engine: PaintEngineKind) -> PrintResult<Self> {
        if width < 0 || height < 0 {
            return Err(PrintError::InvalidSurface { width, height });
        }
        Ok(Self {
            width,
            height,
            dpi: dpi.validate()?,
            engine,
            frame: PrintFrame::new(),
        })
    }

    #[must_use]
    pub fn frame(&self) -> &PrintFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> PrintFrame {
        self.frame
    }
}

impl PrintSurface for RecordingSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn paint<T>(&mut self, paint: impl FnOnce(&mut dyn Painter) -> T) -> PrintResult<T> {
        let mut painter = RecordingPainter::new(self.dpi, self.engine);
        let result = paint(&mut painter);
        self.frame.extend(painter.into_frame());
        Ok(result)
    }
}
