use std::io::Write;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, Matrix, PdfSurface, Surface, SurfaceType, SvgSurface};
use pango::FontDescription;
use tracing::warn;

use crate::core::{CoordinateTransform, Dpi, PointF, RectF};
use crate::error::{PrintError, PrintResult};
use crate::render::{Color, Font, PaintEngineKind, Painter, Pen, PrintSurface, TextAlign};

/// Points per inch of PDF and SVG user space.
const VECTOR_DPI: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoPaintStats {
    pub rects_filled: usize,
    pub rects_stroked: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// [`Painter`] on top of an external Cairo context.
///
/// The world transform is applied on top of whatever matrix the context had
/// when the painter was created. Cairo failures do not abort the pass: the
/// first one is kept and returned by [`CairoPainter::finish`].
pub struct CairoPainter<'a> {
    context: &'a Context,
    dpi: Dpi,
    engine: PaintEngineKind,
    base_matrix: Matrix,
    transform: CoordinateTransform,
    pen: Pen,
    font: Font,
    saved: Vec<(CoordinateTransform, Pen, Font)>,
    stats: CairoPaintStats,
    first_error: Option<PrintError>,
}

impl<'a> CairoPainter<'a> {
    #[must_use]
    pub fn new(context: &'a Context, dpi: Dpi) -> Self {
        let engine = engine_kind_for(context.target().type_());
        Self {
            context,
            dpi,
            engine,
            base_matrix: context.matrix(),
            transform: CoordinateTransform::IDENTITY,
            pen: Pen::default(),
            font: Font::default(),
            saved: Vec::new(),
            stats: CairoPaintStats::default(),
            first_error: None,
        }
    }

    #[must_use]
    pub fn stats(&self) -> CairoPaintStats {
        self.stats
    }

    /// Ends painting, reporting the first backend failure if any occurred.
    pub fn finish(self) -> PrintResult<CairoPaintStats> {
        match self.first_error {
            Some(err) => Err(err),
            None => Ok(self.stats),
        }
    }

    fn check(&mut self, op: &str, result: Result<(), cairo::Error>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, op, "cairo operation failed");
                if self.first_error.is_none() {
                    self.first_error = Some(map_backend_error(op, err));
                }
                false
            }
        }
    }

    fn apply_color(&self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }
}

impl Painter for CairoPainter<'_> {
    fn is_active(&self) -> bool {
        self.context.status().is_ok()
    }

    fn engine_kind(&self) -> PaintEngineKind {
        self.engine
    }

    fn device_dpi(&self) -> Dpi {
        self.dpi
    }

    fn save(&mut self) {
        self.saved.push((self.transform, self.pen, self.font.clone()));
        let result = self.context.save();
        self.check("save", result);
    }

    fn restore(&mut self) {
        if let Some((transform, pen, font)) = self.saved.pop() {
            self.transform = transform;
            self.pen = pen;
            self.font = font;
            let result = self.context.restore();
            self.check("restore", result);
        }
    }

    fn world_transform(&self) -> CoordinateTransform {
        self.transform
    }

    fn set_world_transform(&mut self, transform: CoordinateTransform) {
        self.transform = transform;
        let scale = Matrix::new(transform.sx(), 0.0, 0.0, transform.sy(), 0.0, 0.0);
        self.context
            .set_matrix(Matrix::multiply(&scale, &self.base_matrix));
    }

    fn set_clip_rect(&mut self, rect: RectF) {
        self.context.reset_clip();
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context.clip();
    }

    fn set_font(&mut self, font: &Font) {
        self.font = font.clone();
    }

    fn pen(&self) -> Pen {
        self.pen
    }

    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.apply_color(color);
        let result = self.context.fill();
        if self.check("fill rectangle", result) {
            self.stats.rects_filled += 1;
        }
    }

    fn draw_rect(&mut self, rect: RectF) {
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.apply_color(self.pen.color);
        self.context.set_line_width(self.pen.width.max(f64::EPSILON));
        let result = self.context.stroke();
        if self.check("stroke rectangle", result) {
            self.stats.rects_stroked += 1;
        }
    }

    fn draw_line(&mut self, from: PointF, to: PointF) {
        self.apply_color(self.pen.color);
        self.context.set_line_width(self.pen.width.max(f64::EPSILON));
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        let result = self.context.stroke();
        if self.check("stroke line", result) {
            self.stats.lines_drawn += 1;
        }
    }

    fn draw_text(&mut self, rect: RectF, align: TextAlign, text: &str) {
        if text.is_empty() {
            return;
        }
        let layout = pangocairo::functions::create_layout(self.context);
        let font_description = FontDescription::from_string(&self.font.description());
        layout.set_font_description(Some(&font_description));
        layout.set_width((rect.width.max(0.0) * f64::from(pango::SCALE)) as i32);
        layout.set_alignment(match align {
            TextAlign::Left => pango::Alignment::Left,
            TextAlign::Center => pango::Alignment::Center,
            TextAlign::Right => pango::Alignment::Right,
        });
        layout.set_text(text);

        let (_text_width, text_height) = layout.pixel_size();
        let y = rect.y + (rect.height - f64::from(text_height)) / 2.0;

        self.apply_color(self.pen.color);
        self.context.move_to(rect.x, y);
        pangocairo::functions::show_layout(self.context, &layout);
        self.stats.texts_drawn += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CairoSurfaceKind {
    Image,
    Pdf,
    Svg,
}

#[derive(Debug)]
enum Backing {
    Image(ImageSurface),
    Pdf(PdfSurface),
    Svg(SvgSurface),
}

/// Cairo-backed [`PrintSurface`]: an ARGB image, a PDF page or an SVG file.
#[derive(Debug)]
pub struct CairoPrintSurface {
    backing: Backing,
    width: i32,
    height: i32,
    dpi: Dpi,
    last_stats: CairoPaintStats,
}

impl CairoPrintSurface {
    /// Raster surface of `width × height` pixels at the given density.
    pub fn image(width: i32, height: i32, dpi: Dpi) -> PrintResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PrintError::InvalidSurface { width, height });
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create image surface", err))?;
        Ok(Self {
            backing: Backing::Image(surface),
            width,
            height,
            dpi: dpi.validate()?,
            last_stats: CairoPaintStats::default(),
        })
    }

    /// Single PDF page of `width × height` points.
    pub fn pdf(path: impl AsRef<Path>, width: i32, height: i32) -> PrintResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PrintError::InvalidSurface { width, height });
        }
        let surface = PdfSurface::new(f64::from(width), f64::from(height), path.as_ref())
            .map_err(|err| map_backend_error("failed to create pdf surface", err))?;
        Ok(Self {
            backing: Backing::Pdf(surface),
            width,
            height,
            dpi: Dpi::uniform(VECTOR_DPI),
            last_stats: CairoPaintStats::default(),
        })
    }

    /// SVG document of `width × height` points.
    pub fn svg(path: impl AsRef<Path>, width: i32, height: i32) -> PrintResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PrintError::InvalidSurface { width, height });
        }
        let surface = SvgSurface::new(f64::from(width), f64::from(height), Some(path.as_ref()))
            .map_err(|err| map_backend_error("failed to create svg surface", err))?;
        Ok(Self {
            backing: Backing::Svg(surface),
            width,
            height,
            dpi: Dpi::uniform(VECTOR_DPI),
            last_stats: CairoPaintStats::default(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> CairoSurfaceKind {
        match self.backing {
            Backing::Image(_) => CairoSurfaceKind::Image,
            Backing::Pdf(_) => CairoSurfaceKind::Pdf,
            Backing::Svg(_) => CairoSurfaceKind::Svg,
        }
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoPaintStats {
        self.last_stats
    }

    /// Encodes an image surface as PNG.
    pub fn write_png(&self, writer: &mut impl Write) -> PrintResult<()> {
        match &self.backing {
            Backing::Image(surface) => surface
                .write_to_png(writer)
                .map_err(|err| PrintError::Backend(format!("failed to write png: {err}"))),
            _ => Err(PrintError::InvalidData(
                "png output requires an image surface".to_owned(),
            )),
        }
    }

    /// Flushes and closes vector output; image surfaces stay usable.
    pub fn finish(&self) {
        if !matches!(self.backing, Backing::Image(_)) {
            self.surface().finish();
        }
    }

    fn surface(&self) -> &Surface {
        match &self.backing {
            Backing::Image(surface) => surface,
            Backing::Pdf(surface) => surface,
            Backing::Svg(surface) => surface,
        }
    }
}

impl PrintSurface for CairoPrintSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn paint<T>(&mut self, paint: impl FnOnce(&mut dyn Painter) -> T) -> PrintResult<T> {
        let context = Context::new(self.surface())
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let mut painter = CairoPainter::new(&context, self.dpi);
        let result = paint(&mut painter);
        self.last_stats = painter.finish()?;
        Ok(result)
    }
}

fn engine_kind_for(surface_type: SurfaceType) -> PaintEngineKind {
    match surface_type {
        SurfaceType::Image => PaintEngineKind::Raster,
        SurfaceType::Xlib | SurfaceType::Xcb => PaintEngineKind::X11,
        SurfaceType::Pdf => PaintEngineKind::Pdf,
        SurfaceType::Ps => PaintEngineKind::PostScript,
        SurfaceType::Svg => PaintEngineKind::Svg,
        _ => PaintEngineKind::Other,
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PrintError {
    PrintError::Backend(format!("{prefix}: {err}"))
}
