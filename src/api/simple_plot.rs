//! In-memory plot widget implementing the collaborator traits.
//!
//! Hosts without their own widget toolkit can build a [`SimplePlot`] and hand
//! it to [`PlotPrinter`](crate::api::PlotPrinter) directly.

use crate::api::{
    LayoutEngine, Legend, PlotAxis, PlotModel, PlotStyle, PrintFilter, PrintOptions, SimpleAxis,
    SimpleLegend, StackedLayoutEngine,
};
use crate::core::{AxisId, Dpi, PerAxis, PointF, RectF, ScaleMap, SizeF};
use crate::render::{Painter, PainterGuard, Pen};

/// Draws one kind of plot item inside the canvas.
///
/// Geometry is in device coordinates: `canvas_rect` and `maps` already
/// include the print scaling.
pub trait CanvasItemRenderer {
    fn draw(
        &self,
        painter: &mut dyn Painter,
        canvas_rect: RectF,
        maps: &PerAxis<ScaleMap>,
        style: &PlotStyle,
        options: PrintOptions,
    );
}

/// Major and minor grid lines, drawn only under `PRINT_GRID`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridItem {
    pub x_axis: AxisId,
    pub y_axis: AxisId,
    pub major_divisions: usize,
    pub minor_per_major: usize,
}

impl Default for GridItem {
    fn default() -> Self {
        Self {
            x_axis: AxisId::XBottom,
            y_axis: AxisId::YLeft,
            major_divisions: 5,
            minor_per_major: 2,
        }
    }
}

impl GridItem {
    fn draw_lines(
        &self,
        painter: &mut dyn Painter,
        canvas_rect: RectF,
        maps: &PerAxis<ScaleMap>,
        divisions: usize,
    ) {
        let x_map = maps[self.x_axis];
        let y_map = maps[self.y_axis];
        for step in 1..divisions {
            let t = step as f64 / divisions as f64;
            let x = x_map.p1() + (x_map.p2() - x_map.p1()) * t;
            painter.draw_line(
                PointF::new(x, canvas_rect.top()),
                PointF::new(x, canvas_rect.bottom()),
            );
            let y = y_map.p1() + (y_map.p2() - y_map.p1()) * t;
            painter.draw_line(
                PointF::new(canvas_rect.left(), y),
                PointF::new(canvas_rect.right(), y),
            );
        }
    }
}

impl CanvasItemRenderer for GridItem {
    fn draw(
        &self,
        painter: &mut dyn Painter,
        canvas_rect: RectF,
        maps: &PerAxis<ScaleMap>,
        style: &PlotStyle,
        options: PrintOptions,
    ) {
        if !options.contains(PrintOptions::PRINT_GRID) || self.major_divisions == 0 {
            return;
        }
        if self.minor_per_major > 1 {
            painter.set_pen(Pen::new(style.minor_grid, 0.0));
            let minor = self.major_divisions * self.minor_per_major;
            self.draw_lines(painter, canvas_rect, maps, minor);
        }
        painter.set_pen(Pen::new(style.major_grid, 0.0));
        self.draw_lines(painter, canvas_rect, maps, self.major_divisions);
    }
}

/// Polyline through data points plotted against two axes.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveItem {
    pub x_axis: AxisId,
    pub y_axis: AxisId,
    pub points: Vec<PointF>,
    pub pen: Pen,
}

impl CurveItem {
    #[must_use]
    pub fn new(points: Vec<PointF>, pen: Pen) -> Self {
        Self {
            x_axis: AxisId::XBottom,
            y_axis: AxisId::YLeft,
            points,
            pen,
        }
    }
}

impl CanvasItemRenderer for CurveItem {
    fn draw(
        &self,
        painter: &mut dyn Painter,
        _canvas_rect: RectF,
        maps: &PerAxis<ScaleMap>,
        _style: &PlotStyle,
        _options: PrintOptions,
    ) {
        let x_map = maps[self.x_axis];
        let y_map = maps[self.y_axis];
        painter.set_pen(self.pen);
        let mapped: Vec<PointF> = self
            .points
            .iter()
            .map(|point| PointF::new(x_map.transform(point.x), y_map.transform(point.y)))
            .collect();
        for segment in mapped.windows(2) {
            painter.draw_line(segment[0], segment[1]);
        }
    }
}

/// Reference plot widget.
pub struct SimplePlot {
    size: SizeF,
    dpi: Dpi,
    title: String,
    outer_margin: f64,
    style: PlotStyle,
    axes: PerAxis<SimpleAxis>,
    legend: Option<SimpleLegend>,
    layout: StackedLayoutEngine,
    items: Vec<Box<dyn CanvasItemRenderer>>,
}

impl SimplePlot {
    /// Creates a plot of `size` logical units at the standard density with
    /// the left and bottom axes enabled.
    #[must_use]
    pub fn new(size: SizeF) -> Self {
        Self {
            size,
            dpi: Dpi::STANDARD,
            title: String::new(),
            outer_margin: 0.0,
            style: PlotStyle::default(),
            axes: PerAxis::from_fn(SimpleAxis::new),
            legend: None,
            layout: StackedLayoutEngine::default(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: Dpi) -> Self {
        self.dpi = dpi;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: SimpleAxis) -> Self {
        let position = axis.position();
        self.axes[position] = axis;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: SimpleLegend) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: StackedLayoutEngine) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: impl CanvasItemRenderer + 'static) -> Self {
        self.items.push(Box::new(item));
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_outer_margin(&mut self, margin: f64) {
        self.outer_margin = margin;
    }

    pub fn set_legend(&mut self, legend: Option<SimpleLegend>) {
        self.legend = legend;
    }

    #[must_use]
    pub fn simple_axis(&self, axis: AxisId) -> &SimpleAxis {
        &self.axes[axis]
    }

    pub fn simple_axis_mut(&mut self, axis: AxisId) -> &mut SimpleAxis {
        &mut self.axes[axis]
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl PlotModel for SimplePlot {
    fn size(&self) -> SizeF {
        self.size
    }

    fn logical_dpi(&self) -> Dpi {
        self.dpi
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn outer_margin(&self) -> f64 {
        self.outer_margin
    }

    fn style(&self) -> &PlotStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut PlotStyle {
        &mut self.style
    }

    fn legend(&self) -> Option<&dyn Legend> {
        self.legend.as_ref().map(|legend| legend as &dyn Legend)
    }

    fn axis(&self, axis: AxisId) -> Option<&dyn PlotAxis> {
        Some(&self.axes[axis])
    }

    fn axis_mut(&mut self, axis: AxisId) -> Option<&mut dyn PlotAxis> {
        Some(&mut self.axes[axis])
    }

    fn layout_engine(&self) -> &dyn LayoutEngine {
        &self.layout
    }

    fn draw_canvas_items(
        &self,
        painter: &mut dyn Painter,
        canvas_rect: RectF,
        maps: &PerAxis<ScaleMap>,
        filter: &dyn PrintFilter,
    ) {
        let options = filter.options();
        for item in &self.items {
            let mut painter = PainterGuard::new(&mut *painter);
            item.draw(&mut *painter, canvas_rect, maps, &self.style, options);
        }
    }
}
