use serde::{Deserialize, Serialize};

use crate::api::{PlotAxis, ScaleDraw};
use crate::core::{
    AxisId, Orientation, PointF, RectF, ScaleAlignment, ScaleDiv, ScaleMap, ScaleTransformation,
};
use crate::render::{Color, Font, Painter, Palette, Pen, TextAlign};

/// Backbone, ticks and labels of one axis scale.
///
/// Ticks are spaced evenly in paint space; labels show the inverse-mapped
/// value, so logarithmic scales get non-uniform label values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearScaleDraw {
    alignment: ScaleAlignment,
    pos: PointF,
    length: f64,
    div: ScaleDiv,
    transformation: ScaleTransformation,
    pub tick_length: f64,
    pub major_ticks: usize,
    pub label_extent: f64,
}

impl LinearScaleDraw {
    #[must_use]
    pub fn new(alignment: ScaleAlignment) -> Self {
        Self {
            alignment,
            pos: PointF::default(),
            length: 0.0,
            div: ScaleDiv::default(),
            transformation: ScaleTransformation::Linear,
            tick_length: 6.0,
            major_ticks: 5,
            label_extent: 24.0,
        }
    }

    #[must_use]
    pub fn alignment(&self) -> ScaleAlignment {
        self.alignment
    }

    pub fn set_scale(&mut self, div: ScaleDiv, transformation: ScaleTransformation) {
        self.div = div;
        self.transformation = transformation;
    }

    fn is_vertical(&self) -> bool {
        matches!(self.alignment, ScaleAlignment::Left | ScaleAlignment::Right)
    }

    /// Unit vector pointing away from the canvas.
    fn outward(&self) -> (f64, f64) {
        match self.alignment {
            ScaleAlignment::Left => (-1.0, 0.0),
            ScaleAlignment::Right => (1.0, 0.0),
            ScaleAlignment::Top => (0.0, -1.0),
            ScaleAlignment::Bottom => (0.0, 1.0),
        }
    }

    fn map(&self) -> ScaleMap {
        let (p1, p2) = if self.is_vertical() {
            (self.pos.y + self.length, self.pos.y)
        } else {
            (self.pos.x, self.pos.x + self.length)
        };
        ScaleMap::new(self.transformation, self.div, p1, p2)
    }

    fn point_at(&self, paint: f64) -> PointF {
        if self.is_vertical() {
            PointF::new(self.pos.x, paint)
        } else {
            PointF::new(paint, self.pos.y)
        }
    }

    fn label_rect(&self, tip: PointF) -> RectF {
        let extent = self.label_extent;
        match self.alignment {
            ScaleAlignment::Left => {
                RectF::new(tip.x - extent, tip.y - extent / 4.0, extent, extent / 2.0)
            }
            ScaleAlignment::Right => RectF::new(tip.x, tip.y - extent / 4.0, extent, extent / 2.0),
            ScaleAlignment::Top => {
                RectF::new(tip.x - extent, tip.y - extent / 2.0, 2.0 * extent, extent / 2.0)
            }
            ScaleAlignment::Bottom => RectF::new(tip.x - extent, tip.y, 2.0 * extent, extent / 2.0),
        }
    }
}

impl ScaleDraw for LinearScaleDraw {
    fn pos(&self) -> PointF {
        self.pos
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn move_to(&mut self, pos: PointF) {
        self.pos = pos;
    }

    fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    fn draw(&self, painter: &mut dyn Painter, palette: &Palette) {
        if self.length <= 0.0 {
            return;
        }
        let pen = painter.pen();
        painter.set_pen(Pen {
            color: palette.foreground,
            ..pen
        });
        let map = self.map();
        painter.draw_line(self.point_at(map.p1()), self.point_at(map.p2()));

        let (dx, dy) = self.outward();
        let steps = self.major_ticks.max(1);
        let mut labels = Vec::with_capacity(steps + 1);
        for step in 0..=steps {
            let paint = map.p1() + (map.p2() - map.p1()) * step as f64 / steps as f64;
            let from = self.point_at(paint);
            let tip = PointF::new(from.x + dx * self.tick_length, from.y + dy * self.tick_length);
            painter.draw_line(from, tip);
            labels.push((tip, map.inv_transform(paint)));
        }

        painter.set_pen(Pen {
            color: palette.text,
            ..pen
        });
        let align = match self.alignment {
            ScaleAlignment::Left => TextAlign::Right,
            ScaleAlignment::Right => TextAlign::Left,
            ScaleAlignment::Top | ScaleAlignment::Bottom => TextAlign::Center,
        };
        for (tip, value) in labels {
            painter.draw_text(self.label_rect(tip), align, &format_tick_label(value));
        }
    }
}

/// Formats a tick value with at most three decimals and no trailing zeros.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

/// Gradient strip drawn next to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    pub width: f64,
    pub from: Color,
    pub to: Color,
    /// Number of solid bands the gradient is approximated with.
    pub bands: usize,
}

impl ColorBar {
    #[must_use]
    pub fn new(width: f64, from: Color, to: Color) -> Self {
        Self {
            width,
            from,
            to,
            bands: 16,
        }
    }

    fn band_color(&self, t: f64) -> Color {
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        Color::rgba(
            lerp(self.from.red, self.to.red),
            lerp(self.from.green, self.to.green),
            lerp(self.from.blue, self.to.blue),
            lerp(self.from.alpha, self.to.alpha),
        )
    }
}

/// Reference axis scale widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleAxis {
    position: AxisId,
    enabled: bool,
    margin: f64,
    spacing: f64,
    border_dists: (f64, f64),
    div: ScaleDiv,
    transformation: ScaleTransformation,
    title: String,
    title_font: Font,
    color_bar: Option<ColorBar>,
    scale_draw: LinearScaleDraw,
}

impl SimpleAxis {
    /// Creates the axis for `position`; only the left and bottom axes start
    /// enabled.
    #[must_use]
    pub fn new(position: AxisId) -> Self {
        Self {
            position,
            enabled: matches!(position, AxisId::YLeft | AxisId::XBottom),
            margin: 2.0,
            spacing: 2.0,
            border_dists: (0.0, 0.0),
            div: ScaleDiv::default(),
            transformation: ScaleTransformation::Linear,
            title: String::new(),
            title_font: Font::new("Sans", 10.0),
            color_bar: None,
            scale_draw: LinearScaleDraw::new(position.alignment()),
        }
    }

    #[must_use]
    pub fn position(&self) -> AxisId {
        self.position
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, lower: f64, upper: f64) -> Self {
        self.set_scale(ScaleDiv::new(lower, upper), self.transformation);
        self
    }

    #[must_use]
    pub fn with_transformation(mut self, transformation: ScaleTransformation) -> Self {
        self.set_scale(self.div, transformation);
        self
    }

    pub fn set_scale(&mut self, div: ScaleDiv, transformation: ScaleTransformation) {
        self.div = div;
        self.transformation = transformation;
        self.scale_draw.set_scale(div, transformation);
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_border_dists(mut self, start: f64, end: f64) -> Self {
        self.border_dists = (start, end);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_color_bar(mut self, color_bar: ColorBar) -> Self {
        self.color_bar = Some(color_bar);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn color_bar(&self) -> Option<&ColorBar> {
        self.color_bar.as_ref()
    }

    fn title_thickness(&self) -> f64 {
        if self.title.is_empty() {
            0.0
        } else {
            (self.title_font.point_size * 1.5).round()
        }
    }
}

impl PlotAxis for SimpleAxis {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn margin(&self) -> f64 {
        self.margin
    }

    fn set_margin(&mut self, margin: f64) {
        self.margin = margin;
    }

    fn spacing(&self) -> f64 {
        self.spacing
    }

    fn border_dist_hint(&self) -> (f64, f64) {
        self.border_dists
    }

    fn start_border_dist(&self) -> f64 {
        self.border_dists.0
    }

    fn end_border_dist(&self) -> f64 {
        self.border_dists.1
    }

    fn scale_div(&self) -> ScaleDiv {
        self.div
    }

    fn transformation(&self) -> ScaleTransformation {
        self.transformation
    }

    fn extent_hint(&self) -> f64 {
        let bar = self
            .color_bar
            .map_or(0.0, |bar| bar.width + self.spacing);
        self.scale_draw.tick_length + self.scale_draw.label_extent + self.title_thickness() + bar
    }

    /// Draws the title along the edge of `rect` farthest from the canvas.
    fn draw_title(&self, painter: &mut dyn Painter, alignment: ScaleAlignment, rect: RectF) {
        if self.title.is_empty() {
            return;
        }
        let thickness = self.title_thickness();
        let title_rect = match alignment {
            ScaleAlignment::Left => RectF::new(rect.left(), rect.top(), thickness, rect.height),
            ScaleAlignment::Right => {
                RectF::new(rect.right() - thickness, rect.top(), thickness, rect.height)
            }
            ScaleAlignment::Top => RectF::new(rect.left(), rect.top(), rect.width, thickness),
            ScaleAlignment::Bottom => {
                RectF::new(rect.left(), rect.bottom() - thickness, rect.width, thickness)
            }
        };
        painter.set_font(&self.title_font);
        painter.draw_text(title_rect, TextAlign::Center, &self.title);
    }

    fn color_bar_width(&self) -> Option<f64> {
        self.color_bar.map(|bar| bar.width)
    }

    fn color_bar_rect(&self, rect: RectF, margin: f64) -> RectF {
        let Some(bar) = self.color_bar else {
            return rect;
        };
        match self.position {
            AxisId::YLeft => {
                RectF::new(rect.right() - margin - bar.width, rect.top(), bar.width, rect.height)
            }
            AxisId::YRight => RectF::new(rect.left() + margin, rect.top(), bar.width, rect.height),
            AxisId::XTop => {
                RectF::new(rect.left(), rect.bottom() - margin - bar.width, rect.width, bar.width)
            }
            AxisId::XBottom => RectF::new(rect.left(), rect.top() + margin, rect.width, bar.width),
        }
    }

    fn draw_color_bar(&self, painter: &mut dyn Painter, rect: RectF) {
        let Some(bar) = self.color_bar else {
            return;
        };
        let bands = bar.bands.max(1);
        for band in 0..bands {
            let t0 = band as f64 / bands as f64;
            let t1 = (band + 1) as f64 / bands as f64;
            // Vertical bars grow upwards with the data.
            let band_rect = match self.position.orientation() {
                Orientation::Horizontal => RectF::from_edges(
                    rect.left() + rect.width * t0,
                    rect.top(),
                    rect.left() + rect.width * t1,
                    rect.bottom(),
                ),
                Orientation::Vertical => RectF::from_edges(
                    rect.left(),
                    rect.bottom() - rect.height * t1,
                    rect.right(),
                    rect.bottom() - rect.height * t0,
                ),
            };
            painter.fill_rect(band_rect, bar.band_color(t0));
        }
    }

    fn scale_draw(&self) -> &dyn ScaleDraw {
        &self.scale_draw
    }

    fn scale_draw_mut(&mut self) -> &mut dyn ScaleDraw {
        &mut self.scale_draw
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorBar, LinearScaleDraw, SimpleAxis, format_tick_label};
    use crate::api::{PlotAxis, ScaleDraw};
    use crate::core::{AxisId, Dpi, PointF, RectF, ScaleAlignment, ScaleDiv, ScaleTransformation};
    use crate::render::{Color, PaintEngineKind, Palette, RecordingPainter};

    #[test]
    fn tick_labels_drop_trailing_zeros() {
        assert_eq!(format_tick_label(2.5), "2.5");
        assert_eq!(format_tick_label(10.0), "10");
        assert_eq!(format_tick_label(-0.0001), "0");
        assert_eq!(format_tick_label(0.125), "0.125");
    }

    #[test]
    fn bottom_scale_draws_backbone_ticks_and_labels() {
        let mut draw = LinearScaleDraw::new(ScaleAlignment::Bottom);
        draw.set_scale(ScaleDiv::new(0.0, 10.0), ScaleTransformation::Linear);
        draw.move_to(PointF::new(10.0, 100.0));
        draw.set_length(200.0);

        let mut painter = RecordingPainter::new(Dpi::STANDARD, PaintEngineKind::Raster);
        draw.draw(&mut painter, &Palette::default());

        let labels: Vec<&str> = painter.frame().texts().map(|(text, _)| text).collect();
        assert_eq!(labels, ["0", "2", "4", "6", "8", "10"]);
        // backbone plus one line per tick
        assert_eq!(painter.frame().len(), 1 + 6 + 6);
    }

    #[test]
    fn vertical_scale_labels_run_bottom_to_top() {
        let mut draw = LinearScaleDraw::new(ScaleAlignment::Left);
        draw.major_ticks = 2;
        draw.set_scale(ScaleDiv::new(0.0, 100.0), ScaleTransformation::Linear);
        draw.move_to(PointF::new(50.0, 0.0));
        draw.set_length(100.0);

        let mut painter = RecordingPainter::new(Dpi::STANDARD, PaintEngineKind::Raster);
        draw.draw(&mut painter, &Palette::default());

        let labels: Vec<(&str, RectF)> = painter.frame().texts().collect();
        assert_eq!(labels[0].0, "0");
        assert_eq!(labels[2].0, "100");
        assert!(labels[0].1.y > labels[2].1.y);
    }

    #[test]
    fn color_bar_reserves_extent_and_sits_at_margin() {
        let axis = SimpleAxis::new(AxisId::YLeft)
            .with_margin(3.0)
            .with_color_bar(ColorBar::new(10.0, Color::BLACK, Color::WHITE));
        let plain = SimpleAxis::new(AxisId::YLeft);
        assert_eq!(axis.extent_hint() - plain.extent_hint(), 10.0 + axis.spacing());

        let rect = RectF::new(0.0, 0.0, 60.0, 200.0);
        assert_eq!(
            axis.color_bar_rect(rect, axis.margin()),
            RectF::new(47.0, 0.0, 10.0, 200.0)
        );
        assert_eq!(axis.color_bar_rect(rect, 0.0), RectF::new(50.0, 0.0, 10.0, 200.0));
    }

    #[test]
    fn color_bar_fills_one_rect_per_band() {
        let mut bar = ColorBar::new(8.0, Color::BLACK, Color::WHITE);
        bar.bands = 4;
        let axis = SimpleAxis::new(AxisId::XBottom).with_color_bar(bar);
        let mut painter = RecordingPainter::new(Dpi::STANDARD, PaintEngineKind::Raster);
        axis.draw_color_bar(&mut painter, RectF::new(0.0, 0.0, 100.0, 8.0));

        let fills: Vec<_> = painter.frame().fills().collect();
        assert_eq!(fills.len(), 4);
        assert_eq!(fills[0].1, Color::BLACK);
        assert_eq!(fills[3].0, RectF::new(75.0, 0.0, 25.0, 8.0));
    }

    #[test]
    fn only_left_and_bottom_start_enabled() {
        let enabled: Vec<AxisId> = AxisId::ALL
            .into_iter()
            .filter(|&axis| SimpleAxis::new(axis).is_enabled())
            .collect();
        assert_eq!(enabled, [AxisId::YLeft, AxisId::XBottom]);
    }

    #[test]
    fn axis_title_adds_thickness_and_prints_on_outer_edge() {
        let axis = SimpleAxis::new(AxisId::XBottom).with_title("time [s]");
        let plain = SimpleAxis::new(AxisId::XBottom);
        assert_eq!(axis.title(), "time [s]");
        assert_eq!(axis.extent_hint() - plain.extent_hint(), 15.0);

        let mut painter = RecordingPainter::new(Dpi::STANDARD, PaintEngineKind::Raster);
        axis.draw_title(&mut painter, ScaleAlignment::Bottom, RectF::new(0.0, 300.0, 400.0, 60.0));
        let texts: Vec<(&str, RectF)> = painter.frame().texts().collect();
        assert_eq!(texts, [("time [s]", RectF::new(0.0, 345.0, 400.0, 15.0))]);
    }
}
