//! Collaborator interfaces the print pass consumes.
//!
//! The plot widget, its axis scale widgets, the legend and the canvas item
//! renderer all live outside this crate; printing only reaches them through
//! the traits below.

use serde::{Deserialize, Serialize};

use crate::api::{LayoutEngine, PrintFilter};
use crate::core::{
    AxisId, Dpi, PerAxis, PointF, RectF, ScaleAlignment, ScaleDiv, ScaleMap, ScaleTransformation,
    SizeF,
};
use crate::render::{Color, Font, Painter, Palette};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: Font,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub font: Font,
    pub pen_width: f64,
    pub palette: Palette,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            pen_width: 1.0,
            palette: Palette::default(),
        }
    }
}

/// Colors and fonts a print filter may substitute for the output medium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub title: TextStyle,
    pub legend: TextStyle,
    pub axes: PerAxis<AxisStyle>,
    pub canvas_background: Color,
    pub major_grid: Color,
    pub minor_grid: Color,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            title: TextStyle {
                font: Font::new("Sans", 14.0).bold(),
                color: Color::BLACK,
            },
            legend: TextStyle::default(),
            axes: PerAxis::default(),
            canvas_background: Color::WHITE,
            major_grid: Color::BLACK,
            minor_grid: Color::GRAY,
        }
    }
}

/// Plot widget being printed.
///
/// Everything is read-only to the print pass except the style, which a
/// [`PrintFilter`] may swap for the duration of one pass.
pub trait PlotModel {
    /// On-screen size in logical units.
    fn size(&self) -> SizeF;

    /// Logical density the widget's layout metrics are expressed in.
    fn logical_dpi(&self) -> Dpi;

    fn title(&self) -> &str;

    /// Outer margin honored by layout under `PRINT_MARGIN`.
    fn outer_margin(&self) -> f64 {
        0.0
    }

    fn style(&self) -> &PlotStyle;

    fn style_mut(&mut self) -> &mut PlotStyle;

    fn legend(&self) -> Option<&dyn Legend>;

    /// Scale widget at the given position, if the plot has one.
    fn axis(&self, axis: AxisId) -> Option<&dyn PlotAxis>;

    fn axis_mut(&mut self, axis: AxisId) -> Option<&mut dyn PlotAxis>;

    fn layout_engine(&self) -> &dyn LayoutEngine;

    /// Draws the plot items (curves, grid, markers, ...) into `canvas_rect`.
    ///
    /// Called with an identity world transform: `canvas_rect` and every map
    /// in `maps` are already in device coordinates.
    fn draw_canvas_items(
        &self,
        painter: &mut dyn Painter,
        canvas_rect: RectF,
        maps: &PerAxis<ScaleMap>,
        filter: &dyn PrintFilter,
    );
}

/// Axis scale widget.
pub trait PlotAxis {
    fn is_enabled(&self) -> bool;

    /// Distance between the scale backbone and the canvas-facing edge.
    fn margin(&self) -> f64;

    fn set_margin(&mut self, margin: f64);

    /// Gap between a color bar and the scale.
    fn spacing(&self) -> f64;

    /// Minimum `(start, end)` border distances the scale labels need.
    fn border_dist_hint(&self) -> (f64, f64);

    fn start_border_dist(&self) -> f64;

    fn end_border_dist(&self) -> f64;

    fn scale_div(&self) -> ScaleDiv;

    fn transformation(&self) -> ScaleTransformation;

    /// Thickness of ticks and labels, excluding the margin.
    fn extent_hint(&self) -> f64;

    fn draw_title(&self, painter: &mut dyn Painter, alignment: ScaleAlignment, rect: RectF);

    /// Width of the color bar when one is enabled.
    fn color_bar_width(&self) -> Option<f64> {
        None
    }

    /// Sub-rectangle of `rect` the color bar occupies, `margin` away from the
    /// canvas-facing edge.
    fn color_bar_rect(&self, rect: RectF, _margin: f64) -> RectF {
        rect
    }

    fn draw_color_bar(&self, _painter: &mut dyn Painter, _rect: RectF) {}

    fn scale_draw(&self) -> &dyn ScaleDraw;

    fn scale_draw_mut(&mut self) -> &mut dyn ScaleDraw;
}

/// Movable, resizable scale-drawing primitive owned by an axis widget.
pub trait ScaleDraw {
    fn pos(&self) -> PointF;

    fn length(&self) -> f64;

    fn move_to(&mut self, pos: PointF);

    fn set_length(&mut self, length: f64);

    fn draw(&self, painter: &mut dyn Painter, palette: &Palette);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegendKey(u32);

impl LegendKey {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Printable legend entry for one plot item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub key: LegendKey,
    pub text: String,
    pub margin: f64,
    pub spacing: f64,
    pub identifier_width: f64,
}

impl LegendItem {
    #[must_use]
    pub fn new(key: LegendKey, text: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
            margin: 0.0,
            spacing: 2.0,
            identifier_width: 8.0,
        }
    }
}

/// Widget managed by a legend's grid.
///
/// Every entry occupies one grid cell; only `Item` entries print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LegendEntry {
    Item(LegendItem),
    Widget,
}

pub trait Legend {
    fn entries(&self) -> &[LegendEntry];

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn grid(&self) -> &dyn LegendGridLayout;

    /// Drawer registered for the plot item behind `key`.
    fn identifier_drawer(&self, key: LegendKey) -> Option<&dyn LegendIdentifierDrawer>;

    /// Preferred size in logical units.
    fn size_hint(&self) -> SizeF;
}

pub trait LegendGridLayout {
    fn columns_for_width(&self, width: f64) -> usize;

    /// Cell rectangles for `count` entries laid out in `columns` columns.
    fn layout_items(&self, rect: RectF, columns: usize, count: usize) -> Vec<RectF>;
}

/// Draws the swatch that identifies a plot item in the legend.
pub trait LegendIdentifierDrawer {
    fn draw_legend_identifier(&self, painter: &mut dyn Painter, rect: RectF);
}
