use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::api::{
    AxisStyle, LayoutRectangles, Legend, LegendEntry, LegendItem, MarginOverrides, PlotAxis,
    PlotModel, PrintConfig, PrintFilter, PrintOptions, ScaleDrawPlacement, TextStyle,
};
use crate::core::{AxisId, PerAxis, PointF, RectF, ScaleMap};
use crate::render::{Painter, PainterGuard, Pen, TextAlign};

/// Named regions of a print, in their fixed draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintRegion {
    Title,
    Legend,
    Scale(AxisId),
    CanvasBackground,
    CanvasFrame,
    CanvasContent,
}

pub type DrawnRegions = SmallVec<[PrintRegion; 9]>;

/// Draws the title text centered in `rect` with the title font and color.
pub(crate) fn print_title(painter: &mut dyn Painter, title: &str, style: &TextStyle, rect: RectF) {
    let mut painter = PainterGuard::new(painter);
    painter.set_font(&style.font);
    let pen = painter.pen();
    painter.set_pen(Pen { color: style.color, ..pen });
    painter.draw_text(rect, TextAlign::Center, title);
}

/// Draws every legend entry into its grid cell. Returns the number of
/// printed items.
pub(crate) fn print_legend(
    painter: &mut dyn Painter,
    legend: &dyn Legend,
    style: &TextStyle,
    rect: RectF,
    clip_items: bool,
) -> usize {
    let entries = legend.entries();
    let grid = legend.grid();
    let columns = grid.columns_for_width(rect.width).max(1);
    let cells = grid.layout_items(rect, columns, entries.len());

    let mut printed = 0;
    for (entry, cell) in entries.iter().zip(cells.iter().copied()) {
        let mut painter = PainterGuard::new(&mut *painter);
        if clip_items {
            painter.set_clip_rect(cell);
        }
        if let LegendEntry::Item(item) = entry {
            print_legend_item(&mut *painter, legend, item, style, cell);
            printed += 1;
        }
    }
    trace!(printed, columns, "legend printed");
    printed
}

fn print_legend_item(
    painter: &mut dyn Painter,
    legend: &dyn Legend,
    item: &LegendItem,
    style: &TextStyle,
    cell: RectF,
) {
    let identifier_rect = RectF::new(
        cell.x + item.margin,
        cell.y,
        item.identifier_width,
        cell.height,
    );
    if let Some(drawer) = legend.identifier_drawer(item.key) {
        let mut painter = PainterGuard::new(&mut *painter);
        drawer.draw_legend_identifier(&mut *painter, identifier_rect);
    }

    let label_rect = cell.with_left(identifier_rect.right() + 2.0 * item.spacing);
    painter.set_font(&style.font);
    let pen = painter.pen();
    painter.set_pen(Pen { color: style.color, ..pen });
    painter.draw_text(label_rect, TextAlign::Left, &item.text);
}

/// Draws the scale of every enabled axis. Returns the axes drawn, in order.
pub(crate) fn print_scales(
    painter: &mut dyn Painter,
    model: &mut dyn PlotModel,
    layout: &LayoutRectangles,
    margins: &MarginOverrides,
) -> SmallVec<[AxisId; 4]> {
    let mut drawn = SmallVec::new();
    for axis_id in AxisId::ALL {
        let style = model.style().axes[axis_id].clone();
        let Some(axis) = model.axis_mut(axis_id) else {
            continue;
        };
        if !axis.is_enabled() {
            continue;
        }
        let (start, end) = axis.border_dist_hint();
        let base = margins.effective(axis_id);
        print_scale(
            painter,
            axis,
            axis_id,
            &style,
            start,
            end,
            base,
            layout.scale(axis_id),
        );
        drawn.push(axis_id);
    }
    drawn
}

#[allow(clippy::too_many_arguments)]
fn print_scale(
    painter: &mut dyn Painter,
    axis: &mut dyn PlotAxis,
    axis_id: AxisId,
    style: &AxisStyle,
    start_dist: f64,
    end_dist: f64,
    mut base_dist: f64,
    rect: RectF,
) {
    if let Some(bar_width) = axis.color_bar_width().filter(|width| *width > 0.0) {
        let bar_rect = axis.color_bar_rect(rect.shrunk(1.0, 1.0), base_dist);
        {
            let mut painter = PainterGuard::new(&mut *painter);
            axis.draw_color_bar(&mut *painter, bar_rect);
        }
        base_dist += bar_width + axis.spacing();
    }

    let (pos, length) = match axis_id {
        AxisId::YLeft => (
            PointF::new(rect.right() - 1.0 - base_dist, rect.y + start_dist),
            rect.height - start_dist - end_dist,
        ),
        AxisId::YRight => (
            PointF::new(rect.left() + base_dist, rect.y + start_dist),
            rect.height - start_dist - end_dist,
        ),
        AxisId::XTop => (
            PointF::new(rect.left() + start_dist, rect.bottom() - base_dist),
            rect.width - start_dist - end_dist,
        ),
        AxisId::XBottom => (
            PointF::new(rect.left() + start_dist, rect.top() + base_dist),
            rect.width - start_dist - end_dist,
        ),
    };
    trace!(?axis_id, x = pos.x, y = pos.y, length, "print scale");

    axis.draw_title(painter, axis_id.alignment(), rect);

    let mut painter = PainterGuard::new(painter);
    painter.set_font(&style.font);
    let pen = painter.pen().with_width(style.pen_width);
    painter.set_pen(pen);

    let placed = ScaleDrawPlacement::new(axis.scale_draw_mut(), pos, length);
    placed.draw(&mut *painter, &style.palette);
}

/// Fills, frames and delegates the canvas. `canvas_rect` and `maps` are in
/// device coordinates and the painter has an identity world transform.
pub(crate) fn print_canvas(
    painter: &mut dyn Painter,
    model: &dyn PlotModel,
    filter: &dyn PrintFilter,
    canvas_rect: RectF,
    maps: &PerAxis<ScaleMap>,
    config: &PrintConfig,
    regions: &mut DrawnRegions,
) {
    let options = filter.options();
    let framed = options.contains(PrintOptions::PRINT_FRAME_WITH_SCALES);

    if options.contains(PrintOptions::PRINT_BACKGROUND) {
        let engine = painter.engine_kind();
        let fill_rect = if !framed && !engine.fills_full_rect() {
            canvas_rect.shrunk(1.0, 1.0)
        } else {
            canvas_rect
        };
        trace!(?engine, ?fill_rect, "fill canvas background");
        painter.fill_rect(fill_rect, model.style().canvas_background);
        regions.push(PrintRegion::CanvasBackground);
    }

    if framed {
        let mut painter = PainterGuard::new(&mut *painter);
        painter.set_pen(Pen::new(config.frame_color, config.frame_pen_width));
        painter.draw_rect(canvas_rect);
        regions.push(PrintRegion::CanvasFrame);
    }

    let mut painter = PainterGuard::new(painter);
    painter.set_clip_rect(canvas_rect.rounded());
    model.draw_canvas_items(&mut *painter, canvas_rect, maps, filter);
    regions.push(PrintRegion::CanvasContent);
}
