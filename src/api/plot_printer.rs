use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::api::axis_scale_map_builder::{build_logical_scale_maps, to_device_scale_maps};
use crate::api::print_compositor::{
    DrawnRegions, PrintRegion, print_canvas, print_legend, print_scales, print_title,
};
use crate::api::{
    FilterScope, LayoutOptions, LayoutRectangles, MarginOverrides, PlotModel, PrintConfig,
    PrintFilter, PrintOptions,
};
use crate::core::{CoordinateTransform, PerAxis, RectF, ScaleMap};
use crate::error::PrintResult;
use crate::render::{Painter, PainterGuard, PrintSurface};

/// Why a print call drew nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    InactivePainter,
    InvalidRect,
    NullPlotSize,
    InvalidDensity,
}

/// Geometry of one completed print pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintSummary {
    pub transform: CoordinateTransform,
    /// Layout in logical coordinates.
    pub layout: LayoutRectangles,
    pub layout_options: LayoutOptions,
    /// Canvas rectangle in device coordinates.
    pub canvas_rect: RectF,
    /// Per-axis maps in device coordinates, as handed to the canvas.
    pub maps: PerAxis<ScaleMap>,
    /// Regions drawn, in draw order.
    pub regions: DrawnRegions,
    pub legend_items: usize,
}

impl PrintSummary {
    #[must_use]
    pub fn drew(&self, region: PrintRegion) -> bool {
        self.regions.contains(&region)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrintOutcome {
    Printed(PrintSummary),
    /// Input was invalid; nothing was drawn and nothing was touched.
    Skipped(SkipReason),
}

impl PrintOutcome {
    #[must_use]
    pub fn summary(&self) -> Option<&PrintSummary> {
        match self {
            PrintOutcome::Printed(summary) => Some(summary),
            PrintOutcome::Skipped(_) => None,
        }
    }

    #[must_use]
    pub fn is_printed(&self) -> bool {
        matches!(self, PrintOutcome::Printed(_))
    }
}

/// Target rectangle for a `width × height` surface.
///
/// With `cap_portrait` set, a surface taller than wide gets its height
/// reduced to `aspect × width` (truncated to whole pixels).
#[must_use]
pub fn surface_print_rect(width: i32, height: i32, cap_portrait: bool) -> RectF {
    let width = f64::from(width);
    let mut height = f64::from(height);
    let aspect = width / height;
    if cap_portrait && aspect < 1.0 {
        height = (aspect * width).trunc();
    }
    RectF::new(0.0, 0.0, width, height)
}

/// Renders a plot model onto an output whose density may differ from the
/// widget's.
///
/// Layout is computed once in the widget's logical space. Title, legend and
/// scales are drawn through a scaled world transform; the canvas is drawn in
/// device pixels with pre-scaled scale maps.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotPrinter {
    config: PrintConfig,
}

impl PlotPrinter {
    pub fn new(config: PrintConfig) -> PrintResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// Prints onto a whole surface, sized from the surface's dimensions.
    ///
    /// Only opening the drawing context can fail; invalid input still
    /// yields `Ok(PrintOutcome::Skipped(_))`.
    pub fn print_to_surface<S: PrintSurface>(
        &self,
        surface: &mut S,
        model: &mut dyn PlotModel,
        filter: &mut dyn PrintFilter,
    ) -> PrintResult<PrintOutcome> {
        let rect = surface_print_rect(
            surface.width(),
            surface.height(),
            self.config.cap_portrait_aspect,
        );
        surface.paint(|painter| self.print(painter, model, rect, filter))
    }

    /// Prints into `rect` (device coordinates) of an open drawing context.
    ///
    /// Invalid input is a silent no-op: an inactive painter, an empty
    /// rectangle, a null plot size or an unusable density draw nothing and
    /// leave the model and filter untouched.
    pub fn print(
        &self,
        painter: &mut dyn Painter,
        model: &mut dyn PlotModel,
        rect: RectF,
        filter: &mut dyn PrintFilter,
    ) -> PrintOutcome {
        let transform = match validate_input(painter, model, rect) {
            Ok(transform) => transform,
            Err(reason) => {
                debug!(?reason, ?rect, "print skipped");
                return PrintOutcome::Skipped(reason);
            }
        };
        debug!(
            sx = transform.sx(),
            sy = transform.sy(),
            ?rect,
            options = ?filter.options(),
            "print plot"
        );

        let mut painter = PainterGuard::new(painter);
        let mut scope = FilterScope::enter(filter, model, transform.is_scaling());
        let options = scope.options();

        let margins = MarginOverrides::capture(
            scope.model(),
            options.contains(PrintOptions::PRINT_FRAME_WITH_SCALES),
        );
        let layout_options = LayoutOptions::for_print(options);
        let layout_rect = transform.inverted().map_rect(rect);
        let layout = {
            let model = scope.model();
            model
                .layout_engine()
                .activate(model, layout_rect, layout_options, &margins)
        };
        trace!(?layout_rect, canvas = ?layout.canvas, "layout activated");

        let mut regions = DrawnRegions::new();
        let mut legend_items = 0;
        painter.set_world_transform(transform);

        if options.contains(PrintOptions::PRINT_TITLE) && !scope.model().title().is_empty() {
            let model = scope.model();
            print_title(&mut *painter, model.title(), &model.style().title, layout.title);
            regions.push(PrintRegion::Title);
        }

        if options.contains(PrintOptions::PRINT_LEGEND) {
            let model = scope.model();
            if let Some(legend) = model.legend().filter(|legend| !legend.is_empty()) {
                legend_items = print_legend(
                    &mut *painter,
                    legend,
                    &model.style().legend,
                    layout.legend,
                    self.config.legend_clip_items,
                );
                regions.push(PrintRegion::Legend);
            }
        }

        let scales = print_scales(&mut *painter, scope.model_mut(), &layout, &margins);
        regions.extend(scales.into_iter().map(PrintRegion::Scale));

        let logical_maps = build_logical_scale_maps(scope.model(), &layout);

        // Raster content cannot ride the painter's scale: draw the canvas in
        // device pixels with pre-scaled maps.
        painter.reset_transform();
        let canvas_rect = transform.map_rect(layout.canvas);
        let maps = to_device_scale_maps(&logical_maps, transform);

        print_canvas(
            &mut *painter,
            scope.model(),
            scope.filter(),
            canvas_rect,
            &maps,
            &self.config,
            &mut regions,
        );

        margins.restore(scope.model_mut());
        drop(scope);

        debug!(regions = regions.len(), legend_items, "print finished");
        PrintOutcome::Printed(PrintSummary {
            transform,
            layout,
            layout_options,
            canvas_rect,
            maps,
            regions,
            legend_items,
        })
    }
}

fn validate_input(
    painter: &dyn Painter,
    model: &dyn PlotModel,
    rect: RectF,
) -> Result<CoordinateTransform, SkipReason> {
    if !painter.is_active() {
        return Err(SkipReason::InactivePainter);
    }
    if !rect.is_valid() {
        return Err(SkipReason::InvalidRect);
    }
    if model.size().is_null() {
        return Err(SkipReason::NullPlotSize);
    }
    CoordinateTransform::from_densities(painter.device_dpi(), model.logical_dpi())
        .map_err(|_| SkipReason::InvalidDensity)
}

#[cfg(test)]
mod tests {
    use super::{PlotPrinter, PrintOutcome, SkipReason, surface_print_rect};
    use crate::api::print_test_support::demo_plot;
    use crate::api::{PlotModel, PrintOptions};
    use crate::core::{AxisId, Dpi, RectF};
    use crate::render::{PaintEngineKind, RecordingPainter};

    #[test]
    fn portrait_surface_height_is_capped() {
        let rect = surface_print_rect(600, 900, true);
        assert_eq!(rect, RectF::new(0.0, 0.0, 600.0, 400.0));
        assert_eq!(
            surface_print_rect(600, 900, false),
            RectF::new(0.0, 0.0, 600.0, 900.0)
        );
        assert_eq!(
            surface_print_rect(900, 600, true),
            RectF::new(0.0, 0.0, 900.0, 600.0)
        );
    }

    #[test]
    fn zero_height_surface_yields_invalid_rect() {
        assert!(!surface_print_rect(600, 0, true).is_valid());
        assert!(!surface_print_rect(0, 600, true).is_valid());
    }

    #[test]
    fn inactive_painter_is_a_silent_no_op() {
        let mut plot = demo_plot();
        let mut painter = RecordingPainter::inactive();
        let mut options = PrintOptions::PRINT_ALL;
        let outcome = PlotPrinter::default().print(
            &mut painter,
            &mut plot,
            RectF::new(0.0, 0.0, 100.0, 100.0),
            &mut options,
        );
        assert_eq!(outcome, PrintOutcome::Skipped(SkipReason::InactivePainter));
        assert!(painter.frame().is_empty());
    }

    #[test]
    fn restores_painter_state_after_print() {
        let mut plot = demo_plot();
        let mut painter = RecordingPainter::new(Dpi::uniform(192.0), PaintEngineKind::Raster);
        let mut options = PrintOptions::PRINT_ALL | PrintOptions::PRINT_FRAME_WITH_SCALES;
        let outcome = PlotPrinter::default().print(
            &mut painter,
            &mut plot,
            RectF::new(0.0, 0.0, 1280.0, 960.0),
            &mut options,
        );
        assert!(outcome.is_printed());
        assert_eq!(painter.depth(), 0);
        assert_eq!(painter.clip_rect(), None);
        assert!(plot.axis(AxisId::XBottom).expect("axis").margin() > 0.0);
    }
}
