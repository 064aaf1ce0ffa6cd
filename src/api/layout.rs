use serde::{Deserialize, Serialize};

use crate::api::{LayoutOptions, MarginOverrides, PlotModel};
use crate::core::{AxisId, PerAxis, RectF};

/// Sub-rectangles of one layout pass, in logical coordinates.
///
/// Regions that are absent or ignored collapse to zero size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutRectangles {
    pub title: RectF,
    pub legend: RectF,
    pub scales: PerAxis<RectF>,
    pub canvas: RectF,
    /// Distance kept between the canvas border and data plotted against a
    /// disabled axis.
    pub canvas_margins: PerAxis<f64>,
}

impl LayoutRectangles {
    #[must_use]
    pub fn scale(&self, axis: AxisId) -> RectF {
        self.scales[axis]
    }
}

/// Computes region rectangles for a plot inside a target rectangle.
pub trait LayoutEngine {
    fn activate(
        &self,
        model: &dyn PlotModel,
        rect: RectF,
        options: LayoutOptions,
        margins: &MarginOverrides,
    ) -> LayoutRectangles;
}

/// Reference layout: title strip on top, legend strip on the right, one
/// scale strip per enabled axis around the canvas.
///
/// Frames and scrollbars have no footprint in this layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackedLayoutEngine {
    /// Gap between title, legend and the plot area.
    pub spacing: f64,
    pub canvas_margin: f64,
    /// Title strip height as a multiple of the title font size.
    pub title_line_factor: f64,
}

impl Default for StackedLayoutEngine {
    fn default() -> Self {
        Self {
            spacing: 5.0,
            canvas_margin: 4.0,
            title_line_factor: 2.0,
        }
    }
}

impl LayoutEngine for StackedLayoutEngine {
    fn activate(
        &self,
        model: &dyn PlotModel,
        rect: RectF,
        options: LayoutOptions,
        margins: &MarginOverrides,
    ) -> LayoutRectangles {
        let outer = if options.contains(LayoutOptions::IGNORE_MARGIN) {
            0.0
        } else {
            model.outer_margin().max(0.0)
        };
        let left = rect.left() + outer;
        let mut top = rect.top() + outer;
        let mut right = (rect.right() - outer).max(left);
        let bottom = (rect.bottom() - outer).max(top);

        let mut layout = LayoutRectangles {
            canvas_margins: PerAxis::from_fn(|_| self.canvas_margin),
            ..LayoutRectangles::default()
        };

        layout.title = RectF::new(left, top, right - left, 0.0);
        if !options.contains(LayoutOptions::IGNORE_TITLE) && !model.title().is_empty() {
            let height = (model.style().title.font.point_size * self.title_line_factor)
                .min(bottom - top);
            layout.title.height = height;
            top = (top + height + self.spacing).min(bottom);
        }

        layout.legend = RectF::new(right, top, 0.0, bottom - top);
        if !options.contains(LayoutOptions::IGNORE_LEGEND) {
            if let Some(legend) = model.legend().filter(|legend| !legend.is_empty()) {
                let width = legend.size_hint().width.clamp(0.0, (right - left) / 2.0);
                layout.legend = RectF::new(right - width, top, width, bottom - top);
                right = (right - width - self.spacing).max(left);
            }
        }

        let thickness = |axis_id: AxisId| -> f64 {
            model
                .axis(axis_id)
                .filter(|axis| axis.is_enabled())
                .map_or(0.0, |axis| axis.extent_hint() + margins.effective(axis_id))
        };
        let left_width = thickness(AxisId::YLeft);
        let right_width = thickness(AxisId::YRight);
        let top_height = thickness(AxisId::XTop);
        let bottom_height = thickness(AxisId::XBottom);

        let canvas_left = (left + left_width).min(right);
        let canvas_right = (right - right_width).max(canvas_left);
        let canvas_top = (top + top_height).min(bottom);
        let canvas_bottom = (bottom - bottom_height).max(canvas_top);
        layout.canvas = RectF::from_edges(canvas_left, canvas_top, canvas_right, canvas_bottom);
        let canvas = layout.canvas;

        // Horizontal scales stretch by their border distances so the scale
        // interval lines up with the canvas edges.
        let horizontal_span = |axis_id: AxisId| -> (f64, f64) {
            let (start, end) = model
                .axis(axis_id)
                .filter(|axis| axis.is_enabled())
                .map_or((0.0, 0.0), |axis| {
                    (axis.start_border_dist(), axis.end_border_dist())
                });
            (
                (canvas.left() - start).max(left),
                (canvas.right() + end).min(right),
            )
        };
        let vertical_span = |axis_id: AxisId| -> (f64, f64) {
            let (start, end) = model
                .axis(axis_id)
                .filter(|axis| axis.is_enabled())
                .map_or((0.0, 0.0), |axis| {
                    (axis.start_border_dist(), axis.end_border_dist())
                });
            (
                (canvas.top() - start).max(top),
                (canvas.bottom() + end).min(bottom),
            )
        };

        let (y_top, y_bottom) = vertical_span(AxisId::YLeft);
        layout.scales[AxisId::YLeft] = RectF::from_edges(left, y_top, canvas.left(), y_bottom);
        let (y_top, y_bottom) = vertical_span(AxisId::YRight);
        layout.scales[AxisId::YRight] =
            RectF::from_edges(canvas.right(), y_top, right.max(canvas.right()), y_bottom);
        let (x_left, x_right) = horizontal_span(AxisId::XTop);
        layout.scales[AxisId::XTop] = RectF::from_edges(x_left, top, x_right, canvas.top());
        let (x_left, x_right) = horizontal_span(AxisId::XBottom);
        layout.scales[AxisId::XBottom] =
            RectF::from_edges(x_left, canvas.bottom(), x_right, bottom.max(canvas.bottom()));

        layout
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutEngine, StackedLayoutEngine};
    use crate::api::print_test_support::demo_plot;
    use crate::api::{LayoutOptions, MarginOverrides, PlotModel};
    use crate::core::{AxisId, RectF};

    fn full_layout_options() -> LayoutOptions {
        LayoutOptions::IGNORE_FRAMES | LayoutOptions::IGNORE_SCROLLBARS
    }

    #[test]
    fn regions_stay_inside_target_rect() {
        let plot = demo_plot();
        let target = RectF::new(0.0, 0.0, 640.0, 480.0);
        let margins = MarginOverrides::capture(&plot, false);
        let layout = StackedLayoutEngine::default().activate(
            &plot,
            target,
            full_layout_options(),
            &margins,
        );

        assert!(layout.title.is_valid());
        assert!(layout.legend.is_valid());
        assert!(layout.canvas.is_valid());
        for rect in [layout.title, layout.legend, layout.canvas] {
            assert!(target.contains_rect(rect), "{rect:?} outside {target:?}");
        }
        for (_, rect) in layout.scales.iter() {
            assert!(target.contains_rect(*rect), "{rect:?} outside {target:?}");
        }
    }

    #[test]
    fn ignored_legend_and_title_collapse() {
        let plot = demo_plot();
        let margins = MarginOverrides::capture(&plot, false);
        let layout = StackedLayoutEngine::default().activate(
            &plot,
            RectF::new(0.0, 0.0, 640.0, 480.0),
            full_layout_options() | LayoutOptions::IGNORE_LEGEND | LayoutOptions::IGNORE_TITLE,
            &margins,
        );
        assert_eq!(layout.legend.area(), 0.0);
        assert_eq!(layout.title.area(), 0.0);
    }

    #[test]
    fn disabled_axis_gets_zero_width_strip() {
        let plot = demo_plot();
        assert!(!plot.axis(AxisId::YRight).expect("axis").is_enabled());
        let margins = MarginOverrides::capture(&plot, false);
        let layout = StackedLayoutEngine::default().activate(
            &plot,
            RectF::new(0.0, 0.0, 640.0, 480.0),
            full_layout_options(),
            &margins,
        );
        assert_eq!(layout.scale(AxisId::YRight).width, 0.0);
        assert!(layout.scale(AxisId::YLeft).width > 0.0);
    }

    #[test]
    fn zeroed_margins_shrink_scale_strips() {
        let plot = demo_plot();
        let engine = StackedLayoutEngine::default();
        let target = RectF::new(0.0, 0.0, 640.0, 480.0);
        let with_margin = engine.activate(
            &plot,
            target,
            full_layout_options(),
            &MarginOverrides::capture(&plot, false),
        );
        let without_margin = engine.activate(
            &plot,
            target,
            full_layout_options(),
            &MarginOverrides::capture(&plot, true),
        );
        let margin = plot.axis(AxisId::XBottom).expect("axis").margin();
        assert!(margin > 0.0);
        assert_eq!(
            with_margin.scale(AxisId::XBottom).height
                - without_margin.scale(AxisId::XBottom).height,
            margin
        );
    }

    #[test]
    fn outer_margin_only_applies_without_ignore_flag() {
        let mut plot = demo_plot();
        plot.set_outer_margin(10.0);
        let margins = MarginOverrides::capture(&plot, false);
        let engine = StackedLayoutEngine::default();
        let target = RectF::new(0.0, 0.0, 640.0, 480.0);

        let honored = engine.activate(&plot, target, full_layout_options(), &margins);
        let ignored = engine.activate(
            &plot,
            target,
            full_layout_options() | LayoutOptions::IGNORE_MARGIN,
            &margins,
        );
        assert_eq!(honored.title.x, 10.0);
        assert_eq!(ignored.title.x, 0.0);
    }
}
