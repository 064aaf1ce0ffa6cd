use crate::api::{LayoutRectangles, PlotModel};
use crate::core::{AxisId, CoordinateTransform, Orientation, PerAxis, ScaleDiv, ScaleMap};

/// Builds one scale map per axis position with paint intervals in logical
/// coordinates.
///
/// Enabled axes map onto their scale rectangle minus border distances.
/// Disabled axes (and missing scale widgets) map onto the canvas minus the
/// layout's canvas margin so data plotted against them still has a range.
/// Vertical intervals run bottom to top.
#[must_use]
pub fn build_logical_scale_maps(
    model: &dyn PlotModel,
    layout: &LayoutRectangles,
) -> PerAxis<ScaleMap> {
    PerAxis::from_fn(|axis_id| build_logical_scale_map(model, layout, axis_id))
}

fn build_logical_scale_map(
    model: &dyn PlotModel,
    layout: &LayoutRectangles,
    axis_id: AxisId,
) -> ScaleMap {
    let axis = model.axis(axis_id);
    let mut map = ScaleMap::default();
    if let Some(axis) = axis {
        map.set_transformation(axis.transformation());
    }
    let div = axis.map_or_else(ScaleDiv::default, |axis| axis.scale_div());
    map.set_scale_interval(div.lower, div.upper);

    let (from, to) = match axis.filter(|axis| axis.is_enabled()) {
        Some(axis) => {
            let start = axis.start_border_dist();
            let end = axis.end_border_dist();
            let rect = layout.scale(axis_id);
            match axis_id.orientation() {
                Orientation::Horizontal => (rect.left() + start, rect.right() - end),
                Orientation::Vertical => (rect.bottom() - end, rect.top() + start),
            }
        }
        None => {
            let margin = layout.canvas_margins[axis_id];
            let canvas = layout.canvas;
            match axis_id.orientation() {
                Orientation::Horizontal => (canvas.left() + margin, canvas.right() - 1.0 - margin),
                Orientation::Vertical => (canvas.bottom() - 1.0 - margin, canvas.top() + margin),
            }
        }
    };
    map.set_paint_interval(from, to);
    map
}

/// Rescales every paint interval from logical to device coordinates, using
/// `sx` for horizontal axes and `sy` for vertical ones.
#[must_use]
pub fn to_device_scale_maps(
    maps: &PerAxis<ScaleMap>,
    transform: CoordinateTransform,
) -> PerAxis<ScaleMap> {
    PerAxis::from_fn(|axis_id| maps[axis_id].scaled_paint(transform.factor_for_axis(axis_id)))
}

#[cfg(test)]
mod tests {
    use super::{build_logical_scale_maps, to_device_scale_maps};
    use crate::api::print_test_support::demo_plot;
    use crate::api::{LayoutRectangles, PlotModel};
    use crate::core::{AxisId, CoordinateTransform, PerAxis, RectF, ScaleDiv};

    fn layout() -> LayoutRectangles {
        let mut layout = LayoutRectangles {
            canvas: RectF::new(50.0, 20.0, 400.0, 300.0),
            canvas_margins: PerAxis::from_fn(|_| 4.0),
            ..LayoutRectangles::default()
        };
        layout.scales[AxisId::YLeft] = RectF::new(0.0, 10.0, 50.0, 320.0);
        layout.scales[AxisId::XBottom] = RectF::new(40.0, 320.0, 420.0, 30.0);
        layout
    }

    #[test]
    fn enabled_axes_map_onto_scale_rect_minus_border_dists() {
        let plot = demo_plot();
        let maps = build_logical_scale_maps(&plot, &layout());

        let bottom = plot.axis(AxisId::XBottom).expect("axis");
        let (start, end) = (bottom.start_border_dist(), bottom.end_border_dist());
        assert_eq!(maps[AxisId::XBottom].p1(), 40.0 + start);
        assert_eq!(maps[AxisId::XBottom].p2(), 460.0 - end);

        let left = plot.axis(AxisId::YLeft).expect("axis");
        let (start, end) = (left.start_border_dist(), left.end_border_dist());
        assert_eq!(maps[AxisId::YLeft].p1(), 330.0 - end);
        assert_eq!(maps[AxisId::YLeft].p2(), 10.0 + start);
    }

    #[test]
    fn disabled_axes_anchor_to_canvas_margins() {
        let plot = demo_plot();
        let maps = build_logical_scale_maps(&plot, &layout());

        assert_eq!(maps[AxisId::YRight].p1(), 320.0 - 1.0 - 4.0);
        assert_eq!(maps[AxisId::YRight].p2(), 24.0);
        assert_eq!(maps[AxisId::XTop].p1(), 54.0);
        assert_eq!(maps[AxisId::XTop].p2(), 450.0 - 1.0 - 4.0);
    }

    #[test]
    fn data_interval_comes_from_scale_division() {
        let plot = demo_plot();
        let maps = build_logical_scale_maps(&plot, &layout());
        let div = plot.axis(AxisId::XBottom).expect("axis").scale_div();
        assert_eq!(
            ScaleDiv::new(maps[AxisId::XBottom].s1(), maps[AxisId::XBottom].s2()),
            div
        );
    }

    #[test]
    fn device_maps_use_axis_matching_factor() {
        let plot = demo_plot();
        let logical = build_logical_scale_maps(&plot, &layout());
        let device = to_device_scale_maps(&logical, CoordinateTransform::scale(2.0, 1.0));

        assert_eq!(
            device[AxisId::XBottom].paint_length(),
            2.0 * logical[AxisId::XBottom].paint_length()
        );
        assert_eq!(
            device[AxisId::YLeft].paint_length(),
            logical[AxisId::YLeft].paint_length()
        );
    }
}
