use crate::api::{CurveItem, GridItem, SimpleAxis, SimpleLegend, SimplePlot, UniformGridLayout};
use crate::core::{AxisId, PointF, SizeF};
use crate::render::{Color, Pen};

/// Plot with a title, a two-item legend, enabled left and bottom axes and
/// disabled right and top axes. All metrics are whole numbers.
pub(crate) fn demo_plot() -> SimplePlot {
    let legend = SimpleLegend::new(UniformGridLayout::default())
        .with_item(1, "signal", Color::rgb(0.8, 0.1, 0.1))
        .with_item(2, "baseline", Color::rgb(0.1, 0.1, 0.8));

    SimplePlot::new(SizeF::new(640.0, 480.0))
        .with_title("Demo")
        .with_axis(
            SimpleAxis::new(AxisId::XBottom)
                .with_scale(0.0, 10.0)
                .with_margin(4.0)
                .with_border_dists(10.0, 10.0),
        )
        .with_axis(
            SimpleAxis::new(AxisId::YLeft)
                .with_scale(-1.0, 1.0)
                .with_margin(2.0)
                .with_border_dists(8.0, 8.0),
        )
        .with_legend(legend)
        .with_item(GridItem::default())
        .with_item(CurveItem::new(
            vec![
                PointF::new(0.0, 0.0),
                PointF::new(2.5, 1.0),
                PointF::new(5.0, 0.0),
                PointF::new(7.5, -1.0),
                PointF::new(10.0, 0.0),
            ],
            Pen::new(Color::rgb(0.8, 0.1, 0.1), 2.0),
        ))
}
