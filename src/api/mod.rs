mod axis_scale_map_builder;
mod layout;
mod plot_model;
mod plot_printer;
mod print_compositor;
mod print_config;
mod print_filter;
mod print_options;
#[cfg(test)]
mod print_test_support;
mod simple_axis;
mod simple_legend;
mod simple_plot;
mod state_guard;

pub use axis_scale_map_builder::{build_logical_scale_maps, to_device_scale_maps};
pub use layout::{LayoutEngine, LayoutRectangles, StackedLayoutEngine};
pub use plot_model::{
    AxisStyle, Legend, LegendEntry, LegendGridLayout, LegendIdentifierDrawer, LegendItem,
    LegendKey, PlotAxis, PlotModel, PlotStyle, ScaleDraw, TextStyle,
};
pub use plot_printer::{PlotPrinter, PrintOutcome, PrintSummary, SkipReason, surface_print_rect};
pub use print_compositor::{DrawnRegions, PrintRegion};
pub use print_config::PrintConfig;
pub use print_filter::{DefaultPrintFilter, FilterScope, PrintFilter};
pub use print_options::{LayoutOptions, PrintOptions};
pub use simple_axis::{ColorBar, LinearScaleDraw, SimpleAxis, format_tick_label};
pub use simple_legend::{SimpleLegend, SolidSwatch, UniformGridLayout};
pub use simple_plot::{CanvasItemRenderer, CurveItem, GridItem, SimplePlot};
pub use state_guard::{MarginOverrides, ScaleDrawPlacement};
