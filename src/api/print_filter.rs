use tracing::trace;

use crate::api::{PlotModel, PlotStyle, PrintOptions};
use crate::render::Color;

/// Options plus lifecycle hooks wrapped around one print pass.
///
/// `apply` runs once before anything is drawn; `reset` runs once after all
/// drawing and must leave the model exactly as `apply` found it.
pub trait PrintFilter {
    fn options(&self) -> PrintOptions;

    fn apply(&mut self, _model: &mut dyn PlotModel, _is_scaling: bool) {}

    fn reset(&mut self, _model: &mut dyn PlotModel) {}
}

/// Bare options act as a filter with no-op hooks.
impl PrintFilter for PrintOptions {
    fn options(&self) -> PrintOptions {
        *self
    }
}

/// Filter that adapts colors for paper-like media.
///
/// Without `PRINT_BACKGROUND` the canvas background becomes white and grid
/// lines are drawn in grays; everything is put back on `reset`.
#[derive(Debug, Clone, Default)]
pub struct DefaultPrintFilter {
    options: PrintOptions,
    saved_style: Option<PlotStyle>,
}

impl DefaultPrintFilter {
    #[must_use]
    pub fn new(options: PrintOptions) -> Self {
        Self {
            options,
            saved_style: None,
        }
    }

    pub fn set_options(&mut self, options: PrintOptions) {
        self.options = options;
    }

    /// Whether `apply` ran without a matching `reset` yet.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.saved_style.is_some()
    }

    /// Print color for the canvas background.
    #[must_use]
    pub fn canvas_background(&self, color: Color) -> Color {
        if self.options.contains(PrintOptions::PRINT_BACKGROUND) {
            color
        } else {
            Color::WHITE
        }
    }

    #[must_use]
    pub fn major_grid(&self, color: Color) -> Color {
        if self.options.contains(PrintOptions::PRINT_BACKGROUND) {
            color
        } else {
            Color::DARK_GRAY
        }
    }

    #[must_use]
    pub fn minor_grid(&self, color: Color) -> Color {
        if self.options.contains(PrintOptions::PRINT_BACKGROUND) {
            color
        } else {
            Color::GRAY
        }
    }
}

impl PrintFilter for DefaultPrintFilter {
    fn options(&self) -> PrintOptions {
        self.options
    }

    fn apply(&mut self, model: &mut dyn PlotModel, _is_scaling: bool) {
        let snapshot = model.style().clone();
        let style = model.style_mut();
        style.canvas_background = self.canvas_background(snapshot.canvas_background);
        style.major_grid = self.major_grid(snapshot.major_grid);
        style.minor_grid = self.minor_grid(snapshot.minor_grid);
        self.saved_style = Some(snapshot);
    }

    fn reset(&mut self, model: &mut dyn PlotModel) {
        if let Some(saved) = self.saved_style.take() {
            *model.style_mut() = saved;
        }
    }
}

/// Pairs one `apply` with exactly one `reset`.
///
/// `apply` runs on construction and `reset` on drop, so every exit path of
/// the print pass resets the model. The model and filter are only reachable
/// through the scope while it is alive.
pub struct FilterScope<'a> {
    filter: &'a mut dyn PrintFilter,
    model: &'a mut dyn PlotModel,
}

impl<'a> FilterScope<'a> {
    pub fn enter(
        filter: &'a mut dyn PrintFilter,
        model: &'a mut dyn PlotModel,
        is_scaling: bool,
    ) -> Self {
        trace!(is_scaling, "apply print filter");
        filter.apply(model, is_scaling);
        Self { filter, model }
    }

    #[must_use]
    pub fn options(&self) -> PrintOptions {
        self.filter.options()
    }

    #[must_use]
    pub fn filter(&self) -> &dyn PrintFilter {
        &*self.filter
    }

    #[must_use]
    pub fn model(&self) -> &dyn PlotModel {
        &*self.model
    }

    pub fn model_mut(&mut self) -> &mut dyn PlotModel {
        &mut *self.model
    }
}

impl Drop for FilterScope<'_> {
    fn drop(&mut self) {
        trace!("reset print filter");
        self.filter.reset(&mut *self.model);
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultPrintFilter, FilterScope, PrintFilter};
    use crate::api::print_test_support::demo_plot;
    use crate::api::{PlotModel, PrintOptions};
    use crate::render::Color;

    #[derive(Default)]
    struct CountingFilter {
        applies: usize,
        resets: usize,
        last_scaling: Option<bool>,
    }

    impl PrintFilter for CountingFilter {
        fn options(&self) -> PrintOptions {
            PrintOptions::PRINT_ALL
        }

        fn apply(&mut self, _model: &mut dyn PlotModel, is_scaling: bool) {
            self.applies += 1;
            self.last_scaling = Some(is_scaling);
        }

        fn reset(&mut self, _model: &mut dyn PlotModel) {
            self.resets += 1;
        }
    }

    #[test]
    fn scope_applies_on_enter_and_resets_on_drop() {
        let mut plot = demo_plot();
        let mut filter = CountingFilter::default();
        {
            let scope = FilterScope::enter(&mut filter, &mut plot, true);
            assert_eq!(scope.options(), PrintOptions::PRINT_ALL);
        }
        assert_eq!(filter.applies, 1);
        assert_eq!(filter.resets, 1);
        assert_eq!(filter.last_scaling, Some(true));
    }

    #[test]
    fn default_filter_whitens_background_and_restores_it() {
        let mut plot = demo_plot();
        plot.style_mut().canvas_background = Color::rgb(0.1, 0.1, 0.3);
        let before = plot.style().clone();

        let mut filter = DefaultPrintFilter::new(PrintOptions::PRINT_TITLE);
        filter.apply(&mut plot, false);
        assert!(filter.is_applied());
        assert_eq!(plot.style().canvas_background, Color::WHITE);
        assert_eq!(plot.style().major_grid, Color::DARK_GRAY);

        filter.reset(&mut plot);
        assert!(!filter.is_applied());
        assert_eq!(plot.style(), &before);
    }

    #[test]
    fn default_filter_keeps_colors_when_printing_background() {
        let mut plot = demo_plot();
        plot.style_mut().canvas_background = Color::rgb(0.2, 0.4, 0.6);
        let mut filter = DefaultPrintFilter::new(PrintOptions::PRINT_ALL);
        filter.apply(&mut plot, false);
        assert_eq!(plot.style().canvas_background, Color::rgb(0.2, 0.4, 0.6));
        filter.reset(&mut plot);
    }

    #[test]
    fn reset_without_apply_leaves_model_untouched() {
        let mut plot = demo_plot();
        let before = plot.style().clone();
        DefaultPrintFilter::default().reset(&mut plot);
        assert_eq!(plot.style(), &before);
    }
}
