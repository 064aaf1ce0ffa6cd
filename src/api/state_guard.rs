use std::ops::Deref;

use tracing::warn;

use crate::api::{PlotModel, ScaleDraw};
use crate::core::{AxisId, PerAxis, PointF};

/// Effective axis margins for one print pass.
///
/// Layout and scale placement read margins from here instead of the axis
/// widgets, so forcing margins to zero never touches persisted state. The
/// persisted values seen at capture time are kept and re-asserted by
/// [`MarginOverrides::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarginOverrides {
    captured: PerAxis<Option<f64>>,
    effective: PerAxis<Option<f64>>,
}

impl MarginOverrides {
    /// Captures every axis margin; with `zero_margins` the effective margins
    /// are forced to zero.
    #[must_use]
    pub fn capture(model: &dyn PlotModel, zero_margins: bool) -> Self {
        let mut overrides = Self::default();
        for axis_id in AxisId::ALL {
            if let Some(axis) = model.axis(axis_id) {
                let margin = axis.margin();
                overrides.captured[axis_id] = Some(margin);
                overrides.effective[axis_id] = Some(if zero_margins { 0.0 } else { margin });
            }
        }
        overrides
    }

    /// Margin layout and scale placement must use for `axis`.
    #[must_use]
    pub fn effective(&self, axis: AxisId) -> f64 {
        self.effective[axis].unwrap_or(0.0)
    }

    #[must_use]
    pub fn captured(&self, axis: AxisId) -> Option<f64> {
        self.captured[axis]
    }

    #[must_use]
    pub fn is_overriding(&self) -> bool {
        AxisId::ALL
            .iter()
            .any(|&axis| self.captured[axis] != self.effective[axis])
    }

    /// Writes back every captured margin that no longer matches, covering
    /// all axis positions. Returns how many margins had drifted.
    pub fn restore(&self, model: &mut dyn PlotModel) -> usize {
        let mut rewritten = 0;
        for axis_id in AxisId::ALL {
            let Some(captured) = self.captured[axis_id] else {
                continue;
            };
            if let Some(axis) = model.axis_mut(axis_id) {
                if axis.margin() != captured {
                    warn!(?axis_id, captured, current = axis.margin(), "restoring axis margin");
                    axis.set_margin(captured);
                    rewritten += 1;
                }
            }
        }
        rewritten
    }
}

/// Temporarily moves and resizes a scale draw; the previous position and
/// length come back on drop.
pub struct ScaleDrawPlacement<'a> {
    draw: &'a mut dyn ScaleDraw,
    saved_pos: PointF,
    saved_length: f64,
}

impl<'a> ScaleDrawPlacement<'a> {
    pub fn new(draw: &'a mut dyn ScaleDraw, pos: PointF, length: f64) -> Self {
        let saved_pos = draw.pos();
        let saved_length = draw.length();
        draw.move_to(pos);
        draw.set_length(length);
        Self {
            draw,
            saved_pos,
            saved_length,
        }
    }
}

impl<'a> Deref for ScaleDrawPlacement<'a> {
    type Target = dyn ScaleDraw + 'a;

    fn deref(&self) -> &Self::Target {
        self.draw
    }
}

impl Drop for ScaleDrawPlacement<'_> {
    fn drop(&mut self) {
        self.draw.move_to(self.saved_pos);
        self.draw.set_length(self.saved_length);
    }
}

#[cfg(test)]
mod tests {
    use super::{MarginOverrides, ScaleDrawPlacement};
    use crate::api::print_test_support::demo_plot;
    use crate::api::PlotModel;
    use crate::core::{AxisId, PointF};

    #[test]
    fn zeroing_overrides_without_touching_axes() {
        let mut plot = demo_plot();
        for axis_id in AxisId::ALL {
            if let Some(axis) = plot.axis_mut(axis_id) {
                axis.set_margin(6.0);
            }
        }

        let overrides = MarginOverrides::capture(&plot, true);
        assert!(overrides.is_overriding());
        for axis_id in AxisId::ALL {
            assert_eq!(overrides.effective(axis_id), 0.0);
            assert_eq!(overrides.captured(axis_id), Some(6.0));
            assert_eq!(plot.axis(axis_id).map(|axis| axis.margin()), Some(6.0));
        }
    }

    #[test]
    fn restore_rewrites_only_drifted_margins() {
        let mut plot = demo_plot();
        let overrides = MarginOverrides::capture(&plot, false);
        assert!(!overrides.is_overriding());

        if let Some(axis) = plot.axis_mut(AxisId::XTop) {
            axis.set_margin(42.0);
        }
        assert_eq!(overrides.restore(&mut plot), 1);
        assert_eq!(
            plot.axis(AxisId::XTop).map(|axis| axis.margin()),
            overrides.captured(AxisId::XTop)
        );
        assert_eq!(overrides.restore(&mut plot), 0);
    }

    #[test]
    fn placement_restores_position_and_length() {
        let mut plot = demo_plot();
        let axis = plot.axis_mut(AxisId::XBottom).expect("bottom axis");
        let original_pos = axis.scale_draw().pos();
        let original_length = axis.scale_draw().length();
        {
            let placed =
                ScaleDrawPlacement::new(axis.scale_draw_mut(), PointF::new(12.0, 34.0), 250.0);
            assert_eq!(placed.pos(), PointF::new(12.0, 34.0));
            assert_eq!(placed.length(), 250.0);
        }
        assert_eq!(axis.scale_draw().pos(), original_pos);
        assert_eq!(axis.scale_draw().length(), original_length);
    }
}
