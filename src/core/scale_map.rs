use serde::{Deserialize, Serialize};

/// Lower bound substituted for non-positive values on logarithmic scales.
pub const LOG_MIN: f64 = 1.0e-150;

/// How data values are spaced along a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleTransformation {
    #[default]
    Linear,
    Log10,
}

impl ScaleTransformation {
    fn forward(self, value: f64) -> f64 {
        match self {
            ScaleTransformation::Linear => value,
            ScaleTransformation::Log10 => value.max(LOG_MIN).ln(),
        }
    }

    fn backward(self, value: f64) -> f64 {
        match self {
            ScaleTransformation::Linear => value,
            ScaleTransformation::Log10 => value.exp(),
        }
    }
}

/// Bounds of an axis' current scale division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleDiv {
    pub lower: f64,
    pub upper: f64,
}

impl ScaleDiv {
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

impl Default for ScaleDiv {
    fn default() -> Self {
        Self::new(0.0, 1000.0)
    }
}

/// Mapping between a data interval `[s1, s2]` and a paint interval `[p1, p2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleMap {
    s1: f64,
    s2: f64,
    p1: f64,
    p2: f64,
    transformation: ScaleTransformation,
}

impl Default for ScaleMap {
    fn default() -> Self {
        Self {
            s1: 0.0,
            s2: 1.0,
            p1: 0.0,
            p2: 1.0,
            transformation: ScaleTransformation::Linear,
        }
    }
}

impl ScaleMap {
    #[must_use]
    pub fn new(transformation: ScaleTransformation, div: ScaleDiv, p1: f64, p2: f64) -> Self {
        let mut map = Self::default();
        map.set_transformation(transformation);
        map.set_scale_interval(div.lower, div.upper);
        map.set_paint_interval(p1, p2);
        map
    }

    pub fn set_transformation(&mut self, transformation: ScaleTransformation) {
        self.transformation = transformation;
        self.set_scale_interval(self.s1, self.s2);
    }

    pub fn set_scale_interval(&mut self, s1: f64, s2: f64) {
        let (s1, s2) = match self.transformation {
            ScaleTransformation::Linear => (s1, s2),
            ScaleTransformation::Log10 => (s1.max(LOG_MIN), s2.max(LOG_MIN)),
        };
        self.s1 = s1;
        self.s2 = s2;
    }

    pub fn set_paint_interval(&mut self, p1: f64, p2: f64) {
        self.p1 = p1;
        self.p2 = p2;
    }

    #[must_use]
    pub fn transformation(&self) -> ScaleTransformation {
        self.transformation
    }

    #[must_use]
    pub fn s1(&self) -> f64 {
        self.s1
    }

    #[must_use]
    pub fn s2(&self) -> f64 {
        self.s2
    }

    #[must_use]
    pub fn p1(&self) -> f64 {
        self.p1
    }

    #[must_use]
    pub fn p2(&self) -> f64 {
        self.p2
    }

    #[must_use]
    pub fn paint_length(&self) -> f64 {
        (self.p2 - self.p1).abs()
    }

    /// Maps a data value to paint coordinates.
    ///
    /// A zero-width data interval maps everything onto `p1`.
    #[must_use]
    pub fn transform(&self, value: f64) -> f64 {
        let t = self.transformation;
        let ts1 = t.forward(self.s1);
        let span = t.forward(self.s2) - ts1;
        if span == 0.0 {
            return self.p1;
        }
        self.p1 + (t.forward(value) - ts1) / span * (self.p2 - self.p1)
    }

    /// Maps a paint coordinate back to a data value.
    #[must_use]
    pub fn inv_transform(&self, paint: f64) -> f64 {
        let t = self.transformation;
        let ts1 = t.forward(self.s1);
        let paint_span = self.p2 - self.p1;
        if paint_span == 0.0 {
            return self.s1;
        }
        t.backward(ts1 + (paint - self.p1) / paint_span * (t.forward(self.s2) - ts1))
    }

    /// Same map with both paint bounds multiplied by `factor`.
    #[must_use]
    pub fn scaled_paint(mut self, factor: f64) -> Self {
        self.p1 *= factor;
        self.p2 *= factor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{LOG_MIN, ScaleDiv, ScaleMap, ScaleTransformation};
    use approx::assert_relative_eq;

    #[test]
    fn linear_map_interpolates_between_paint_bounds() {
        let map = ScaleMap::new(
            ScaleTransformation::Linear,
            ScaleDiv::new(0.0, 10.0),
            100.0,
            300.0,
        );
        assert_eq!(map.transform(0.0), 100.0);
        assert_eq!(map.transform(5.0), 200.0);
        assert_eq!(map.transform(10.0), 300.0);
        assert_eq!(map.inv_transform(250.0), 7.5);
    }

    #[test]
    fn vertical_maps_may_run_bottom_to_top() {
        let map = ScaleMap::new(
            ScaleTransformation::Linear,
            ScaleDiv::new(0.0, 1.0),
            400.0,
            0.0,
        );
        assert_eq!(map.transform(1.0), 0.0);
        assert_eq!(map.transform(0.25), 300.0);
        assert_eq!(map.paint_length(), 400.0);
    }

    #[test]
    fn log_map_spaces_decades_evenly() {
        let map = ScaleMap::new(
            ScaleTransformation::Log10,
            ScaleDiv::new(1.0, 100.0),
            0.0,
            200.0,
        );
        assert_relative_eq!(map.transform(10.0), 100.0, max_relative = 1e-9);
        assert_relative_eq!(map.inv_transform(100.0), 10.0, max_relative = 1e-9);
    }

    #[test]
    fn log_map_clamps_non_positive_bounds() {
        let map = ScaleMap::new(
            ScaleTransformation::Log10,
            ScaleDiv::new(-5.0, 100.0),
            0.0,
            1.0,
        );
        assert_eq!(map.s1(), LOG_MIN);
    }

    #[test]
    fn degenerate_interval_maps_onto_first_paint_bound() {
        let map = ScaleMap::new(
            ScaleTransformation::Linear,
            ScaleDiv::new(3.0, 3.0),
            10.0,
            20.0,
        );
        assert_eq!(map.transform(99.0), 10.0);
    }

    #[test]
    fn scaled_paint_keeps_data_interval() {
        let map = ScaleMap::new(
            ScaleTransformation::Linear,
            ScaleDiv::new(0.0, 10.0),
            5.0,
            105.0,
        )
        .scaled_paint(2.0);
        assert_eq!((map.p1(), map.p2()), (10.0, 210.0));
        assert_eq!((map.s1(), map.s2()), (0.0, 10.0));
    }
}
