use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};

/// The four fixed axis positions of a plot.
///
/// Declaration order is the stable iteration and draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum AxisId {
    YLeft,
    YRight,
    XBottom,
    XTop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Side of its rectangle a scale is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleAlignment {
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisId {
    pub const ALL: [AxisId; 4] = [
        AxisId::YLeft,
        AxisId::YRight,
        AxisId::XBottom,
        AxisId::XTop,
    ];

    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            AxisId::YLeft | AxisId::YRight => Orientation::Vertical,
            AxisId::XBottom | AxisId::XTop => Orientation::Horizontal,
        }
    }

    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self.orientation(), Orientation::Horizontal)
    }

    #[must_use]
    pub const fn alignment(self) -> ScaleAlignment {
        match self {
            AxisId::YLeft => ScaleAlignment::Left,
            AxisId::YRight => ScaleAlignment::Right,
            AxisId::XBottom => ScaleAlignment::Bottom,
            AxisId::XTop => ScaleAlignment::Top,
        }
    }
}

/// Per-axis table keyed by [`AxisId`].
pub type PerAxis<T> = EnumMap<AxisId, T>;

#[cfg(test)]
mod tests {
    use super::{AxisId, Orientation, PerAxis};

    #[test]
    fn orientation_splits_x_and_y_axes() {
        assert_eq!(AxisId::YLeft.orientation(), Orientation::Vertical);
        assert_eq!(AxisId::YRight.orientation(), Orientation::Vertical);
        assert!(AxisId::XBottom.is_horizontal());
        assert!(AxisId::XTop.is_horizontal());
    }

    #[test]
    fn per_axis_table_iterates_in_declaration_order() {
        let table: PerAxis<u8> = PerAxis::default();
        let order: Vec<AxisId> = table.iter().map(|(axis, _)| axis).collect();
        assert_eq!(order, AxisId::ALL.to_vec());
    }
}
