use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::{
    Legend, LegendEntry, LegendGridLayout, LegendIdentifierDrawer, LegendItem, LegendKey,
};
use crate::core::{RectF, SizeF};
use crate::render::{Color, Painter};

/// Grid of equally sized cells filled row by row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformGridLayout {
    pub column_width: f64,
    pub item_height: f64,
    pub max_columns: usize,
}

impl Default for UniformGridLayout {
    fn default() -> Self {
        Self {
            column_width: 96.0,
            item_height: 20.0,
            max_columns: 1,
        }
    }
}

impl LegendGridLayout for UniformGridLayout {
    fn columns_for_width(&self, width: f64) -> usize {
        if self.column_width <= 0.0 || !width.is_finite() {
            return 1;
        }
        let fitting = (width / self.column_width).floor().max(1.0) as usize;
        fitting.min(self.max_columns.max(1))
    }

    fn layout_items(&self, rect: RectF, columns: usize, count: usize) -> Vec<RectF> {
        let columns = columns.max(1);
        let cell_width = rect.width / columns as f64;
        (0..count)
            .map(|index| {
                let column = index % columns;
                let row = index / columns;
                RectF::new(
                    rect.x + column as f64 * cell_width,
                    rect.y + row as f64 * self.item_height,
                    cell_width,
                    self.item_height,
                )
            })
            .collect()
    }
}

/// Identifier drawn as a filled square centered in its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidSwatch {
    pub color: Color,
}

impl LegendIdentifierDrawer for SolidSwatch {
    fn draw_legend_identifier(&self, painter: &mut dyn Painter, rect: RectF) {
        let side = rect.width.min(rect.height);
        if side <= 0.0 {
            return;
        }
        let square = RectF::new(
            rect.x + (rect.width - side) / 2.0,
            rect.y + (rect.height - side) / 2.0,
            side,
            side,
        );
        painter.fill_rect(square, self.color);
    }
}

/// Reference legend: one entry per plot item, swatches keyed by item.
#[derive(Debug, Clone, Default)]
pub struct SimpleLegend {
    entries: Vec<LegendEntry>,
    swatches: HashMap<LegendKey, SolidSwatch>,
    grid: UniformGridLayout,
}

impl SimpleLegend {
    #[must_use]
    pub fn new(grid: UniformGridLayout) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn add_item(&mut self, item: LegendItem, color: Color) {
        self.swatches.insert(item.key, SolidSwatch { color });
        self.entries.push(LegendEntry::Item(item));
    }

    #[must_use]
    pub fn with_item(mut self, key: u32, text: impl Into<String>, color: Color) -> Self {
        self.add_item(LegendItem::new(LegendKey::new(key), text), color);
        self
    }

    /// Adds a managed widget that takes a cell but never prints.
    pub fn add_widget(&mut self) {
        self.entries.push(LegendEntry::Widget);
    }

    pub fn remove(&mut self, key: LegendKey) {
        self.entries
            .retain(|entry| !matches!(entry, LegendEntry::Item(item) if item.key == key));
        self.swatches.remove(&key);
    }
}

impl Legend for SimpleLegend {
    fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    fn grid(&self) -> &dyn LegendGridLayout {
        &self.grid
    }

    fn identifier_drawer(&self, key: LegendKey) -> Option<&dyn LegendIdentifierDrawer> {
        self.swatches
            .get(&key)
            .map(|swatch| swatch as &dyn LegendIdentifierDrawer)
    }

    fn size_hint(&self) -> SizeF {
        let columns = self.grid.max_columns.max(1);
        let rows = self.entries.len().div_ceil(columns);
        SizeF::new(
            self.grid.column_width * columns as f64,
            self.grid.item_height * rows as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{SimpleLegend, SolidSwatch, UniformGridLayout};
    use crate::api::{Legend, LegendGridLayout, LegendIdentifierDrawer, LegendKey};
    use crate::core::{Dpi, RectF, SizeF};
    use crate::render::{Color, PaintEngineKind, RecordingPainter};

    #[test]
    fn grid_fills_rows_first() {
        let grid = UniformGridLayout {
            column_width: 50.0,
            item_height: 10.0,
            max_columns: 4,
        };
        assert_eq!(grid.columns_for_width(120.0), 2);
        assert_eq!(grid.columns_for_width(10.0), 1);
        assert_eq!(grid.columns_for_width(1000.0), 4);

        let cells = grid.layout_items(RectF::new(0.0, 0.0, 100.0, 40.0), 2, 3);
        assert_eq!(
            cells,
            [
                RectF::new(0.0, 0.0, 50.0, 10.0),
                RectF::new(50.0, 0.0, 50.0, 10.0),
                RectF::new(0.0, 10.0, 50.0, 10.0),
            ]
        );
    }

    #[test]
    fn swatch_is_centered_square() {
        let mut painter = RecordingPainter::new(Dpi::STANDARD, PaintEngineKind::Raster);
        SolidSwatch { color: Color::WHITE }
            .draw_legend_identifier(&mut painter, RectF::new(0.0, 0.0, 8.0, 20.0));
        let fills: Vec<_> = painter.frame().fills().collect();
        assert_eq!(fills, [(RectF::new(0.0, 6.0, 8.0, 8.0), Color::WHITE)]);
    }

    #[test]
    fn widgets_take_cells_without_drawers() {
        let mut legend = SimpleLegend::default()
            .with_item(1, "alpha", Color::BLACK)
            .with_item(2, "beta", Color::WHITE);
        legend.add_widget();
        assert_eq!(legend.entries().len(), 3);
        assert_eq!(legend.size_hint(), SizeF::new(96.0, 60.0));
        assert!(legend.identifier_drawer(LegendKey::new(2)).is_some());

        legend.remove(LegendKey::new(2));
        assert_eq!(legend.entries().len(), 2);
        assert!(legend.identifier_drawer(LegendKey::new(2)).is_none());
    }
}
