use std::ops::{Deref, DerefMut};

use super::Painter;

/// Scoped attribute save: `save()` on construction, `restore()` on drop.
///
/// Every nested attribute change (clip, pen, font, transform) made through
/// the guard is undone on every exit path of the enclosing scope.
pub struct PainterGuard<'a> {
    painter: &'a mut dyn Painter,
}

impl<'a> PainterGuard<'a> {
    pub fn new(painter: &'a mut dyn Painter) -> Self {
        painter.save();
        Self { painter }
    }
}

impl<'a> Deref for PainterGuard<'a> {
    type Target = dyn Painter + 'a;

    fn deref(&self) -> &Self::Target {
        self.painter
    }
}

impl DerefMut for PainterGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.painter
    }
}

impl Drop for PainterGuard<'_> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}
