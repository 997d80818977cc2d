use std::collections::BTreeMap;

use crate::shape::model::{PaintStyle, Shape};

/// Shapes of one z-index, bucketed by paint style.
#[derive(Debug, Default)]
pub(crate) struct Separation<'a> {
    pub(crate) fill: Vec<&'a Shape>,
    pub(crate) stroke: Vec<&'a Shape>,
    pub(crate) fill_and_stroke: Vec<&'a Shape>,
}

impl<'a> Separation<'a> {
    fn push(&mut self, shape: &'a Shape, style: PaintStyle) {
        match style {
            PaintStyle::Fill => self.fill.push(shape),
            PaintStyle::Stroke => self.stroke.push(shape),
            PaintStyle::FillAndStroke => self.fill_and_stroke.push(shape),
        }
    }

    /// Buckets in paint order.
    pub(crate) fn buckets(&self) -> [(PaintStyle, &[&'a Shape]); 3] {
        [
            (PaintStyle::Fill, self.fill.as_slice()),
            (PaintStyle::Stroke, self.stroke.as_slice()),
            (PaintStyle::FillAndStroke, self.fill_and_stroke.as_slice()),
        ]
    }
}

/// Shapes grouped by ascending z-index for one render pass.
#[derive(Debug, Default)]
pub(crate) struct RenderBatch<'a> {
    groups: BTreeMap<i32, Separation<'a>>,
}

impl<'a> RenderBatch<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a shape; shapes with neither fill nor stroke are dropped.
    pub(crate) fn push(&mut self, shape: &'a Shape) {
        let Some(style) = shape.paint_style() else {
            return;
        };
        self.groups
            .entry(shape.z_index)
            .or_default()
            .push(shape, style);
    }

    /// Groups, lowest z-index first.
    pub(crate) fn groups(&self) -> impl Iterator<Item = (i32, &Separation<'a>)> {
        self.groups.iter().map(|(z, s)| (*z, s))
    }
}

impl<'a> FromIterator<&'a Shape> for RenderBatch<'a> {
    fn from_iter<T: IntoIterator<Item = &'a Shape>>(iter: T) -> Self {
        let mut batch = Self::new();
        for shape in iter {
            batch.push(shape);
        }
        batch
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/batch.rs"]
mod tests;
