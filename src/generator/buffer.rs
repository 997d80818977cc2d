use std::ops::Range;

use crate::{
    foundation::core::Color,
    shape::model::{Shape, ShapeKind},
    value::resolver::Value,
};

/// Partial update for one shape. Unset fields keep their current value.
///
/// `x`, `y` and `radius` apply to points and arcs; lines ignore them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapePatch {
    pub x: Option<Value>,
    pub y: Option<Value>,
    pub radius: Option<Value>,
    pub fill: Option<Option<Color>>,
    pub stroke: Option<Option<Color>>,
    pub line_width: Option<Value>,
    pub z_index: Option<i32>,
    pub state_index: Option<Option<i64>>,
}

impl ShapePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, x: impl Into<Value>, y: impl Into<Value>) -> Self {
        self.x = Some(x.into());
        self.y = Some(y.into());
        self
    }

    pub fn radius(mut self, r: impl Into<Value>) -> Self {
        self.radius = Some(r.into());
        self
    }

    pub fn fill(mut self, color: Option<Color>) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Option<Color>) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn line_width(mut self, width: impl Into<Value>) -> Self {
        self.line_width = Some(width.into());
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }

    /// `None` turns the shape ephemeral.
    pub fn state_index(mut self, index: Option<i64>) -> Self {
        self.state_index = Some(index);
        self
    }

    pub fn apply(self, shape: &mut Shape) {
        match &mut shape.kind {
            ShapeKind::Point { x, y, radius } | ShapeKind::Arc { x, y, radius, .. } => {
                if let Some(v) = self.x {
                    *x = v;
                }
                if let Some(v) = self.y {
                    *y = v;
                }
                if let Some(v) = self.radius {
                    *radius = v;
                }
            }
            ShapeKind::Line { .. } => {}
        }
        if let Some(v) = self.fill {
            shape.fill = v;
        }
        if let Some(v) = self.stroke {
            shape.stroke = v;
        }
        if let Some(v) = self.line_width {
            shape.line_width = v;
        }
        if let Some(v) = self.z_index {
            shape.z_index = v;
        }
        if let Some(v) = self.state_index {
            shape.state_index = v;
        }
    }
}

/// A generator-owned shape list that persists across frames.
///
/// Readers get copies, so whatever the engine holds never changes under it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeBuffer {
    shapes: Vec<Shape>,
}

impl ShapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `n` shapes built from their index.
    pub fn generate(n: usize, f: impl FnMut(usize) -> Shape) -> Self {
        Self {
            shapes: (0..n).map(f).collect(),
        }
    }

    /// Patches every shape in place.
    pub fn update(&mut self, mut f: impl FnMut(&Shape, usize) -> ShapePatch) {
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            let patch = f(shape, i);
            patch.apply(shape);
        }
    }

    pub fn snapshot(&self) -> Vec<Shape> {
        self.shapes.clone()
    }

    /// Patched copies; the buffer itself is left as is.
    pub fn view(&self, mut f: impl FnMut(&Shape, usize) -> ShapePatch) -> Vec<Shape> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| {
                let mut copy = shape.clone();
                f(shape, i).apply(&mut copy);
                copy
            })
            .collect()
    }

    /// Copies of the shapes in `range`, clipped to the buffer.
    pub fn slice(&self, range: Range<usize>) -> Vec<Shape> {
        let end = range.end.min(self.shapes.len());
        let start = range.start.min(end);
        self.shapes[start..end].to_vec()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.shapes.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generator/buffer.rs"]
mod tests;
