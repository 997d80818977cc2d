use crate::{
    foundation::core::Color,
    value::resolver::{Span, Value, full_span},
};

/// Radius used for points that do not set one.
pub const DEFAULT_POINT_RADIUS: f64 = 5.0;

/// Stroke width used when a shape does not set a usable one.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Sweep direction of an arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// A point-like `{x, y}` pair used by line vertices.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vertex {
    pub x: Value,
    pub y: Value,
}

impl Vertex {
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Variant-specific geometry. Coordinates are logical and resolved at paint time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Point {
        x: Value,
        y: Value,
        radius: Value,
    },
    Line {
        points: Vec<Vertex>,
        #[serde(default = "full_span")]
        range: Span,
    },
    Arc {
        x: Value,
        y: Value,
        radius: Value,
        start: Value,
        end: Value,
        #[serde(default)]
        direction: Direction,
    },
}

/// Which paint operations a shape takes part in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    Fill,
    Stroke,
    FillAndStroke,
}

/// A paintable shape plus its shared paint attributes.
///
/// A shape without `state_index` is ephemeral and lives for one frame only. With a
/// `state_index` it is tracked: the engine keeps the latest shape per index.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    #[serde(flatten)]
    pub kind: ShapeKind,
    #[serde(default)]
    pub fill: Option<Color>,
    #[serde(default)]
    pub stroke: Option<Color>,
    #[serde(default = "default_line_width")]
    pub line_width: Value,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default)]
    pub state_index: Option<i64>,
}

fn default_line_width() -> Value {
    Value::Literal(DEFAULT_LINE_WIDTH)
}

impl Shape {
    fn with_kind(kind: ShapeKind) -> Self {
        Self {
            kind,
            fill: None,
            stroke: None,
            line_width: default_line_width(),
            z_index: 0,
            state_index: None,
        }
    }

    pub fn point(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        Self::with_kind(ShapeKind::Point {
            x: x.into(),
            y: y.into(),
            radius: Value::Literal(DEFAULT_POINT_RADIUS),
        })
    }

    pub fn line(points: Vec<Vertex>) -> Self {
        Self::with_kind(ShapeKind::Line {
            points,
            range: full_span(),
        })
    }

    pub fn arc(
        x: impl Into<Value>,
        y: impl Into<Value>,
        radius: impl Into<Value>,
        start: impl Into<Value>,
        end: impl Into<Value>,
    ) -> Self {
        Self::with_kind(ShapeKind::Arc {
            x: x.into(),
            y: y.into(),
            radius: radius.into(),
            start: start.into(),
            end: end.into(),
            direction: Direction::Clockwise,
        })
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn line_width(mut self, width: impl Into<Value>) -> Self {
        self.line_width = width.into();
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    pub fn state_index(mut self, index: i64) -> Self {
        self.state_index = Some(index);
        self
    }

    /// Sets the radius of a point or arc; ignored for lines.
    pub fn radius(mut self, r: impl Into<Value>) -> Self {
        match &mut self.kind {
            ShapeKind::Point { radius, .. } | ShapeKind::Arc { radius, .. } => *radius = r.into(),
            ShapeKind::Line { .. } => {}
        }
        self
    }

    /// Sets the index span of a line; ignored for other shapes.
    pub fn range(mut self, span: Span) -> Self {
        if let ShapeKind::Line { range, .. } = &mut self.kind {
            *range = span;
        }
        self
    }

    /// Sets the sweep direction of an arc; ignored for other shapes.
    pub fn direction(mut self, dir: Direction) -> Self {
        if let ShapeKind::Arc { direction, .. } = &mut self.kind {
            *direction = dir;
        }
        self
    }

    /// Center of a point or arc; lines have none.
    pub fn position(&self) -> Option<(&Value, &Value)> {
        match &self.kind {
            ShapeKind::Point { x, y, .. } | ShapeKind::Arc { x, y, .. } => Some((x, y)),
            ShapeKind::Line { .. } => None,
        }
    }

    pub fn is_tracked(&self) -> bool {
        self.state_index.is_some()
    }

    /// `None` when the shape has neither fill nor stroke and paints nothing.
    pub fn paint_style(&self) -> Option<PaintStyle> {
        match (self.fill.is_some(), self.stroke.is_some()) {
            (true, true) => Some(PaintStyle::FillAndStroke),
            (true, false) => Some(PaintStyle::Fill),
            (false, true) => Some(PaintStyle::Stroke),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/model.rs"]
mod tests;
