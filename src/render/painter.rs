//! One render pass: z-ordered, style-bucketed painting of shapes onto a surface.

use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Color, Point},
    foundation::math::arc_sweep,
    render::batch::RenderBatch,
    render::surface::Surface,
    shape::model::{
        DEFAULT_LINE_WIDTH, DEFAULT_POINT_RADIUS, Direction, PaintStyle, Shape, ShapeKind,
    },
    transform::coords::CoordinateTransform,
    value::resolver::{Resolver, Value},
};

const PATH_TOLERANCE: f64 = 0.1;

/// Last style values pushed to the surface during one pass.
#[derive(Debug, Default)]
struct StyleMemo {
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f64>,
}

/// Style a shape asks for, resolved to physical units.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ResolvedStyle {
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: f64,
}

/// Counters from one render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Shapes that produced geometry.
    pub shapes: usize,
    /// `fill`/`stroke` calls issued to the surface.
    pub paint_calls: usize,
    /// Style assignments issued to the surface.
    pub style_changes: usize,
}

/// Paints `shapes` onto `surface`, lowest z-index first.
///
/// Within a z-group, each paint-style bucket is accumulated into one path and painted
/// once. A style change inside a bucket paints what has accumulated so far before the
/// new style is applied, so every shape keeps its own colors.
pub(crate) fn render_pass<'a, S, I>(
    surface: &mut S,
    shapes: I,
    transform: &CoordinateTransform,
    resolver: &mut Resolver,
) -> PassStats
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a Shape>,
{
    let batch: RenderBatch<'a> = shapes.into_iter().collect();
    let mut pass = Pass {
        surface,
        transform,
        resolver,
        memo: StyleMemo::default(),
        stats: PassStats::default(),
    };
    for (_, group) in batch.groups() {
        for (style, bucket) in group.buckets() {
            pass.paint_bucket(style, bucket);
        }
    }
    pass.stats
}

struct Pass<'p, S: ?Sized> {
    surface: &'p mut S,
    transform: &'p CoordinateTransform,
    resolver: &'p mut Resolver,
    memo: StyleMemo,
    stats: PassStats,
}

impl<S: Surface + ?Sized> Pass<'_, S> {
    fn paint_bucket(&mut self, style: PaintStyle, bucket: &[&Shape]) {
        let mut path = BezPath::new();
        let mut current: Option<ResolvedStyle> = None;

        for shape in bucket {
            let wanted = self.resolve_style(shape);
            let style_changed = current.is_some_and(|c| !same_paint(style, &c, &wanted));
            if style_changed && !path.elements().is_empty() {
                self.paint(style, &path);
                path = BezPath::new();
            }
            self.apply_style(style, &wanted);
            current = Some(wanted);

            if self.append_geometry(&mut path, shape) {
                self.stats.shapes += 1;
            }
        }

        if !path.elements().is_empty() {
            self.paint(style, &path);
        }
    }

    fn resolve_style(&mut self, shape: &Shape) -> ResolvedStyle {
        let width = self.resolver.resolve(&shape.line_width);
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            DEFAULT_LINE_WIDTH
        };
        ResolvedStyle {
            fill: shape.fill,
            stroke: shape.stroke,
            line_width: self.transform.dimension_to_surface(width),
        }
    }

    fn apply_style(&mut self, style: PaintStyle, wanted: &ResolvedStyle) {
        let uses_fill = matches!(style, PaintStyle::Fill | PaintStyle::FillAndStroke);
        let uses_stroke = matches!(style, PaintStyle::Stroke | PaintStyle::FillAndStroke);

        if uses_fill
            && let Some(fill) = wanted.fill
            && self.memo.fill != Some(fill)
        {
            self.surface.set_fill_color(fill);
            self.memo.fill = Some(fill);
            self.stats.style_changes += 1;
        }
        if uses_stroke {
            if let Some(stroke) = wanted.stroke
                && self.memo.stroke != Some(stroke)
            {
                self.surface.set_stroke_color(stroke);
                self.memo.stroke = Some(stroke);
                self.stats.style_changes += 1;
            }
            if self.memo.line_width != Some(wanted.line_width) {
                self.surface.set_line_width(wanted.line_width);
                self.memo.line_width = Some(wanted.line_width);
                self.stats.style_changes += 1;
            }
        }
    }

    fn paint(&mut self, style: PaintStyle, path: &BezPath) {
        match style {
            PaintStyle::Fill => {
                self.surface.fill(path);
                self.stats.paint_calls += 1;
            }
            PaintStyle::Stroke => {
                self.surface.stroke(path);
                self.stats.paint_calls += 1;
            }
            PaintStyle::FillAndStroke => {
                self.surface.fill(path);
                self.surface.stroke(path);
                self.stats.paint_calls += 2;
            }
        }
    }

    /// Appends the shape's outline in physical coordinates; `false` for degenerate
    /// shapes, which paint nothing.
    fn append_geometry(&mut self, path: &mut BezPath, shape: &Shape) -> bool {
        let mut local = BezPath::new();
        match &shape.kind {
            ShapeKind::Point { x, y, radius } => {
                let center = self.resolve_on_surface(x, y);
                let r = or_default(self.resolver.resolve(radius), DEFAULT_POINT_RADIUS);
                let r = self.transform.dimension_to_surface(r);
                if !is_finite_point(center) || !(r.is_finite() && r > 0.0) {
                    return false;
                }
                local.extend(kurbo::Circle::new(center, r).path_elements(PATH_TOLERANCE));
            }
            ShapeKind::Line { points, range } => {
                let Some((lo, hi)) = self.resolver.resolve_span(range, points.len()) else {
                    return false;
                };
                if lo >= hi {
                    return false;
                }
                for (i, vertex) in points[lo..=hi].iter().enumerate() {
                    let p = self.resolve_on_surface(&vertex.x, &vertex.y);
                    if !is_finite_point(p) {
                        return false;
                    }
                    if i == 0 {
                        local.move_to(p);
                    } else {
                        local.line_to(p);
                    }
                }
            }
            ShapeKind::Arc {
                x,
                y,
                radius,
                start,
                end,
                direction,
            } => {
                let center = self.resolve_on_surface(x, y);
                let r = self
                    .transform
                    .dimension_to_surface(self.resolver.resolve(radius));
                let start = self.resolver.resolve(start);
                let end = self.resolver.resolve(end);
                let sweep = arc_sweep(start, end, *direction == Direction::CounterClockwise);
                if !is_finite_point(center) || !(r.is_finite() && r > 0.0) || sweep == 0.0 {
                    return false;
                }
                // Anchor at the arc's start so no chord joins a previous subpath.
                local.move_to(center + kurbo::Vec2::new(start.cos() * r, start.sin() * r));
                let arc = kurbo::Arc::new(center, (r, r), start, sweep, 0.0);
                local.extend(arc.append_iter(PATH_TOLERANCE));
            }
        }
        path.extend(local.elements().iter().copied());
        true
    }

    /// Resolves each coordinate once, then maps the literal point.
    fn resolve_on_surface(&mut self, x: &Value, y: &Value) -> Point {
        let logical = Point::new(self.resolver.resolve(x), self.resolver.resolve(y));
        self.transform.point_to_surface(logical)
    }
}

fn same_paint(style: PaintStyle, a: &ResolvedStyle, b: &ResolvedStyle) -> bool {
    match style {
        PaintStyle::Fill => a.fill == b.fill,
        PaintStyle::Stroke => a.stroke == b.stroke && a.line_width == b.line_width,
        PaintStyle::FillAndStroke => a == b,
    }
}

/// Zero and NaN mean "unset" and take the default.
fn or_default(v: f64, default: f64) -> f64 {
    if v == 0.0 || v.is_nan() {
        default
    } else {
        v
    }
}

fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
