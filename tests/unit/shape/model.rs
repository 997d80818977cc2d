use super::*;
use crate::value::resolver::Bound;

#[test]
fn builders_apply_defaults() {
    let p = Shape::point(1.0, 2.0);
    assert_eq!(p.line_width, Value::Literal(1.0));
    assert_eq!(p.z_index, 0);
    assert!(!p.is_tracked());
    assert_eq!(
        p.kind,
        ShapeKind::Point {
            x: Value::Literal(1.0),
            y: Value::Literal(2.0),
            radius: Value::Literal(DEFAULT_POINT_RADIUS),
        }
    );

    let a = Shape::arc(0.0, 0.0, 10.0, 0.0, 1.0);
    let ShapeKind::Arc { direction, .. } = a.kind else {
        panic!("expected an arc");
    };
    assert_eq!(direction, Direction::Clockwise);
}

#[test]
fn variant_setters_only_touch_matching_variants() {
    let line = Shape::line(vec![Vertex::new(0.0, 0.0)])
        .radius(9.0)
        .direction(Direction::CounterClockwise)
        .range([Bound::Number(0.0), Bound::Number(0.0)]);
    let ShapeKind::Line { range, .. } = &line.kind else {
        panic!("expected a line");
    };
    assert_eq!(range, &[Bound::Number(0.0), Bound::Number(0.0)]);

    let arc = Shape::arc(0.0, 0.0, 1.0, 0.0, 1.0)
        .radius(4.0)
        .direction(Direction::CounterClockwise);
    let ShapeKind::Arc {
        radius, direction, ..
    } = arc.kind
    else {
        panic!("expected an arc");
    };
    assert_eq!(radius, Value::Literal(4.0));
    assert_eq!(direction, Direction::CounterClockwise);
}

#[test]
fn paint_style_follows_fill_and_stroke() {
    let red = Color::opaque(255, 0, 0);
    assert_eq!(Shape::point(0.0, 0.0).paint_style(), None);
    assert_eq!(
        Shape::point(0.0, 0.0).fill(red).paint_style(),
        Some(PaintStyle::Fill)
    );
    assert_eq!(
        Shape::point(0.0, 0.0).stroke(red).paint_style(),
        Some(PaintStyle::Stroke)
    );
    assert_eq!(
        Shape::point(0.0, 0.0).fill(red).stroke(red).paint_style(),
        Some(PaintStyle::FillAndStroke)
    );
}

#[test]
fn shapes_deserialize_with_type_tag() {
    let json = r#"{
        "type": "arc",
        "x": 0, "y": [-10, 10], "radius": 50,
        "start": 0, "end": 3.14,
        "direction": "counter-clockwise",
        "stroke": {"r": 255, "g": 255, "b": 255, "a": 1.0},
        "z_index": 2,
        "state_index": 7
    }"#;
    let shape: Shape = serde_json::from_str(json).unwrap();
    assert_eq!(shape.state_index, Some(7));
    assert_eq!(shape.z_index, 2);
    assert_eq!(shape.line_width, Value::Literal(1.0));
    assert!(matches!(
        shape.kind,
        ShapeKind::Arc {
            direction: Direction::CounterClockwise,
            ..
        }
    ));

    let line: Shape = serde_json::from_str(
        r#"{"type": "line", "points": [{"x": 0, "y": 0}, {"x": 1, "y": 1}]}"#,
    )
    .unwrap();
    let ShapeKind::Line { points, range } = line.kind else {
        panic!("expected a line");
    };
    assert_eq!(points.len(), 2);
    assert_eq!(range, full_span());
}

#[test]
fn position_is_defined_for_points_and_arcs() {
    let p = Shape::point(1.0, 2.0);
    assert_eq!(p.position(), Some((&Value::Literal(1.0), &Value::Literal(2.0))));
    let a = Shape::arc(3.0, 4.0, 5.0, 0.0, 1.0);
    assert_eq!(a.position().map(|(x, _)| x.clone()), Some(Value::Literal(3.0)));
    assert_eq!(Shape::line(vec![Vertex::new(0.0, 0.0)]).position(), None);
}
