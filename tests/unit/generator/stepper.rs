use super::*;
use crate::shape::model::Direction;

fn end_angle(shape: &Shape) -> f64 {
    match &shape.kind {
        ShapeKind::Arc { end, .. } => end.as_literal().unwrap(),
        other => panic!("expected arc, got {other:?}"),
    }
}

fn template() -> Shape {
    Shape::arc(10.0, -4.0, 25.0, 3.0, 3.0).direction(Direction::CounterClockwise)
}

#[test]
fn delay_holds_the_arc_for_exactly_that_many_frames() {
    let mut stepper = ArcStepper::new(template(), 0.5, Some(5)).unwrap();
    for _ in 0..5 {
        assert_eq!(end_angle(stepper.step(0.1)), 0.5);
    }
    assert!(end_angle(stepper.step(0.1)) > 0.5);
}

#[test]
fn ends_only_after_overshooting_full_turn() {
    let mut stepper = ArcStepper::new(template(), 0.0, None).unwrap();
    for _ in 0..10 {
        stepper.step(0.1);
        assert!(!stepper.ended());
    }
    // 1.0 turn reached but not past the threshold
    assert!((stepper.fraction() - 1.0).abs() < 1e-9);
    stepper.step(0.1);
    assert!(stepper.ended());
    assert!((end_angle(stepper.shape()) - 1.1 * TAU).abs() < 1e-9);
}

#[test]
fn exact_threshold_is_not_ended() {
    let mut stepper = ArcStepper::new(template(), 0.0, None).unwrap();
    stepper.step(1.05);
    assert!(!stepper.ended());
    stepper.step(0.001);
    assert!(stepper.ended());
}

#[test]
fn template_start_and_end_are_replaced() {
    let stepper = ArcStepper::new(template(), 1.25, None).unwrap();
    match &stepper.shape().kind {
        ShapeKind::Arc {
            start,
            end,
            direction,
            ..
        } => {
            assert_eq!(start.as_literal(), Some(1.25));
            assert_eq!(end.as_literal(), Some(1.25));
            assert_eq!(*direction, Direction::CounterClockwise);
        }
        _ => unreachable!(),
    }
    assert_eq!(stepper.x().as_literal(), Some(10.0));
    assert_eq!(stepper.y().as_literal(), Some(-4.0));
    assert_eq!(stepper.radius().as_literal(), Some(25.0));
}

#[test]
fn rejects_non_arc_templates() {
    let err = ArcStepper::new(Shape::point(0.0, 0.0), 0.0, None).unwrap_err();
    assert!(matches!(err, ArtgenError::Validation(_)));
}
