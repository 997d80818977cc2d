use super::*;

fn transform(lw: f64, lh: f64, pw: u32, ph: u32) -> CoordinateTransform {
    CoordinateTransform::new(Size::new(lw, lh).unwrap(), HostSize::new(pw, ph))
}

#[test]
fn origin_maps_to_surface_center() {
    let t = transform(1024.0, 1024.0, 800, 600);
    assert_eq!(t.point_to_surface(Point::ORIGIN), Point::new(400.0, 300.0));
}

#[test]
fn axes_scale_independently() {
    let t = transform(100.0, 100.0, 200, 400);
    assert_eq!(t.point_to_surface(Point::new(50.0, 50.0)), Point::new(200.0, 400.0));
    assert_eq!(t.point_to_surface(Point::new(-50.0, -50.0)), Point::new(0.0, 0.0));
    assert_eq!(t.point_to_surface(Point::new(10.0, -10.0)), Point::new(120.0, 160.0));
}

#[test]
fn dimensions_use_horizontal_factor_only() {
    let t = transform(100.0, 100.0, 200, 400);
    assert_eq!(t.dimension_to_surface(5.0), 10.0);
    assert_eq!(t.scale_x(), 2.0);
    assert_eq!(t.scale_y(), 4.0);
}

#[test]
fn identity_when_logical_matches_physical() {
    let t = transform(640.0, 480.0, 640, 480);
    assert_eq!(t.point_to_surface(Point::new(-320.0, -240.0)), Point::ORIGIN);
    assert_eq!(t.dimension_to_surface(3.0), 3.0);
}

#[test]
fn mapping_is_stable_across_calls() {
    let t = transform(1000.0, 700.0, 333, 777);
    let p = Point::new(12.34, -56.78);
    let first = t.point_to_surface(p);
    for _ in 0..100 {
        assert_eq!(t.point_to_surface(p), first);
    }
}
