use super::*;

#[test]
fn literal_channels_compose_directly() {
    let mut r = Resolver::from_seed(1);
    let c = rgba(
        &mut r,
        &Value::Literal(255.0),
        &Value::Literal(128.0),
        &Value::Literal(0.0),
        &Value::Literal(0.5),
    );
    assert_eq!(c, Color::new(255, 128, 0, 0.5));
}

#[test]
fn channels_are_clamped() {
    let mut r = Resolver::from_seed(1);
    let c = rgba(
        &mut r,
        &Value::Literal(300.0),
        &Value::Literal(-4.0),
        &Value::Literal(f64::NAN),
        &Value::Literal(2.0),
    );
    assert_eq!(c, Color::new(255, 0, 0, 1.0));
}

#[test]
fn stochastic_channels_land_in_their_ranges() {
    let mut r = Resolver::from_seed(8);
    let red = Value::either((0.0, 100.0), (200.0, 255.0));
    let alpha = Value::range(0.5, 0.8);
    for _ in 0..500 {
        let c = rgba(&mut r, &red, &Value::Literal(10.0), &Value::Literal(0.0), &alpha);
        assert!(c.r <= 100 || c.r >= 200, "red {}", c.r);
        assert!((0.5..=0.8).contains(&c.a), "alpha {}", c.a);
    }
}

#[test]
fn with_opacity_keeps_hue() {
    let base = Some(Color::new(10, 20, 30, 1.0));
    assert_eq!(with_opacity(0.25, base), Some(Color::new(10, 20, 30, 0.25)));
    assert_eq!(with_opacity(0.25, None), None);
}
