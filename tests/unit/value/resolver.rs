use super::*;

fn pct(a: &str, b: &str) -> Span {
    [Bound::percent(a), Bound::percent(b)]
}

#[test]
fn literals_resolve_to_themselves() {
    let mut r = Resolver::from_seed(7);
    for v in [0.0, -3.5, 42.0, 1e9] {
        for _ in 0..10 {
            assert_eq!(r.resolve(&Value::Literal(v)), v);
        }
    }
}

#[test]
fn range_samples_stay_inside_and_center_on_midpoint() {
    let mut r = Resolver::from_seed(11);
    let v = Value::range(10.0, 20.0);
    let n = 5000;
    let mut sum = 0.0;
    for _ in 0..n {
        let s = r.resolve(&v);
        assert!((10.0..=20.0).contains(&s), "sample {s} out of range");
        sum += s;
    }
    let mean = sum / n as f64;
    assert!((mean - 15.0).abs() < 0.3, "mean {mean}");
}

#[test]
fn degenerate_range_is_constant() {
    let mut r = Resolver::from_seed(3);
    assert_eq!(r.resolve(&Value::range(4.0, 4.0)), 4.0);
}

#[test]
fn either_picks_each_range_about_half_the_time() {
    let mut r = Resolver::from_seed(99);
    let v = Value::either((0.0, 100.0), (200.0, 255.0));
    let n = 10_000;
    let mut low = 0usize;
    for _ in 0..n {
        let s = r.resolve(&v);
        let in_low = (0.0..=100.0).contains(&s);
        let in_high = (200.0..=255.0).contains(&s);
        assert!(in_low || in_high, "sample {s} outside both ranges");
        if in_low {
            low += 1;
        }
    }
    let share = low as f64 / n as f64;
    assert!((share - 0.5).abs() < 0.05, "low share {share}");
}

#[test]
fn percentage_span_maps_onto_index_space() {
    let r = Resolver::from_seed(0);
    assert_eq!(r.resolve_span(&pct("0%", "100%"), 10), Some((0, 9)));
    assert_eq!(r.resolve_span(&pct("50%", "100%"), 11), Some((5, 10)));
    assert_eq!(r.resolve_span(&pct("-20%", "250%"), 10), Some((0, 9)));
}

#[test]
fn malformed_percentage_falls_back_to_full_span() {
    let r = Resolver::from_seed(0);
    assert_eq!(r.resolve_span(&pct("bogus", "50%"), 10), Some((0, 9)));
    assert_eq!(r.resolve_span(&pct("10%", ""), 4), Some((0, 3)));
}

#[test]
fn numeric_span_is_clamped_not_rejected() {
    let r = Resolver::from_seed(0);
    let span = [Bound::Number(-5.0), Bound::Number(100.0)];
    assert_eq!(r.resolve_span(&span, 10), Some((0, 9)));
    let span = [Bound::Number(2.0), Bound::Number(4.0)];
    assert_eq!(r.resolve_span(&span, 10), Some((2, 4)));
}

#[test]
fn empty_sequence_has_no_span() {
    let r = Resolver::from_seed(0);
    assert_eq!(r.resolve_span(&full_span(), 0), None);
}

#[test]
fn percentage_value_with_length_samples_in_index_space() {
    let mut r = Resolver::from_seed(5);
    let v = Value::Range(pct("50%", "100%"));
    for _ in 0..200 {
        let s = r.resolve_in(&v, Some(11));
        assert!((5.0..=10.0).contains(&s));
    }
    for _ in 0..200 {
        let s = r.resolve(&v);
        assert!((0.5..=1.0).contains(&s));
    }
}

#[test]
fn seeded_resolvers_are_reproducible() {
    let v = Value::either((0.0, 1.0), (5.0, 6.0));
    let mut a = Resolver::from_seed(1234);
    let mut b = Resolver::from_seed(1234);
    for _ in 0..50 {
        assert_eq!(a.resolve(&v), b.resolve(&v));
    }
    let mut fa = a.fork();
    let mut fb = b.fork();
    assert_eq!(fa.unit(), fb.unit());
}

#[test]
fn values_deserialize_from_json_shapes() {
    let lit: Value = serde_json::from_str("3").unwrap();
    assert_eq!(lit, Value::Literal(3.0));

    let range: Value = serde_json::from_str("[1, 2]").unwrap();
    assert_eq!(range, Value::range(1.0, 2.0));

    let either: Value = serde_json::from_str("[[0, 100], [200, 255]]").unwrap();
    assert_eq!(either, Value::either((0.0, 100.0), (200.0, 255.0)));

    let percent: Value = serde_json::from_str(r#"["10%", "90%"]"#).unwrap();
    assert_eq!(percent, Value::Range(pct("10%", "90%")));
}
