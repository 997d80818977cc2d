use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

#[test]
fn bounded_clamps_both_sides() {
    assert_eq!(bounded(-3.0, 0.0, 9.0), 0.0);
    assert_eq!(bounded(12.0, 0.0, 9.0), 9.0);
    assert_eq!(bounded(4.5, 0.0, 9.0), 4.5);
}

#[test]
fn clockwise_sweep_wraps_forward() {
    assert!((arc_sweep(0.0, FRAC_PI_2, false) - FRAC_PI_2).abs() < 1e-12);
    // end behind start still sweeps forward.
    assert!((arc_sweep(FRAC_PI_2, 0.0, false) - (TAU - FRAC_PI_2)).abs() < 1e-12);
    assert_eq!(arc_sweep(0.0, 3.0 * TAU, false), TAU);
}

#[test]
fn counter_clockwise_sweep_is_negative() {
    assert!((arc_sweep(0.0, FRAC_PI_2, true) + (TAU - FRAC_PI_2)).abs() < 1e-12);
    assert!((arc_sweep(PI, 0.0, true) + PI).abs() < 1e-12);
    assert_eq!(arc_sweep(TAU, 0.0, true), -TAU);
}

#[test]
fn equal_or_non_finite_angles_have_no_sweep() {
    assert_eq!(arc_sweep(1.0, 1.0, false), 0.0);
    assert_eq!(arc_sweep(f64::NAN, 1.0, false), 0.0);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(128, 255), 128);
    assert_eq!(mul_div255(255, 128), 128);
}
