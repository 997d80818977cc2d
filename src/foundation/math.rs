use std::f64::consts::TAU;

/// Clamp that never panics on reversed or NaN bounds.
pub(crate) fn bounded(num: f64, lower: f64, upper: f64) -> f64 {
    num.max(lower).min(upper)
}

/// Signed sweep for an arc drawn from `start` to `end`, following 2D-canvas rules:
/// a clockwise arc sweeps forward by `(end - start) mod 2π`, a counter-clockwise arc
/// sweeps backward, and any span of at least a full turn is a full circle.
pub(crate) fn arc_sweep(start: f64, end: f64, counter_clockwise: bool) -> f64 {
    if !(start.is_finite() && end.is_finite()) {
        return 0.0;
    }
    if counter_clockwise {
        let span = start - end;
        if span >= TAU {
            -TAU
        } else {
            -span.rem_euclid(TAU)
        }
    } else {
        let span = end - start;
        if span >= TAU {
            TAU
        } else {
            span.rem_euclid(TAU)
        }
    }
}

pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
