//! Color composition helpers handed to generators.

use crate::{
    foundation::core::Color,
    value::resolver::{Resolver, Value},
};

/// Build a color from four resolvable channels: red, green and blue in `0..=255`,
/// alpha in `[0, 1]`. Out-of-range samples are clamped.
pub fn rgba(resolver: &mut Resolver, r: &Value, g: &Value, b: &Value, a: &Value) -> Color {
    let mut channel = |v: &Value| {
        let c = resolver.resolve(v);
        if c.is_nan() {
            0
        } else {
            c.round().clamp(0.0, 255.0) as u8
        }
    };
    let (r, g, b) = (channel(r), channel(g), channel(b));
    Color::new(r, g, b, resolver.resolve(a) as f32)
}

/// Same hue with a replaced alpha channel; `None` stays `None`.
pub fn with_opacity(alpha: f64, color: Option<Color>) -> Option<Color> {
    color.map(|c| c.with_alpha(alpha as f32))
}

#[cfg(test)]
#[path = "../../tests/unit/value/color.rs"]
mod tests;
