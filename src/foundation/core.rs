use crate::foundation::error::{ArtgenError, ArtgenResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Pixel dimensions reported by the host container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HostSize {
    pub width: u32,
    pub height: u32,
}

impl HostSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Backing-store size for a given device pixel ratio.
    pub fn scaled(self, pixel_ratio: f64) -> Self {
        let scale = |v: u32| ((f64::from(v) * pixel_ratio).round().max(0.0)) as u32;
        Self {
            width: scale(self.width),
            height: scale(self.height),
        }
    }
}

/// Width/height of a logical (generator-facing) coordinate system.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> ArtgenResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ArtgenError::validation(format!(
                "coordinate system must be finite and positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

impl From<HostSize> for Size {
    fn from(value: HostSize) -> Self {
        Self {
            width: f64::from(value.width),
            height: f64::from(value.height),
        }
    }
}

/// Straight (non-premultiplied) color: 8-bit RGB channels and a `[0, 1]` alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Self { r, g, b, a }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0.0)
    }

    /// Same hue, replaced alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    pub fn alpha_u8(self) -> u8 {
        (self.a * 255.0).round().clamp(0.0, 255.0) as u8
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.alpha_u8()]
    }

    /// Premultiplied RGBA8 (r,g,b already multiplied by a).
    pub fn to_premul_rgba8(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        let a = self.alpha_u8();
        [premul(self.r, a), premul(self.g, a), premul(self.b, a), a]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
