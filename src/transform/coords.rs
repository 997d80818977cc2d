//! Logical-to-physical coordinate mapping.

use crate::foundation::core::{Affine, HostSize, Point, Size};

/// Maps a centered logical coordinate system onto surface pixels.
///
/// Logical `(0, 0)` lands on the physical center. Each axis scales independently;
/// scalar dimensions (radii, line widths) use the horizontal factor only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateTransform {
    logical: Size,
    physical: Size,
    affine: Affine,
}

impl CoordinateTransform {
    pub fn new(logical: Size, physical: HostSize) -> Self {
        let physical = Size::from(physical);
        let sx = physical.width / logical.width;
        let sy = physical.height / logical.height;
        let affine = Affine::translate((physical.width / 2.0, physical.height / 2.0))
            * Affine::scale_non_uniform(sx, sy);
        Self {
            logical,
            physical,
            affine,
        }
    }

    pub fn logical_size(&self) -> Size {
        self.logical
    }

    pub fn physical_size(&self) -> Size {
        self.physical
    }

    /// Horizontal scale factor, physical pixels per logical unit.
    pub fn scale_x(&self) -> f64 {
        self.physical.width / self.logical.width
    }

    pub fn scale_y(&self) -> f64 {
        self.physical.height / self.logical.height
    }

    pub fn affine(&self) -> Affine {
        self.affine
    }

    #[inline]
    pub fn point_to_surface(&self, p: Point) -> Point {
        self.affine * p
    }

    #[inline]
    pub fn dimension_to_surface(&self, d: f64) -> f64 {
        d * self.scale_x()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/coords.rs"]
mod tests;
