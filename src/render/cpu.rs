//! CPU raster surfaces backed by `vello_cpu` pixmaps.

use crate::{
    foundation::core::{BezPath, Color, HostSize, Point},
    foundation::error::{ArtgenError, ArtgenResult},
    render::composite::over_in_place,
    render::surface::{Surface, SurfaceFactory},
};

/// Flattened RGBA8 frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

enum PendingOp {
    Fill {
        path: vello_cpu::kurbo::BezPath,
        color: Color,
    },
    Stroke {
        path: vello_cpu::kurbo::BezPath,
        color: Color,
        width: f64,
    },
}

/// Append-only raster surface.
///
/// Paint calls queue up until [`Surface::present`]; presenting rasterizes the queue in
/// order and composites it over what is already on the pixmap.
pub struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    scratch: vello_cpu::Pixmap,
    pending: Vec<PendingOp>,
    fill: Color,
    stroke: Color,
    line_width: f64,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> ArtgenResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| ArtgenError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| ArtgenError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(ArtgenError::render("surface must have a non-zero size"));
        }

        Ok(Self {
            width: width_u16,
            height: height_u16,
            pixmap: vello_cpu::Pixmap::new(width_u16, height_u16),
            scratch: vello_cpu::Pixmap::new(width_u16, height_u16),
            pending: Vec::new(),
            fill: Color::opaque(0, 0, 0),
            stroke: Color::opaque(0, 0, 0),
            line_width: 1.0,
        })
    }

    /// Premultiplied RGBA8 pixels of everything presented so far.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Premultiplied pixel at `(x, y)`, if inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= u32::from(self.width) || y >= u32::from(self.height) {
            return None;
        }
        let i = (y as usize * usize::from(self.width) + x as usize) * 4;
        let px = self.data().get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl Surface for CpuSurface {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn clear(&mut self) {
        self.pending.clear();
        clear_pixmap(&mut self.pixmap);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn fill(&mut self, path: &BezPath) {
        self.pending.push(PendingOp::Fill {
            path: bezpath_to_cpu(path),
            color: self.fill,
        });
    }

    fn stroke(&mut self, path: &BezPath) {
        self.pending.push(PendingOp::Stroke {
            path: bezpath_to_cpu(path),
            color: self.stroke,
            width: self.line_width,
        });
    }

    fn present(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        for op in self.pending.drain(..) {
            match op {
                PendingOp::Fill { path, color } => {
                    ctx.set_paint(to_cpu_color(color));
                    ctx.fill_path(&path);
                }
                PendingOp::Stroke { path, color, width } => {
                    ctx.set_paint(to_cpu_color(color));
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
                    ctx.stroke_path(&path);
                }
            }
        }
        ctx.flush();

        clear_pixmap(&mut self.scratch);
        ctx.render_to_pixmap(&mut self.scratch);
        if let Err(err) = over_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            self.scratch.data_as_u8_slice(),
        ) {
            tracing::warn!(%err, "dropping surface update");
        }
    }
}

/// Creates [`CpuSurface`]s; sizes a pixmap cannot hold yield no surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuSurfaceFactory;

impl SurfaceFactory for CpuSurfaceFactory {
    type Surface = CpuSurface;

    fn create(&mut self, size: HostSize) -> Option<CpuSurface> {
        match CpuSurface::new(size.width, size.height) {
            Ok(surface) => Some(surface),
            Err(err) => {
                tracing::warn!(%err, ?size, "cpu surface unavailable");
                None
            }
        }
    }
}

/// Foreground over background, flattened into one frame.
pub fn compose_layers(background: &CpuSurface, foreground: &CpuSurface) -> ArtgenResult<FrameRGBA> {
    if background.width != foreground.width || background.height != foreground.height {
        return Err(ArtgenError::render("layer size mismatch"));
    }
    let mut data = background.data().to_vec();
    over_in_place(&mut data, foreground.data())?;
    Ok(FrameRGBA {
        width: u32::from(background.width),
        height: u32::from(background.height),
        data,
        premultiplied: true,
    })
}

fn to_cpu_color(c: Color) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
