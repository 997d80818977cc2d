//! In-memory surface that records every call instead of rasterizing.

use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Color, HostSize, Point},
    render::surface::{Surface, SurfaceFactory},
};

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    Clear,
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f64),
    Fill(BezPath),
    Stroke(BezPath),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintOp {
    Fill,
    Stroke,
}

/// One `fill`/`stroke` call with the style in effect when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub struct Painted {
    pub op: PaintOp,
    pub color: Option<Color>,
    pub line_width: f64,
    pub path: BezPath,
}

impl Painted {
    /// Number of subpaths, i.e. shapes batched into this call.
    pub fn subpaths(&self) -> usize {
        self.path
            .elements()
            .iter()
            .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
            .count()
    }

    pub fn center(&self) -> Point {
        self.path.bounding_box().center()
    }
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<SurfaceCommand>,
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: f64,
    painted: Vec<Painted>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            fill: None,
            stroke: None,
            line_width: 1.0,
            painted: Vec::new(),
        }
    }

    /// Every call since creation, including clears.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Paint calls still visible, i.e. issued since the last clear.
    pub fn painted(&self) -> &[Painted] {
        &self.painted
    }

    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::Clear))
            .count()
    }

    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(SurfaceCommand::Clear);
        self.painted.clear();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetFillColor(color));
        self.fill = Some(color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetStrokeColor(color));
        self.stroke = Some(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(SurfaceCommand::SetLineWidth(width));
        self.line_width = width;
    }

    fn fill(&mut self, path: &BezPath) {
        self.commands.push(SurfaceCommand::Fill(path.clone()));
        self.painted.push(Painted {
            op: PaintOp::Fill,
            color: self.fill,
            line_width: self.line_width,
            path: path.clone(),
        });
    }

    fn stroke(&mut self, path: &BezPath) {
        self.commands.push(SurfaceCommand::Stroke(path.clone()));
        self.painted.push(Painted {
            op: PaintOp::Stroke,
            color: self.stroke,
            line_width: self.line_width,
            path: path.clone(),
        });
    }
}

/// Factory for [`RecordingSurface`]s; `unavailable()` simulates a missing context.
#[derive(Clone, Copy, Debug)]
pub struct RecordingSurfaceFactory {
    available: bool,
}

impl RecordingSurfaceFactory {
    pub fn new() -> Self {
        Self { available: true }
    }

    pub fn unavailable() -> Self {
        Self { available: false }
    }
}

impl Default for RecordingSurfaceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceFactory for RecordingSurfaceFactory {
    type Surface = RecordingSurface;

    fn create(&mut self, size: HostSize) -> Option<RecordingSurface> {
        self.available
            .then(|| RecordingSurface::new(size.width, size.height))
    }
}
