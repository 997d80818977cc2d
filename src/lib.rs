//! Artgen draws procedurally generated, time-evolving scenes at animation-frame rate.
//!
//! Client code supplies a [`Generator`]: each frame it returns the shapes to paint, then
//! advances its own progress value and decides when to stop. The [`DrawEngine`] turns that
//! shape stream into pixels on two layers.
//!
//! # Frame overview
//!
//! 1. **Draw**: `Generator::draw(x, iteration) -> Vec<Shape>`
//! 2. **Partition**: shapes without a state index are ephemeral; the rest update the
//!    tracked table (last write per index wins)
//! 3. **Render**: ephemerals accumulate on the append-only background; any tracked change
//!    clears the foreground and repaints the whole table
//! 4. **Advance**: `end_if` may stop the run, otherwise `iterate` yields the next `x` and
//!    the next frame is requested from the [`FrameScheduler`]
//!
//! Shape parameters are [`Value`]s: literals, or ranges sampled afresh at every use.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Silent degradation**: a frame never fails. Missing surfaces skip the frame and
//!   degenerate shapes paint nothing.
//! - **Premultiplied RGBA8** on the CPU backend.
#![forbid(unsafe_code)]

mod config;
mod engine;
mod foundation;
mod generator;
mod render;
mod shape;
mod transform;
mod value;

pub use config::EngineConfig;
pub use engine::clock::{Clock, ManualClock, SystemClock};
pub use engine::draw_engine::{DrawEngine, FrameOutcome};
pub use engine::scheduler::{FrameScheduler, FrameTicket, QueueScheduler};
pub use engine::timing::TimeTracker;
pub use foundation::core::{Affine, BezPath, Color, HostSize, Point, Size, Vec2};
pub use foundation::error::{ArtgenError, ArtgenResult};
pub use generator::buffer::{ShapeBuffer, ShapePatch};
pub use generator::protocol::{FnGenerator, Generator, Toolkit, after, frame_counter};
pub use generator::stepper::ArcStepper;
pub use render::composite::{PremulRgba8, over, over_in_place};
pub use render::cpu::{CpuSurface, CpuSurfaceFactory, FrameRGBA, compose_layers};
pub use render::recording::{
    PaintOp, Painted, RecordingSurface, RecordingSurfaceFactory, SurfaceCommand,
};
pub use render::surface::{Layers, Surface, SurfaceFactory};
pub use shape::model::{
    DEFAULT_LINE_WIDTH, DEFAULT_POINT_RADIUS, Direction, PaintStyle, Shape, ShapeKind, Vertex,
};
pub use transform::coords::CoordinateTransform;
pub use value::color::{rgba, with_opacity};
pub use value::resolver::{Bound, Resolver, Span, Value, full_span};
