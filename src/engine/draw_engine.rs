//! The differential frame loop.
//!
//! Ephemeral shapes are painted once onto the append-only background layer. Tracked
//! shapes live in a table keyed by their state index; whenever any of them changes the
//! foreground layer is wiped and the whole table is repainted.

use std::{collections::BTreeMap, time::Duration, time::Instant};

use crate::{
    config::EngineConfig,
    engine::{
        clock::{Clock, SystemClock},
        scheduler::{FrameScheduler, FrameTicket},
        timing::{TimeTracker, ms},
    },
    foundation::{
        core::{HostSize, Size},
        error::{ArtgenError, ArtgenResult},
    },
    generator::protocol::{Generator, Toolkit},
    render::{
        cpu::{CpuSurface, FrameRGBA, compose_layers},
        painter::{PassStats, render_pass},
        surface::{Layers, Surface, SurfaceFactory},
    },
    shape::model::Shape,
    transform::coords::CoordinateTransform,
    value::resolver::Resolver,
};

/// What happened when a frame ticket fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The ticket belongs to an earlier run, or the run already ended.
    Stale,
    /// No drawing surfaces; nothing was drawn and the loop stopped.
    Skipped,
    /// Frame painted and the next one requested.
    Rendered { state_change: bool, slow: bool },
    /// Frame painted, then the generator asked to stop.
    Finished,
}

type DataListener = Box<dyn FnMut(f64, Duration)>;

/// Drives a [`Generator`] onto a background/foreground pair of surfaces.
pub struct DrawEngine<G, F, C = SystemClock>
where
    F: SurfaceFactory,
{
    generator: G,
    layers: Option<Layers<F::Surface>>,
    clock: C,
    config: EngineConfig,
    transform: CoordinateTransform,
    resolver: Resolver,
    generation: u64,
    running: bool,
    tracked: BTreeMap<i64, Shape>,
    progress: f64,
    iteration_count: u64,
    start_time: Option<Instant>,
    prev_time: Option<Instant>,
    timer: TimeTracker,
    listener: Option<DataListener>,
}

impl<G, F, C> DrawEngine<G, F, C>
where
    G: Generator,
    F: SurfaceFactory,
    C: Clock,
{
    /// Builds the generator and both surfaces.
    ///
    /// Surfaces are `host × pixel_ratio` physical pixels. The logical coordinate system is
    /// `coordinate_system`, else the configured one, else the physical size. A factory that
    /// cannot provide surfaces is not an error here; frames are skipped instead.
    pub fn new(
        factory_fn: impl FnOnce(Toolkit) -> G,
        host: HostSize,
        coordinate_system: Option<Size>,
        mut surfaces: F,
        clock: C,
        config: EngineConfig,
    ) -> ArtgenResult<Self> {
        config.validate()?;
        let physical = host.scaled(config.pixel_ratio);
        if physical.width == 0 || physical.height == 0 {
            return Err(ArtgenError::validation(format!(
                "surface size must be non-zero, got {}x{}",
                physical.width, physical.height
            )));
        }
        let logical = match coordinate_system.or(config.coordinate_system) {
            Some(cs) => Size::new(cs.width, cs.height)?,
            None => Size::from(physical),
        };

        let layers = Layers::create(&mut surfaces, physical);
        if layers.is_none() {
            tracing::debug!(?physical, "surface factory returned no surfaces");
        }

        let mut resolver = Resolver::new(config.seed);
        let generator = factory_fn(Toolkit::new(resolver.fork()));

        Ok(Self {
            generator,
            layers,
            clock,
            transform: CoordinateTransform::new(logical, physical),
            config,
            resolver,
            generation: 0,
            running: false,
            tracked: BTreeMap::new(),
            progress: 0.0,
            iteration_count: 0,
            start_time: None,
            prev_time: None,
            timer: TimeTracker::new(),
            listener: None,
        })
    }

    /// Resets all run state, clears both layers and requests the first frame.
    ///
    /// Any frame still pending from a previous run becomes stale.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.generation += 1;
        self.running = true;
        self.tracked.clear();
        self.progress = 0.0;
        self.iteration_count = 0;
        self.start_time = Some(self.clock.now());
        self.prev_time = None;
        if let Some(layers) = self.layers.as_mut() {
            layers.clear();
        }
        tracing::debug!(generation = self.generation, "animation started");
        scheduler.request_frame(FrameTicket {
            generation: self.generation,
        });
    }

    /// Runs one frame for `ticket`.
    #[tracing::instrument(level = "trace", skip(self, scheduler))]
    pub fn fire<S: FrameScheduler + ?Sized>(
        &mut self,
        ticket: FrameTicket,
        scheduler: &mut S,
    ) -> FrameOutcome {
        if ticket.generation != self.generation || !self.running {
            tracing::debug!(current = self.generation, "stale frame ignored");
            return FrameOutcome::Stale;
        }
        let Some(layers) = self.layers.as_mut() else {
            tracing::debug!("no drawing surfaces, frame skipped");
            self.running = false;
            return FrameOutcome::Skipped;
        };

        self.timer.start(self.clock.now());
        let shapes = self.generator.draw(self.progress, self.iteration_count);
        self.timer.breakpoint("calculate", self.clock.now());

        let mut ephemeral = Vec::with_capacity(shapes.len());
        let mut state_change = false;
        for shape in shapes {
            match shape.state_index {
                Some(id) => {
                    self.tracked.insert(id, shape);
                    state_change = true;
                }
                None => ephemeral.push(shape),
            }
        }
        self.timer.breakpoint("reduce all", self.clock.now());

        if state_change {
            layers.foreground.clear();
        }
        let background = render_pass(
            &mut layers.background,
            &ephemeral,
            &self.transform,
            &mut self.resolver,
        );
        self.timer.breakpoint("render static", self.clock.now());

        let foreground = if state_change {
            let stats = render_pass(
                &mut layers.foreground,
                self.tracked.values(),
                &self.transform,
                &mut self.resolver,
            );
            self.timer.breakpoint("render state", self.clock.now());
            stats
        } else {
            PassStats::default()
        };
        layers.present();
        tracing::trace!(
            background_shapes = background.shapes,
            foreground_shapes = foreground.shapes,
            paint_calls = background.paint_calls + foreground.paint_calls,
            style_changes = background.style_changes + foreground.style_changes,
            "frame painted"
        );
        self.timer.breakpoint("present", self.clock.now());

        let now = self.clock.now();
        let frame_time = self.timer.elapsed(now);
        let slow = ms(frame_time) > self.config.slow_frame_budget_ms;
        if slow {
            tracing::warn!(
                iteration = self.iteration_count,
                frame_ms = ms(frame_time),
                "slow frame\n{}",
                self.timer.report(now)
            );
        }

        let running_time = self
            .start_time
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or_default();
        if self.generator.end_if(running_time, self.progress) {
            self.running = false;
            tracing::info!(
                iterations = self.iteration_count,
                running_ms = ms(running_time),
                tracked = self.tracked.len(),
                "animation finished"
            );
            return FrameOutcome::Finished;
        }

        if let Some(prev) = self.prev_time {
            let dt = now.saturating_duration_since(prev).as_secs_f64();
            let fps = if dt > 0.0 { 1.0 / dt } else { f64::INFINITY };
            if let Some(listener) = self.listener.as_mut() {
                listener(fps, running_time);
            }
        }
        self.prev_time = Some(now);
        self.iteration_count += 1;
        self.progress = self.generator.iterate(self.progress, running_time);

        scheduler.request_frame(ticket);
        FrameOutcome::Rendered { state_change, slow }
    }

    /// Drops both surfaces. Pending and later frames are skipped.
    pub fn teardown(&mut self) {
        self.layers = None;
        tracing::debug!(generation = self.generation, "engine torn down");
    }

    /// Per-frame telemetry hook, called from the second frame on with the instantaneous
    /// fps and the time since `start()`.
    pub fn set_data_listener(&mut self, listener: impl FnMut(f64, Duration) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn surfaces(&self) -> Option<&Layers<F::Surface>> {
        self.layers.as_ref()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }

    /// Latest shape per state index, in index order.
    pub fn tracked_shapes(&self) -> impl Iterator<Item = (i64, &Shape)> + '_ {
        self.tracked.iter().map(|(id, shape)| (*id, shape))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G, F, C> DrawEngine<G, F, C>
where
    F: SurfaceFactory<Surface = CpuSurface>,
{
    /// Foreground over background as one premultiplied RGBA8 frame.
    pub fn snapshot(&self) -> ArtgenResult<FrameRGBA> {
        let layers = self
            .layers
            .as_ref()
            .ok_or_else(|| ArtgenError::render("engine has no surfaces"))?;
        compose_layers(&layers.background, &layers.foreground)
    }
}
