use std::{
    cell::RefCell,
    f64::consts::{PI, TAU},
    path::PathBuf,
    rc::Rc,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use artgen::{
    ArcStepper, Clock, Color, CpuSurfaceFactory, DrawEngine, EngineConfig, FrameOutcome,
    Generator, HostSize, ManualClock, QueueScheduler, Resolver, Shape, ShapeBuffer, ShapePatch,
    SystemClock, Toolkit, Value, with_opacity,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Frame interval used by `--fixed-step`.
const FIXED_STEP: Duration = Duration::from_micros(16_667);
/// Demo scenes retire after this much running time.
const SCENE_LENGTH: Duration = Duration::from_secs(10);

#[derive(Parser, Debug)]
#[command(name = "artgen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a demo scene headlessly on CPU surfaces and print frame statistics.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Scene to run.
    #[arg(long, value_enum, default_value_t = Scene::Particles)]
    scene: Scene,

    /// Host width in pixels (the backing store is scaled by the pixel ratio).
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Host height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Stop after this many frames even if the scene has not finished.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Engine config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Advance a simulated clock by one 60 Hz frame per frame instead of reading wall time.
    #[arg(long)]
    fixed_step: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scene {
    /// Particles swirling into rings, then leaving trails.
    Particles,
    /// A spiral revealed ten points at a time, then orbiting.
    Spiral,
    /// Concentric arcs sweeping closed one after another.
    Rings,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => EngineConfig::default(),
    };
    let host = HostSize::new(args.width, args.height);

    let stats = match (args.scene, args.fixed_step) {
        (Scene::Particles, true) => run_fixed(Particles::new, host, config, args.frames),
        (Scene::Particles, false) => run_live(Particles::new, host, config, args.frames),
        (Scene::Spiral, true) => run_fixed(Spiral::new, host, config, args.frames),
        (Scene::Spiral, false) => run_live(Spiral::new, host, config, args.frames),
        (Scene::Rings, true) => run_fixed(Rings::new, host, config, args.frames),
        (Scene::Rings, false) => run_live(Rings::new, host, config, args.frames),
    }?;

    println!("scene: {:?}", args.scene);
    stats.print();
    Ok(())
}

#[derive(Debug, Default)]
struct RunStats {
    frames: u64,
    state_changes: u64,
    slow: u64,
    finished: bool,
    tracked: usize,
    covered_pixels: usize,
    surface: (u32, u32),
    mean_fps: Option<f64>,
    wall: Duration,
}

impl RunStats {
    fn print(&self) {
        println!("surface: {}x{}", self.surface.0, self.surface.1);
        println!("frames: {}", self.frames);
        println!("state-changing frames: {}", self.state_changes);
        println!("slow frames: {}", self.slow);
        println!("finished: {}", self.finished);
        println!("tracked shapes: {}", self.tracked);
        println!("covered pixels: {}", self.covered_pixels);
        match self.mean_fps {
            Some(fps) => println!("average fps: {fps:.1}"),
            None => println!("average fps: n/a"),
        }
        println!("wall time: {:.2}s", self.wall.as_secs_f64());
    }
}

fn run_live<G: Generator>(
    build: impl FnOnce(Toolkit) -> G,
    host: HostSize,
    config: EngineConfig,
    max_frames: u64,
) -> anyhow::Result<RunStats> {
    run(build, host, config, max_frames, SystemClock, || {})
}

fn run_fixed<G: Generator>(
    build: impl FnOnce(Toolkit) -> G,
    host: HostSize,
    config: EngineConfig,
    max_frames: u64,
) -> anyhow::Result<RunStats> {
    let clock = ManualClock::new();
    let handle = clock.clone();
    run(build, host, config, max_frames, clock, move || {
        handle.advance(FIXED_STEP)
    })
}

/// Pumps frames until the scene finishes, the frame limit is hit, or the queue drains.
fn run<G: Generator, C: Clock>(
    build: impl FnOnce(Toolkit) -> G,
    host: HostSize,
    config: EngineConfig,
    max_frames: u64,
    clock: C,
    tick: impl Fn(),
) -> anyhow::Result<RunStats> {
    let mut engine = DrawEngine::new(build, host, None, CpuSurfaceFactory, clock, config)?;
    let fps_samples = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fps_samples);
    engine.set_data_listener(move |fps, _elapsed| {
        if fps.is_finite() {
            sink.borrow_mut().push(fps);
        }
    });

    let wall = Instant::now();
    let mut queue = QueueScheduler::new();
    let mut stats = RunStats::default();
    engine.start(&mut queue);
    while stats.frames < max_frames {
        let Some(ticket) = queue.next_frame() else {
            break;
        };
        tick();
        match engine.fire(ticket, &mut queue) {
            FrameOutcome::Rendered { state_change, slow } => {
                stats.frames += 1;
                stats.state_changes += u64::from(state_change);
                stats.slow += u64::from(slow);
            }
            FrameOutcome::Finished => {
                stats.frames += 1;
                stats.finished = true;
            }
            FrameOutcome::Skipped => anyhow::bail!("no drawing surfaces for {host:?}"),
            FrameOutcome::Stale => {}
        }
    }
    stats.wall = wall.elapsed();
    stats.tracked = engine.tracked_len();

    let frame = engine.snapshot()?;
    stats.surface = (frame.width, frame.height);
    stats.covered_pixels = frame.data.chunks_exact(4).filter(|px| px[3] > 0).count();

    let samples = fps_samples.borrow();
    if !samples.is_empty() {
        stats.mean_fps = Some(samples.iter().sum::<f64>() / samples.len() as f64);
    }
    Ok(stats)
}

fn channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

fn scene_over(elapsed: Duration) -> bool {
    elapsed >= SCENE_LENGTH
}

/// A thousand tracked points drawn into five drifting rings; past `x = 300` they stop
/// being tracked and leave trails on the background.
struct Particles {
    points: ShapeBuffer,
    resolver: Resolver,
}

impl Particles {
    const COUNT: usize = 1000;
    const PER_RING: usize = 200;

    fn new(mut tk: Toolkit) -> Self {
        let fill = tk.rgba(0.0, 200.0, 200.0, 1.0);
        let points = ShapeBuffer::generate(Self::COUNT, |i| {
            Shape::point(Value::range(-512.0, 512.0), Value::range(-512.0, 512.0))
                .radius(3.0)
                .fill(fill)
                .state_index(i as i64)
        });
        Self {
            points,
            resolver: tk.into_resolver(),
        }
    }
}

impl Generator for Particles {
    fn draw(&mut self, x: f64, _iteration: u64) -> Vec<Shape> {
        let resolver = &mut self.resolver;
        let fill = Color::opaque(
            channel(x / 600.0 * 200.0),
            200,
            channel(200.0 * (1.0 - x / 600.0)),
        );
        self.points.update(|point, index| {
            let i = (index % Self::PER_RING) as f64;
            let s = (index / Self::PER_RING) as f64;
            let angle = i / Self::PER_RING as f64 * TAU + x / 600.0 * PI;
            let drift_x = if s < 2.0 { -x / 3.0 } else { x / 3.0 };
            let drift_y = if s % 2.0 == 0.0 { -x / 3.0 } else { x / 3.0 };
            let target_x = 300.0 * angle.cos() + drift_x - s * 10.0;
            let target_y = 300.0 * angle.sin() + drift_y - s * 10.0;

            let (px, py) = match point.position() {
                Some((px, py)) => (resolver.resolve(px), resolver.resolve(py)),
                None => (0.0, 0.0),
            };
            ShapePatch::new()
                .position(px + (target_x - px) / 80.0, py + (target_y - py) / 80.0)
                .fill(Some(fill))
                .state_index((x < 300.0).then_some(index as i64))
        });
        self.points.snapshot()
    }

    fn iterate(&mut self, x: f64, _elapsed: Duration) -> f64 {
        x + 1.0
    }

    fn end_if(&mut self, elapsed: Duration, _x: f64) -> bool {
        scene_over(elapsed)
    }
}

/// A golden spiral revealed ten points per frame; afterwards every point orbits its
/// starting position while faded copies pile up underneath.
struct Spiral {
    base: ShapeBuffer,
    origins: Vec<(f64, f64, f64)>,
    resolver: Resolver,
}

impl Spiral {
    const COUNT: usize = 1000;
    const REVEAL_PER_FRAME: usize = 10;
    const REVEAL_FRAMES: f64 = 100.0;

    fn new(mut tk: Toolkit) -> Self {
        let mut origins = Vec::with_capacity(Self::COUNT);
        let base = ShapeBuffer::generate(Self::COUNT, |i| {
            let fi = i as f64;
            let red = tk.resolve(&Value::either((255.0, 220.0), (0.0, 10.0)));
            let green = tk.resolve(&if red < 50.0 {
                Value::range(150.0, 200.0)
            } else {
                Value::range(0.0, 10.0)
            });
            let x = (fi / 100.0 * TAU).cos() * fi / 2.0;
            let y = (fi / 100.0 * TAU).sin() * fi / 2.0;
            let spin = if tk.resolver().unit() < 0.5 { 1.0 } else { -1.0 };
            origins.push((x, y, spin));
            Shape::point(x, y)
                .radius(3.0)
                .line_width(1.0)
                .fill(Color::opaque(channel(red), channel(green), 0))
                .z_index(i as i32)
        });
        Self {
            base,
            origins,
            resolver: tk.into_resolver(),
        }
    }
}

impl Generator for Spiral {
    fn draw(&mut self, x: f64, _iteration: u64) -> Vec<Shape> {
        let residual = self.base.view(|shape, _| {
            ShapePatch::new()
                .state_index(None)
                .fill(with_opacity((0.25 - x / 1200.0).max(0.0), shape.fill))
        });
        if x >= Self::REVEAL_FRAMES {
            let origins = &self.origins;
            let resolver = &mut self.resolver;
            self.base.update(|_, i| {
                let (ox, oy, spin) = origins[i];
                let th = spin * x / 10.0;
                let wobble = Value::range(5.0, i as f64 * 0.1);
                ShapePatch::new()
                    .position(
                        ox + th.cos() * resolver.resolve(&wobble),
                        oy + th.sin() * resolver.resolve(&wobble),
                    )
                    .radius(x / 50.0)
            });
        }

        if x < Self::REVEAL_FRAMES {
            let start = x as usize * Self::REVEAL_PER_FRAME;
            self.base.slice(start..start + Self::REVEAL_PER_FRAME)
        } else {
            residual
        }
    }

    fn iterate(&mut self, x: f64, _elapsed: Duration) -> f64 {
        x + 1.0
    }

    fn end_if(&mut self, elapsed: Duration, _x: f64) -> bool {
        scene_over(elapsed)
    }
}

/// Concentric arcs, each starting a few frames after the previous one.
struct Rings {
    steppers: Vec<ArcStepper>,
}

impl Rings {
    const COUNT: usize = 12;
    const SWEEP_PER_FRAME: f64 = 0.02;

    fn new(mut tk: Toolkit) -> Self {
        let steppers = (0..Self::COUNT)
            .filter_map(|i| {
                let fi = i as f64;
                let stroke = tk.rgba((120.0, 255.0), (60.0, 160.0), 255.0, (0.6, 1.0));
                let template = Shape::arc(0.0, 0.0, 40.0 + fi * 35.0, 0.0, 0.0)
                    .stroke(stroke)
                    .line_width(6.0)
                    .state_index(i as i64);
                ArcStepper::new(template, fi * 0.5, Some(i as u32 * 8)).ok()
            })
            .collect();
        Self { steppers }
    }
}

impl Generator for Rings {
    fn draw(&mut self, _x: f64, _iteration: u64) -> Vec<Shape> {
        self.steppers
            .iter_mut()
            .filter(|s| !s.ended())
            .map(|s| s.step(Self::SWEEP_PER_FRAME).clone())
            .collect()
    }

    fn iterate(&mut self, x: f64, _elapsed: Duration) -> f64 {
        x + 1.0
    }

    fn end_if(&mut self, elapsed: Duration, _x: f64) -> bool {
        self.steppers.iter().all(ArcStepper::ended) || scene_over(elapsed)
    }
}
