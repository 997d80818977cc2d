use std::time::Duration;

use crate::{
    foundation::core::Color,
    shape::model::Shape,
    value::{
        color,
        resolver::{Resolver, Value},
    },
};

/// Client scene logic driven once per frame by the engine.
///
/// `x` is the generator's own progress value. The engine never interprets it; it only
/// hands back whatever `iterate` returned.
pub trait Generator {
    /// Full shape list for this frame. May update the generator's private state, never
    /// the engine's.
    fn draw(&mut self, x: f64, iteration: u64) -> Vec<Shape>;

    /// Next progress value, given the time since `start()`.
    fn iterate(&mut self, x: f64, elapsed: Duration) -> f64;

    /// Once this returns true the run stops for good.
    fn end_if(&mut self, elapsed: Duration, x: f64) -> bool;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn draw(&mut self, x: f64, iteration: u64) -> Vec<Shape> {
        (**self).draw(x, iteration)
    }

    fn iterate(&mut self, x: f64, elapsed: Duration) -> f64 {
        (**self).iterate(x, elapsed)
    }

    fn end_if(&mut self, elapsed: Duration, x: f64) -> bool {
        (**self).end_if(elapsed, x)
    }
}

/// Capabilities handed to a generator when it is built.
#[derive(Debug)]
pub struct Toolkit {
    resolver: Resolver,
}

impl Toolkit {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&mut self) -> &mut Resolver {
        &mut self.resolver
    }

    /// Gives up the toolkit, keeping its resolver for use inside `draw`.
    pub fn into_resolver(self) -> Resolver {
        self.resolver
    }

    pub fn resolve(&mut self, value: &Value) -> f64 {
        self.resolver.resolve(value)
    }

    pub fn rgba(
        &mut self,
        r: impl Into<Value>,
        g: impl Into<Value>,
        b: impl Into<Value>,
        a: impl Into<Value>,
    ) -> Color {
        color::rgba(
            &mut self.resolver,
            &r.into(),
            &g.into(),
            &b.into(),
            &a.into(),
        )
    }

    pub fn with_opacity(&self, alpha: f64, c: Option<Color>) -> Option<Color> {
        color::with_opacity(alpha, c)
    }
}

/// A [`Generator`] assembled from three closures.
pub struct FnGenerator<D, I, E> {
    draw: D,
    iterate: I,
    end_if: E,
}

impl<D, I, E> FnGenerator<D, I, E>
where
    D: FnMut(f64, u64) -> Vec<Shape>,
    I: FnMut(f64, Duration) -> f64,
    E: FnMut(Duration, f64) -> bool,
{
    pub fn new(draw: D, iterate: I, end_if: E) -> Self {
        Self {
            draw,
            iterate,
            end_if,
        }
    }
}

impl<D, I, E> Generator for FnGenerator<D, I, E>
where
    D: FnMut(f64, u64) -> Vec<Shape>,
    I: FnMut(f64, Duration) -> f64,
    E: FnMut(Duration, f64) -> bool,
{
    fn draw(&mut self, x: f64, iteration: u64) -> Vec<Shape> {
        (self.draw)(x, iteration)
    }

    fn iterate(&mut self, x: f64, elapsed: Duration) -> f64 {
        (self.iterate)(x, elapsed)
    }

    fn end_if(&mut self, elapsed: Duration, x: f64) -> bool {
        (self.end_if)(elapsed, x)
    }
}

/// Progress step used by most generators: one unit per frame.
pub fn frame_counter(x: f64, _elapsed: Duration) -> f64 {
    x + 1.0
}

/// Termination after a fixed running time.
pub fn after(duration: Duration) -> impl FnMut(Duration, f64) -> bool {
    move |elapsed, _x| elapsed >= duration
}
