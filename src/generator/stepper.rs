use std::f64::consts::TAU;

use crate::{
    foundation::error::{ArtgenError, ArtgenResult},
    shape::model::{Shape, ShapeKind},
    value::resolver::Value,
};

const END_THRESHOLD: f64 = 1.05;

/// Sweeps an arc open from a fixed start angle, one step per frame.
#[derive(Clone, Debug)]
pub struct ArcStepper {
    arc: Shape,
    x: Value,
    y: Value,
    radius: Value,
    start_angle: f64,
    fraction: f64,
    delay: u32,
    ended: bool,
}

impl ArcStepper {
    /// `template` must be an arc; its start and end angles are replaced by `start_angle`.
    /// `delay` frames pass before the sweep begins.
    pub fn new(template: Shape, start_angle: f64, delay: Option<u32>) -> ArtgenResult<Self> {
        let mut arc = template;
        let ShapeKind::Arc {
            x,
            y,
            radius,
            start,
            end,
            ..
        } = &mut arc.kind
        else {
            return Err(ArtgenError::validation("arc stepper needs an arc template"));
        };
        *start = Value::Literal(start_angle);
        *end = Value::Literal(start_angle);
        let (x, y, radius) = (x.clone(), y.clone(), radius.clone());

        Ok(Self {
            arc,
            x,
            y,
            radius,
            start_angle,
            fraction: 0.0,
            delay: delay.unwrap_or(0),
            ended: false,
        })
    }

    /// Either burns one frame of delay, or advances the sweep by `delta` of a full turn.
    pub fn step(&mut self, delta: f64) -> &Shape {
        if self.delay > 0 {
            self.delay -= 1;
            return &self.arc;
        }
        self.fraction += delta;
        if let ShapeKind::Arc { end, .. } = &mut self.arc.kind {
            *end = Value::Literal(self.start_angle + self.fraction * TAU);
        }
        if self.fraction > END_THRESHOLD {
            self.ended = true;
        }
        &self.arc
    }

    pub fn shape(&self) -> &Shape {
        &self.arc
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn x(&self) -> &Value {
        &self.x
    }

    pub fn y(&self) -> &Value {
        &self.y
    }

    pub fn radius(&self) -> &Value {
        &self.radius
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generator/stepper.rs"]
mod tests;
