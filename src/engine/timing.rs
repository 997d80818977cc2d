//! Per-frame breakpoint timing.

use std::{fmt::Write as _, time::Duration, time::Instant};

const START: &str = "_start";

/// Named breakpoints within one frame, measured from a monotonic start.
#[derive(Clone, Debug, Default)]
pub struct TimeTracker {
    entries: Vec<(&'static str, Instant)>,
}

impl TimeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets previous breakpoints and starts a new measurement at `now`.
    pub fn start(&mut self, now: Instant) {
        self.entries.clear();
        self.entries.push((START, now));
    }

    pub fn breakpoint(&mut self, name: &'static str, now: Instant) {
        if self.entries.is_empty() {
            self.start(now);
        }
        self.entries.push((name, now));
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started_at()
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default()
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// One line per breakpoint with the delta to the previous one and the time since
    /// start, then the total up to `now`.
    pub fn report(&self, now: Instant) -> String {
        let Some(start) = self.started_at() else {
            return "Total Time: 0.00ms".to_string();
        };

        let mut out = String::new();
        let mut prev = start;
        for (name, at) in &self.entries {
            let _ = writeln!(
                out,
                "{name}: {:.2}ms, elapsed: {:.2}ms",
                ms(at.saturating_duration_since(prev)),
                ms(at.saturating_duration_since(start)),
            );
            prev = *at;
        }
        let _ = write!(out, "Total Time: {:.2}ms", ms(self.elapsed(now)));
        out
    }

    fn started_at(&self) -> Option<Instant> {
        self.entries.first().map(|(_, at)| *at)
    }
}

pub(crate) fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[cfg(test)]
#[path = "../../tests/unit/engine/timing.rs"]
mod tests;
