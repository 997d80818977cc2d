//! Lazy literal-or-stochastic values.
//!
//! A [`Value`] is resolved at each use site. Only literals are stable across reads; a
//! range draws a fresh uniform sample every time, and an [`Value::Either`] first picks
//! one of its two ranges with equal probability and then samples inside it.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::math::bounded;

/// One endpoint of a range: a plain number or a percentage string such as `"25%"`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Number(f64),
    Percent(String),
}

impl Bound {
    pub fn percent(s: impl Into<String>) -> Self {
        Self::Percent(s.into())
    }

    /// Fraction in `[0, 1]` for percentage bounds; `None` when it does not parse.
    fn fraction(&self) -> Option<f64> {
        let pct = match self {
            Self::Number(n) => *n,
            Self::Percent(s) => {
                let s = s.trim();
                s.strip_suffix('%').unwrap_or(s).trim().parse::<f64>().ok()?
            }
        };
        if !pct.is_finite() {
            return None;
        }
        Some(bounded(pct / 100.0, 0.0, 1.0))
    }

    fn is_percent(&self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Bound {
    fn from(value: &str) -> Self {
        Self::Percent(value.to_string())
    }
}

/// A literal number, a `[lo, hi]` range, or a pair of ranges.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    Literal(f64),
    Range([Bound; 2]),
    Either([[Bound; 2]; 2]),
}

impl Value {
    pub fn range(lo: impl Into<Bound>, hi: impl Into<Bound>) -> Self {
        Self::Range([lo.into(), hi.into()])
    }

    pub fn either(first: (f64, f64), second: (f64, f64)) -> Self {
        Self::Either([
            [Bound::Number(first.0), Bound::Number(first.1)],
            [Bound::Number(second.0), Bound::Number(second.1)],
        ])
    }

    pub fn as_literal(&self) -> Option<f64> {
        match self {
            Self::Literal(v) => Some(*v),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Literal(0.0)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

impl From<(f64, f64)> for Value {
    fn from((lo, hi): (f64, f64)) -> Self {
        Self::range(lo, hi)
    }
}

/// Index span selecting a contiguous sub-sequence, by index or by percentage.
pub type Span = [Bound; 2];

/// The full span of any sequence.
pub fn full_span() -> Span {
    [Bound::percent("0%"), Bound::percent("100%")]
}

/// Random source that turns [`Value`]s into numbers.
#[derive(Clone, Debug)]
pub struct Resolver {
    rng: StdRng,
}

impl Resolver {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Either a reproducible or an entropy-seeded resolver.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Independent resolver whose stream is derived from this one.
    pub fn fork(&mut self) -> Self {
        Self::from_seed(self.rng.r#gen::<u64>())
    }

    /// Resolve a value with no reference length.
    ///
    /// Percentage bounds resolve to their fraction of one (`"50%"` is `0.5`).
    pub fn resolve(&mut self, value: &Value) -> f64 {
        self.resolve_in(value, None)
    }

    /// Resolve a value whose percentage bounds refer to a sequence of `length` items.
    ///
    /// With a length, bounds live in index space `[0, length - 1]`: percentages are
    /// mapped and rounded there, numbers are clamped there.
    pub fn resolve_in(&mut self, value: &Value, length: Option<usize>) -> f64 {
        match value {
            Value::Literal(v) => *v,
            Value::Range(range) => self.sample_range(range, length),
            Value::Either([a, b]) => {
                let pick = if self.rng.gen_bool(0.5) { a } else { b };
                self.sample_range(pick, length)
            }
        }
    }

    /// Resolve an index span against a sequence length; `None` for an empty sequence.
    ///
    /// Unparseable percentages fall back to the full span `[0, length - 1]`.
    pub fn resolve_span(&self, span: &Span, length: usize) -> Option<(usize, usize)> {
        let last = length.checked_sub(1)?;
        let (lo, hi) = span_bounds(span, Some(length));
        let to_index = |v: f64| bounded(v.round(), 0.0, last as f64) as usize;
        Some((to_index(lo), to_index(hi)))
    }

    /// Uniform sample in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    fn sample_range(&mut self, range: &[Bound; 2], length: Option<usize>) -> f64 {
        let (lo, hi) = span_bounds(range, length);
        lo + self.unit() * (hi - lo)
    }
}

fn span_bounds(range: &[Bound; 2], length: Option<usize>) -> (f64, f64) {
    let [lo, hi] = range;
    let last = length.map(|len| len.saturating_sub(1) as f64);

    if lo.is_percent() || hi.is_percent() {
        let scale = last.unwrap_or(1.0);
        return match (lo.fraction(), hi.fraction()) {
            (Some(a), Some(b)) if length.is_some() => ((a * scale).round(), (b * scale).round()),
            (Some(a), Some(b)) => (a, b),
            _ => (0.0, scale),
        };
    }

    let number = |b: &Bound| match b {
        Bound::Number(n) => *n,
        Bound::Percent(_) => 0.0,
    };
    let (a, b) = (number(lo), number(hi));
    match last {
        Some(last) => (bounded(a, 0.0, last), bounded(b, 0.0, last)),
        None => (a, b),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/resolver.rs"]
mod tests;
