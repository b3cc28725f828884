//! Central probability intervals
//!
//! An interval of width `w` covers the middle `w` of the distribution at a
//! covariate value: its bounds are the quantiles at `0.5 - w/2` and
//! `0.5 + w/2`. Width `0` is the degenerate median-only interval.

use fan_core::{Error, Probability, Result, PROBABILITY_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Each bound moves by half the width, so widths this close give bounds
/// that match within [`PROBABILITY_TOLERANCE`]
const WIDTH_TOLERANCE: f64 = 2.0 * PROBABILITY_TOLERANCE;

/// Width of one central interval, in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct IntervalWidth(f64);

impl IntervalWidth {
    /// The median-only interval
    pub const MEDIAN: IntervalWidth = IntervalWidth(0.0);

    /// Create a new width
    pub fn new(width: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&width) {
            return Err(Error::invalid_width(width));
        }
        Ok(Self(width))
    }

    /// Width derived from a symmetric pair of probabilities, with float
    /// noise rounded away
    pub fn from_pair(lower: Probability, upper: Probability) -> Result<Self> {
        let raw = upper.value() - lower.value();
        Self::new(((raw * 1e12).round() / 1e12).clamp(0.0, 1.0))
    }

    /// The raw value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this is the median-only interval
    pub fn is_median(self) -> bool {
        self.0 == 0.0
    }

    /// Probability of the lower bound
    pub fn lower_probability(self) -> Probability {
        Probability::clamped(0.5 - self.0 / 2.0)
    }

    /// Probability of the upper bound
    pub fn upper_probability(self) -> Probability {
        Probability::clamped(0.5 + self.0 / 2.0)
    }

    /// Percent label such as `50%`
    pub fn label(self) -> String {
        format!("{}%", (self.0 * 100.0 * 1e6).round() / 1e6)
    }
}

impl TryFrom<f64> for IntervalWidth {
    type Error = Error;

    fn try_from(width: f64) -> Result<Self> {
        Self::new(width)
    }
}

impl From<IntervalWidth> for f64 {
    fn from(w: IntervalWidth) -> f64 {
        w.0
    }
}

impl fmt::Display for IntervalWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A non-empty set of interval widths, kept sorted ascending without
/// duplicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct IntervalSet {
    widths: Vec<IntervalWidth>,
}

impl IntervalSet {
    /// Validate and normalize a set of widths
    ///
    /// Fails with `InvalidArgument` when the set is empty or any width lies
    /// outside `[0, 1]`. Widths closer than twice [`PROBABILITY_TOLERANCE`]
    /// are merged, since their bounds would match within tolerance.
    pub fn new(widths: &[f64]) -> Result<Self> {
        if widths.is_empty() {
            return Err(Error::empty_intervals());
        }
        let mut validated = widths
            .iter()
            .map(|&w| IntervalWidth::new(w))
            .collect::<Result<Vec<_>>>()?;

        validated.sort_by(|a, b| a.0.total_cmp(&b.0));
        validated.dedup_by(|a, b| (a.0 - b.0).abs() <= WIDTH_TOLERANCE);
        Ok(Self { widths: validated })
    }

    /// Evenly spaced ladder `1/n, 2/n, ..., (n-1)/n` for dense fans
    pub fn fan(n: usize) -> Result<Self> {
        if n < 2 {
            return Err(Error::InvalidArgument(format!(
                "a fan ladder needs at least 2 steps, got {n}"
            )));
        }
        let widths: Vec<f64> = (1..n).map(|k| k as f64 / n as f64).collect();
        Self::new(&widths)
    }

    /// Default set for boundary lines: the median, 50% and 90%
    pub fn lines() -> Self {
        Self {
            widths: vec![IntervalWidth(0.0), IntervalWidth(0.5), IntervalWidth(0.9)],
        }
    }

    /// Widths, ascending
    pub fn widths(&self) -> &[IntervalWidth] {
        &self.widths
    }

    /// Widths as raw values, ascending
    pub fn values(&self) -> Vec<f64> {
        self.widths.iter().map(|w| w.value()).collect()
    }

    /// Number of widths
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Iterate widths, ascending
    pub fn iter(&self) -> impl Iterator<Item = IntervalWidth> + '_ {
        self.widths.iter().copied()
    }

    /// Distinct probabilities needed to compute every interval, ascending
    pub fn probabilities(&self) -> Vec<Probability> {
        let mut ps: Vec<Probability> = self
            .widths
            .iter()
            .flat_map(|w| [w.lower_probability(), w.upper_probability()])
            .collect();
        ps.sort_by(|a, b| a.value().total_cmp(&b.value()));
        ps.dedup_by(|a, b| a.approx_eq(*b));
        ps
    }
}

impl Default for IntervalSet {
    /// `{0.5, 0.8, 0.95, 0.99}`
    fn default() -> Self {
        Self {
            widths: [0.5, 0.8, 0.95, 0.99].into_iter().map(IntervalWidth).collect(),
        }
    }
}

impl TryFrom<Vec<f64>> for IntervalSet {
    type Error = Error;

    fn try_from(widths: Vec<f64>) -> Result<Self> {
        Self::new(&widths)
    }
}

impl From<IntervalSet> for Vec<f64> {
    fn from(set: IntervalSet) -> Vec<f64> {
        set.values()
    }
}
