//! Validated probabilities and percentile labels
//!
//! Quantile labels such as `"q25"` are parsed once into a [`Percentile`]
//! at the boundary. Downstream code only ever sees the numeric probability.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when matching probabilities that should be equal
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// A probability in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Probability(f64);

impl Probability {
    /// The median
    pub const HALF: Probability = Probability(0.5);

    /// Create a new probability
    pub fn new(p: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_probability(p));
        }
        Ok(Self(p))
    }

    /// The raw value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Clamp an already range-checked value into `[0, 1]`
    ///
    /// For values derived arithmetically from validated probabilities or
    /// interval widths, where only rounding can step outside the range.
    pub fn clamped(p: f64) -> Self {
        debug_assert!(!p.is_nan(), "probability derived from NaN");
        Self(p.clamp(0.0, 1.0))
    }

    /// The probability mirrored around the median, `1 - p`
    pub fn mirror(self) -> Self {
        Self((1.0 - self.0).clamp(0.0, 1.0))
    }

    /// Whether two probabilities are equal within [`PROBABILITY_TOLERANCE`]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.0 - other.0).abs() <= PROBABILITY_TOLERANCE
    }

    /// Whether this is the median
    pub fn is_median(self) -> bool {
        self.approx_eq(Self::HALF)
    }
}

impl TryFrom<f64> for Probability {
    type Error = Error;

    fn try_from(p: f64) -> Result<Self> {
        Self::new(p)
    }
}

impl From<Probability> for f64 {
    fn from(p: Probability) -> f64 {
        p.0
    }
}

/// A percentile identified by its probability
///
/// Displays as `q<percent>`, e.g. `q25` or `q2.5`. Parses from that form
/// and from `25%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentile(Probability);

impl Percentile {
    /// Create a percentile from a probability in `[0, 1]`
    pub fn from_probability(p: f64) -> Result<Self> {
        Probability::new(p).map(Self)
    }

    /// The underlying probability
    pub fn probability(self) -> Probability {
        self.0
    }

    /// The percentile on the 0..=100 scale, rounded to drop float noise
    pub fn percent(self) -> f64 {
        (self.0.value() * 100.0 * 1e6).round() / 1e6
    }

    /// The label used in quantile tables
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl From<Probability> for Percentile {
    fn from(p: Probability) -> Self {
        Self(p)
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.percent())
    }
}

impl FromStr for Percentile {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        let number = if let Some(rest) = trimmed.strip_suffix('%') {
            rest
        } else if let Some(rest) = trimmed
            .strip_prefix('q')
            .or_else(|| trimmed.strip_prefix('Q'))
        {
            rest
        } else {
            return Err(Error::invalid_label(label));
        };

        let percent: f64 = number
            .trim()
            .parse()
            .map_err(|_| Error::invalid_label(label))?;
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(Error::invalid_label(label));
        }
        Self::from_probability(percent / 100.0)
    }
}
