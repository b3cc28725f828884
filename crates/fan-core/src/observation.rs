//! Long-form observation rows

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One sampled response at one covariate value
///
/// Many rows share the same `x`. `sample` tells repeated draws apart (one
/// per simulation run, say) and carries no ordering. `cohort` is an optional
/// extra grouping; cohorts are always summarized independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Optional categorical grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
    /// Covariate value
    pub x: f64,
    /// Sample identifier
    pub sample: String,
    /// Response value
    pub y: f64,
}

impl Observation {
    /// Create an observation without a cohort
    pub fn new(x: f64, sample: impl Into<String>, y: f64) -> Self {
        Self {
            cohort: None,
            x,
            sample: sample.into(),
            y,
        }
    }

    /// Attach a cohort
    pub fn with_cohort(mut self, cohort: impl Into<String>) -> Self {
        self.cohort = Some(cohort.into());
        self
    }

    /// The cohort as a borrowed key
    pub fn cohort(&self) -> Option<&str> {
        self.cohort.as_deref()
    }
}

/// Order cohorts with the absent cohort first, then lexically
pub fn cohort_order(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.cmp(&b)
}

/// Build observations from a wide matrix of draws
///
/// `draws[s][i]` is the response of sample `s` at `xs[i]`; sample ids are
/// the row indices. This is the usual shape of simulation output.
pub fn from_wide(xs: &[f64], draws: &[Vec<f64>]) -> Vec<Observation> {
    let mut out = Vec::with_capacity(xs.len() * draws.len());
    for (s, row) in draws.iter().enumerate() {
        for (&x, &y) in xs.iter().zip(row) {
            out.push(Observation::new(x, s.to_string(), y));
        }
    }
    out
}
