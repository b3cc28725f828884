//! Hyndman-Fan sample quantiles
//!
//! Interpolates linearly between adjacent order statistics at the position
//! given by the chosen [`QuantileMethod`].

use crate::{QuantileEstimator, QuantileMethod};
use fan_core::{Error, Probability, Result};
use num_traits::{Float, NumCast};

/// Sample quantile estimator for the continuous Hyndman-Fan definitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HyndmanFan {
    method: QuantileMethod,
}

impl HyndmanFan {
    /// Create an estimator for the given convention
    pub fn new(method: QuantileMethod) -> Self {
        Self { method }
    }

    /// The interpolation convention in use
    pub fn method(&self) -> QuantileMethod {
        self.method
    }
}

/// Convenience constructor for the type 7 estimator
pub fn linear() -> HyndmanFan {
    HyndmanFan::new(QuantileMethod::Linear)
}

impl QuantileEstimator for HyndmanFan {
    fn quantile_sorted<T: Float>(&self, sorted_data: &[T], p: f64) -> Result<T> {
        Probability::new(p)?;
        let n = sorted_data.len();
        if n == 0 {
            return Err(Error::empty_input("quantile estimation"));
        }
        if n == 1 {
            return Ok(sorted_data[0]);
        }

        let h = self.method.position(n, p);
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        let frac = <T as NumCast>::from(h - lo as f64).unwrap_or_else(T::zero);

        let a = sorted_data[lo];
        let b = sorted_data[hi];
        // Clamping keeps the estimate monotone in p across segment boundaries
        let value = a + frac * (b - a);
        Ok(value.max(a).min(b))
    }

    fn name(&self) -> &str {
        self.method.name()
    }
}
