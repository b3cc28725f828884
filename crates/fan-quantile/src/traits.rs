//! Core traits for quantile estimation

use fan_core::{Error, Probability, Result};
use num_traits::Float;
use std::cmp::Ordering;

/// Main trait for sample quantile estimation
///
/// # API Convention
///
/// - Methods without suffix sort data in place (take `&mut [T]`)
/// - Methods with `_sorted` suffix require pre-sorted, finite data
pub trait QuantileEstimator: Send + Sync + Clone {
    /// Estimate a single quantile
    ///
    /// # Warning
    /// This method will sort the data in place! If you need to preserve the original
    /// order, use `quantile_sorted()` with pre-sorted data or make a copy first.
    fn quantile<T: Float>(&self, data: &mut [T], p: f64) -> Result<T> {
        sort_finite(data)?;
        self.quantile_sorted(data, p)
    }

    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted<T: Float>(&self, sorted_data: &[T], p: f64) -> Result<T>;

    /// Estimate multiple quantiles
    ///
    /// # Warning
    /// This method will sort the data in place!
    fn quantiles<T: Float>(&self, data: &mut [T], ps: &[f64]) -> Result<Vec<T>> {
        sort_finite(data)?;
        self.quantiles_sorted(data, ps)
    }

    /// Estimate multiple quantiles from pre-sorted data
    ///
    /// All probabilities are validated before any estimate is computed.
    fn quantiles_sorted<T: Float>(&self, sorted_data: &[T], ps: &[f64]) -> Result<Vec<T>> {
        for &p in ps {
            Probability::new(p)?;
        }
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Median of pre-sorted data
    fn median_sorted<T: Float>(&self, sorted_data: &[T]) -> Result<T> {
        self.quantile_sorted(sorted_data, 0.5)
    }

    /// Human-readable name of the estimator
    fn name(&self) -> &str;
}

/// Sort a sample ascending, rejecting NaN and infinities
pub fn sort_finite<T: Float>(data: &mut [T]) -> Result<()> {
    if data.iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidArgument(
            "quantile input contains NaN or infinite values".to_string(),
        ));
    }
    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(())
}
