//! Extension trait for quantile fans on Polars DataFrames

use crate::{FanColumns, QuantileColumns, Result};
use fan_bands::{IntervalSet, QuantileMethod};
use fan_core::{DataQualityWarning, Observation};
use polars::prelude::*;

/// A result frame plus the data-quality warnings raised computing it
#[derive(Debug, Clone)]
pub struct FanFrame {
    pub frame: DataFrame,
    pub warnings: Vec<DataQualityWarning>,
}

/// Extension trait for quantile fan operations on Polars DataFrames
pub trait FanFrameExt {
    /// Read long-form rows
    ///
    /// Numeric `x`/`y` columns are cast to `f64` and nulls become NaN, so
    /// they are excluded downstream like any other non-finite value. The
    /// sample and cohort columns may have any dtype; they are cast to
    /// strings. A null sample id fails with `NullKey`.
    fn fan_observations(&self, columns: &FanColumns) -> Result<Vec<Observation>>;

    /// Compute band rows
    ///
    /// # Returns
    /// Frame with columns `[cohort], x, interval, lower, upper`, named after
    /// the configured cohort and covariate columns
    fn fan_bands(
        &self,
        columns: &FanColumns,
        intervals: &IntervalSet,
        method: QuantileMethod,
    ) -> Result<FanFrame>;

    /// Compute quantile rows
    ///
    /// # Returns
    /// Frame with columns `[cohort], x, quantile, value`; `quantile` holds
    /// labels such as `q25`
    fn fan_quantiles(
        &self,
        columns: &FanColumns,
        intervals: &IntervalSet,
        method: QuantileMethod,
    ) -> Result<FanFrame>;

    /// Pair pre-computed quantiles back into band rows
    ///
    /// # Returns
    /// Frame with columns `[cohort], x, interval, lower, upper`
    fn fan_bands_from_quantiles(&self, columns: &QuantileColumns) -> Result<FanFrame>;
}
