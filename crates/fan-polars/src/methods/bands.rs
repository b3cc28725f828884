//! Band and quantile computation over long-form frames

use super::columns::{
    band_frame, is_numeric, key_values, numeric_values, quantile_frame, required_keys,
};
use crate::{FanColumns, FanFrame, FanFrameExt, QuantileColumns, Result};
use fan_bands::{IntervalSet, QuantileBander, QuantileMethod, QuantileRow};
use fan_core::{Observation, Percentile, Probability};
use polars::prelude::*;
use tracing::debug;

/// Cohort column values, or all-absent when no cohort is configured
fn cohorts(df: &DataFrame, cohort: Option<&str>) -> Result<Vec<Option<String>>> {
    match cohort {
        Some(name) => key_values(df, name),
        None => Ok(vec![None; df.height()]),
    }
}

/// Percentiles from labels or from numeric probabilities
fn percentiles(df: &DataFrame, name: &str) -> Result<Vec<Percentile>> {
    if is_numeric(df, name)? {
        return numeric_values(df, name)?
            .into_iter()
            .map(|p| Ok(Probability::new(p)?.into()))
            .collect();
    }
    required_keys(df, name)?
        .into_iter()
        .map(|label| Ok(label.parse::<Percentile>()?))
        .collect()
}

impl FanFrameExt for DataFrame {
    fn fan_observations(&self, columns: &FanColumns) -> Result<Vec<Observation>> {
        let xs = numeric_values(self, &columns.x)?;
        let ys = numeric_values(self, &columns.y)?;
        let samples = required_keys(self, &columns.sample)?;
        let cohorts = cohorts(self, columns.cohort.as_deref())?;

        let observations: Vec<Observation> = xs
            .into_iter()
            .zip(ys)
            .zip(samples)
            .zip(cohorts)
            .map(|(((x, y), sample), cohort)| Observation {
                cohort,
                x,
                sample,
                y,
            })
            .collect();
        debug!("read {} observations", observations.len());
        Ok(observations)
    }

    fn fan_bands(
        &self,
        columns: &FanColumns,
        intervals: &IntervalSet,
        method: QuantileMethod,
    ) -> Result<FanFrame> {
        let observations = self.fan_observations(columns)?;
        let table = QuantileBander::new(intervals.clone())
            .with_method(method)
            .bands(&observations)?;
        let frame = band_frame(&table, &columns.x, columns.cohort.as_deref())?;
        Ok(FanFrame {
            frame,
            warnings: table.warnings,
        })
    }

    fn fan_quantiles(
        &self,
        columns: &FanColumns,
        intervals: &IntervalSet,
        method: QuantileMethod,
    ) -> Result<FanFrame> {
        let observations = self.fan_observations(columns)?;
        let table = QuantileBander::new(intervals.clone())
            .with_method(method)
            .quantiles(&observations)?;
        let frame = quantile_frame(&table, &columns.x, columns.cohort.as_deref())?;
        Ok(FanFrame {
            frame,
            warnings: table.warnings,
        })
    }

    fn fan_bands_from_quantiles(&self, columns: &QuantileColumns) -> Result<FanFrame> {
        let xs = numeric_values(self, &columns.x)?;
        let values = numeric_values(self, &columns.value)?;
        let percentiles = percentiles(self, &columns.quantile)?;
        let cohorts = cohorts(self, columns.cohort.as_deref())?;

        let rows: Vec<QuantileRow> = xs
            .into_iter()
            .zip(values)
            .zip(percentiles)
            .zip(cohorts)
            .map(|(((x, value), percentile), cohort)| QuantileRow {
                cohort,
                x,
                percentile,
                value,
            })
            .collect();

        let table = QuantileBander::from_quantile_rows(&rows)?;
        let frame = band_frame(&table, &columns.x, columns.cohort.as_deref())?;
        Ok(FanFrame {
            frame,
            warnings: table.warnings,
        })
    }
}
