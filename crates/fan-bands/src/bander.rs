//! Quantile bands from raw samples

use crate::grouping::{group_responses, ResponseGroup};
use crate::{BandRow, BandTable, IntervalSet, QuantileRow, QuantileTable};
use fan_core::{DataQualityWarning, Error, Observation, Result};
use fan_quantile::{HyndmanFan, QuantileEstimator, QuantileMethod};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Computes nested central intervals at every covariate value
///
/// Each `(cohort, x)` group is summarized on its own. With the default
/// [`QuantileMethod::Linear`] the bounds are type 7 sample quantiles.
///
/// # Example
///
/// ```rust
/// use fan_bands::{IntervalSet, QuantileBander};
/// use fan_core::Observation;
///
/// let obs: Vec<Observation> = (1..=5)
///     .map(|i| Observation::new(1.0, i.to_string(), i as f64))
///     .collect();
/// let bander = QuantileBander::new(IntervalSet::new(&[0.5]).unwrap());
/// let table = bander.bands(&obs).unwrap();
/// assert_eq!((table.rows[0].lower, table.rows[0].upper), (2.0, 4.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantileBander {
    intervals: IntervalSet,
    #[serde(default)]
    method: QuantileMethod,
}

impl QuantileBander {
    /// Create a bander for the given interval set
    pub fn new(intervals: IntervalSet) -> Self {
        Self {
            intervals,
            method: QuantileMethod::default(),
        }
    }

    /// Use a different quantile convention
    pub fn with_method(mut self, method: QuantileMethod) -> Self {
        self.method = method;
        self
    }

    /// The interval set
    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }

    /// The quantile convention
    pub fn method(&self) -> QuantileMethod {
        self.method
    }

    fn estimator(&self) -> HyndmanFan {
        HyndmanFan::new(self.method)
    }

    /// One band row per `(cohort, x, width)`
    #[instrument(skip_all, fields(rows = observations.len(), widths = self.intervals.len()))]
    pub fn bands(&self, observations: &[Observation]) -> Result<BandTable> {
        let (groups, warnings) = self.prepare(observations)?;
        let estimator = self.estimator();

        let mut rows = Vec::with_capacity(groups.len() * self.intervals.len());
        for group in &groups {
            for width in self.intervals.iter() {
                let lower = estimator
                    .quantile_sorted(&group.sorted, width.lower_probability().value())?;
                let upper = estimator
                    .quantile_sorted(&group.sorted, width.upper_probability().value())?;
                rows.push(BandRow {
                    cohort: group.cohort.clone(),
                    x: group.x,
                    width,
                    lower,
                    upper,
                });
            }
        }

        debug!("computed {} band rows from {} groups", rows.len(), groups.len());
        Ok(BandTable { rows, warnings })
    }

    /// One quantile row per `(cohort, x)` and per distinct probability the
    /// interval set needs
    #[instrument(skip_all, fields(rows = observations.len(), widths = self.intervals.len()))]
    pub fn quantiles(&self, observations: &[Observation]) -> Result<QuantileTable> {
        let (groups, warnings) = self.prepare(observations)?;
        let estimator = self.estimator();
        let probabilities = self.intervals.probabilities();

        let mut rows = Vec::with_capacity(groups.len() * probabilities.len());
        for group in &groups {
            for &p in &probabilities {
                rows.push(QuantileRow {
                    cohort: group.cohort.clone(),
                    x: group.x,
                    percentile: p.into(),
                    value: estimator.quantile_sorted(&group.sorted, p.value())?,
                });
            }
        }

        debug!("computed {} quantile rows from {} groups", rows.len(), groups.len());
        Ok(QuantileTable { rows, warnings })
    }

    fn prepare(
        &self,
        observations: &[Observation],
    ) -> Result<(Vec<ResponseGroup>, Vec<DataQualityWarning>)> {
        if observations.is_empty() {
            return Err(Error::empty_input("observations"));
        }
        let (groups, warnings) = group_responses(observations);
        if groups.is_empty() {
            return Err(Error::empty_input("observations after excluding non-finite values"));
        }
        Ok((groups, warnings))
    }
}
