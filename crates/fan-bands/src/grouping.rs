//! Split long-form observations into per-covariate response samples
//!
//! Non-finite values are excluded here, once, and reported as
//! [`DataQualityWarning`]s. Groups left without any finite response are
//! dropped.

use fan_core::{DataQualityWarning, Observation, WarningKind};
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Finite responses observed at one `(cohort, x)`, sorted ascending
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseGroup {
    pub cohort: Option<String>,
    pub x: f64,
    pub sorted: Vec<f64>,
}

#[derive(Default)]
struct Pending {
    values: Vec<f64>,
    non_finite: usize,
}

/// Group observations by cohort and covariate
///
/// Groups come back ordered by cohort (absent first), then by `x`.
/// Warnings are emitted through `tracing` as they are collected.
pub fn group_responses(
    observations: &[Observation],
) -> (Vec<ResponseGroup>, Vec<DataQualityWarning>) {
    let mut pending: BTreeMap<(Option<&str>, OrderedFloat<f64>), Pending> = BTreeMap::new();
    let mut bad_covariate: BTreeMap<Option<&str>, usize> = BTreeMap::new();

    for obs in observations {
        if !obs.x.is_finite() {
            *bad_covariate.entry(obs.cohort()).or_default() += 1;
            continue;
        }
        let entry = pending
            .entry((obs.cohort(), OrderedFloat(obs.x)))
            .or_default();
        if obs.y.is_finite() {
            entry.values.push(obs.y);
        } else {
            entry.non_finite += 1;
        }
    }

    let mut warnings: Vec<DataQualityWarning> = bad_covariate
        .into_iter()
        .map(|(cohort, count)| {
            DataQualityWarning::new(cohort, None, WarningKind::NonFiniteCovariate, count).emit()
        })
        .collect();

    let mut groups = Vec::with_capacity(pending.len());
    for ((cohort, x), mut p) in pending {
        if p.non_finite > 0 {
            warnings.push(
                DataQualityWarning::new(
                    cohort,
                    Some(x.0),
                    WarningKind::NonFiniteResponse,
                    p.non_finite,
                )
                .emit(),
            );
        }
        if p.values.is_empty() {
            warnings.push(
                DataQualityWarning::new(cohort, Some(x.0), WarningKind::GroupDropped, p.non_finite)
                    .emit(),
            );
            continue;
        }
        p.values.sort_by(f64::total_cmp);
        groups.push(ResponseGroup {
            cohort: cohort.map(str::to_owned),
            x: x.0,
            sorted: p.values,
        });
    }

    (groups, warnings)
}
