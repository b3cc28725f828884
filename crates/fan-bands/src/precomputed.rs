//! Bands from already-aggregated quantiles
//!
//! Callers that summarized their draws elsewhere hand over
//! `(x, quantile label, value)` triples. Labels are parsed once into
//! [`Percentile`]s; symmetric percentiles are then paired around the median
//! to recover the interval widths (`q25` with `q75` gives width 0.5, a lone
//! `q50` gives width 0).

use crate::{BandRow, BandTable, IntervalWidth, QuantileBander, QuantileRow};
use fan_core::{DataQualityWarning, Error, Percentile, Probability, Result, WarningKind};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// A quantile row whose percentile is still a string label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledQuantile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
    pub x: f64,
    pub label: String,
    pub value: f64,
}

impl LabelledQuantile {
    pub fn new(x: f64, label: impl Into<String>, value: f64) -> Self {
        Self {
            cohort: None,
            x,
            label: label.into(),
            value,
        }
    }

    /// Attach a cohort
    pub fn with_cohort(mut self, cohort: impl Into<String>) -> Self {
        self.cohort = Some(cohort.into());
        self
    }
}

/// Parse string labels into structured quantile rows
///
/// Fails with `InvalidArgument` on the first label that is not a
/// percentile.
pub fn parse_quantile_rows(rows: &[LabelledQuantile]) -> Result<Vec<QuantileRow>> {
    rows.iter()
        .map(|r| {
            let percentile: Percentile = r.label.parse()?;
            Ok(QuantileRow {
                cohort: r.cohort.clone(),
                x: r.x,
                percentile,
                value: r.value,
            })
        })
        .collect()
}

/// A width paired from two percentiles, with the values at both ends
struct Pairing {
    width: IntervalWidth,
    lower: f64,
    upper: f64,
}

/// Pair percentiles observed at one covariate value
///
/// `entries` must be sorted by probability.
fn pair_percentiles(entries: &[(Probability, f64)], context: &str) -> Result<Vec<Pairing>> {
    for pair in entries.windows(2) {
        if pair[0].0.approx_eq(pair[1].0) {
            return Err(Error::InvalidArgument(format!(
                "duplicate percentile {} at {context}",
                Percentile::from(pair[0].0)
            )));
        }
    }

    let unpaired = |p: Probability| {
        Error::InvalidArgument(format!(
            "percentile {} at {context} has no symmetric partner {}",
            Percentile::from(p),
            Percentile::from(p.mirror())
        ))
    };

    let mut out = Vec::with_capacity(entries.len() / 2 + 1);
    let (mut i, mut j) = (0usize, entries.len());
    while i + 1 < j {
        let (lo, lo_value) = entries[i];
        let (hi, hi_value) = entries[j - 1];
        if lo.approx_eq(hi.mirror()) {
            out.push(Pairing {
                width: IntervalWidth::from_pair(lo, hi)?,
                lower: lo_value,
                upper: hi_value,
            });
            i += 1;
            j -= 1;
        } else if lo.value() + hi.value() < 1.0 {
            // lo's partner would be above every remaining percentile
            return Err(unpaired(lo));
        } else {
            return Err(unpaired(hi));
        }
    }
    if i + 1 == j {
        let (p, value) = entries[i];
        if !p.is_median() {
            return Err(unpaired(p));
        }
        out.push(Pairing {
            width: IntervalWidth::MEDIAN,
            lower: value,
            upper: value,
        });
    }

    out.sort_by(|a, b| a.width.value().total_cmp(&b.width.value()));
    Ok(out)
}

impl QuantileBander {
    /// Re-derive band rows from pre-computed quantile rows
    ///
    /// Rows may come in any order. The output is sorted like
    /// [`QuantileBander::bands`]. Bands whose bounds are not finite are
    /// dropped with a warning rather than failing the call.
    #[instrument(skip_all, fields(rows = rows.len()))]
    pub fn from_quantile_rows(rows: &[QuantileRow]) -> Result<BandTable> {
        if rows.is_empty() {
            return Err(Error::empty_input("quantile rows"));
        }

        let mut warnings = Vec::new();
        let mut bad_covariate: BTreeMap<Option<&str>, usize> = BTreeMap::new();
        let mut groups: BTreeMap<(Option<&str>, OrderedFloat<f64>), Vec<(Probability, f64)>> =
            BTreeMap::new();
        for row in rows {
            if !row.x.is_finite() {
                *bad_covariate.entry(row.cohort()).or_default() += 1;
                continue;
            }
            groups
                .entry((row.cohort(), OrderedFloat(row.x)))
                .or_default()
                .push((row.percentile.probability(), row.value));
        }
        for (cohort, count) in bad_covariate {
            warnings.push(
                DataQualityWarning::new(cohort, None, WarningKind::NonFiniteCovariate, count)
                    .emit(),
            );
        }

        // Validate every group before building any output
        let mut paired = Vec::with_capacity(groups.len());
        for ((cohort, x), mut entries) in groups {
            entries.sort_by(|a, b| a.0.value().total_cmp(&b.0.value()));
            let context = match cohort {
                Some(c) => format!("cohort '{c}', x = {}", x.0),
                None => format!("x = {}", x.0),
            };
            paired.push((cohort, x.0, pair_percentiles(&entries, &context)?));
        }

        let mut out = Vec::with_capacity(rows.len());
        for (cohort, x, pairings) in paired {
            let before = pairings.len();
            let mut kept = 0;
            for p in pairings {
                if !(p.lower.is_finite() && p.upper.is_finite()) {
                    continue;
                }
                kept += 1;
                out.push(BandRow {
                    cohort: cohort.map(str::to_owned),
                    x,
                    width: p.width,
                    lower: p.lower,
                    upper: p.upper,
                });
            }
            if kept < before {
                warnings.push(
                    DataQualityWarning::new(
                        cohort,
                        Some(x),
                        WarningKind::NonFiniteResponse,
                        before - kept,
                    )
                    .emit(),
                );
            }
            if kept == 0 {
                warnings.push(
                    DataQualityWarning::new(cohort, Some(x), WarningKind::GroupDropped, before)
                        .emit(),
                );
            }
        }

        if out.is_empty() {
            return Err(Error::empty_input("quantile rows after excluding non-finite values"));
        }
        debug!("re-derived {} band rows", out.len());
        Ok(BandTable {
            rows: out,
            warnings,
        })
    }

    /// Parse labelled rows and re-derive band rows in one step
    pub fn from_labelled_quantiles(rows: &[LabelledQuantile]) -> Result<BandTable> {
        let parsed = parse_quantile_rows(rows)?;
        Self::from_quantile_rows(&parsed)
    }
}
