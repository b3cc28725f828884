//! Output tables of the bander

use crate::IntervalWidth;
use fan_core::{DataQualityWarning, Percentile};
use serde::{Deserialize, Serialize};

/// Bounds of one central interval at one covariate value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandRow {
    /// Cohort the row was computed for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
    /// Covariate value
    pub x: f64,
    /// Interval width
    pub width: IntervalWidth,
    /// Quantile at `0.5 - width / 2`
    pub lower: f64,
    /// Quantile at `0.5 + width / 2`
    pub upper: f64,
}

impl BandRow {
    /// The cohort as a borrowed key
    pub fn cohort(&self) -> Option<&str> {
        self.cohort.as_deref()
    }

    /// Whether `value` lies within the bounds
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// One quantile at one covariate value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantileRow {
    /// Cohort the row was computed for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
    /// Covariate value
    pub x: f64,
    /// Which quantile
    pub percentile: Percentile,
    /// Estimated value
    pub value: f64,
}

impl QuantileRow {
    /// The cohort as a borrowed key
    pub fn cohort(&self) -> Option<&str> {
        self.cohort.as_deref()
    }

    /// The quantile label, e.g. `q25`
    pub fn label(&self) -> String {
        self.percentile.label()
    }
}

/// Band rows sorted by cohort, covariate and ascending width, plus the
/// data-quality warnings raised while computing them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandTable {
    pub rows: Vec<BandRow>,
    pub warnings: Vec<DataQualityWarning>,
}

impl BandTable {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct cohorts in row order
    pub fn cohorts(&self) -> Vec<Option<&str>> {
        let mut out: Vec<Option<&str>> = Vec::new();
        for row in &self.rows {
            if out.last() != Some(&row.cohort()) {
                out.push(row.cohort());
            }
        }
        out
    }

    /// Distinct widths present in the table, ascending
    pub fn widths(&self) -> Vec<IntervalWidth> {
        let mut out: Vec<IntervalWidth> = self.rows.iter().map(|r| r.width).collect();
        out.sort_by(|a, b| a.value().total_cmp(&b.value()));
        out.dedup();
        out
    }

    /// Rows of one cohort and width, in covariate order
    pub fn series(&self, cohort: Option<&str>, width: IntervalWidth) -> Vec<&BandRow> {
        self.rows
            .iter()
            .filter(|r| r.cohort() == cohort && r.width == width)
            .collect()
    }

    /// Look up a single row
    pub fn get(&self, cohort: Option<&str>, x: f64, width: f64) -> Option<&BandRow> {
        self.rows
            .iter()
            .find(|r| r.cohort() == cohort && r.x == x && r.width.value() == width)
    }

    /// The same bounds expressed per quantile, one row per distinct
    /// probability at each covariate value
    pub fn to_quantile_rows(&self) -> Vec<QuantileRow> {
        let mut out: Vec<QuantileRow> = Vec::with_capacity(self.rows.len() * 2);
        let mut start = 0;
        while start < self.rows.len() {
            let head = &self.rows[start];
            let end = self.rows[start..]
                .iter()
                .position(|r| r.cohort != head.cohort || r.x != head.x)
                .map_or(self.rows.len(), |offset| start + offset);

            let mut group: Vec<QuantileRow> = self.rows[start..end]
                .iter()
                .flat_map(|r| {
                    [
                        (r.width.lower_probability(), r.lower),
                        (r.width.upper_probability(), r.upper),
                    ]
                    .into_iter()
                    .map(move |(p, value)| QuantileRow {
                        cohort: r.cohort.clone(),
                        x: r.x,
                        percentile: p.into(),
                        value,
                    })
                })
                .collect();
            group.sort_by(|a, b| {
                a.percentile
                    .probability()
                    .value()
                    .total_cmp(&b.percentile.probability().value())
            });
            group.dedup_by(|a, b| a.percentile.probability().approx_eq(b.percentile.probability()));
            out.extend(group);
            start = end;
        }
        out
    }
}

/// Quantile rows sorted by cohort, covariate and ascending probability,
/// plus the data-quality warnings raised while computing them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantileTable {
    pub rows: Vec<QuantileRow>,
    pub warnings: Vec<DataQualityWarning>,
}

impl QuantileTable {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
