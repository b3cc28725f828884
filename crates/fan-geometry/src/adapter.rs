//! Band rows to drawable primitives

use crate::primitive::{BoundSide, BoundaryLine, DrawPrimitive, FilledBand, LineCategory, Point};
use crate::style::{FanStyle, ScaleParams};
use crate::trajectory::{sample_trajectories, TrajectorySample};
use fan_bands::{BandRow, BandTable, IntervalWidth};
use fan_core::{DataQualityWarning, Observation, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Primitives ready for a renderer, plus its opaque scale parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub primitives: Vec<DrawPrimitive>,
    #[serde(default)]
    pub scale: ScaleParams,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DataQualityWarning>,
}

impl Geometry {
    /// Append sampled paths on top of the existing layers
    pub fn push_paths(&mut self, sample: TrajectorySample) {
        self.primitives.extend(sample.paths);
        self.warnings.extend(sample.warnings);
    }

    pub fn bands(&self) -> impl Iterator<Item = &FilledBand> + '_ {
        self.primitives.iter().filter_map(DrawPrimitive::as_band)
    }

    pub fn lines(&self) -> impl Iterator<Item = &BoundaryLine> + '_ {
        self.primitives.iter().filter_map(DrawPrimitive::as_line)
    }
}

/// Converts band tables into tagged primitives under one [`FanStyle`]
///
/// Linear interpolation between adjacent covariate values is left to the
/// renderer and only makes sense on an orderable axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryAdapter {
    style: FanStyle,
}

/// Rows of one cohort and width, sorted by `x`
fn sorted_series<'a>(
    table: &'a BandTable,
    cohort: Option<&str>,
    width: IntervalWidth,
) -> Vec<&'a BandRow> {
    let mut series = table.series(cohort, width);
    series.sort_by(|a, b| a.x.total_cmp(&b.x));
    series
}

/// Widths present for one cohort, ascending
fn cohort_widths(table: &BandTable, cohort: Option<&str>) -> Vec<IntervalWidth> {
    table
        .widths()
        .into_iter()
        .filter(|w| table.rows.iter().any(|r| r.cohort() == cohort && r.width == *w))
        .collect()
}

impl GeometryAdapter {
    pub fn new(style: FanStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &FanStyle {
        &self.style
    }

    /// One filled polygon per `(cohort, width)`, widest first within each
    /// cohort
    ///
    /// Depths are computed against the widths of the whole table, so equal
    /// widths get equal depths in every cohort.
    pub fn bands(&self, table: &BandTable) -> Vec<DrawPrimitive> {
        let all_widths = table.widths();
        let mut out = Vec::new();
        for cohort in table.cohorts() {
            for width in cohort_widths(table, cohort).into_iter().rev() {
                let series = sorted_series(table, cohort, width);
                let polygon: Vec<Point> = series
                    .iter()
                    .map(|r| Point::new(r.x, r.lower))
                    .chain(series.iter().rev().map(|r| Point::new(r.x, r.upper)))
                    .collect();
                out.push(DrawPrimitive::FilledBand(FilledBand {
                    cohort: cohort.map(str::to_owned),
                    width,
                    fill_depth: self.style.depth_scale.depth(width, &all_widths),
                    polygon,
                }));
            }
        }
        out
    }

    /// Lower and upper polylines per `(cohort, width)`; the zero width
    /// gets a single median line
    pub fn boundary_lines(&self, table: &BandTable) -> Vec<DrawPrimitive> {
        let all_widths = table.widths();
        let mut out = Vec::new();
        for cohort in table.cohorts() {
            for width in cohort_widths(table, cohort) {
                let series = sorted_series(table, cohort, width);
                let category = LineCategory {
                    rank: all_widths.iter().position(|w| *w == width).unwrap_or(0),
                    label: width.label(),
                };
                let sides: &[BoundSide] = if width.is_median() {
                    &[BoundSide::Median]
                } else {
                    &[BoundSide::Lower, BoundSide::Upper]
                };
                for &side in sides {
                    let points = series
                        .iter()
                        .map(|r| match side {
                            BoundSide::Upper => Point::new(r.x, r.upper),
                            BoundSide::Lower | BoundSide::Median => Point::new(r.x, r.lower),
                        })
                        .collect();
                    out.push(DrawPrimitive::BoundaryLine(BoundaryLine {
                        cohort: cohort.map(str::to_owned),
                        width,
                        side,
                        category: category.clone(),
                        points,
                    }));
                }
            }
        }
        out
    }

    /// Sample raw paths to overlay on the fan
    ///
    /// Points dropped for being non-finite come back as warnings next to
    /// the paths.
    pub fn trajectories<R: Rng + ?Sized>(
        &self,
        observations: &[Observation],
        n_samples: usize,
        rng: &mut R,
    ) -> Result<TrajectorySample> {
        sample_trajectories(observations, n_samples, rng)
    }

    /// Bands then lines, as selected by the style's layers
    ///
    /// Paths need the raw observations; add them with
    /// [`Geometry::push_paths`].
    #[instrument(skip_all, fields(rows = table.len()))]
    pub fn adapt(&self, table: &BandTable) -> Geometry {
        let mut primitives = Vec::new();
        if self.style.layers.bands {
            primitives.extend(self.bands(table));
        }
        if self.style.layers.lines {
            primitives.extend(self.boundary_lines(table));
        }
        debug!("emitted {} primitives", primitives.len());
        Geometry {
            primitives,
            scale: self.style.scale.clone(),
            warnings: Vec::new(),
        }
    }
}
