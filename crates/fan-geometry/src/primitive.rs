//! Drawable primitives handed to the renderer
//!
//! Every primitive carries the one attribute a renderer needs to style it:
//! a scalar fill depth for bands, a categorical line category for interval
//! boundaries, and the sample id for raw paths. Colours and line patterns
//! are never chosen here.

use fan_bands::IntervalWidth;
use serde::{Deserialize, Serialize};

/// A vertex in data coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which bound of an interval a line traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundSide {
    Lower,
    Upper,
    /// Both bounds of the zero-width interval
    Median,
}

/// Discrete style key of a boundary line
///
/// `rank` is the position of the width in the ascending width ladder, so
/// a renderer can map it straight onto a list of line patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineCategory {
    pub rank: usize,
    pub label: String,
}

/// A filled polygon covering one interval across the covariate axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilledBand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
    pub width: IntervalWidth,
    /// In `[0, 1]`; larger for narrower, more central intervals
    pub fill_depth: f64,
    /// Lower bounds by increasing `x`, then upper bounds by decreasing `x`
    pub polygon: Vec<Point>,
}

/// One bound of one interval as a polyline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
    pub width: IntervalWidth,
    pub side: BoundSide,
    pub category: LineCategory,
    pub points: Vec<Point>,
}

/// A raw sampled trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<String>,
    pub sample: String,
    /// Ordered by `x`
    pub points: Vec<Point>,
}

/// Everything the geometry stage can emit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    FilledBand(FilledBand),
    BoundaryLine(BoundaryLine),
    PathSegment(PathSegment),
}

impl DrawPrimitive {
    /// Cohort this primitive belongs to
    pub fn cohort(&self) -> Option<&str> {
        match self {
            Self::FilledBand(b) => b.cohort.as_deref(),
            Self::BoundaryLine(l) => l.cohort.as_deref(),
            Self::PathSegment(p) => p.cohort.as_deref(),
        }
    }

    /// Vertices in drawing order
    pub fn points(&self) -> &[Point] {
        match self {
            Self::FilledBand(b) => &b.polygon,
            Self::BoundaryLine(l) => &l.points,
            Self::PathSegment(p) => &p.points,
        }
    }

    pub fn as_band(&self) -> Option<&FilledBand> {
        match self {
            Self::FilledBand(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&BoundaryLine> {
        match self {
            Self::BoundaryLine(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathSegment> {
        match self {
            Self::PathSegment(p) => Some(p),
            _ => None,
        }
    }
}
