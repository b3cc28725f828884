//! Empirical quantile fans
//!
//! `fan-stats` summarizes many sampled trajectories (simulation runs,
//! posterior draws, ensemble members) into nested central probability
//! intervals at every covariate value, then turns them into drawable
//! primitives for an external plotting engine.
//!
//! This crate re-exports the workspace members:
//!
//! - [`fan_core`]: errors, data-quality warnings, probabilities, observation rows
//! - [`fan_quantile`]: the Hyndman–Fan quantile estimators
//! - [`fan_bands`]: interval sets and the [`QuantileBander`]
//! - [`fan_geometry`]: [`DrawPrimitive`]s and the [`GeometryAdapter`]
//! - `fan_polars` (feature `polars`): a DataFrame extension trait
//!
//! # Example
//!
//! ```rust
//! use fan_stats::prelude::*;
//!
//! let xs = [0.0, 1.0, 2.0, 3.0];
//! let draws: Vec<Vec<f64>> = (0..20)
//!     .map(|s| xs.iter().map(|x| x * (1.0 + s as f64 / 10.0)).collect())
//!     .collect();
//! let observations = fan_stats::from_wide(&xs, &draws);
//!
//! let config = FanConfig::default().with_seed(42);
//! let layers = build_fan(&observations, &config).unwrap();
//! assert_eq!(layers.geometry.bands().count(), 4);
//! ```

pub mod pipeline;

pub use pipeline::{build_fan, FanConfig, FanLayers};

pub use fan_bands::{
    parse_quantile_rows, BandRow, BandTable, IntervalSet, IntervalWidth, LabelledQuantile,
    QuantileBander, QuantileRow, QuantileTable,
};
pub use fan_core::{
    from_wide, DataQualityWarning, Error, Observation, Percentile, Probability, Result,
    WarningKind,
};
pub use fan_geometry::{
    sample_trajectories, BoundSide, BoundaryLine, DepthScale, DrawPrimitive, FanStyle,
    FilledBand, Geometry, GeometryAdapter, Layers, LineCategory, PathSegment, Point, ScaleParams,
};
pub use fan_quantile::{HyndmanFan, QuantileEstimator, QuantileMethod};

pub use fan_bands;
pub use fan_core;
pub use fan_geometry;
#[cfg(feature = "polars")]
pub use fan_polars;
pub use fan_quantile;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        build_fan, DrawPrimitive, FanConfig, FanLayers, FanStyle, GeometryAdapter, IntervalSet,
        Observation, QuantileBander, QuantileMethod,
    };
}
