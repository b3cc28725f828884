//! Nested central probability intervals ("fans") from sampled data
//!
//! Given repeated draws of a response at each covariate value, this crate
//! computes, for every covariate value and every requested interval width,
//! the lower and upper empirical quantiles bounding the central interval.
//!
//! # Features
//!
//! - **Raw samples**: [`QuantileBander::bands`] and [`QuantileBander::quantiles`]
//!   summarize long-form [`fan_core::Observation`]s
//! - **Pre-computed quantiles**: [`QuantileBander::from_quantile_rows`] pairs
//!   symmetric percentiles back into interval widths
//! - **Cohorts**: every cohort is summarized independently
//! - **Data quality**: non-finite values are dropped and reported, never fatal
//!
//! # Guarantees
//!
//! For a fixed covariate value and widths `w1 < w2`:
//! `lower(w2) <= lower(w1) <= median <= upper(w1) <= upper(w2)`.
//!
//! # Example
//!
//! ```rust
//! use fan_bands::{IntervalSet, QuantileBander};
//! use fan_core::from_wide;
//!
//! let xs = [0.0, 1.0];
//! let draws: Vec<Vec<f64>> = (0..20).map(|s| vec![s as f64, 2.0 * s as f64]).collect();
//! let bands = QuantileBander::new(IntervalSet::default())
//!     .bands(&from_wide(&xs, &draws))
//!     .unwrap();
//! assert_eq!(bands.len(), 2 * 4);
//! ```

pub mod bander;
pub mod grouping;
pub mod interval;
pub mod precomputed;
pub mod table;

pub use bander::QuantileBander;
pub use interval::{IntervalSet, IntervalWidth};
pub use precomputed::{parse_quantile_rows, LabelledQuantile};
pub use table::{BandRow, BandTable, QuantileRow, QuantileTable};

pub use fan_core::{Error, Result};
pub use fan_quantile::QuantileMethod;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BandRow, BandTable, IntervalSet, IntervalWidth, QuantileBander, QuantileMethod,
        QuantileRow, QuantileTable,
    };
}
