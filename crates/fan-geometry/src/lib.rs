//! Drawable geometry for quantile fans
//!
//! This crate turns a [`fan_bands::BandTable`] into renderer-agnostic
//! [`DrawPrimitive`]s. Nothing here draws: a plotting engine consumes the
//! primitives (directly or as JSON) and owns colours, layout and display.
//!
//! - [`FilledBand`]: one polygon per interval, tagged with a fill depth
//! - [`BoundaryLine`]: interval bounds as polylines, tagged with a line category
//! - [`PathSegment`]: randomly sampled raw trajectories
//!
//! # Example
//!
//! ```rust
//! use fan_bands::{IntervalSet, QuantileBander};
//! use fan_core::from_wide;
//! use fan_geometry::{FanStyle, GeometryAdapter};
//!
//! let xs = [0.0, 1.0, 2.0];
//! let draws: Vec<Vec<f64>> = (0..10)
//!     .map(|s| xs.iter().map(|x| x * s as f64).collect())
//!     .collect();
//! let table = QuantileBander::new(IntervalSet::new(&[0.5, 0.9]).unwrap())
//!     .bands(&from_wide(&xs, &draws))
//!     .unwrap();
//!
//! let geometry = GeometryAdapter::new(FanStyle::default()).adapt(&table);
//! assert_eq!(geometry.bands().count(), 2);
//! ```

pub mod adapter;
pub mod primitive;
pub mod style;
pub mod trajectory;

pub use adapter::{Geometry, GeometryAdapter};
pub use primitive::{
    BoundSide, BoundaryLine, DrawPrimitive, FilledBand, LineCategory, PathSegment, Point,
};
pub use style::{DepthScale, FanStyle, Layers, ScaleParams};
pub use trajectory::{available_samples, check_sample_count, sample_trajectories, TrajectorySample};

pub use fan_core::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{DepthScale, DrawPrimitive, FanStyle, Geometry, GeometryAdapter, Layers};
}
