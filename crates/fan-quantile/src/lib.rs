//! Sample quantile estimation with explicit conventions
//!
//! Quantile bands are only reproducible when everybody agrees on how a
//! sample quantile is interpolated between order statistics. This crate
//! makes the convention a value ([`QuantileMethod`]) instead of an accident
//! of whichever library happened to be at hand. Hyndman-Fan type 7
//! ([`QuantileMethod::Linear`]) is the default.
//!
//! # Example
//!
//! ```rust
//! use fan_quantile::{estimators::linear, QuantileEstimator};
//!
//! let hf = linear();
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let quartiles = hf.quantiles_sorted(&data, &[0.25, 0.75]).unwrap();
//! assert_eq!(quartiles, vec![2.0, 4.0]);
//! ```

pub mod estimators;
pub mod method;
pub mod traits;

// Re-export main types
pub use estimators::{linear, HyndmanFan};
pub use fan_core::{Error, Result};
pub use method::QuantileMethod;
pub use traits::{sort_finite, QuantileEstimator};

/// Default estimator used throughout fan-stats
pub type DefaultQuantileEstimator = HyndmanFan;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Error, HyndmanFan, QuantileEstimator, QuantileMethod, Result};
}
