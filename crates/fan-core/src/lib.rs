//! Core types for quantile fan computation
//!
//! This crate holds what every other fan-stats crate agrees on: the error
//! taxonomy, non-fatal data-quality warnings, validated probabilities and
//! percentile labels, and the long-form [`Observation`] row.
//!
//! # Example
//!
//! ```rust
//! use fan_core::{Observation, Percentile};
//!
//! let obs = Observation::new(1.0, "run-1", 3.5).with_cohort("control");
//! assert_eq!(obs.cohort(), Some("control"));
//!
//! let q: Percentile = "q25".parse().unwrap();
//! assert_eq!(q.label(), "q25");
//! ```

pub mod error;
pub mod observation;
pub mod probability;
pub mod warning;

// Re-export core types
pub use error::{Error, Result};
pub use observation::{cohort_order, from_wide, Observation};
pub use probability::{Percentile, Probability, PROBABILITY_TOLERANCE};
pub use warning::{DataQualityWarning, WarningKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DataQualityWarning, Error, Observation, Percentile, Probability, Result};
}
