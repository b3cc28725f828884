//! Polars integration for quantile fan bands
//!
//! This crate reads long-form sample frames through a single extension
//! trait, with configurable column names, and returns band or quantile
//! rows as DataFrames.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use fan_polars::{FanColumns, FanFrameExt, IntervalSet, QuantileMethod};
//!
//! let df = df![
//!     "x" => [1.0, 1.0, 1.0, 2.0, 2.0, 2.0],
//!     "y" => [1.0, 2.0, 3.0, 10.0, 20.0, 30.0],
//!     "sample" => ["a", "b", "c", "a", "b", "c"],
//! ]?;
//!
//! let bands = df.fan_bands(
//!     &FanColumns::default(),
//!     &IntervalSet::new(&[0.5])?,
//!     QuantileMethod::Linear,
//! )?;
//! assert_eq!(bands.frame.shape(), (2, 4));
//! ```

mod config;
mod error;
mod methods;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use traits::*;

// Re-export commonly used types from dependencies
pub use fan_bands::{IntervalSet, QuantileMethod};
pub use fan_core::{DataQualityWarning, WarningKind};
