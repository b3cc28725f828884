//! Error types for quantile fan computation
//!
//! Provides a unified error type for all fan-stats crates. Data-quality
//! problems are not errors; see [`crate::warning`].

use thiserror::Error;

/// Core error type for fan operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed interval set, unparsable quantile label, unpaired
    /// percentile or an oversized trajectory request
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No rows left to summarize
    #[error("Empty input: {0}")]
    EmptyInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an interval set with no widths
    pub fn empty_intervals() -> Self {
        Self::InvalidArgument("interval set must contain at least one width".to_string())
    }

    /// Create an error for an interval width outside [0, 1]
    pub fn invalid_width(width: f64) -> Self {
        Self::InvalidArgument(format!("Interval width {width} must be in [0, 1]"))
    }

    /// Create an error for a probability outside [0, 1]
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidArgument(format!("Probability {p} must be in [0, 1]"))
    }

    /// Create an error for a quantile label that does not parse
    pub fn invalid_label(label: &str) -> Self {
        Self::InvalidArgument(format!(
            "Quantile label '{label}' is not a percentile (expected e.g. 'q25' or '25%')"
        ))
    }

    /// Create an error for more trajectories than available samples
    pub fn too_many_samples(requested: usize, available: usize, cohort: Option<&str>) -> Self {
        let scope = match cohort {
            Some(c) => format!(" in cohort '{c}'"),
            None => String::new(),
        };
        Self::InvalidArgument(format!(
            "Requested {requested} trajectories but only {available} samples are available{scope}"
        ))
    }

    /// Create an error for input that is empty after filtering
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput(format!("no rows left to summarize in {context}"))
    }

    /// Whether this error came from argument validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
