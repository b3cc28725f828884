//! Column name configuration

/// Column names of a long-form sample frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanColumns {
    /// Covariate, numeric
    pub x: String,
    /// Response, numeric
    pub y: String,
    /// Sample id, any dtype
    pub sample: String,
    /// Optional cohort, any dtype
    pub cohort: Option<String>,
}

impl Default for FanColumns {
    fn default() -> Self {
        Self {
            x: "x".to_string(),
            y: "y".to_string(),
            sample: "sample".to_string(),
            cohort: None,
        }
    }
}

impl FanColumns {
    pub fn new(x: impl Into<String>, y: impl Into<String>, sample: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            sample: sample.into(),
            cohort: None,
        }
    }

    /// Summarize each value of `cohort` separately
    pub fn with_cohort(mut self, cohort: impl Into<String>) -> Self {
        self.cohort = Some(cohort.into());
        self
    }
}

/// Column names of a pre-computed quantile frame
///
/// The quantile column holds either labels (`q25`, `25%`) or numeric
/// probabilities in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantileColumns {
    pub x: String,
    pub quantile: String,
    pub value: String,
    pub cohort: Option<String>,
}

impl Default for QuantileColumns {
    fn default() -> Self {
        Self {
            x: "x".to_string(),
            quantile: "quantile".to_string(),
            value: "value".to_string(),
            cohort: None,
        }
    }
}

impl QuantileColumns {
    pub fn new(
        x: impl Into<String>,
        quantile: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            x: x.into(),
            quantile: quantile.into(),
            value: value.into(),
            cohort: None,
        }
    }

    pub fn with_cohort(mut self, cohort: impl Into<String>) -> Self {
        self.cohort = Some(cohort.into());
        self
    }
}
