//! Non-fatal data-quality reports
//!
//! Rows that cannot take part in a summary (NaN or infinite values) are
//! dropped and reported here rather than failing the whole computation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What was wrong with the dropped data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    /// Response values that were NaN or infinite
    NonFiniteResponse,
    /// Rows whose covariate was NaN or infinite
    NonFiniteCovariate,
    /// A covariate group with no finite responses left
    GroupDropped,
    /// Trajectory points skipped because they cannot be drawn
    NonFinitePathPoint,
}

impl WarningKind {
    fn describe(self) -> &'static str {
        match self {
            Self::NonFiniteResponse => "non-finite response values excluded",
            Self::NonFiniteCovariate => "rows with non-finite covariate excluded",
            Self::GroupDropped => "group dropped, no finite responses left",
            Self::NonFinitePathPoint => "non-finite trajectory points skipped",
        }
    }
}

/// A data-quality issue handled locally by dropping data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityWarning {
    /// Cohort the dropped rows belonged to
    pub cohort: Option<String>,
    /// Covariate value of the affected group, when it is known
    pub x: Option<f64>,
    /// Kind of issue
    pub kind: WarningKind,
    /// Number of rows affected
    pub count: usize,
}

impl DataQualityWarning {
    /// Create a new warning
    pub fn new(cohort: Option<&str>, x: Option<f64>, kind: WarningKind, count: usize) -> Self {
        Self {
            cohort: cohort.map(str::to_owned),
            x,
            kind,
            count,
        }
    }

    /// Log the warning through `tracing` and return it
    pub fn emit(self) -> Self {
        tracing::warn!(
            cohort = self.cohort.as_deref().unwrap_or("-"),
            x = self.x,
            count = self.count,
            "{}",
            self.kind.describe()
        );
        self
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} rows", self.kind.describe(), self.count)?;
        if let Some(cohort) = &self.cohort {
            write!(f, ", cohort {cohort}")?;
        }
        if let Some(x) = self.x {
            write!(f, ", x = {x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let w = DataQualityWarning::new(Some("a"), Some(2.0), WarningKind::NonFiniteResponse, 3);
        assert_eq!(
            w.to_string(),
            "non-finite response values excluded (3 rows, cohort a, x = 2)"
        );

        let w = DataQualityWarning::new(None, None, WarningKind::NonFiniteCovariate, 1);
        assert_eq!(w.to_string(), "rows with non-finite covariate excluded (1 rows)");
    }

    #[test]
    fn test_emit_returns_same_warning() {
        let w = DataQualityWarning::new(None, Some(1.0), WarningKind::GroupDropped, 4);
        assert_eq!(w.clone().emit(), w);
    }
}
