//! End-to-end fan construction

use fan_bands::{BandTable, IntervalSet, QuantileBander, QuantileMethod};
use fan_core::{DataQualityWarning, Error, Observation, Result};
use fan_geometry::{
    check_sample_count, sample_trajectories, FanStyle, Geometry, GeometryAdapter,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Everything [`build_fan`] needs
///
/// Every field has a default, so a partial JSON document is a valid
/// configuration:
///
/// ```rust
/// use fan_stats::FanConfig;
///
/// let json = r#"{"intervals": [0.5, 0.9], "seed": 7}"#;
/// let config: FanConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.n_samples, 5);
/// assert_eq!(config.intervals.values(), vec![0.5, 0.9]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanConfig {
    pub intervals: IntervalSet,
    /// Raw paths drawn per cohort
    pub n_samples: usize,
    /// Seed for path sampling; fresh entropy when absent
    pub seed: Option<u64>,
    pub method: QuantileMethod,
    pub style: FanStyle,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            intervals: IntervalSet::default(),
            n_samples: 5,
            seed: None,
            method: QuantileMethod::default(),
            style: FanStyle::default(),
        }
    }
}

impl FanConfig {
    pub fn with_intervals(mut self, intervals: IntervalSet) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn with_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_method(mut self, method: QuantileMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_style(mut self, style: FanStyle) -> Self {
        self.style = style;
        self
    }
}

/// Band rows, their geometry, and every warning raised on the way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanLayers {
    pub bands: BandTable,
    pub geometry: Geometry,
    pub warnings: Vec<DataQualityWarning>,
}

/// Summarize observations into bands and drawable layers
///
/// Path sampling is checked against every cohort before any band is
/// computed. With a fixed seed the output is fully deterministic.
#[instrument(skip_all, fields(rows = observations.len(), n_samples = config.n_samples))]
pub fn build_fan(observations: &[Observation], config: &FanConfig) -> Result<FanLayers> {
    if observations.is_empty() {
        return Err(Error::empty_input("observations"));
    }
    let paths = config.style.layers.paths && config.n_samples > 0;
    if paths {
        check_sample_count(observations, config.n_samples)?;
    }

    let bands = QuantileBander::new(config.intervals.clone())
        .with_method(config.method)
        .bands(observations)?;
    let mut geometry = GeometryAdapter::new(config.style.clone()).adapt(&bands);

    if paths {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => {
                debug!("no seed configured, sampling paths from entropy");
                ChaCha8Rng::from_entropy()
            }
        };
        geometry.push_paths(sample_trajectories(observations, config.n_samples, &mut rng)?);
    }

    let mut warnings = bands.warnings.clone();
    warnings.extend(geometry.warnings.iter().cloned());
    debug!(
        "built {} band rows and {} primitives",
        bands.len(),
        geometry.primitives.len()
    );
    Ok(FanLayers {
        bands,
        geometry,
        warnings,
    })
}
