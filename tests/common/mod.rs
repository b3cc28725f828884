//! Common test utilities for fan-stats tests

use fan_stats::Observation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::sync::Once;

static INIT: Once = Once::new();

/// Route `tracing` output to the test writer; `RUST_LOG` selects levels
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Geometric random walks, one per sample, optionally tagged with a cohort
pub fn simulate(n_x: usize, n_samples: usize, seed: u64, cohort: Option<&str>) -> Vec<Observation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let shock = Normal::new(0.0_f64, 0.05).unwrap();

    let mut out = Vec::with_capacity(n_x * n_samples);
    for s in 0..n_samples {
        let mut level = 100.0_f64;
        for i in 0..n_x {
            level *= shock.sample(&mut rng).exp();
            let mut obs = Observation::new(i as f64, format!("path-{s:03}"), level);
            if let Some(c) = cohort {
                obs = obs.with_cohort(c);
            }
            out.push(obs);
        }
    }
    out
}
