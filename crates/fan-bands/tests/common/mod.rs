//! Common test utilities for fan-bands tests

use fan_core::Observation;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Random-walk simulation: `n_samples` paths over `xs`, optionally tagged
/// with a cohort
pub fn random_walks(
    xs: &[f64],
    n_samples: usize,
    seed: u64,
    cohort: Option<&str>,
) -> Vec<Observation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let step = Normal::new(0.0, 1.0).unwrap();

    let mut out = Vec::with_capacity(xs.len() * n_samples);
    for s in 0..n_samples {
        let mut level = 0.0;
        for &x in xs {
            level += step.sample(&mut rng);
            let mut obs = Observation::new(x, format!("run-{s}"), level);
            if let Some(c) = cohort {
                obs = obs.with_cohort(c);
            }
            out.push(obs);
        }
    }
    out
}

/// The five-samples-per-x table used across the scenario tests
pub fn two_point_scenario() -> Vec<Observation> {
    let mut obs = Vec::new();
    for (i, y) in [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().enumerate() {
        obs.push(Observation::new(1.0, i.to_string(), y));
        obs.push(Observation::new(2.0, i.to_string(), y * 10.0));
    }
    obs
}
