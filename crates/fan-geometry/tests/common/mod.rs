//! Common test utilities for fan-geometry tests

use fan_bands::{BandTable, IntervalSet, QuantileBander};
use fan_core::Observation;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n_samples` noisy linear trends over `0..n_x`, tagged with `cohort`
pub fn trends(n_x: usize, n_samples: usize, seed: u64, cohort: &str) -> Vec<Observation> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(n_x * n_samples);
    for s in 0..n_samples {
        let slope: f64 = rng.gen_range(0.5..1.5);
        for i in 0..n_x {
            let x = i as f64;
            let y = slope * x + rng.gen_range(-1.0..1.0);
            out.push(Observation::new(x, format!("s{s}"), y).with_cohort(cohort));
        }
    }
    out
}

/// Band table over the given widths
pub fn band_table(observations: &[Observation], widths: &[f64]) -> BandTable {
    QuantileBander::new(IntervalSet::new(widths).unwrap())
        .bands(observations)
        .unwrap()
}
