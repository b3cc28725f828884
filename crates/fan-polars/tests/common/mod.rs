//! Common test utilities for fan-polars tests

use polars::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Five samples at x = 1 and x = 2, the second ten times the first
pub fn two_point_df() -> DataFrame {
    df![
        "x" => [1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0],
        "y" => [1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 20.0, 30.0, 40.0, 50.0],
        "sample" => ["a", "b", "c", "d", "e", "a", "b", "c", "d", "e"],
    ]
    .unwrap()
}

/// Long-form normal draws for two cohorts over `n_x` integer days
pub fn cohort_df(n_x: usize, n_samples: usize, seed: u64) -> DataFrame {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();

    let mut day = Vec::new();
    let mut value = Vec::new();
    let mut run = Vec::new();
    let mut arm = Vec::new();
    for (cohort, shift) in [("control", 0.0), ("treated", 5.0)] {
        for s in 0..n_samples {
            for d in 0..n_x {
                day.push(d as i64);
                value.push(shift + noise.sample(&mut rng));
                run.push(s as i64);
                arm.push(cohort);
            }
        }
    }
    df!["day" => day, "value" => value, "run" => run, "arm" => arm].unwrap()
}

/// Extract an f64 column
pub fn f64_column(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}

/// Extract a string column
pub fn str_column(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect()
}
