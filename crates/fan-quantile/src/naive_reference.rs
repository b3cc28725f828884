//! Naive reference implementations of the Hyndman-Fan sample quantiles
//!
//! These follow the textbook 1-based definition literally:
//! `j = floor(n p + m)`, `g = n p + m - j`,
//! `Q(p) = (1 - g) x[j] + g x[j + 1]`, with `x[0] := x[1]` and
//! `x[n + 1] := x[n]`. They serve as a reference for verifying the
//! position arithmetic of the real estimator.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

/// Naive Hyndman-Fan quantile for types 4 to 9
pub fn naive_quantile(data: &[f64], p: f64, hf_type: u8) -> f64 {
    assert!(!data.is_empty(), "Cannot compute quantile of empty data");
    assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let n = sorted.len() as f64;
    let m = match hf_type {
        4 => 0.0,
        5 => 0.5,
        6 => p,
        7 => 1.0 - p,
        8 => (p + 1.0) / 3.0,
        9 => p / 4.0 + 3.0 / 8.0,
        other => panic!("unsupported type {other}"),
    };

    let np_m = n * p + m;
    let j = np_m.floor();
    let g = np_m - j;

    let order_stat = |k: f64| -> f64 {
        let k = k.clamp(1.0, n) as usize;
        sorted[k - 1]
    };

    (1.0 - g) * order_stat(j) + g * order_stat(j + 1.0)
}

/// Type 7 in the index-based form most numeric libraries use
pub fn naive_percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let idx = p * ((n - 1) as f64);
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let w = idx - lo as f64;
        sorted[lo] * (1.0 - w) + sorted[hi] * w
    }
}
