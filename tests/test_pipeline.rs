mod common;

use common::{init_tracing, simulate};
use fan_stats::prelude::*;
use fan_stats::{DepthScale, IntervalSet, Layers, Observation, WarningKind};

#[test]
fn test_same_seed_is_byte_identical() -> anyhow::Result<()> {
    init_tracing();
    let obs = simulate(20, 50, 1, None);
    let config = FanConfig::default().with_seed(1234);

    let first = serde_json::to_string(&build_fan(&obs, &config)?)?;
    let second = serde_json::to_string(&build_fan(&obs, &config)?)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_different_seeds_pick_different_paths() -> anyhow::Result<()> {
    let obs = simulate(5, 200, 2, None);
    let a = build_fan(&obs, &FanConfig::default().with_seed(1))?;
    let b = build_fan(&obs, &FanConfig::default().with_seed(2))?;

    let ids = |layers: &FanLayers| -> Vec<String> {
        layers
            .geometry
            .primitives
            .iter()
            .filter_map(DrawPrimitive::as_path)
            .map(|p| p.sample.clone())
            .collect()
    };
    assert_eq!(ids(&a).len(), 5);
    assert_ne!(ids(&a), ids(&b));
    assert_eq!(a.bands, b.bands);
    Ok(())
}

#[test]
fn test_quartile_scenario() -> anyhow::Result<()> {
    let mut obs = Vec::new();
    for (i, y) in [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().enumerate() {
        obs.push(Observation::new(1.0, i.to_string(), y));
        obs.push(Observation::new(2.0, i.to_string(), y * 10.0));
    }
    let config = FanConfig::default()
        .with_intervals(IntervalSet::new(&[0.5])?)
        .with_samples(0);
    let layers = build_fan(&obs, &config)?;

    let bounds: Vec<(f64, f64)> = layers.bands.rows.iter().map(|r| (r.lower, r.upper)).collect();
    assert_eq!(bounds, vec![(2.0, 4.0), (20.0, 40.0)]);
    Ok(())
}

#[test]
fn test_single_observation() -> anyhow::Result<()> {
    let obs = vec![Observation::new(0.0, "only", 7.0)];
    let layers = build_fan(&obs, &FanConfig::default().with_samples(1).with_seed(0))?;
    for row in &layers.bands.rows {
        assert_eq!((row.lower, row.upper), (7.0, 7.0));
    }
    Ok(())
}

#[test]
fn test_oversized_sample_request() {
    let obs = simulate(3, 4, 3, None);
    let config = FanConfig::default().with_samples(5).with_seed(0);
    let err = build_fan(&obs, &config).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_empty_input_is_reported_as_empty() {
    let err = build_fan(&[], &FanConfig::default().with_seed(1)).unwrap_err();
    assert!(matches!(err, fan_stats::Error::EmptyInput(_)));
    assert!(!err.is_invalid_argument());
}

#[test]
fn test_out_of_range_interval_is_rejected() {
    assert!(IntervalSet::new(&[1.2]).unwrap_err().is_invalid_argument());
    assert!(serde_json::from_str::<FanConfig>(r#"{"intervals": [0.5, 1.2]}"#).is_err());
}

#[test]
fn test_config_from_json() -> anyhow::Result<()> {
    let config: FanConfig = serde_json::from_str(
        r#"{
            "intervals": [0.9, 0.5],
            "n_samples": 3,
            "seed": 99,
            "method": "median_unbiased",
            "style": {
                "depth_scale": "rank",
                "layers": {"bands": true, "lines": true, "paths": true},
                "scale": {"x": {"label": "day"}}
            }
        }"#,
    )?;
    assert_eq!(config.intervals.values(), vec![0.5, 0.9]);
    assert_eq!(config.method, QuantileMethod::MedianUnbiased);
    assert_eq!(config.style.depth_scale, DepthScale::Rank);

    let mut obs = simulate(4, 10, 5, Some("a"));
    obs.extend(simulate(4, 10, 6, Some("b")));
    let layers = build_fan(&obs, &config)?;

    // per cohort: 2 bands, 4 lines, 3 paths
    assert_eq!(layers.geometry.primitives.len(), 2 * (2 + 4 + 3));
    assert_eq!(layers.geometry.scale["x"]["label"], "day");
    Ok(())
}

#[test]
fn test_lines_only_layers() -> anyhow::Result<()> {
    let obs = simulate(4, 10, 7, None);
    let style = FanStyle::default().with_layers(Layers {
        bands: false,
        lines: true,
        paths: false,
    });
    let config = FanConfig::default()
        .with_intervals(IntervalSet::lines())
        .with_style(style);
    let layers = build_fan(&obs, &config)?;
    assert_eq!(layers.geometry.lines().count(), 5);
    assert_eq!(layers.geometry.primitives.len(), 5);
    Ok(())
}

#[test]
fn test_non_finite_rows_are_reported_not_fatal() -> anyhow::Result<()> {
    init_tracing();
    let mut obs = simulate(3, 6, 8, None);
    obs.push(Observation::new(1.0, "path-000", f64::NAN));
    obs.push(Observation::new(f64::NAN, "path-001", 1.0));
    let layers = build_fan(&obs, &FanConfig::default().with_samples(6).with_seed(8))?;

    let kinds: Vec<WarningKind> = layers.warnings.iter().map(|w| w.kind).collect();
    assert!(kinds.contains(&WarningKind::NonFiniteCovariate));
    assert!(kinds.contains(&WarningKind::NonFiniteResponse));
    assert!(kinds.contains(&WarningKind::NonFinitePathPoint));
    Ok(())
}
