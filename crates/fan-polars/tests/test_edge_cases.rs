//! Tests for edge cases and error handling

mod common;

use common::{f64_column, two_point_df};
use fan_polars::{
    Error, FanColumns, FanFrameExt, IntervalSet, QuantileColumns, QuantileMethod, WarningKind,
};
use polars::prelude::*;

fn fan_bands(df: &DataFrame, columns: &FanColumns) -> fan_polars::Result<fan_polars::FanFrame> {
    df.fan_bands(columns, &IntervalSet::default(), QuantileMethod::default())
}

#[test]
fn test_invalid_column_error() {
    let df = two_point_df();
    let columns = FanColumns::new("x", "nonexistent", "sample");
    assert!(matches!(fan_bands(&df, &columns), Err(Error::InvalidColumn(_))));
}

#[test]
fn test_non_numeric_response_error() {
    let df = df![
        "x" => [1.0, 2.0],
        "y" => ["a", "b"],
        "sample" => ["s", "s"],
    ]
    .unwrap();
    match fan_bands(&df, &FanColumns::default()) {
        Err(Error::TypeMismatch { column, .. }) => assert_eq!(column, "y"),
        other => panic!("expected a type mismatch, got {other:?}"),
    }
}

#[test]
fn test_null_sample_id_error() {
    let df = DataFrame::new(vec![
        Series::new("x".into(), vec![1.0, 1.0]).into(),
        Series::new("y".into(), vec![1.0, 2.0]).into(),
        Series::new("sample".into(), vec![Some("a"), None]).into(),
    ])
    .unwrap();
    assert!(matches!(
        fan_bands(&df, &FanColumns::default()),
        Err(Error::NullKey { row: 1, .. })
    ));
}

#[test]
fn test_null_response_is_excluded_with_warning() {
    let df = DataFrame::new(vec![
        Series::new("x".into(), vec![1.0, 1.0, 1.0]).into(),
        Series::new("y".into(), vec![Some(1.0), None, Some(3.0)]).into(),
        Series::new("sample".into(), vec!["a", "b", "c"]).into(),
    ])
    .unwrap();
    let bands = df
        .fan_bands(
            &FanColumns::default(),
            &IntervalSet::new(&[0.0]).unwrap(),
            QuantileMethod::Linear,
        )
        .unwrap();
    assert_eq!(f64_column(&bands.frame, "lower"), vec![2.0]);
    assert_eq!(bands.warnings.len(), 1);
    assert_eq!(bands.warnings[0].kind, WarningKind::NonFiniteResponse);
}

#[test]
fn test_empty_frame() {
    let df = DataFrame::new(vec![
        Series::new("x".into(), Vec::<f64>::new()).into(),
        Series::new("y".into(), Vec::<f64>::new()).into(),
        Series::new("sample".into(), Vec::<String>::new()).into(),
    ])
    .unwrap();
    assert!(matches!(
        fan_bands(&df, &FanColumns::default()),
        Err(Error::Fan(fan_core::Error::EmptyInput(_)))
    ));
}

#[test]
fn test_unpaired_quantile_label() {
    let df = df![
        "x" => [1.0, 1.0],
        "quantile" => ["q25", "q80"],
        "value" => [1.0, 2.0],
    ]
    .unwrap();
    match df.fan_bands_from_quantiles(&QuantileColumns::default()) {
        Err(Error::Fan(err)) => assert!(err.is_invalid_argument()),
        other => panic!("expected an invalid argument, got {other:?}"),
    }
}

#[test]
fn test_single_observation_is_degenerate() {
    let df = df!["x" => [3.0], "y" => [7.0], "sample" => ["only"]].unwrap();
    let bands = fan_bands(&df, &FanColumns::default()).unwrap();
    assert_eq!(bands.frame.height(), 4);
    assert!(f64_column(&bands.frame, "lower").iter().all(|&v| v == 7.0));
    assert!(f64_column(&bands.frame, "upper").iter().all(|&v| v == 7.0));
}
