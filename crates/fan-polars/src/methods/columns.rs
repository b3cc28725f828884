//! Column extraction and result frame assembly

use crate::{Error, Result};
use fan_bands::{BandTable, QuantileTable};
use polars::prelude::*;

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}

/// A numeric column as `f64`, nulls mapped to NaN
pub(crate) fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = column(df, name)?;
    let col = match col.dtype() {
        DataType::Float64 => col.clone(),
        dt if is_numeric_dtype(dt) => col.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                column: name.to_string(),
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };
    Ok(col.f64()?.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Whether a column holds numbers rather than labels
pub(crate) fn is_numeric(df: &DataFrame, name: &str) -> Result<bool> {
    Ok(is_numeric_dtype(column(df, name)?.dtype()))
}

/// Any column rendered as strings, nulls kept
pub(crate) fn key_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let col = column(df, name)?.cast(&DataType::String)?;
    Ok(col
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_owned))
        .collect())
}

/// Key column that must not contain nulls
pub(crate) fn required_keys(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    key_values(df, name)?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| Error::NullKey {
                column: name.to_string(),
                row,
            })
        })
        .collect()
}

fn leading_columns<'a, I>(x: &str, cohort: Option<&str>, keys: I) -> Vec<Column>
where
    I: Iterator<Item = (Option<&'a str>, f64)> + Clone,
{
    let mut out: Vec<Column> = Vec::with_capacity(5);
    if let Some(name) = cohort {
        let cohorts: Vec<Option<&str>> = keys.clone().map(|(c, _)| c).collect();
        out.push(Series::new(name.into(), cohorts).into());
    }
    let xs: Vec<f64> = keys.map(|(_, x)| x).collect();
    out.push(Series::new(x.into(), xs).into());
    out
}

/// `[cohort], x, interval, lower, upper`
pub(crate) fn band_frame(table: &BandTable, x: &str, cohort: Option<&str>) -> Result<DataFrame> {
    let rows = &table.rows;
    let mut out = leading_columns(x, cohort, rows.iter().map(|r| (r.cohort(), r.x)));
    let widths: Vec<f64> = rows.iter().map(|r| r.width.value()).collect();
    let lower: Vec<f64> = rows.iter().map(|r| r.lower).collect();
    let upper: Vec<f64> = rows.iter().map(|r| r.upper).collect();
    out.push(Series::new("interval".into(), widths).into());
    out.push(Series::new("lower".into(), lower).into());
    out.push(Series::new("upper".into(), upper).into());
    Ok(DataFrame::new(out)?)
}

/// `[cohort], x, quantile, value`
pub(crate) fn quantile_frame(
    table: &QuantileTable,
    x: &str,
    cohort: Option<&str>,
) -> Result<DataFrame> {
    let rows = &table.rows;
    let mut out = leading_columns(x, cohort, rows.iter().map(|r| (r.cohort(), r.x)));
    let labels: Vec<String> = rows.iter().map(|r| r.label()).collect();
    let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
    out.push(Series::new("quantile".into(), labels).into());
    out.push(Series::new("value".into(), values).into());
    Ok(DataFrame::new(out)?)
}
