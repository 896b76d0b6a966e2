//! Dataframe ingestion and Polars `AnyValue` helpers.
//!
//! The dataframe executor works on an all-string frame so its view of the
//! source matches the row-map reader byte for byte; type decisions stay with
//! the rule table and the coercion step.

use std::path::Path;

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, PlSmallStr, SerReader};

use crate::csv_reader::normalize_header;
use crate::error::{IngestError, Result};

/// Read the source CSV into a Polars DataFrame with every column as string.
///
/// Column names go through the same header normalization as the row
/// reader, so both executors resolve rule fields against identical names.
pub fn read_movies_frame(path: &Path) -> Result<DataFrame> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let normalized: Vec<PlSmallStr> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_header(name).into())
        .collect();
    df.set_column_names(normalized)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(df)
}

/// Render one cell as the string the rule table sees.
///
/// Null becomes the empty string (indistinguishable from a blank cell, as
/// validation requires); floats drop their trailing zeros.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Float-to-string with any fractional trailing zeros dropped.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    // Integer renderings like "10" must not lose their own zeros.
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Lenient integer parse: blank or unparseable input is `None`.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Lenient float parse with the same contract as [`parse_i64`].
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_to_string_handles_null_and_strings() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::String("121")), "121");
        assert_eq!(any_to_string(AnyValue::Int64(7)), "7");
    }

    #[test]
    fn format_numeric_strips_trailing_zeros_only() {
        assert_eq!(format_numeric(8.1), "8.1");
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn parse_helpers_treat_blank_as_none() {
        assert_eq!(parse_i64("  "), None);
        assert_eq!(parse_i64(" 42 "), Some(42));
        assert_eq!(parse_i64("4.2"), None);
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("8.1"), Some(8.1));
        assert_eq!(parse_f64("n/a"), None);
    }
}
