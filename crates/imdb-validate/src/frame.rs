//! Dataframe validation engine.
//!
//! Executes the same rule table as the sequential engine, but column by
//! column over a Polars DataFrame: each rule scans its column once and
//! appends its message to the rows it rejects. Because both engines walk
//! `MOVIE_RULES` in table order, the per-row reason strings come out
//! identical.

use polars::prelude::{AnyValue, Column, DataFrame};

use imdb_ingest::any_to_string;

use crate::rules::MOVIE_RULES;

/// Name of the reason column produced by [`reason_column`].
pub const REASON_COLUMN: &str = "error_reason";

/// Evaluate the rule table over a frame, returning one optional reason
/// string per row (`None` means the row is accepted).
///
/// A column missing from the frame is treated like an absent field: its
/// rule reports the missing/malformed message for every row.
pub fn reject_reasons(df: &DataFrame) -> Vec<Option<String>> {
    let height = df.height();
    let mut violations: Vec<Vec<&'static str>> = vec![Vec::new(); height];
    for rule in &MOVIE_RULES {
        let column = df.column(rule.field).ok();
        for (idx, row_violations) in violations.iter_mut().enumerate() {
            let value = column.map(|col| any_to_string(col.get(idx).unwrap_or(AnyValue::Null)));
            if let Some(message) = rule.violation(value.as_deref()) {
                row_violations.push(message);
            }
        }
    }
    violations
        .into_iter()
        .map(|messages| {
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        })
        .collect()
}

/// Evaluate the rule table over a frame and materialize the result as a
/// nullable string column, null for accepted rows.
pub fn reason_column(df: &DataFrame) -> Column {
    Column::new(REASON_COLUMN.into(), reject_reasons(df))
}
