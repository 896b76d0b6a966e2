//! Dataframe-backed batch router.
//!
//! Drives the dataframe validation engine over an all-string frame and
//! converges on the same [`BatchOutcome`] as the sequential router, so the
//! two backends stay interchangeable behind one contract.

use polars::prelude::{AnyValue, DataFrame};

use imdb_ingest::any_to_string;
use imdb_model::{BatchOutcome, RawRecord, RejectRecord};
use imdb_validate::reject_reasons;

use crate::router::{TransformError, build_clean_record};

/// Rebuild one frame row as a raw record, in column order.
fn raw_record_at(df: &DataFrame, idx: usize) -> RawRecord {
    let mut record = RawRecord::new();
    for column in df.get_columns() {
        let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
        record.push(column.name().as_str(), value);
    }
    record
}

/// Route a source frame into the same partition the sequential router
/// produces: per-row reasons come from the shared rule table, rejected rows
/// are materialized back into full raw records, accepted rows are coerced.
pub fn route_frame(df: &DataFrame, source_file: &str) -> Result<BatchOutcome, TransformError> {
    let reasons = reject_reasons(df);
    let mut outcome = BatchOutcome::default();
    for (idx, reason) in reasons.into_iter().enumerate() {
        let record = raw_record_at(df, idx);
        match reason {
            Some(error_reason) => outcome.rejects.push(RejectRecord {
                source_file: source_file.to_string(),
                raw_record: record,
                error_reason,
            }),
            None => outcome.clean.push(build_clean_record(&record)?),
        }
    }
    Ok(outcome)
}
