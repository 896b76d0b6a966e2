//! Batch router: stable partition of raw records into clean and reject sets.

use thiserror::Error;

use imdb_model::{BatchOutcome, CleanRecord, RawRecord, RejectRecord, fields};
use imdb_validate::validate_movie;

use crate::coerce::{FormatError, parse_optional_f64, parse_optional_i64};

/// Fault on the accepted path: validation passed a record that the typed
/// projection cannot represent. This never happens while the rule table and
/// the coercion step agree, so it aborts the batch instead of rejecting the
/// record.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("{field}: {source}")]
    Coerce {
        field: &'static str,
        #[source]
        source: FormatError,
    },
    #[error("{field}: value missing after validation")]
    MissingValue { field: &'static str },
}

fn required_i64(record: &RawRecord, field: &'static str) -> Result<i64, TransformError> {
    parse_optional_i64(record.get(field))
        .map_err(|source| TransformError::Coerce { field, source })?
        .ok_or(TransformError::MissingValue { field })
}

fn required_f64(record: &RawRecord, field: &'static str) -> Result<f64, TransformError> {
    parse_optional_f64(record.get(field))
        .map_err(|source| TransformError::Coerce { field, source })?
        .ok_or(TransformError::MissingValue { field })
}

fn trimmed(record: &RawRecord, field: &str) -> String {
    record.get(field).unwrap_or("").trim().to_string()
}

/// Project an accepted raw record into its typed form.
pub fn build_clean_record(record: &RawRecord) -> Result<CleanRecord, TransformError> {
    Ok(CleanRecord {
        rank: required_i64(record, fields::RANK)?,
        title: trimmed(record, fields::TITLE),
        genre: trimmed(record, fields::GENRE),
        description: trimmed(record, fields::DESCRIPTION),
        director: trimmed(record, fields::DIRECTOR),
        actors: trimmed(record, fields::ACTORS),
        year: required_i64(record, fields::YEAR)?,
        runtime_minutes: required_i64(record, fields::RUNTIME_MINUTES)?,
        rating: required_f64(record, fields::RATING)?,
        votes: required_i64(record, fields::VOTES)?,
        revenue_millions: required_f64(record, fields::REVENUE_MILLIONS)?,
        metascore: required_f64(record, fields::METASCORE)?,
    })
}

/// Route one batch of raw records.
///
/// For each record, in input order: validate, then either append the full
/// original record with its reason to the reject set, or coerce it into a
/// [`CleanRecord`]. Pure transform; performs no I/O.
pub fn route_batch(
    records: &[RawRecord],
    source_file: &str,
) -> Result<BatchOutcome, TransformError> {
    let mut outcome = BatchOutcome::default();
    for record in records {
        let verdict = validate_movie(record);
        if verdict.accepted {
            outcome.clean.push(build_clean_record(record)?);
        } else {
            outcome.rejects.push(RejectRecord {
                source_file: source_file.to_string(),
                raw_record: record.clone(),
                error_reason: verdict.reason,
            });
        }
    }
    Ok(outcome)
}
