use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use imdb_model::RawRecord;

use crate::error::{IngestError, Result};

/// Strip a UTF-8 BOM and collapse internal whitespace runs in a header cell.
///
/// Both readers run every header through this, so a padded or
/// double-spaced column name keys the same field either way.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Read the source CSV and return one [`RawRecord`] per data row.
///
/// The header row is consumed and normalized; cell values are kept exactly
/// as they appear in the file. Rows shorter than the header are padded with
/// empty strings so every record carries the full column set.
pub fn read_movies(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| map_csv_error(path, error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| map_csv_error(path, error))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|error| map_csv_error(path, error))?;
        let mut record = RawRecord::new();
        for (idx, name) in headers.iter().enumerate() {
            record.push(name.clone(), row.get(idx).unwrap_or(""));
        }
        records.push(record);
    }

    debug!(path = %path.display(), rows = records.len(), "read source csv");
    Ok(records)
}

fn map_csv_error(path: &Path, error: csv::Error) -> IngestError {
    match error.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!("{other:?}"),
        },
    }
}
