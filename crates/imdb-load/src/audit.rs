//! Reject audit stores.
//!
//! Two shapes, both append-only: a JSONL log carrying the full original
//! record for debugging, and a flat CSV summary for quick inspection.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use imdb_model::{RawRecord, RejectRecord, fields};

use crate::error::{LoadError, Result};
use crate::RejectSink;

#[derive(Debug, Serialize)]
struct AuditEntry<'a> {
    source_file: &'a str,
    raw_record: &'a RawRecord,
    error_reason: &'a str,
    rejected_at: DateTime<Utc>,
}

/// Appends one JSON document per reject: provenance, the entire original
/// row as a JSON object, the reason, and a UTC timestamp.
#[derive(Debug, Clone)]
pub struct JsonlRejectLog {
    path: PathBuf,
}

impl JsonlRejectLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RejectSink for JsonlRejectLog {
    fn insert_batch(&mut self, rejects: &[RejectRecord]) -> Result<usize> {
        if rejects.is_empty() {
            info!("no rejects to append to audit log");
            return Ok(0);
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        let rejected_at = Utc::now();
        for reject in rejects {
            let entry = AuditEntry {
                source_file: &reject.source_file,
                raw_record: &reject.raw_record,
                error_reason: &reject.error_reason,
                rejected_at,
            };
            let line = serde_json::to_string(&entry).map_err(|source| LoadError::Json {
                path: self.path.clone(),
                source,
            })?;
            writeln!(file, "{line}").map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        info!(path = %self.path.display(), rows = rejects.len(), "appended rejects to audit log");
        Ok(rejects.len())
    }
}

/// Appends a flat summary row per reject, writing the header only when the
/// file is first created.
#[derive(Debug, Clone)]
pub struct CsvRejectLog {
    path: PathBuf,
}

const SUMMARY_HEADER: [&str; 7] = [
    "source_file",
    "rank",
    "title",
    "year",
    "rating",
    "votes",
    "error_reason",
];

impl CsvRejectLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RejectSink for CsvRejectLog {
    fn insert_batch(&mut self, rejects: &[RejectRecord]) -> Result<usize> {
        if rejects.is_empty() {
            return Ok(0);
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        let write_header = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if write_header {
            writer
                .write_record(SUMMARY_HEADER)
                .map_err(|source| LoadError::Csv {
                    path: self.path.clone(),
                    source,
                })?;
        }
        for reject in rejects {
            let raw = &reject.raw_record;
            let row = [
                reject.source_file.as_str(),
                raw.get(fields::RANK).unwrap_or(""),
                raw.get(fields::TITLE).unwrap_or(""),
                raw.get(fields::YEAR).unwrap_or(""),
                raw.get(fields::RATING).unwrap_or(""),
                raw.get(fields::VOTES).unwrap_or(""),
                reject.error_reason.as_str(),
            ];
            writer.write_record(row).map_err(|source| LoadError::Csv {
                path: self.path.clone(),
                source,
            })?;
        }
        writer.flush().map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(rejects.len())
    }
}
