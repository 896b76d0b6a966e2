//! Clean store: the destination movie table written as a CSV file.

use std::path::{Path, PathBuf};

use tracing::info;

use imdb_model::CleanRecord;

use crate::error::{LoadError, Result};
use crate::CleanSink;

/// Writes accepted records as one CSV table with the destination column
/// names (`rank_num`, `title`, ...). Each batch replaces the file.
#[derive(Debug, Clone)]
pub struct CsvMovieStore {
    path: PathBuf,
}

/// Destination column names, written even when a batch has no clean rows.
const CLEAN_HEADER: [&str; 12] = [
    "rank_num",
    "title",
    "genre",
    "description",
    "director",
    "actors",
    "year",
    "runtime_minutes",
    "rating",
    "votes",
    "revenue_millions",
    "metascore",
];

impl CsvMovieStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CleanSink for CsvMovieStore {
    fn insert_batch(&mut self, records: &[CleanRecord]) -> Result<usize> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|source| LoadError::Csv {
                path: self.path.clone(),
                source,
            })?;
        writer
            .write_record(CLEAN_HEADER)
            .map_err(|source| LoadError::Csv {
                path: self.path.clone(),
                source,
            })?;
        for record in records {
            writer.serialize(record).map_err(|source| LoadError::Csv {
                path: self.path.clone(),
                source,
            })?;
        }
        writer.flush().map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), rows = records.len(), "wrote clean movie table");
        Ok(records.len())
    }
}
