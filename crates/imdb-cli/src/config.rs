//! Pipeline configuration.
//!
//! Loaded once at startup and passed explicitly into the pipeline — there
//! is no process-global configuration state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Source CSV read when no path is given on the command line.
    pub source_csv: PathBuf,
    /// Destination table for accepted records.
    pub clean_csv: PathBuf,
    /// Full-record JSONL audit log for rejects.
    pub rejects_jsonl: PathBuf,
    /// Flat CSV summary log for rejects.
    pub rejects_csv: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_csv: PathBuf::from("data/imdb_movie_dataset.csv"),
            clean_csv: PathBuf::from("outputs/clean_imdb_movies.csv"),
            rejects_jsonl: PathBuf::from("outputs/rejected_rows.jsonl"),
            rejects_csv: PathBuf::from("outputs/rejected_rows.csv"),
        }
    }
}

/// Load configuration from a JSON file. Missing keys fall back to defaults.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse config {}", path.display()))
}
