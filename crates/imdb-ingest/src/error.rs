use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
    #[error("{path}: no header row detected")]
    NoHeader { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
