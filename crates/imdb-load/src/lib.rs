//! Persistence targets for routed batches.
//!
//! The pipeline talks to two stores through narrow traits: accepted records
//! go to a [`CleanSink`], rejected ones to a [`RejectSink`]. The provided
//! implementations are file-backed; a database-backed store plugs into the
//! same seams.

pub mod audit;
pub mod csv_store;
pub mod error;

pub use audit::{CsvRejectLog, JsonlRejectLog};
pub use csv_store::CsvMovieStore;
pub use error::{LoadError, Result};

use imdb_model::{CleanRecord, RejectRecord};

/// Destination for accepted, typed records.
pub trait CleanSink {
    /// Persist a batch; returns the number of rows written. Either the whole
    /// call succeeds or the run aborts — partial writes are not reported as
    /// success.
    fn insert_batch(&mut self, records: &[CleanRecord]) -> Result<usize>;
}

/// Destination for rejected records and their reasons.
pub trait RejectSink {
    /// Persist a batch of rejects; returns the number of entries written.
    fn insert_batch(&mut self, rejects: &[RejectRecord]) -> Result<usize>;
}
