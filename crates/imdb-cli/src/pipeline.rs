//! The ingestion run, staged like the rest of the pipeline crates expose it:
//! ingest the source, route every record, then load both destinations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use imdb_ingest::{read_movies, read_movies_frame};
use imdb_load::{CleanSink, CsvMovieStore, CsvRejectLog, JsonlRejectLog, RejectSink};
use imdb_model::{BatchOutcome, fields};
use imdb_transform::{route_batch, route_frame};

use crate::config::PipelineConfig;

/// Which executor runs the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Sequential per-record engine.
    Rows,
    /// Dataframe engine.
    Frame,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: PathBuf,
    pub engine: Engine,
    pub dry_run: bool,
    pub config: PipelineConfig,
}

/// Paths written by a non-dry run.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub clean_csv: PathBuf,
    pub rejects_jsonl: PathBuf,
    pub rejects_csv: PathBuf,
}

#[derive(Debug)]
pub struct RunResult {
    pub source: PathBuf,
    pub read: usize,
    pub inserted: usize,
    pub rejected: usize,
    /// Individual reason messages and how many rejected rows carried each.
    pub reason_counts: BTreeMap<String, usize>,
    pub outputs: Option<OutputPaths>,
}

pub fn run_pipeline(options: &RunOptions) -> Result<RunResult> {
    let source_file = options.source.display().to_string();
    let run_span = info_span!("run", source = %source_file);
    let _run_guard = run_span.enter();

    let outcome = route_source(options, &source_file)?;
    let read = outcome.inserted_count() + outcome.rejected_count();
    info!(rows = read, "read source csv");

    for reject in &outcome.rejects {
        warn!(
            source = %reject.source_file,
            rank = reject.raw_record.get(fields::RANK).unwrap_or(""),
            title = reject.raw_record.get(fields::TITLE).unwrap_or("").trim(),
            reason = %reject.error_reason,
            "rejected row"
        );
    }

    let outputs = if options.dry_run {
        info!("dry run: skipping both destinations");
        None
    } else {
        Some(load_outcome(&options.config, &outcome)?)
    };

    let mut reason_counts: BTreeMap<String, usize> = BTreeMap::new();
    for reject in &outcome.rejects {
        for message in reject.error_reason.split("; ") {
            *reason_counts.entry(message.to_string()).or_insert(0) += 1;
        }
    }

    info!(
        inserted = outcome.inserted_count(),
        rejected = outcome.rejected_count(),
        "run complete"
    );

    Ok(RunResult {
        source: options.source.clone(),
        read,
        inserted: outcome.inserted_count(),
        rejected: outcome.rejected_count(),
        reason_counts,
        outputs,
    })
}

fn route_source(options: &RunOptions, source_file: &str) -> Result<BatchOutcome> {
    match options.engine {
        Engine::Rows => {
            let records = info_span!("ingest").in_scope(|| read_movies(&options.source))?;
            info_span!("route").in_scope(|| route_batch(&records, source_file))
                .context("route batch")
        }
        Engine::Frame => {
            let df = info_span!("ingest").in_scope(|| read_movies_frame(&options.source))?;
            info_span!("route").in_scope(|| route_frame(&df, source_file))
                .context("route frame")
        }
    }
}

fn load_outcome(config: &PipelineConfig, outcome: &BatchOutcome) -> Result<OutputPaths> {
    let load_span = info_span!("load");
    let _load_guard = load_span.enter();

    let mut clean_store = CsvMovieStore::new(&config.paths.clean_csv);
    clean_store
        .insert_batch(&outcome.clean)
        .with_context(|| format!("write {}", config.paths.clean_csv.display()))?;

    let mut audit_log = JsonlRejectLog::new(&config.paths.rejects_jsonl);
    audit_log
        .insert_batch(&outcome.rejects)
        .with_context(|| format!("write {}", config.paths.rejects_jsonl.display()))?;

    let mut summary_log = CsvRejectLog::new(&config.paths.rejects_csv);
    summary_log
        .insert_batch(&outcome.rejects)
        .with_context(|| format!("write {}", config.paths.rejects_csv.display()))?;

    Ok(OutputPaths {
        clean_csv: config.paths.clean_csv.clone(),
        rejects_jsonl: config.paths.rejects_jsonl.clone(),
        rejects_csv: config.paths.rejects_csv.clone(),
    })
}
