use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use imdb_validate::{MOVIE_RULES, ValueKind};

use crate::cli::{EngineArg, RunArgs};
use crate::config::{PipelineConfig, load_config};
use crate::pipeline::{Engine, RunOptions, RunResult, run_pipeline};
use crate::summary::{apply_table_style, header_cell};

pub fn run_ingestion(args: &RunArgs) -> Result<RunResult> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::default(),
    };
    let source = args
        .source
        .clone()
        .unwrap_or_else(|| config.paths.source_csv.clone());
    let engine = match args.engine {
        EngineArg::Rows => Engine::Rows,
        EngineArg::Frame => Engine::Frame,
    };

    let options = RunOptions {
        source,
        engine,
        dry_run: args.dry_run,
        config,
    };
    let start = Instant::now();
    let result = run_pipeline(&options)
        .with_context(|| format!("ingest {}", options.source.display()))?;
    info!(duration_ms = start.elapsed().as_millis(), "pipeline finished");
    Ok(result)
}

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Malformed"),
        header_cell("Range"),
        header_cell("Out of range"),
    ]);
    apply_table_style(&mut table);
    for rule in &MOVIE_RULES {
        let kind = match rule.kind {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Decimal => "decimal",
        };
        table.add_row(vec![
            rule.field.to_string(),
            kind.to_string(),
            rule.missing.unwrap_or("-").to_string(),
            rule.malformed.unwrap_or("-").to_string(),
            format_range(rule.min, rule.max),
            rule.out_of_range.unwrap_or("-").to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn format_range(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{min}..={max}"),
        (Some(min), None) => format!(">= {min}"),
        (None, Some(max)) => format!("<= {max}"),
        (None, None) => "-".to_string(),
    }
}
