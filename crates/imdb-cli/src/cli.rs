//! CLI argument definitions for the movie ingestion pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "imdb-etl",
    version,
    about = "IMDB movie batch ETL - validate and route CSV movie records",
    long_about = "Read a flat CSV of movie records, validate every row against a fixed\n\
                  rule set, and route rows into a clean table and a rejects audit log\n\
                  with a human-readable reason per rejection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a source CSV, validate rows, and write both destinations.
    Run(RunArgs),

    /// Print the validation rule table.
    Rules,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the source CSV (default: the configured source path).
    #[arg(value_name = "SOURCE_CSV")]
    pub source: Option<PathBuf>,

    /// Path to a JSON configuration file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Validation executor to use.
    ///
    /// Both executors run the same rule table; `frame` evaluates it over a
    /// dataframe instead of record by record.
    #[arg(long = "engine", value_enum, default_value = "rows")]
    pub engine: EngineArg,

    /// Validate and route without writing any output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EngineArg {
    Rows,
    Frame,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
