use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use imdb_cli::config::PipelineConfig;
use imdb_cli::pipeline::{Engine, RunOptions, run_pipeline};

const SOURCE_CSV: &str = "\
Rank,Title,Genre,Description,Director,Actors,Year,Runtime (Minutes),Rating,Votes,Revenue (Millions),Metascore
1,Guardians of the Galaxy,\"Action,Adventure,Sci-Fi\",A group of intergalactic criminals,James Gunn,\"Chris Pratt, Vin Diesel\",2014,121,8.1,757074,333.13,76
2,,Comedy,A missing title,Greg Mottola,Some Cast,1800,90,7.0,1000,10.5,50
abc,Sing,\"Animation,Comedy\",Animals audition to sing,Christophe Lourdelet,\"Matthew McConaughey, Reese Witherspoon\",2016,108,7.2,60545,270.32,59
4,La La Land,\"Comedy,Drama,Music\",A jazz pianist falls for an actress,Damien Chazelle,\"Ryan Gosling, Emma Stone\",2016,128,8.3,258682,151.06,93
";

fn write_source(dir: &Path) -> PathBuf {
    let path = dir.join("movies.csv");
    fs::write(&path, SOURCE_CSV).expect("write source csv");
    path
}

fn options(dir: &Path, engine: Engine, dry_run: bool) -> RunOptions {
    let mut config = PipelineConfig::default();
    config.paths.clean_csv = dir.join("out/clean.csv");
    config.paths.rejects_jsonl = dir.join("out/rejects.jsonl");
    config.paths.rejects_csv = dir.join("out/rejects.csv");
    RunOptions {
        source: write_source(dir),
        engine,
        dry_run,
        config,
    }
}

#[test]
fn run_routes_rows_and_writes_all_destinations() {
    let dir = TempDir::new().expect("temp dir");
    let options = options(dir.path(), Engine::Rows, false);
    let result = run_pipeline(&options).expect("run pipeline");

    assert_eq!(result.read, 4);
    assert_eq!(result.inserted, 2);
    assert_eq!(result.rejected, 2);

    let outputs = result.outputs.expect("outputs written");
    let clean = fs::read_to_string(&outputs.clean_csv).expect("read clean csv");
    let mut lines = clean.lines();
    assert_eq!(
        lines.next(),
        Some(
            "rank_num,title,genre,description,director,actors,year,\
             runtime_minutes,rating,votes,revenue_millions,metascore"
        )
    );
    assert!(clean.contains("Guardians of the Galaxy"));
    assert!(clean.contains("La La Land"));
    assert!(!clean.contains("Sing"));

    let audit = fs::read_to_string(&outputs.rejects_jsonl).expect("read rejects jsonl");
    let entries: Vec<serde_json::Value> = audit
        .lines()
        .map(|line| serde_json::from_str(line).expect("parse audit line"))
        .collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0]["error_reason"],
        "Missing Title; Year out of allowed range"
    );
    assert_eq!(entries[1]["error_reason"], "Rank is not an integer");
    assert_eq!(entries[1]["raw_record"]["Rank"], "abc");
    assert_eq!(entries[1]["raw_record"]["Title"], "Sing");

    let summary = fs::read_to_string(&outputs.rejects_csv).expect("read rejects csv");
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "source_file,rank,title,year,rating,votes,error_reason"
    );
    assert!(lines[2].contains("Rank is not an integer"));
}

#[test]
fn reason_counts_split_joined_messages() {
    let dir = TempDir::new().expect("temp dir");
    let options = options(dir.path(), Engine::Rows, true);
    let result = run_pipeline(&options).expect("run pipeline");

    assert_eq!(result.reason_counts.get("Missing Title"), Some(&1));
    assert_eq!(result.reason_counts.get("Year out of allowed range"), Some(&1));
    assert_eq!(result.reason_counts.get("Rank is not an integer"), Some(&1));
    assert_eq!(result.reason_counts.len(), 3);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let options = options(dir.path(), Engine::Rows, true);
    let result = run_pipeline(&options).expect("run pipeline");

    assert_eq!(result.inserted, 2);
    assert_eq!(result.rejected, 2);
    assert!(result.outputs.is_none());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn frame_engine_matches_row_engine() {
    let dir = TempDir::new().expect("temp dir");
    let row_result = run_pipeline(&options(dir.path(), Engine::Rows, true)).expect("rows");
    let frame_result = run_pipeline(&options(dir.path(), Engine::Frame, true)).expect("frame");

    assert_eq!(frame_result.read, row_result.read);
    assert_eq!(frame_result.inserted, row_result.inserted);
    assert_eq!(frame_result.rejected, row_result.rejected);
    assert_eq!(frame_result.reason_counts, row_result.reason_counts);
}

#[test]
fn padded_source_headers_validate_identically_on_both_engines() {
    let dir = TempDir::new().expect("temp dir");
    let source = dir.path().join("padded.csv");
    fs::write(
        &source,
        "Rank ,Title,Genre,Description,Director,Actors,Year,Runtime  (Minutes),\
         Rating,Votes,Revenue (Millions),Metascore\n\
         1,Sing,Animation,Animals audition to sing,Christophe Lourdelet,Cast,\
         2016,108,7.2,60545,270.32,59\n",
    )
    .expect("write padded csv");

    let mut rows = options(dir.path(), Engine::Rows, true);
    rows.source = source.clone();
    let mut frame = options(dir.path(), Engine::Frame, true);
    frame.source = source;

    let row_result = run_pipeline(&rows).expect("rows");
    let frame_result = run_pipeline(&frame).expect("frame");
    assert_eq!(row_result.inserted, 1);
    assert_eq!(row_result.rejected, 0);
    assert_eq!(frame_result.inserted, row_result.inserted);
    assert_eq!(frame_result.rejected, row_result.rejected);
}

#[test]
fn missing_source_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let mut options = options(dir.path(), Engine::Rows, true);
    options.source = dir.path().join("does-not-exist.csv");
    assert!(run_pipeline(&options).is_err());
}
