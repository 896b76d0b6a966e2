//! Scenario tests for the sequential validation engine.

use imdb_model::RawRecord;
use imdb_validate::validate_movie;

fn valid_movie() -> RawRecord {
    RawRecord::from_pairs([
        ("Rank", "1"),
        ("Title", "Guardians of the Galaxy"),
        ("Genre", "Action,Adventure,Sci-Fi"),
        ("Description", "A group of intergalactic criminals"),
        ("Director", "James Gunn"),
        ("Actors", "Chris Pratt, Vin Diesel"),
        ("Year", "2014"),
        ("Runtime (Minutes)", "121"),
        ("Rating", "8.1"),
        ("Votes", "757074"),
        ("Revenue (Millions)", "333.13"),
        ("Metascore", "76"),
    ])
}

fn with_field(record: RawRecord, field: &str, value: &str) -> RawRecord {
    RawRecord::from_pairs(record.iter().map(|(name, old)| {
        let replaced = if name == field { value } else { old };
        (name.to_string(), replaced.to_string())
    }))
}

#[test]
fn fully_valid_movie_is_accepted() {
    let verdict = validate_movie(&valid_movie());
    assert!(verdict.accepted);
    assert_eq!(verdict.reason, "");
}

#[test]
fn missing_revenue_is_rejected() {
    let record = with_field(valid_movie(), "Revenue (Millions)", "");
    let verdict = validate_movie(&record);
    assert!(!verdict.accepted);
    assert_eq!(verdict.reason, "Missing Revenue");
}

#[test]
fn rating_above_ten_is_rejected() {
    let record = with_field(valid_movie(), "Rating", "11.0");
    let verdict = validate_movie(&record);
    assert!(!verdict.accepted);
    assert!(verdict.reason.contains("Rating out of range 0–10"));
}

#[test]
fn multiple_violations_are_all_reported_in_table_order() {
    let mut record = with_field(valid_movie(), "Title", "");
    record = with_field(record, "Rank", "-5");
    record = with_field(record, "Year", "1850");

    let verdict = validate_movie(&record);
    assert!(!verdict.accepted);
    assert_eq!(
        verdict.reason,
        "Missing Title; Rank must be positive; Year out of allowed range"
    );
}

#[test]
fn reason_counts_match_violation_counts() {
    let mut record = with_field(valid_movie(), "Runtime (Minutes)", "abc");
    record = with_field(record, "Votes", "-1");
    record = with_field(record, "Metascore", "101");

    let verdict = validate_movie(&record);
    let messages: Vec<&str> = verdict.reason.split("; ").collect();
    assert_eq!(
        messages,
        vec![
            "Runtime is not an integer",
            "Votes must be non-negative",
            "Metascore out of range 0–100",
        ]
    );
}

#[test]
fn absent_columns_are_reported_like_blank_ones() {
    let record = RawRecord::from_pairs([("Title", "Sing")]);
    let verdict = validate_movie(&record);
    assert_eq!(
        verdict.reason,
        "Rank is not an integer; Year is not an integer; Missing Runtime; \
         Missing Rating; Missing Votes; Missing Revenue; Missing Metascore"
    );
}

#[test]
fn validation_is_idempotent() {
    let record = with_field(valid_movie(), "Votes", "not-a-number");
    let first = validate_movie(&record);
    let second = validate_movie(&record);
    assert_eq!(first, second);
}

#[test]
fn title_of_only_whitespace_is_missing() {
    let record = with_field(valid_movie(), "Title", "   ");
    let verdict = validate_movie(&record);
    assert_eq!(verdict.reason, "Missing Title");
}
