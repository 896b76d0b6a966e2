pub mod movie;
pub mod outcome;
pub mod record;

pub use movie::CleanRecord;
pub use outcome::{BatchOutcome, RejectRecord};
pub use record::{RawRecord, SOURCE_FIELDS, fields};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_counts_are_sequence_lengths() {
        let outcome = BatchOutcome {
            clean: vec![],
            rejects: vec![RejectRecord {
                source_file: "movies.csv".to_string(),
                raw_record: RawRecord::from_pairs([("Title", "")]),
                error_reason: "Missing Title".to_string(),
            }],
        };
        assert_eq!(outcome.inserted_count(), 0);
        assert_eq!(outcome.rejected_count(), 1);
    }

    #[test]
    fn reject_record_serializes_full_row() {
        let reject = RejectRecord {
            source_file: "movies.csv".to_string(),
            raw_record: RawRecord::from_pairs([("Rank", "1"), ("Title", "Sing")]),
            error_reason: "Missing Votes".to_string(),
        };
        let value = serde_json::to_value(&reject).expect("serialize reject");
        assert_eq!(value["source_file"], "movies.csv");
        assert_eq!(value["raw_record"]["Rank"], "1");
        assert_eq!(value["raw_record"]["Title"], "Sing");
        assert_eq!(value["error_reason"], "Missing Votes");
    }
}
