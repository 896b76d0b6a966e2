use serde::Serialize;

use crate::movie::CleanRecord;
use crate::record::RawRecord;

/// A rejected row together with its provenance and the full rejection reason.
///
/// The entire original record is preserved untyped so the audit store can
/// reproduce the offending row, not just the failing fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectRecord {
    pub source_file: String,
    pub raw_record: RawRecord,
    pub error_reason: String,
}

/// Result of routing one input batch: a stable partition of the input into
/// typed clean records and audited rejects.
///
/// Every input record lands in exactly one of the two sequences, in input
/// order, so `inserted_count() + rejected_count()` always equals the input
/// size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub clean: Vec<CleanRecord>,
    pub rejects: Vec<RejectRecord>,
}

impl BatchOutcome {
    pub fn inserted_count(&self) -> usize {
        self.clean.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejects.len()
    }
}
