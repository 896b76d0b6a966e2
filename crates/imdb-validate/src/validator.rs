//! Sequential per-record validation engine.

use imdb_model::RawRecord;

use crate::rules::MOVIE_RULES;

/// Accept/reject decision for one record.
///
/// `reason` is empty exactly when the record is accepted; otherwise it is
/// the `"; "`-joined list of every violated rule's message, in rule-table
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    pub reason: String,
}

impl Verdict {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            reason: String::new(),
        }
    }

    pub fn rejected(reason: String) -> Self {
        Self {
            accepted: false,
            reason,
        }
    }
}

/// Validate one raw record against the full rule table.
///
/// Pure function of its input: every rule is evaluated (no short-circuit)
/// and every violation is reported. Malformed input never escapes as an
/// error; it becomes part of the reason string.
pub fn validate_movie(record: &RawRecord) -> Verdict {
    let mut reasons: Vec<&'static str> = Vec::new();
    for rule in &MOVIE_RULES {
        if let Some(message) = rule.violation(record.get(rule.field)) {
            reasons.push(message);
        }
    }
    if reasons.is_empty() {
        Verdict::accepted()
    } else {
        Verdict::rejected(reasons.join("; "))
    }
}
