//! The movie field rule table.
//!
//! One declarative entry per checked field, in reporting order. Both the
//! sequential record engine and the dataframe engine execute this table, so
//! the two backends cannot drift apart. Message text is part of the
//! contract: rejection logs must be reproducible verbatim.

use imdb_ingest::{parse_f64, parse_i64};
use imdb_model::fields;

/// How a field's raw string is interpreted before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text; only presence is checked.
    Text,
    /// Base-10 integer.
    Integer,
    /// Floating-point number.
    Decimal,
}

/// One field's validation rule: presence, parse, and inclusive bounds.
///
/// The three failure modes are mutually exclusive and checked in priority
/// order: missing first, then malformed, then out of range. When `missing`
/// is `None`, a blank value is reported with the `malformed` message
/// instead (Rank and Year fold absence into "not an integer").
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: ValueKind,
    pub missing: Option<&'static str>,
    pub malformed: Option<&'static str>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub out_of_range: Option<&'static str>,
}

impl FieldRule {
    /// Evaluate this rule against one raw value, `None` meaning the column
    /// was absent. Returns the violation message, if any.
    pub fn violation(&self, value: Option<&str>) -> Option<&'static str> {
        let trimmed = value.map(str::trim).unwrap_or("");
        if trimmed.is_empty() {
            return match self.kind {
                ValueKind::Text => self.missing,
                ValueKind::Integer | ValueKind::Decimal => self.missing.or(self.malformed),
            };
        }
        let parsed = match self.kind {
            ValueKind::Text => return None,
            ValueKind::Integer => parse_i64(trimmed).map(|v| v as f64),
            ValueKind::Decimal => parse_f64(trimmed),
        };
        let Some(number) = parsed else {
            return self.malformed;
        };
        let below = self.min.is_some_and(|min| number < min);
        let above = self.max.is_some_and(|max| number > max);
        if below || above {
            return self.out_of_range;
        }
        None
    }
}

/// Field rules in reporting order.
pub const MOVIE_RULES: [FieldRule; 8] = [
    FieldRule {
        field: fields::TITLE,
        kind: ValueKind::Text,
        missing: Some("Missing Title"),
        malformed: None,
        min: None,
        max: None,
        out_of_range: None,
    },
    FieldRule {
        field: fields::RANK,
        kind: ValueKind::Integer,
        missing: None,
        malformed: Some("Rank is not an integer"),
        min: Some(1.0),
        max: None,
        out_of_range: Some("Rank must be positive"),
    },
    FieldRule {
        field: fields::YEAR,
        kind: ValueKind::Integer,
        missing: None,
        malformed: Some("Year is not an integer"),
        min: Some(1900.0),
        max: Some(2030.0),
        out_of_range: Some("Year out of allowed range"),
    },
    FieldRule {
        field: fields::RUNTIME_MINUTES,
        kind: ValueKind::Integer,
        missing: Some("Missing Runtime"),
        malformed: Some("Runtime is not an integer"),
        min: Some(1.0),
        max: Some(400.0),
        out_of_range: Some("Runtime out of range 1–400 minutes"),
    },
    FieldRule {
        field: fields::RATING,
        kind: ValueKind::Decimal,
        missing: Some("Missing Rating"),
        malformed: Some("Rating is not a number"),
        min: Some(0.0),
        max: Some(10.0),
        out_of_range: Some("Rating out of range 0–10"),
    },
    FieldRule {
        field: fields::VOTES,
        kind: ValueKind::Integer,
        missing: Some("Missing Votes"),
        malformed: Some("Votes is not an integer"),
        min: Some(0.0),
        max: None,
        out_of_range: Some("Votes must be non-negative"),
    },
    FieldRule {
        field: fields::REVENUE_MILLIONS,
        kind: ValueKind::Decimal,
        missing: Some("Missing Revenue"),
        malformed: Some("Revenue is not a number"),
        min: Some(0.0),
        max: None,
        out_of_range: Some("Revenue must be non-negative"),
    },
    FieldRule {
        field: fields::METASCORE,
        kind: ValueKind::Integer,
        missing: Some("Missing Metascore"),
        malformed: Some("Metascore is not an integer"),
        min: Some(0.0),
        max: Some(100.0),
        out_of_range: Some("Metascore out of range 0–100"),
    },
];
