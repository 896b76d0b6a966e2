pub mod frame;
pub mod rules;
pub mod validator;

pub use frame::{REASON_COLUMN, reason_column, reject_reasons};
pub use rules::{FieldRule, MOVIE_RULES, ValueKind};
pub use validator::{Verdict, validate_movie};
