//! Optional-string to number coercion.
//!
//! These helpers run on the accepted path only, after validation has
//! already confirmed well-formedness. They still refuse garbage instead of
//! clamping it: a parse failure here means the rule table and the coercion
//! step disagree, which the router treats as an internal fault.

use thiserror::Error;

/// A non-blank value that failed to parse as the requested numeric type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} is not {expected}")]
pub struct FormatError {
    pub value: String,
    pub expected: &'static str,
}

/// Parse an optional string as a base-10 integer.
///
/// `None` or a blank (after trimming) value yields `Ok(None)`; anything
/// else must parse or the call fails.
pub fn parse_optional_i64(value: Option<&str>) -> Result<Option<i64>, FormatError> {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| FormatError {
            value: trimmed.to_string(),
            expected: "an integer",
        })
}

/// Parse an optional string as a floating-point number. Same contract as
/// [`parse_optional_i64`].
pub fn parse_optional_f64(value: Option<&str>) -> Result<Option<f64>, FormatError> {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| FormatError {
            value: trimmed.to_string(),
            expected: "a number",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_absent_coerce_to_none() {
        assert_eq!(parse_optional_i64(None), Ok(None));
        assert_eq!(parse_optional_i64(Some("")), Ok(None));
        assert_eq!(parse_optional_i64(Some("   ")), Ok(None));
        assert_eq!(parse_optional_f64(None), Ok(None));
    }

    #[test]
    fn numbers_parse_with_surrounding_whitespace() {
        assert_eq!(parse_optional_i64(Some(" 42 ")), Ok(Some(42)));
        assert_eq!(parse_optional_f64(Some("333.13")), Ok(Some(333.13)));
    }

    #[test]
    fn garbage_is_an_error_not_a_clamp() {
        let error = parse_optional_i64(Some("12a")).unwrap_err();
        assert_eq!(error.value, "12a");
        assert!(parse_optional_f64(Some("N/A")).is_err());
    }
}
