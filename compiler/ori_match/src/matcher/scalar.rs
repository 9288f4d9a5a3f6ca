//! Scalar and text rules: exact equality and regular-expression search.

use regex::Regex;

use crate::value::Value;

/// Exact equality: same declared type and same value.
pub(super) fn match_literal(expected: &Value, value: &Value) -> bool {
    expected == value
}

/// The expression matches anywhere in a text value. Non-text never matches.
pub(super) fn match_regex(re: &Regex, value: &Value) -> bool {
    value.as_str().is_some_and(|text| re.is_match(text))
}
