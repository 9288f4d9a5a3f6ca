//! Record rule: literal equality or a type-shape predicate.

use crate::pattern::ShapePredicate;
use crate::value::Value;

/// Both sides must be records of the same shape with equal fields.
pub(super) fn match_record_literal(expected: &Value, value: &Value) -> bool {
    match (expected.as_record(), value.as_record()) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

/// A record whose shape the predicate accepts and whose guard, if any, holds.
pub(super) fn match_shape(predicate: &ShapePredicate, value: &Value) -> bool {
    value
        .as_record()
        .is_some_and(|record| predicate.test(record))
}
