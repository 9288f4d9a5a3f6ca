#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use super::*;
use crate::errors::MatchError;
use crate::pattern::{one_of, ANY, HEAD, TAIL};
use crate::seq;

fn list(items: &[i32]) -> Value {
    Value::from(items.to_vec())
}

fn slice(items: &[i32]) -> Capture {
    Capture::slice(&items.iter().copied().map(Value::from).collect::<Vec<_>>())
}

fn one(item: i32) -> Capture {
    Capture::Value(Value::from(item))
}

fn run(pattern: &Pattern, value: &Value) -> Option<Vec<Capture>> {
    Matcher::builtin()
        .captures(pattern, value)
        .unwrap_or_else(|e| panic!("unexpected error: {e}"))
}

#[test]
fn test_empty_against_empty() {
    assert_eq!(run(&seq![], &list(&[])), Some(vec![]));
}

#[test]
fn test_empty_against_non_empty() {
    assert_eq!(run(&seq![], &list(&[1])), None);
    assert_eq!(run(&seq![1], &list(&[])), None);
    assert_eq!(run(&seq![ANY], &list(&[])), None);
    assert_eq!(run(&seq![TAIL], &list(&[])), None);
}

#[test]
fn test_exact_literals() {
    assert_eq!(run(&seq![1, 2, 3], &list(&[1, 2, 3])), Some(vec![]));
    assert_eq!(run(&seq![1, 2, 4], &list(&[1, 2, 3])), None);
}

#[test]
fn test_any_captures_in_order() {
    assert_eq!(
        run(&seq![ANY, 2, ANY], &list(&[1, 2, 3])),
        Some(vec![one(1), one(3)])
    );
}

#[test]
fn test_head_captures_prefix() {
    assert_eq!(run(&seq![HEAD, 2, 3], &list(&[1, 2, 3])), Some(vec![slice(&[1])]));
    assert_eq!(run(&seq![HEAD, 3], &list(&[1, 2, 3])), Some(vec![slice(&[1, 2])]));
    assert_eq!(run(&seq![HEAD, 1, 2, 3], &list(&[1, 2, 3])), Some(vec![slice(&[])]));
}

#[test]
fn test_head_with_repeated_elements_takes_everything_before_last() {
    assert_eq!(run(&seq![HEAD, 5], &list(&[5, 5, 5])), Some(vec![slice(&[5, 5])]));
    assert_eq!(
        run(&seq![HEAD, 5, 5], &list(&[5, 5, 5, 5])),
        Some(vec![slice(&[5, 5])])
    );
}

#[test]
fn test_any_after_head_matches_exactly_one_element() {
    assert_eq!(
        run(&seq![HEAD, ANY], &list(&[1, 2, 3])),
        Some(vec![slice(&[1, 2]), one(3)])
    );
    assert_eq!(
        run(&seq![HEAD, ANY, ANY], &list(&[1, 2, 3])),
        Some(vec![slice(&[1]), one(2), one(3)])
    );
}

#[test]
fn test_rest_after_head_does_not_clamp() {
    assert_eq!(run(&seq![HEAD, 1, 2], &list(&[1, 2, 2])), None);
    assert_eq!(run(&seq![HEAD, 2, TAIL], &list(&[2, 2])), Some(vec![slice(&[]), slice(&[2])]));
}

#[test]
fn test_head_then_any() {
    assert_eq!(
        run(&seq![HEAD, ANY, 3], &list(&[1, 2, 3])),
        Some(vec![slice(&[1]), one(2)])
    );
}

#[test]
fn test_head_no_split_matches() {
    assert_eq!(run(&seq![HEAD, 9], &list(&[1, 2, 3])), None);
    assert_eq!(run(&seq![HEAD, 1, 2, 3, 4], &list(&[1, 2, 3])), None);
}

#[test]
fn test_bare_head() {
    assert_eq!(run(&seq![HEAD], &list(&[])), None);
    assert_eq!(run(&seq![HEAD], &list(&[7])), Some(vec![slice(&[7])]));
    assert_eq!(run(&seq![HEAD], &list(&[1, 2, 3])), Some(vec![slice(&[1, 2, 3])]));
}

#[test]
fn test_head_prefers_shortest_prefix() {
    // Both splits after 1 and after 1, 2 leave a suffix starting with 2.
    assert_eq!(
        run(&seq![HEAD, 2, TAIL], &list(&[1, 2, 2, 5])),
        Some(vec![slice(&[1]), slice(&[2, 5])])
    );
}

#[test]
fn test_tail_captures_suffix() {
    assert_eq!(run(&seq![1, TAIL], &list(&[1, 2, 3])), Some(vec![slice(&[2, 3])]));
    assert_eq!(run(&seq![1, TAIL], &list(&[1])), Some(vec![slice(&[])]));
    assert_eq!(run(&seq![TAIL], &list(&[4, 5])), Some(vec![slice(&[4, 5])]));
    assert_eq!(run(&seq![2, TAIL], &list(&[1, 2, 3])), None);
}

#[test]
fn test_head_and_tail_together() {
    assert_eq!(
        run(&seq![HEAD, 2, TAIL], &list(&[1, 2, 3])),
        Some(vec![slice(&[1]), slice(&[3])])
    );
}

#[test]
fn test_shorter_pattern_clamps_to_last_element() {
    assert_eq!(
        run(&seq![1, ANY], &list(&[1, 2, 3])),
        Some(vec![one(2), one(3)])
    );
    assert_eq!(run(&seq![1, 2], &list(&[1, 2, 2])), Some(vec![]));
    assert_eq!(run(&seq![1, 2], &list(&[1, 2, 3])), None);
}

#[test]
fn test_longer_pattern_fails_out_of_range() {
    assert_eq!(run(&seq![1, 2, 3], &list(&[1, 2])), None);
    assert_eq!(run(&seq![1, 2, ANY], &list(&[1, 2])), None);
}

#[test]
fn test_one_of_at_position() {
    assert_eq!(run(&seq![1, one_of([1, 2, 3]), 3], &list(&[1, 2, 3])), Some(vec![]));
    assert_eq!(run(&seq![1, one_of([4, 5, 6]), 3], &list(&[1, 2, 3])), None);
}

#[test]
fn test_nested_sequence_captures_flatten() {
    let value = Value::list(vec![Value::from(0), list(&[1, 2, 3])]);
    assert_eq!(
        run(&seq![ANY, seq![HEAD, 3]], &value),
        Some(vec![one(0), slice(&[1, 2])])
    );
}

#[test]
fn test_arrays_match_like_lists() {
    let array = Value::from([1, 2, 3]);
    assert_eq!(run(&seq![1, ANY, 3], &array), Some(vec![one(2)]));
}

#[test]
fn test_sequence_pattern_against_other_categories() {
    assert_eq!(run(&seq![ANY], &Value::from("abc")), None);
    assert_eq!(run(&seq![ANY], &Value::map([])), None);
}

#[test]
fn test_misplaced_head_is_an_error() {
    let err = Matcher::builtin()
        .captures(&seq![1, HEAD, 3], &list(&[1, 2, 3]))
        .unwrap_err();
    assert!(matches!(err, MatchError::HeadNotFirst { position: 1 }));
}

#[test]
fn test_misplaced_tail_is_an_error() {
    let err = Matcher::builtin()
        .captures(&seq![1, TAIL, 3], &list(&[1, 2, 3]))
        .unwrap_err();
    assert!(matches!(err, MatchError::TailNotLast { position: 1, len: 3 }));
}

#[test]
fn test_misplacement_is_reported_even_when_elements_differ() {
    let matcher = Matcher::builtin();
    assert!(matcher.captures(&seq![9, HEAD], &list(&[1, 2])).is_err());
    assert!(matcher.captures(&seq![TAIL, 9], &list(&[])).is_err());
}

#[test]
fn test_error_inside_one_of_is_fatal() {
    let pattern = seq![one_of([seq![1, HEAD]])];
    let value = Value::list(vec![list(&[1, 2])]);
    assert!(Matcher::builtin().captures(&pattern, &value).is_err());
}
