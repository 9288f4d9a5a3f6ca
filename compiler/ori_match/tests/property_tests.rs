//! Property-based tests for the structural matcher.
//!
//! These tests use proptest to generate random subjects and patterns and
//! verify:
//! 1. Scalar equality is reflexive (NaN included) and type-strict
//! 2. `HEAD` and `TAIL` capture exactly the unmatched part of a sequence
//! 3. Mapping matches do not depend on entry order
//! 4. `one_of` matches iff some alternative matches on its own

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    reason = "Proptest macros generate code with these patterns"
)]

use ori_match::{begin_match, one_of, seq, Capture, Matcher, Pattern, Value, HEAD, TAIL};
use proptest::prelude::*;

// -- Strategies --

/// A non-empty list drawn from a tiny alphabet, so elements repeat often.
fn repetitive_list(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..3, 1..=max_len)
}

/// Any `f64`, with NaN and both zeros forced into the mix.
fn float_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        Just(f64::NAN),
        Just(0.0),
        Just(-0.0),
        Just(f64::INFINITY),
    ]
}

/// Key/value pairs with unique keys.
fn entries_strategy() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..8)
        .prop_map(|map| map.into_iter().collect())
}

fn list(items: &[i32]) -> Value {
    Value::from(items.to_vec())
}

fn slice_of(capture: &Capture) -> Vec<Value> {
    capture.as_slice().expect("slice capture").to_vec()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_scalar_reflexive(n in any::<i64>()) {
        let matcher = Matcher::builtin();
        prop_assert!(matcher.is_match(&Pattern::from(n), &Value::from(n)).unwrap());
    }

    #[test]
    fn prop_float_reflexive(x in float_strategy()) {
        let matcher = Matcher::builtin();
        prop_assert!(matcher.is_match(&Pattern::from(x), &Value::from(x)).unwrap());
        prop_assert!(begin_match(x).when(x, "hit").resolve().unwrap().is_match());
    }

    #[test]
    fn prop_string_reflexive(s in ".{0,24}") {
        let matcher = Matcher::builtin();
        prop_assert!(matcher.is_match(&Pattern::from(s.as_str()), &Value::from(s.as_str())).unwrap());
    }

    #[test]
    fn prop_scalar_type_strict(n in any::<i32>()) {
        let matcher = Matcher::builtin();
        prop_assert!(!matcher.is_match(&Pattern::from(n), &Value::from(i64::from(n))).unwrap());
        prop_assert!(!matcher.is_match(&Pattern::from(i64::from(n)), &Value::from(n)).unwrap());
    }

    #[test]
    fn prop_head_captures_everything_before_last(xs in repetitive_list(12)) {
        let last = *xs.last().unwrap();
        let captures = Matcher::builtin()
            .captures(&seq![HEAD, last], &list(&xs))
            .unwrap()
            .expect("HEAD followed by the last element always matches");
        prop_assert_eq!(captures.len(), 1);
        prop_assert_eq!(slice_of(&captures[0]), xs[..xs.len() - 1].iter().copied().map(Value::from).collect::<Vec<_>>());
    }

    #[test]
    fn prop_bare_head_captures_whole_sequence(xs in prop::collection::vec(any::<i32>(), 1..12)) {
        let captures = Matcher::builtin()
            .captures(&seq![HEAD], &list(&xs))
            .unwrap()
            .expect("bare HEAD matches any non-empty sequence");
        prop_assert_eq!(slice_of(&captures[0]), xs.iter().copied().map(Value::from).collect::<Vec<_>>());
    }

    #[test]
    fn prop_tail_captures_everything_after_first(xs in repetitive_list(12)) {
        let first = xs[0];
        let captures = Matcher::builtin()
            .captures(&seq![first, TAIL], &list(&xs))
            .unwrap()
            .expect("first element followed by TAIL always matches");
        prop_assert_eq!(slice_of(&captures[0]), xs[1..].iter().copied().map(Value::from).collect::<Vec<_>>());
    }

    #[test]
    fn prop_mapping_order_irrelevant(entries in entries_strategy()) {
        let subject = Value::map(entries.iter().map(|(k, v)| (Value::from(k.as_str()), Value::from(*v))));
        let reversed = Pattern::map(entries.iter().rev().map(|(k, v)| (k.as_str(), *v)));
        let forward = Pattern::map(entries.iter().map(|(k, v)| (k.as_str(), *v)));

        let matcher = Matcher::builtin();
        prop_assert!(matcher.is_match(&forward, &subject).unwrap());
        prop_assert!(matcher.is_match(&reversed, &subject).unwrap());
    }

    #[test]
    fn prop_one_of_iff_some_alternative(
        alternatives in prop::collection::vec(any::<i8>(), 0..6),
        subject in any::<i8>(),
    ) {
        let matcher = Matcher::builtin();
        let value = Value::from(subject);
        let expected = alternatives
            .iter()
            .any(|alt| matcher.is_match(&Pattern::from(*alt), &value).unwrap());
        let actual = matcher.is_match(&one_of(alternatives.iter().copied()), &value).unwrap();
        prop_assert_eq!(actual, expected);
    }
}
