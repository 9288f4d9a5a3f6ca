//! Structural matching of one pattern against one value.
//!
//! [`Matcher`] is the recursive core shared by every rule. Each
//! `(pattern, value)` test, nested ones included, first consults the
//! extension matchers and then routes on the pattern's shape:
//!
//! - literals and regexes: [`scalar`]
//! - sequence patterns: [`sequence`]
//! - mapping patterns: [`mapping`]
//! - record literals and shape predicates: [`record`]
//!
//! Captures are appended to a caller-owned vector and rolled back when a
//! test fails, so a failed branch never leaks partial captures.

mod mapping;
mod record;
mod scalar;
mod sequence;

use crate::capture::Capture;
use crate::classify::Category;
use crate::errors::MatchResult;
use crate::pattern::Pattern;
use crate::registry::ExtensionSnapshot;
use crate::value::Value;

/// Recursive matcher bound to one snapshot of extension matchers.
#[derive(Clone, Debug)]
pub struct Matcher {
    extensions: ExtensionSnapshot,
}

impl Matcher {
    pub fn new(extensions: ExtensionSnapshot) -> Self {
        Matcher { extensions }
    }

    /// Matcher that only knows the built-in rules.
    pub fn builtin() -> Self {
        Matcher::new(ExtensionSnapshot::empty())
    }

    /// Test `pattern` against `value`.
    ///
    /// Returns the captures in encounter order on a match, `None` on a
    /// structural mismatch, and an error for a malformed pattern. The
    /// pattern is validated in full before anything is compared.
    pub fn captures(&self, pattern: &Pattern, value: &Value) -> MatchResult<Option<Vec<Capture>>> {
        pattern.validate()?;
        let mut captures = Vec::new();
        let matched = self.test(pattern, value, &mut captures)?;
        Ok(matched.then_some(captures))
    }

    /// Whether `pattern` matches `value`, ignoring captures.
    pub fn is_match(&self, pattern: &Pattern, value: &Value) -> MatchResult<bool> {
        Ok(self.captures(pattern, value)?.is_some())
    }

    pub(crate) fn test(
        &self,
        pattern: &Pattern,
        value: &Value,
        captures: &mut Vec<Capture>,
    ) -> MatchResult<bool> {
        if self.extensions.resolve(pattern, value) {
            tracing::trace!(%pattern, %value, "extension matcher accepted");
            return Ok(true);
        }
        let mark = captures.len();
        let matched = self.test_builtin(pattern, value, captures)?;
        if !matched {
            captures.truncate(mark);
        }
        Ok(matched)
    }

    fn test_builtin(
        &self,
        pattern: &Pattern,
        value: &Value,
        captures: &mut Vec<Capture>,
    ) -> MatchResult<bool> {
        match pattern {
            Pattern::Any => {
                captures.push(Capture::Value(value.clone()));
                Ok(true)
            }
            // Only meaningful inside a sequence pattern.
            Pattern::Head | Pattern::Tail => Ok(false),
            Pattern::OneOf(alternatives) => self.test_one_of(alternatives, value),
            Pattern::Lit(expected) => Ok(match (expected.category(), value.category()) {
                (expected_category, actual) if expected_category != actual => false,
                (Category::Record, _) => record::match_record_literal(expected, value),
                _ => scalar::match_literal(expected, value),
            }),
            Pattern::Regex(re) => Ok(scalar::match_regex(re, value)),
            Pattern::Seq(items) => match value.as_sequence() {
                Some(elements) => self.match_sequence(items, elements, captures),
                None => Ok(false),
            },
            Pattern::Map(entries) => match value.as_map() {
                Some(value_entries) => self.match_mapping(entries, value_entries, captures),
                None => Ok(false),
            },
            Pattern::Shape(predicate) => Ok(record::match_shape(predicate, value)),
        }
    }

    /// Alternatives are tried in order; their captures are discarded.
    fn test_one_of(&self, alternatives: &[Pattern], value: &Value) -> MatchResult<bool> {
        let mut scratch = Vec::new();
        for alternative in alternatives {
            if self.test(alternative, value, &mut scratch)? {
                return Ok(true);
            }
            scratch.clear();
        }
        Ok(false)
    }
}
