//! Sequence rule: positional matching with `ANY`, `HEAD`, `TAIL` and `OneOf`.
//!
//! # Algorithm
//!
//! 1. Marker placement (`HEAD` only at index 0, `TAIL` only at the last
//!    index) has already been checked by [`Pattern::validate`] before
//!    matching starts.
//! 2. An empty pattern or an empty value matches only if both are empty.
//! 3. A leading `HEAD` tries every split point from the left. The prefix
//!    before the split is the `HEAD` capture and the rest of the pattern is
//!    matched element for element against the suffix, which must have the
//!    same length unless the rest ends in `TAIL`. The shortest prefix that
//!    works wins.
//! 4. Otherwise a fixed correspondence scan walks `max(pattern, value)`
//!    positions. When the value is longer, the pattern index clamps to its
//!    last element, so a trailing wildcard keeps matching the value's tail.
//!    When the value runs out first the scan fails, unless the pattern
//!    position is `TAIL`, which captures the (possibly empty) remainder.

use crate::capture::Capture;
use crate::errors::MatchResult;
use crate::pattern::Pattern;
use crate::value::Value;

use super::Matcher;

impl Matcher {
    pub(super) fn match_sequence(
        &self,
        pattern: &[Pattern],
        value: &[Value],
        captures: &mut Vec<Capture>,
    ) -> MatchResult<bool> {
        if pattern.is_empty() || value.is_empty() {
            return Ok(pattern.is_empty() && value.is_empty());
        }

        match pattern.split_first() {
            Some((Pattern::Head, rest)) => self.match_with_head(rest, value, captures),
            _ => self.scan_fixed(pattern, value, captures),
        }
    }

    fn match_with_head(
        &self,
        rest: &[Pattern],
        value: &[Value],
        captures: &mut Vec<Capture>,
    ) -> MatchResult<bool> {
        let Some(last_split) = value.len().checked_sub(rest.len()) else {
            return Ok(false);
        };

        let mark = captures.len();
        for split in 0..=last_split {
            let (prefix, suffix) = value.split_at(split);
            captures.push(Capture::slice(prefix));

            if self.scan_exact(rest, suffix, captures)? {
                return Ok(true);
            }
            captures.truncate(mark);
        }
        Ok(false)
    }

    /// Element-for-element match with no clamping. A trailing `TAIL` takes
    /// whatever is left after the fixed elements.
    fn scan_exact(
        &self,
        pattern: &[Pattern],
        value: &[Value],
        captures: &mut Vec<Capture>,
    ) -> MatchResult<bool> {
        let (fixed, has_tail) = match pattern.split_last() {
            Some((Pattern::Tail, fixed)) => (fixed, true),
            _ => (pattern, false),
        };
        if value.len() < fixed.len() || (!has_tail && value.len() != fixed.len()) {
            return Ok(false);
        }

        for (element, item) in fixed.iter().zip(value) {
            if !self.test(element, item, captures)? {
                return Ok(false);
            }
        }
        if has_tail {
            captures.push(Capture::slice(value.get(fixed.len()..).unwrap_or(&[])));
        }
        Ok(true)
    }

    /// Positional scan over non-empty `pattern` and `value`.
    fn scan_fixed(
        &self,
        pattern: &[Pattern],
        value: &[Value],
        captures: &mut Vec<Capture>,
    ) -> MatchResult<bool> {
        let last = pattern.len().saturating_sub(1);
        for position in 0..pattern.len().max(value.len()) {
            let Some(element) = pattern.get(position.min(last)) else {
                return Ok(false);
            };

            if let Pattern::Tail = element {
                captures.push(Capture::slice(value.get(position..).unwrap_or(&[])));
                return Ok(true);
            }

            let Some(item) = value.get(position) else {
                return Ok(false);
            };
            if !self.test(element, item, captures)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
