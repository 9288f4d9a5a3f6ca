//! Mapping rule: unordered correspondence between pattern and value entries.
//!
//! Pattern entries are visited in pattern order. Each one must find an
//! unconsumed value entry with an equal key whose value satisfies the
//! entry's pattern; that value entry is then consumed so it cannot satisfy
//! a second pattern entry. Value entries no pattern entry mentions are
//! ignored.

use crate::capture::Capture;
use crate::errors::MatchResult;
use crate::pattern::Pattern;
use crate::value::Value;

use super::Matcher;

impl Matcher {
    pub(super) fn match_mapping(
        &self,
        pattern: &[(Value, Pattern)],
        value: &[(Value, Value)],
        captures: &mut Vec<Capture>,
    ) -> MatchResult<bool> {
        let mut consumed = vec![false; value.len()];

        for (key, expected) in pattern {
            let mut satisfied = false;
            for ((candidate_key, candidate), used) in value.iter().zip(consumed.iter_mut()) {
                if *used || candidate_key != key {
                    continue;
                }
                if self.test(expected, candidate, captures)? {
                    *used = true;
                    satisfied = true;
                    break;
                }
            }
            if !satisfied {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
