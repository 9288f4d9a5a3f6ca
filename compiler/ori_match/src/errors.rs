//! Error types for pattern construction and resolution.
//!
//! Structural mismatches are never errors: the dispatcher simply moves on
//! to the next pattern. `MatchError` is reserved for malformed patterns,
//! which abort the whole resolution.

use thiserror::Error;

/// Result alias used across the crate.
pub type MatchResult<T> = Result<T, MatchError>;

/// A pattern the caller authored incorrectly.
#[derive(Debug, Error)]
pub enum MatchError {
    /// `HEAD` appeared somewhere other than the first slot of a sequence.
    #[error("HEAD can only be the first element of a sequence pattern (found at position {position})")]
    HeadNotFirst { position: usize },

    /// `TAIL` appeared somewhere other than the last slot of a sequence.
    #[error("TAIL must be the last element of a sequence pattern (found at position {position} of {len})")]
    TailNotLast { position: usize, len: usize },

    /// A regular-expression pattern failed to compile.
    #[error("invalid regular expression pattern: {source}")]
    InvalidRegex {
        #[source]
        source: regex::Error,
    },
}

impl MatchError {
    /// Whether this error reports a misplaced `HEAD` or `TAIL` marker.
    pub fn is_marker_misplacement(&self) -> bool {
        matches!(
            self,
            MatchError::HeadNotFirst { .. } | MatchError::TailNotLast { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MatchError::HeadNotFirst { position: 1 }.to_string(),
            "HEAD can only be the first element of a sequence pattern (found at position 1)"
        );
        assert_eq!(
            MatchError::TailNotLast { position: 1, len: 3 }.to_string(),
            "TAIL must be the last element of a sequence pattern (found at position 1 of 3)"
        );
    }

    #[test]
    fn test_marker_misplacement() {
        assert!(MatchError::HeadNotFirst { position: 2 }.is_marker_misplacement());
        assert!(MatchError::TailNotLast { position: 0, len: 2 }.is_marker_misplacement());
    }
}
