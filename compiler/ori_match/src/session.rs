//! Match sessions: ordered (pattern, action) entries resolved against one
//! subject.
//!
//! ```text
//! let outcome = begin_match(vec![1, 2, 3])
//!     .when(seq![HEAD, 3], |head: Capture| head.into_value())
//!     .otherwise("no match")
//!     .resolve()?;
//! ```
//!
//! Entries are tried in registration order and the first match wins; later
//! entries are never evaluated. The winning action receives the captures
//! fitted to its declared arity.

use crate::action::{Action, IntoAction};
use crate::capture::adapt_to_arity;
use crate::errors::MatchResult;
use crate::matcher::Matcher;
use crate::pattern::Pattern;
use crate::registry::MatcherRegistry;
use crate::value::Value;

/// Start a session that observes the process-wide matcher registry.
pub fn begin_match(subject: impl Into<Value>) -> Session {
    Session::new(subject)
}

/// One registered arm of a session.
#[derive(Debug)]
pub struct MatchEntry {
    pattern: Pattern,
    action: Action,
}

impl MatchEntry {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn action(&self) -> &Action {
        &self.action
    }
}

/// A subject plus its ordered match entries.
#[derive(Debug)]
pub struct Session {
    subject: Value,
    entries: Vec<MatchEntry>,
    registry: MatcherRegistry,
}

impl Session {
    /// Create a session that observes the process-wide matcher registry.
    pub fn new(subject: impl Into<Value>) -> Self {
        Session::with_registry(subject, MatcherRegistry::global())
    }

    /// Create a session that observes `registry` instead of the global one.
    pub fn with_registry(subject: impl Into<Value>, registry: MatcherRegistry) -> Self {
        Session {
            subject: subject.into(),
            entries: Vec::new(),
            registry,
        }
    }

    /// Append an entry. Earlier entries take priority.
    #[must_use]
    pub fn when<M>(mut self, pattern: impl Into<Pattern>, action: impl IntoAction<M>) -> Self {
        self.entries.push(MatchEntry {
            pattern: pattern.into(),
            action: action.into_action(),
        });
        self
    }

    /// Append a catch-all entry, equivalent to `when(ANY, action)`.
    #[must_use]
    pub fn otherwise<M>(self, action: impl IntoAction<M>) -> Self {
        self.when(Pattern::Any, action)
    }

    pub fn subject(&self) -> &Value {
        &self.subject
    }

    pub fn entries(&self) -> &[MatchEntry] {
        &self.entries
    }

    /// Find the first matching entry and produce its result.
    ///
    /// A misplaced `HEAD` or `TAIL` in any entry reached before the winning
    /// one aborts resolution with an error.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(category = %self.subject.category(), entries = self.entries.len())
    )]
    pub fn resolve(&self) -> MatchResult<MatchOutcome> {
        let matcher = Matcher::new(self.registry.snapshot());

        for (index, entry) in self.entries.iter().enumerate() {
            tracing::trace!(index, pattern = %entry.pattern, "trying entry");
            let captures = match matcher.captures(&entry.pattern, &self.subject) {
                Ok(Some(captures)) => captures,
                Ok(None) => continue,
                Err(err) => {
                    tracing::debug!(index, %err, "malformed pattern");
                    return Err(err);
                }
            };

            let arity = entry.action.declared_arity();
            tracing::debug!(index, captures = captures.len(), arity, "entry matched");
            let result = entry.action.invoke(adapt_to_arity(captures, arity));
            return Ok(MatchOutcome::matched(result));
        }

        tracing::debug!("no entry matched");
        Ok(MatchOutcome::unmatched())
    }
}

/// Result of resolving a session.
///
/// An unmatched outcome never carries a result.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    result: Option<Value>,
}

impl MatchOutcome {
    fn matched(result: Value) -> Self {
        MatchOutcome {
            result: Some(result),
        }
    }

    fn unmatched() -> Self {
        MatchOutcome { result: None }
    }

    pub fn is_match(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<Value> {
        self.result
    }

    /// `(matched, result)`, with `Unit` as the result of a non-match.
    pub fn into_parts(self) -> (bool, Value) {
        match self.result {
            Some(result) => (true, result),
            None => (false, Value::Unit),
        }
    }
}
