//! Extension matcher registry.
//!
//! Extension matchers are caller-supplied predicates over
//! `(pattern, value)` that extend the built-in pattern vocabulary. They are
//! consulted, in registration order, before any built-in rule for every
//! test the matcher performs, nested tests included.
//!
//! A registry is an explicit shared handle. Sessions built with
//! [`begin_match`](crate::begin_match) observe the process-wide default
//! returned by [`MatcherRegistry::global`]; sessions built with
//! [`Session::with_registry`](crate::Session::with_registry) observe the
//! handle they are given.
//!
//! # Concurrency
//!
//! The list is append-only and copy-on-write behind a `parking_lot::RwLock`.
//! Readers take an [`ExtensionSnapshot`] (one `Arc` clone) and release the
//! lock before running any callback, so a callback may itself register a
//! matcher without deadlocking. A registration made while a resolution is
//! running may or may not be seen by that resolution.

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::pattern::Pattern;
use crate::value::Value;

/// A registered extension matcher.
pub type ExtensionMatcher = Arc<dyn Fn(&Pattern, &Value) -> bool + Send + Sync>;

/// Shared, append-only list of extension matchers.
///
/// Cloning the handle shares the underlying list.
#[derive(Clone)]
pub struct MatcherRegistry(Arc<RwLock<Arc<[ExtensionMatcher]>>>);

static GLOBAL: OnceLock<MatcherRegistry> = OnceLock::new();

impl MatcherRegistry {
    /// Create an empty registry, isolated from the process-wide one.
    pub fn new() -> Self {
        MatcherRegistry(Arc::new(RwLock::new(Arc::from(Vec::new()))))
    }

    /// Handle to the process-wide default registry.
    pub fn global() -> Self {
        GLOBAL.get_or_init(MatcherRegistry::new).clone()
    }

    /// Append a matcher.
    ///
    /// There is no removal and no de-duplication; registering the same
    /// matcher twice runs it twice.
    pub fn register<F>(&self, matcher: F)
    where
        F: Fn(&Pattern, &Value) -> bool + Send + Sync + 'static,
    {
        let mut list = self.0.write();
        let mut next: Vec<ExtensionMatcher> = list.iter().cloned().collect();
        next.push(Arc::new(matcher));
        *list = Arc::from(next);
        tracing::debug!(registered = list.len(), "extension matcher registered");
    }

    /// Consistent view of the matchers registered so far.
    pub fn snapshot(&self) -> ExtensionSnapshot {
        ExtensionSnapshot(Arc::clone(&self.0.read()))
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatcherRegistry({} matchers)", self.len())
    }
}

/// Register a matcher in the process-wide default registry.
pub fn register_matcher<F>(matcher: F)
where
    F: Fn(&Pattern, &Value) -> bool + Send + Sync + 'static,
{
    MatcherRegistry::global().register(matcher);
}

/// Frozen list of extension matchers used for one resolution.
#[derive(Clone)]
pub struct ExtensionSnapshot(Arc<[ExtensionMatcher]>);

impl ExtensionSnapshot {
    /// A snapshot with no matchers.
    pub fn empty() -> Self {
        ExtensionSnapshot(Arc::from(Vec::new()))
    }

    /// Run the matchers in registration order; the first `true` wins.
    pub fn resolve(&self, pattern: &Pattern, value: &Value) -> bool {
        self.0.iter().any(|matcher| matcher(pattern, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ExtensionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtensionSnapshot({} matchers)", self.0.len())
    }
}
