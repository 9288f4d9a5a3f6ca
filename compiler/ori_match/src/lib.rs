//! Ori Match - Structural pattern matching over dynamic runtime values.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `Scalar`, `RecordValue`, etc.)
//! - Patterns with wildcards (`ANY`, `HEAD`, `TAIL`), alternative sets,
//!   regular expressions and record shape predicates
//! - A structural matcher that collects captures
//! - An extension-matcher registry shared across threads
//! - Match sessions that dispatch to the first matching action
//!
//! # Sessions
//!
//! ```text
//! let outcome = begin_match(vec![1, 2, 3])
//!     .when(seq![HEAD, 3], |head: Capture| head.into_value())
//!     .when(ANY, "something else")
//!     .resolve()?;
//! assert_eq!(outcome.into_result(), Some(Value::from(vec![1, 2])));
//! ```
//!
//! Entries are tried in order and the first match wins. Captures are handed
//! to the action in left-to-right, depth-first order, fitted to the action's
//! declared arity.
//!
//! # Extension Matchers
//!
//! Predicates registered with [`register_matcher`] are consulted before the
//! built-in rules at every level of the match. Sessions created with
//! [`begin_match`] observe the global registry; [`Session::with_registry`]
//! takes an explicit one.

mod action;
mod capture;
mod classify;
mod errors;
mod matcher;
mod pattern;
mod registry;
mod session;
mod value;

use std::sync::Once;

pub use action::{Action, IntoAction, LiteralAction};
pub use capture::{adapt_to_arity, Capture};
pub use classify::{classify, classify_pattern, Category};
pub use errors::{MatchError, MatchResult};
pub use matcher::Matcher;
pub use pattern::{one_of, Pattern, ShapePredicate, ANY, HEAD, TAIL};
pub use registry::{register_matcher, ExtensionMatcher, ExtensionSnapshot, MatcherRegistry};
pub use session::{begin_match, MatchEntry, MatchOutcome, Session};
pub use value::{Heap, OpaqueValue, RecordShape, RecordValue, Scalar, Value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ori_match=debug` or `RUST_LOG=ori_match=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
