//! Patterns: shapes tested against a subject value.
//!
//! A pattern is a literal, one of the markers [`ANY`], [`HEAD`] and [`TAIL`],
//! an alternative set built with [`one_of`], a sequence or mapping of nested
//! patterns, a regular expression, or a record shape predicate.
//!
//! Heterogeneous sequences and mappings are easiest to write with the
//! [`seq!`](crate::seq) and [`mapping!`](crate::mapping) macros:
//!
//! ```text
//! seq![HEAD, 2, 3]
//! seq![1, one_of([1, 2, 3]), TAIL]
//! mapping! { "adg" => ANY, "rsc" => 3711 }
//! ```

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::errors::{MatchError, MatchResult};
use crate::value::{Heap, RecordShape, RecordValue, Value};

/// Matches exactly one value and captures it.
pub const ANY: Pattern = Pattern::Any;

/// Matches a possibly-empty prefix of a sequence and captures it.
///
/// Only legal as the first element of a sequence pattern.
pub const HEAD: Pattern = Pattern::Head;

/// Matches a possibly-empty suffix of a sequence and captures it.
///
/// Only legal as the last element of a sequence pattern.
pub const TAIL: Pattern = Pattern::Tail;

/// A shape to test a value against.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches a value equal to this one (exact scalar types).
    Lit(Value),
    /// Wildcard for one value.
    Any,
    /// Open prefix of a sequence.
    Head,
    /// Open suffix of a sequence.
    Tail,
    /// Matches if any alternative matches. Captures nothing.
    OneOf(Heap<Vec<Pattern>>),
    /// Positional sequence pattern.
    Seq(Heap<Vec<Pattern>>),
    /// Unordered mapping pattern; keys compare by value equality.
    Map(Heap<Vec<(Value, Pattern)>>),
    /// Regular expression searched in text values.
    Regex(Heap<Regex>),
    /// Record type-shape predicate.
    Shape(ShapePredicate),
}

/// Build an alternative-set pattern.
///
/// `one_of([a, b, c])` matches a value iff at least one of `a`, `b`, `c`
/// would match it on its own.
pub fn one_of<I, P>(alternatives: I) -> Pattern
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    Pattern::OneOf(Heap::new(
        alternatives.into_iter().map(Into::into).collect(),
    ))
}

impl Pattern {
    /// Build a sequence pattern.
    pub fn seq<I, P>(items: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        Pattern::Seq(Heap::new(items.into_iter().map(Into::into).collect()))
    }

    /// Build a mapping pattern.
    ///
    /// A repeated key keeps its first position and its last pattern.
    pub fn map<I, K, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<Value>,
        P: Into<Pattern>,
    {
        let mut unique: Vec<(Value, Pattern)> = Vec::new();
        for (key, pattern) in entries {
            let (key, pattern) = (key.into(), pattern.into());
            match unique.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = pattern,
                None => unique.push((key, pattern)),
            }
        }
        Pattern::Map(Heap::new(unique))
    }

    /// Compile a regular-expression pattern.
    ///
    /// The expression is searched for anywhere in the text; anchor it with
    /// `^`/`$` to require a full match.
    pub fn regex(expr: &str) -> MatchResult<Self> {
        let compiled = Regex::new(expr).map_err(|source| MatchError::InvalidRegex { source })?;
        Ok(Pattern::from(compiled))
    }

    /// Match any record whose shape is exactly `shape`.
    pub fn shape(shape: RecordShape) -> Self {
        Pattern::Shape(ShapePredicate {
            shape: Heap::new(shape),
            guard: None,
        })
    }

    /// Match records of shape `shape` for which `guard` holds.
    pub fn shape_where<F>(shape: RecordShape, guard: F) -> Self
    where
        F: Fn(&RecordValue) -> bool + Send + Sync + 'static,
    {
        Pattern::Shape(ShapePredicate {
            shape: Heap::new(shape),
            guard: Some(Arc::new(guard)),
        })
    }

    /// Turn a value into the pattern that matches it structurally.
    ///
    /// Lists and arrays become sequence patterns and mappings become mapping
    /// patterns, element by element. Everything else is a literal.
    pub fn lift(value: Value) -> Self {
        match value {
            Value::List(items) | Value::Array(items) => {
                Pattern::seq(items.iter().cloned().map(Pattern::lift))
            }
            Value::Map(entries) => Pattern::map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Pattern::lift(v.clone()))),
            ),
            other => Pattern::Lit(other),
        }
    }

    /// Check `HEAD` and `TAIL` placement throughout the pattern tree.
    ///
    /// Every sequence pattern, however deeply nested, may hold `HEAD` only
    /// as its first element and `TAIL` only as its last. The check does not
    /// look at any subject, so a malformed pattern is reported even when
    /// the subject could never reach the offending sequence.
    pub fn validate(&self) -> MatchResult<()> {
        match self {
            Pattern::Seq(items) => {
                check_marker_placement(items)?;
                items.iter().try_for_each(Pattern::validate)
            }
            Pattern::Map(entries) => entries.iter().try_for_each(|(_, p)| p.validate()),
            Pattern::OneOf(alternatives) => alternatives.iter().try_for_each(Pattern::validate),
            Pattern::Lit(_)
            | Pattern::Any
            | Pattern::Head
            | Pattern::Tail
            | Pattern::Regex(_)
            | Pattern::Shape(_) => Ok(()),
        }
    }

    /// Whether this is `ANY`, `HEAD` or `TAIL`.
    pub fn is_marker(&self) -> bool {
        matches!(self, Pattern::Any | Pattern::Head | Pattern::Tail)
    }

    /// The literal value, for literal patterns.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Pattern::Lit(v) => Some(v),
            _ => None,
        }
    }
}

fn check_marker_placement(items: &[Pattern]) -> MatchResult<()> {
    let last = items.len().saturating_sub(1);
    for (position, item) in items.iter().enumerate() {
        match item {
            Pattern::Head if position != 0 => {
                return Err(MatchError::HeadNotFirst { position });
            }
            Pattern::Tail if position != last => {
                return Err(MatchError::TailNotLast {
                    position,
                    len: items.len(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}

// ShapePredicate

type Guard = Arc<dyn Fn(&RecordValue) -> bool + Send + Sync>;

/// Unary predicate over records of one declared shape.
#[derive(Clone)]
pub struct ShapePredicate {
    shape: Heap<RecordShape>,
    guard: Option<Guard>,
}

impl ShapePredicate {
    /// The shape this predicate accepts.
    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    /// Run the predicate. Records of any other shape never satisfy it.
    pub fn test(&self, record: &RecordValue) -> bool {
        self.shape.accepts(record.shape()) && self.guard.as_ref().map_or(true, |g| g(record))
    }
}

impl fmt::Debug for ShapePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapePredicate")
            .field("shape", &*self.shape)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

// Display

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Lit(v) => write!(f, "{v}"),
            Pattern::Any => write!(f, "ANY"),
            Pattern::Head => write!(f, "HEAD"),
            Pattern::Tail => write!(f, "TAIL"),
            Pattern::OneOf(alts) => {
                write!(f, "OneOf(")?;
                write_joined(f, alts.iter())?;
                write!(f, ")")
            }
            Pattern::Seq(items) => {
                write!(f, "[")?;
                write_joined(f, items.iter())?;
                write!(f, "]")
            }
            Pattern::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, p)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {p}")?;
                }
                write!(f, "}}")
            }
            Pattern::Regex(re) => write!(f, "/{}/", re.as_str()),
            Pattern::Shape(pred) => {
                if pred.guard.is_some() {
                    write!(f, "<shape {} if ..>", pred.shape.name())
                } else {
                    write!(f, "<shape {}>", pred.shape.name())
                }
            }
        }
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Pattern>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

// Conversions

impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        Pattern::lift(value)
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::Regex(Heap::new(re))
    }
}

impl From<RecordValue> for Pattern {
    fn from(record: RecordValue) -> Self {
        Pattern::Lit(Value::Record(record))
    }
}

impl From<ShapePredicate> for Pattern {
    fn from(pred: ShapePredicate) -> Self {
        Pattern::Shape(pred)
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::Lit(Value::string(s))
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::Lit(Value::string(s))
    }
}

impl<T: Into<Pattern>> From<Vec<T>> for Pattern {
    fn from(items: Vec<T>) -> Self {
        Pattern::seq(items)
    }
}

impl<T: Into<Pattern>, const N: usize> From<[T; N]> for Pattern {
    fn from(items: [T; N]) -> Self {
        Pattern::seq(items)
    }
}

macro_rules! pattern_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Pattern {
                #[inline]
                fn from(v: $ty) -> Self {
                    Pattern::Lit(Value::from(v))
                }
            }
        )*
    };
}

pattern_from_scalar!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Build a sequence pattern from heterogeneous elements.
///
/// Each element is converted with `Pattern::from`, so markers, literals and
/// nested patterns can be mixed: `seq![HEAD, 2, 3]`.
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Pattern::seq(::std::vec::Vec::<$crate::Pattern>::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Pattern::seq(::std::vec![$($crate::Pattern::from($item)),+])
    };
}

/// Build a mapping pattern: `mapping! { "k" => ANY, "n" => 1 }`.
#[macro_export]
macro_rules! mapping {
    ($($key:expr => $pattern:expr),* $(,)?) => {
        $crate::Pattern::map(::std::vec::Vec::<($crate::Value, $crate::Pattern)>::from([
            $(($crate::Value::from($key), $crate::Pattern::from($pattern))),*
        ]))
    };
}
