//! Structural classification of values and patterns.
//!
//! The dispatcher routes every (pattern, value) test on the pair of
//! categories. A pattern whose category differs from the value's is a
//! non-match, never an error.

use std::fmt;

use crate::pattern::Pattern;
use crate::value::Value;

/// Structural category of a value or pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Fixed-width numeric, boolean or character primitive.
    Scalar,
    /// UTF-8 text.
    Text,
    /// Ordered collection, fixed or variable length.
    Sequence,
    /// Key/value mapping.
    Mapping,
    /// Structured record with a declared shape.
    Record,
    /// Anything the built-in rules cannot look inside.
    Opaque,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Scalar => "scalar",
            Category::Text => "text",
            Category::Sequence => "sequence",
            Category::Mapping => "mapping",
            Category::Record => "record",
            Category::Opaque => "opaque",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a runtime value.
pub fn classify(value: &Value) -> Category {
    match value {
        Value::Scalar(_) => Category::Scalar,
        Value::Str(_) => Category::Text,
        Value::List(_) | Value::Array(_) => Category::Sequence,
        Value::Map(_) => Category::Mapping,
        Value::Record(_) => Category::Record,
        Value::Unit | Value::Opaque(_) => Category::Opaque,
    }
}

/// Classify a pattern by the category of value it can match.
///
/// Returns `None` for markers and alternative sets, which are not tied to
/// one category.
pub fn classify_pattern(pattern: &Pattern) -> Option<Category> {
    match pattern {
        Pattern::Lit(value) => Some(classify(value)),
        Pattern::Seq(_) => Some(Category::Sequence),
        Pattern::Map(_) => Some(Category::Mapping),
        Pattern::Regex(_) => Some(Category::Text),
        Pattern::Shape(_) => Some(Category::Record),
        Pattern::Any | Pattern::Head | Pattern::Tail | Pattern::OneOf(_) => None,
    }
}
