//! Captured sub-values handed to actions.

use std::fmt;

use crate::value::{Heap, Value};

/// One piece of the subject extracted by a wildcard.
#[derive(Clone, Debug, PartialEq)]
pub enum Capture {
    /// Filler for an action parameter that no wildcard supplied.
    Empty,
    /// A single value captured by `ANY`.
    Value(Value),
    /// A contiguous run captured by `HEAD` or `TAIL`. May be empty.
    Slice(Heap<Vec<Value>>),
}

impl Capture {
    pub(crate) fn slice(items: &[Value]) -> Self {
        Capture::Slice(Heap::new(items.to_vec()))
    }

    pub fn is_empty_capture(&self) -> bool {
        matches!(self, Capture::Empty)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Capture::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Capture::Slice(items) => Some(items),
            _ => None,
        }
    }

    /// Convert into a plain value. Slices become lists, `Empty` becomes `Unit`.
    pub fn into_value(self) -> Value {
        match self {
            Capture::Empty => Value::Unit,
            Capture::Value(v) => v,
            Capture::Slice(items) => Value::List(items),
        }
    }
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capture::Empty => write!(f, "<empty>"),
            Capture::Value(v) => write!(f, "{v}"),
            Capture::Slice(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Fit a capture list to an action's declared arity.
///
/// Surplus trailing captures are dropped; missing trailing arguments are
/// filled with [`Capture::Empty`].
pub fn adapt_to_arity(mut captures: Vec<Capture>, arity: usize) -> Vec<Capture> {
    captures.resize(arity, Capture::Empty);
    captures
}
