//! Runtime values handed to the matcher.
//!
//! # Closed Value Union
//!
//! Every subject is ingested once into a [`Value`]. The matchers then work by
//! exhaustive case analysis over this union; nothing inspects host types at
//! match time.
//!
//! # Heap Enforcement
//!
//! All heap payloads go through `Value::` factory methods. The `Heap<T>`
//! wrapper has a crate-private constructor, so payloads are immutable and
//! cheaply shareable once built.
//!
//! ```text
//! let s = Value::string("hello");
//! let xs = Value::list(vec![Value::from(1), Value::from(2)]);
//! let m = Value::map([(Value::string("k"), Value::from(true))]);
//! ```

mod heap;
mod record;
mod scalar;

use std::any::Any;
use std::fmt;

pub use heap::Heap;
pub use record::{OpaqueValue, RecordShape, RecordValue};
pub use scalar::Scalar;

use crate::classify::{classify, Category};

/// Runtime value matched against patterns.
#[derive(Clone)]
pub enum Value {
    /// The empty value. Also what an unmatched session reports.
    Unit,
    /// Fixed-width numeric, boolean or character primitive.
    Scalar(Scalar),
    /// UTF-8 text.
    Str(Heap<String>),
    /// Variable-length ordered collection.
    List(Heap<Vec<Value>>),
    /// Fixed-length ordered collection.
    Array(Heap<Vec<Value>>),
    /// Key/value mapping with unique keys, kept in insertion order.
    Map(Heap<Vec<(Value, Value)>>),
    /// Structured record with a declared shape.
    Record(RecordValue),
    /// Host payload only extension matchers can inspect.
    Opaque(OpaqueValue),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn scalar(s: impl Into<Scalar>) -> Self {
        Value::Scalar(s.into())
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a variable-length sequence.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a fixed-length sequence.
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// Create a mapping.
    ///
    /// A key that appears more than once keeps its first position and its
    /// last value, so the result always has unique keys.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut unique: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            match unique.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => unique.push((key, value)),
            }
        }
        Value::Map(Heap::new(unique))
    }

    /// Create a record of the given shape.
    ///
    /// Fields are positional, in the order the shape declares them. Missing
    /// trailing fields become `Unit`; surplus values are dropped.
    pub fn record(shape: RecordShape, mut fields: Vec<Value>) -> Self {
        fields.resize(shape.fields().len(), Value::Unit);
        Value::Record(RecordValue {
            shape: Heap::new(shape),
            fields: Heap::new(fields),
        })
    }

    /// Wrap a host value the built-in matchers treat as opaque.
    pub fn opaque<T: Any + Send + Sync>(payload: T) -> Self {
        Value::Opaque(OpaqueValue::new(payload))
    }
}

// Value Methods

impl Value {
    /// Structural category of this value.
    #[inline]
    pub fn category(&self) -> Category {
        classify(self)
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Value::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of a list or an array.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&OpaqueValue> {
        match self {
            Value::Opaque(o) => Some(o),
            _ => None,
        }
    }

    /// Look up a mapping entry by key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.as_map()?
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Get the type name for log and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Scalar(s) => s.type_name(),
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Record(_) => "record",
            Value::Opaque(o) => o.type_name(),
        }
    }
}

// Trait Implementations

impl PartialEq for Value {
    /// Structural equality with exact scalar types.
    ///
    /// Lists and arrays are distinct types. Mappings compare without regard
    /// to entry order. Opaque payloads are only equal to themselves.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Scalar(a), Value::Scalar(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| {
                        b.iter().any(|(bk, bv)| k == bk && v == bv)
                    })
            }
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a.same_payload(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "Unit"),
            Value::Scalar(s) => write!(f, "{s:?}"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Map(entries) => write!(f, "Map({:?})", &**entries),
            Value::Record(r) => write!(f, "Record({r:?})"),
            Value::Opaque(o) => write!(f, "{o:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) | Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Record(r) => write!(f, "{r}"),
            Value::Opaque(o) => write!(f, "<opaque {}>", o.type_name()),
        }
    }
}

// Conversions

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Unit
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<RecordValue> for Value {
    fn from(r: RecordValue) -> Self {
        Value::Record(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::array(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! value_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

value_from_scalar!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
