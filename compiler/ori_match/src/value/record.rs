//! Composite value types: records and opaque payloads.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::{Heap, Value};

// RecordShape

/// Declared shape of a record type: its name and ordered field names.
///
/// Shapes are compared nominally and structurally at once. Two record types
/// with identical fields but different names are different shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordShape {
    name: String,
    fields: Vec<String>,
}

impl RecordShape {
    /// Create a shape from a type name and its field names in declaration order.
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RecordShape {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Index of a field by name.
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// Whether a value of shape `other` can be passed where `self` is expected.
    ///
    /// Records have no subtyping, so this is shape equality.
    pub fn accepts(&self, other: &RecordShape) -> bool {
        self == other
    }
}

// RecordValue

/// A record instance: a shared shape plus field values in shape order.
#[derive(Clone)]
pub struct RecordValue {
    pub(crate) shape: Heap<RecordShape>,
    pub(crate) fields: Heap<Vec<Value>>,
}

impl RecordValue {
    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    /// Field values in shape order.
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Look up a field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        let index = self.shape.field_index(field)?;
        self.fields.get(index)
    }
}

impl PartialEq for RecordValue {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.fields == other.fields
    }
}

impl fmt::Debug for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.shape.name());
        for (name, value) in self.shape.fields().iter().zip(self.fields.iter()) {
            s.field(name, value);
        }
        s.finish()
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.shape.name())?;
        for (i, (name, value)) in self.shape.fields().iter().zip(self.fields.iter()).enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {name}: {value}")?;
        }
        write!(f, " }}")
    }
}

// OpaqueValue

/// A host value the built-in matchers cannot look inside.
///
/// Only extension matchers observe opaque payloads, typically by calling
/// [`OpaqueValue::downcast_ref`].
#[derive(Clone)]
pub struct OpaqueValue {
    type_name: &'static str,
    payload: Heap<dyn Any + Send + Sync>,
}

impl OpaqueValue {
    pub(crate) fn new<T: Any + Send + Sync>(payload: T) -> Self {
        let payload: Arc<dyn Any + Send + Sync> = Arc::new(payload);
        OpaqueValue {
            type_name: std::any::type_name::<T>(),
            payload: Heap::from_arc(payload),
        }
    }

    /// Rust type name of the payload.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Whether both handles point at the same payload.
    pub fn same_payload(&self, other: &OpaqueValue) -> bool {
        self.payload.ptr_eq(&other.payload)
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({})", self.type_name)
    }
}
