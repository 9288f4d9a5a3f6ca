//! Fixed-width scalar primitives.
//!
//! A `Scalar` remembers the width it was declared with. Matching compares
//! type and value together, so `Scalar::I32(42)` and `Scalar::I64(42)` are
//! different scalars even though both print as `42`.
//!
//! Floats compare by bit pattern rather than IEEE equality: a NaN equals
//! itself, and `0.0` and `-0.0` are different scalars.

use std::fmt;

/// A numeric, boolean or character primitive tagged with its declared type.
#[derive(Copy, Clone, Debug)]
pub enum Scalar {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Scalar {
    /// Name of the declared type, e.g. `"i32"`.
    pub fn type_name(self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Char(_) => "char",
            Scalar::I8(_) => "i8",
            Scalar::I16(_) => "i16",
            Scalar::I32(_) => "i32",
            Scalar::I64(_) => "i64",
            Scalar::Isize(_) => "isize",
            Scalar::U8(_) => "u8",
            Scalar::U16(_) => "u16",
            Scalar::U32(_) => "u32",
            Scalar::U64(_) => "u64",
            Scalar::Usize(_) => "usize",
            Scalar::F32(_) => "f32",
            Scalar::F64(_) => "f64",
        }
    }

    /// Widen any signed or unsigned integer to `i128`.
    ///
    /// Returns `None` for booleans, characters and floats. Matching never
    /// widens; this is for extension matchers that want width-agnostic
    /// numbers.
    pub fn as_i128(self) -> Option<i128> {
        match self {
            Scalar::I8(n) => Some(n.into()),
            Scalar::I16(n) => Some(n.into()),
            Scalar::I32(n) => Some(n.into()),
            Scalar::I64(n) => Some(n.into()),
            Scalar::Isize(n) => i128::try_from(n).ok(),
            Scalar::U8(n) => Some(n.into()),
            Scalar::U16(n) => Some(n.into()),
            Scalar::U32(n) => Some(n.into()),
            Scalar::U64(n) => Some(n.into()),
            Scalar::Usize(n) => i128::try_from(n).ok(),
            Scalar::Bool(_) | Scalar::Char(_) | Scalar::F32(_) | Scalar::F64(_) => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Char(a), Scalar::Char(b)) => a == b,
            (Scalar::I8(a), Scalar::I8(b)) => a == b,
            (Scalar::I16(a), Scalar::I16(b)) => a == b,
            (Scalar::I32(a), Scalar::I32(b)) => a == b,
            (Scalar::I64(a), Scalar::I64(b)) => a == b,
            (Scalar::Isize(a), Scalar::Isize(b)) => a == b,
            (Scalar::U8(a), Scalar::U8(b)) => a == b,
            (Scalar::U16(a), Scalar::U16(b)) => a == b,
            (Scalar::U32(a), Scalar::U32(b)) => a == b,
            (Scalar::U64(a), Scalar::U64(b)) => a == b,
            (Scalar::Usize(a), Scalar::Usize(b)) => a == b,
            (Scalar::F32(a), Scalar::F32(b)) => a.to_bits() == b.to_bits(),
            (Scalar::F64(a), Scalar::F64(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Char(c) => write!(f, "'{c}'"),
            Scalar::I8(n) => write!(f, "{n}"),
            Scalar::I16(n) => write!(f, "{n}"),
            Scalar::I32(n) => write!(f, "{n}"),
            Scalar::I64(n) => write!(f, "{n}"),
            Scalar::Isize(n) => write!(f, "{n}"),
            Scalar::U8(n) => write!(f, "{n}"),
            Scalar::U16(n) => write!(f, "{n}"),
            Scalar::U32(n) => write!(f, "{n}"),
            Scalar::U64(n) => write!(f, "{n}"),
            Scalar::Usize(n) => write!(f, "{n}"),
            Scalar::F32(n) => write!(f, "{n}"),
            Scalar::F64(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(v: $ty) -> Self {
                    Scalar::$variant(v)
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}
