//! Values stored in a tuple and the names used to key the named part.
//!
//! A [`Value`] is a small dynamically-typed scalar. Its concrete type is reported by
//! [`Value::ty`] as a [`ValueType`] from the lattice in [`crate::types`].
use std::{borrow::Borrow, sync::Arc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumTryAs};

use crate::types::{
    ValueType,
    primary::{FType, IType, PrimaryType},
};

/// Words of the literal syntax that read as values rather than names.
pub(crate) const KEYWORDS: [&str; 3] = ["true", "false", "nothing"];

/// Identifier keying an entry of the named part, e.g. `a` in `(1; a=2)`.
///
/// Names are cheap to clone. They display as `a`, or as the symbol `:a` with the
/// alternate flag (`{:#}`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Name(Arc<str>);

impl Name {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the name can be written bare in a tuple literal.
    ///
    /// The literal keywords `true`, `false` and `nothing` are not identifiers.
    pub fn is_identifier(&self) -> bool {
        if KEYWORDS.contains(&self.as_str()) {
            return false;
        }

        let mut chars = self.0.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl From<&Name> for Name {
    fn from(value: &Name) -> Self {
        value.clone()
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, ":{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A dynamically-typed value.
///
/// The alternate display (`{:#}`) suffixes `i8`, `i16` and `i32` values with their
/// width, so the literal form reads back with the same type.
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Nothing,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    /// A symbol, written `:name` in literals.
    Sym(Name),
}

macro_rules! value_from {
    ($typ:ty, $lbl:ident) => {
        impl From<$typ> for Value {
            fn from(value: $typ) -> Self {
                Value::$lbl(value)
            }
        }
    };
}

value_from! { bool, Bool }
value_from! { i8, I8 }
value_from! { i16, I16 }
value_from! { i32, I32 }
value_from! { i64, I64 }
value_from! { u8, U8 }
value_from! { u16, U16 }
value_from! { u32, U32 }
value_from! { u64, U64 }
value_from! { f32, F32 }
value_from! { f64, F64 }
value_from! { String, Str }
value_from! { Name, Sym }

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nothing
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl Value {
    /// Returns the concrete type of this value.
    pub fn ty(&self) -> ValueType {
        let primary = match self {
            Value::Nothing => PrimaryType::Nothing,
            Value::Bool(_) => PrimaryType::Bool,
            Value::I8(_) => IType::I8.into(),
            Value::I16(_) => IType::I16.into(),
            Value::I32(_) => IType::I32.into(),
            Value::I64(_) => IType::I64.into(),
            Value::U8(_) => IType::U8.into(),
            Value::U16(_) => IType::U16.into(),
            Value::U32(_) => IType::U32.into(),
            Value::U64(_) => IType::U64.into(),
            Value::F32(_) => FType::F32.into(),
            Value::F64(_) => FType::F64.into(),
            Value::Str(_) => PrimaryType::Str,
            Value::Sym(_) => PrimaryType::Sym,
        };
        ValueType::Primary(primary)
    }

    /// Widen any integer value to `i128`, or `None` for non-integers.
    ///
    /// `Bool` is an integer in the type lattice and converts to `0`/`1`.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Value::Bool(b) => Some(b as i128),
            Value::I8(v) => Some(v as i128),
            Value::I16(v) => Some(v as i128),
            Value::I32(v) => Some(v as i128),
            Value::I64(v) => Some(v as i128),
            Value::U8(v) => Some(v as i128),
            Value::U16(v) => Some(v as i128),
            Value::U32(v) => Some(v as i128),
            Value::U64(v) => Some(v as i128),
            _ => None,
        }
    }

    /// Convert any real value to `f64`, or `None` for non-numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::F32(v) => Some(v as f64),
            Value::F64(v) => Some(v),
            _ => self.as_i128().map(|v| v as f64),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Nothing => write!(f, "nothing"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::I8(v) if f.alternate() => write!(f, "{}i8", v),
            Value::I16(v) if f.alternate() => write!(f, "{}i16", v),
            Value::I32(v) if f.alternate() => write!(f, "{}i32", v),
            Value::I8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::I64(v) => write!(f, "{}", v),
            Value::U8(v) => write!(f, "0x{:02x}", v),
            Value::U16(v) => write!(f, "0x{:04x}", v),
            Value::U32(v) => write!(f, "0x{:08x}", v),
            Value::U64(v) => write!(f, "0x{:016x}", v),
            Value::F32(v) => write!(f, "{:?}f32", v),
            Value::F64(v) => write!(f, "{:?}", v),
            Value::Str(v) => write!(f, "{:?}", v),
            Value::Sym(name) => write!(f, "{:#}", name),
        }
    }
}
