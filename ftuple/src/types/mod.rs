//! Types module
//!
//! This module contains the small type lattice used to describe the values a
//! [`FrankenTuple`](crate::FrankenTuple) can hold. It is built on two layers:
//!
//! - Primary types: the concrete types of actual values (see `primary.rs`).
//! - Abstract types: named supertypes grouping primary types (e.g. `integer`).
//!
//! Both are wrapped by [`ValueType`], which adds a top (`any`) and a bottom
//! (`never`) element. Every type except `any` and `never` has exactly one
//! immediate supertype, so the lattice is a tree with `never` glued under every
//! leaf:
//!
//! ```text
//! any
//! ├── number ── real ─┬─ integer ─┬─ signed ── i8 i16 i32 i64
//! │                   │           ├─ unsigned ── u8 u16 u32 u64
//! │                   │           └─ bool
//! │                   └─ float ── f32 f64
//! ├── string ── str
//! ├── sym
//! └── nothing
//! ```
//!
//! [`ValueType::join`] computes the narrowest common supertype of two types and
//! [`ValueType::is_subtype`] checks the partial order. Signature matching relies on
//! the latter to accept a value for a parameter declared with an abstract type.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::EnumIs;

use crate::types::primary::{FType, IType, PrimaryType};
pub mod primary;

/// Abstract types are never the type of a value; they only group other types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AbstractType {
    Signed,
    Unsigned,
    Integer,
    Float,
    Real,
    Number,
    String,
}

impl std::fmt::Display for AbstractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AbstractType::Signed => "signed",
            AbstractType::Unsigned => "unsigned",
            AbstractType::Integer => "integer",
            AbstractType::Float => "float",
            AbstractType::Real => "real",
            AbstractType::Number => "number",
            AbstractType::String => "string",
        };
        write!(f, "{}", s)
    }
}

/// A sum-type representing any point of the type lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueType {
    /// The bottom type. No value has this type; it is the element type of an
    /// empty tuple and a subtype of every other type.
    Never,

    /// Concrete types, see [`PrimaryType`].
    Primary(PrimaryType),

    /// Abstract groupings, see [`AbstractType`].
    Abstract(AbstractType),

    /// The top type. Every type is a subtype of `any`.
    Any,
}

impl<S: Into<PrimaryType>> From<S> for ValueType {
    fn from(value: S) -> Self {
        ValueType::Primary(value.into())
    }
}

impl From<AbstractType> for ValueType {
    fn from(value: AbstractType) -> Self {
        ValueType::Abstract(value)
    }
}

impl ValueType {
    pub const NOTHING: Self = Self::Primary(PrimaryType::Nothing);
    pub const BOOL: Self = Self::Primary(PrimaryType::Bool);
    pub const I8: Self = Self::Primary(PrimaryType::Int(IType::I8));
    pub const I16: Self = Self::Primary(PrimaryType::Int(IType::I16));
    pub const I32: Self = Self::Primary(PrimaryType::Int(IType::I32));
    pub const I64: Self = Self::Primary(PrimaryType::Int(IType::I64));
    pub const U8: Self = Self::Primary(PrimaryType::Int(IType::U8));
    pub const U16: Self = Self::Primary(PrimaryType::Int(IType::U16));
    pub const U32: Self = Self::Primary(PrimaryType::Int(IType::U32));
    pub const U64: Self = Self::Primary(PrimaryType::Int(IType::U64));
    pub const F32: Self = Self::Primary(PrimaryType::Float(FType::F32));
    pub const F64: Self = Self::Primary(PrimaryType::Float(FType::F64));
    pub const STR: Self = Self::Primary(PrimaryType::Str);
    pub const SYM: Self = Self::Primary(PrimaryType::Sym);
    pub const SIGNED: Self = Self::Abstract(AbstractType::Signed);
    pub const UNSIGNED: Self = Self::Abstract(AbstractType::Unsigned);
    pub const INTEGER: Self = Self::Abstract(AbstractType::Integer);
    pub const FLOAT: Self = Self::Abstract(AbstractType::Float);
    pub const REAL: Self = Self::Abstract(AbstractType::Real);
    pub const NUMBER: Self = Self::Abstract(AbstractType::Number);
    pub const STRING: Self = Self::Abstract(AbstractType::String);

    /// Returns the immediate supertype of `self`.
    ///
    /// `any` has no supertype. `never` has no *unique* immediate supertype (it
    /// sits under every leaf), so `None` is returned for it as well.
    pub const fn supertype(&self) -> Option<ValueType> {
        use AbstractType as A;
        match self {
            ValueType::Never | ValueType::Any => None,
            ValueType::Primary(primary) => Some(match primary {
                PrimaryType::Nothing | PrimaryType::Sym => ValueType::Any,
                PrimaryType::Bool => ValueType::Abstract(A::Integer),
                PrimaryType::Int(itype) if itype.is_signed() => ValueType::Abstract(A::Signed),
                PrimaryType::Int(_) => ValueType::Abstract(A::Unsigned),
                PrimaryType::Float(_) => ValueType::Abstract(A::Float),
                PrimaryType::Str => ValueType::Abstract(A::String),
            }),
            ValueType::Abstract(abstract_type) => Some(match abstract_type {
                A::Signed | A::Unsigned => ValueType::Abstract(A::Integer),
                A::Integer | A::Float => ValueType::Abstract(A::Real),
                A::Real => ValueType::Abstract(A::Number),
                A::Number | A::String => ValueType::Any,
            }),
        }
    }

    /// Iterate over `self` followed by all of its supertypes, up to `any`.
    ///
    /// For `never`, the iterator yields `never` and then `any`.
    pub fn ancestors(&self) -> impl Iterator<Item = ValueType> {
        let start = *self;
        std::iter::successors(Some(start), move |ty| match ty {
            ValueType::Never => Some(ValueType::Any),
            _ => ty.supertype(),
        })
    }

    /// Returns `true` if `self` is a subtype of (or equal to) `other`.
    ///
    /// Example:
    /// ```rust
    /// # use ftuple::types::ValueType;
    /// assert!(ValueType::U8.is_subtype(&ValueType::INTEGER));
    /// assert!(ValueType::BOOL.is_subtype(&ValueType::REAL));
    /// assert!(!ValueType::F64.is_subtype(&ValueType::INTEGER));
    /// assert!(ValueType::Never.is_subtype(&ValueType::STR));
    /// ```
    pub fn is_subtype(&self, other: &ValueType) -> bool {
        match (self, other) {
            (ValueType::Never, _) | (_, ValueType::Any) => true,
            _ => self.ancestors().any(|ty| ty == *other),
        }
    }

    /// Returns `true` if some value can have exactly this type.
    pub fn is_concrete(&self) -> bool {
        self.is_primary()
    }

    /// Compute the narrowest common supertype of `self` and `other`.
    ///
    /// `never` is the identity element of the join.
    ///
    /// Example:
    /// ```rust
    /// # use ftuple::types::ValueType;
    /// assert_eq!(ValueType::I64.join(&ValueType::I64), ValueType::I64);
    /// assert_eq!(ValueType::U8.join(&ValueType::I64), ValueType::INTEGER);
    /// assert_eq!(ValueType::F64.join(&ValueType::U8), ValueType::REAL);
    /// assert_eq!(ValueType::STR.join(&ValueType::I32), ValueType::Any);
    /// ```
    pub fn join(&self, other: &ValueType) -> ValueType {
        if other.is_subtype(self) {
            return *self;
        }
        if self.is_subtype(other) {
            return *other;
        }

        self.ancestors()
            .find(|ancestor| other.is_subtype(ancestor))
            .unwrap_or(ValueType::Any)
    }

    /// Join every type yielded by `types`, starting from `never`.
    pub fn join_all<I>(types: I) -> ValueType
    where
        I: IntoIterator<Item = ValueType>,
    {
        types
            .into_iter()
            .fold(ValueType::Never, |acc, ty| acc.join(&ty))
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Never => write!(f, "never"),
            ValueType::Primary(primary_type) => write!(f, "{}", primary_type),
            ValueType::Abstract(abstract_type) => write!(f, "{}", abstract_type),
            ValueType::Any => write!(f, "any"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supertype_chain_reaches_any() {
        let chain: Vec<_> = ValueType::I32.ancestors().collect();
        assert_eq!(
            chain,
            vec![
                ValueType::I32,
                ValueType::SIGNED,
                ValueType::INTEGER,
                ValueType::REAL,
                ValueType::NUMBER,
                ValueType::Any,
            ]
        );
        assert_eq!(ValueType::Any.supertype(), None);
        assert_eq!(ValueType::Never.supertype(), None);
    }

    #[test]
    fn join_is_commutative_on_samples() {
        let samples = [
            ValueType::Never,
            ValueType::NOTHING,
            ValueType::BOOL,
            ValueType::I8,
            ValueType::I64,
            ValueType::U16,
            ValueType::F32,
            ValueType::F64,
            ValueType::STR,
            ValueType::SYM,
            ValueType::SIGNED,
            ValueType::REAL,
            ValueType::Any,
        ];
        for a in samples {
            for b in samples {
                let j = a.join(&b);
                assert_eq!(j, b.join(&a), "join({a}, {b})");
                assert!(a.is_subtype(&j));
                assert!(b.is_subtype(&j));
            }
        }
    }

    #[test]
    fn join_of_mixed_numbers() {
        assert_eq!(ValueType::I8.join(&ValueType::I64), ValueType::SIGNED);
        assert_eq!(ValueType::BOOL.join(&ValueType::U8), ValueType::INTEGER);
        assert_eq!(ValueType::F32.join(&ValueType::F64), ValueType::FLOAT);
        assert_eq!(ValueType::F32.join(&ValueType::I8), ValueType::REAL);
        assert_eq!(ValueType::NOTHING.join(&ValueType::I8), ValueType::Any);
        assert_eq!(ValueType::Never.join(&ValueType::SYM), ValueType::SYM);
    }

    #[test]
    fn join_all_of_nothing_is_never() {
        assert_eq!(ValueType::join_all(Vec::<ValueType>::new()), ValueType::Never);
        assert_eq!(
            ValueType::join_all([ValueType::U8, ValueType::I64]),
            ValueType::INTEGER
        );
    }
}
