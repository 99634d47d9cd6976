#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::EnumIs;

/// Represents an integer type with a specific bit width and signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IType {
    num_bits: u8,
    signed: bool,
}

impl IType {
    pub const I8: Self = Self::signed(8);
    pub const I16: Self = Self::signed(16);
    pub const I32: Self = Self::signed(32);
    pub const I64: Self = Self::signed(64);
    pub const U8: Self = Self::unsigned(8);
    pub const U16: Self = Self::unsigned(16);
    pub const U32: Self = Self::unsigned(32);
    pub const U64: Self = Self::unsigned(64);

    const fn signed(num_bits: u8) -> Self {
        Self {
            num_bits,
            signed: true,
        }
    }

    const fn unsigned(num_bits: u8) -> Self {
        Self {
            num_bits,
            signed: false,
        }
    }

    /// Returns the number of bits of the integer type.
    #[inline]
    pub const fn num_bits(&self) -> u8 {
        self.num_bits
    }

    /// Returns `true` for the `I*` family.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Smallest unsigned type able to hold `num_digits` hexadecimal digits.
    ///
    /// Returns `None` past 16 digits.
    pub const fn unsigned_for_hex_digits(num_digits: usize) -> Option<Self> {
        match num_digits {
            0..=2 => Some(Self::U8),
            3..=4 => Some(Self::U16),
            5..=8 => Some(Self::U32),
            9..=16 => Some(Self::U64),
            _ => None,
        }
    }
}

impl std::fmt::Display for IType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.signed {
            write!(f, "i{}", self.num_bits)
        } else {
            write!(f, "u{}", self.num_bits)
        }
    }
}

/// Represents a floating-point type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FType {
    /// 32-bit floating point value (IEEE-754 binary32).
    /// Corresponds to Rust's `f32` type.
    F32,

    /// 64-bit floating point value (IEEE-754 binary64).
    /// Corresponds to Rust's `f64` type.
    F64,
}

impl std::fmt::Display for FType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FType::F32 => write!(f, "f32"),
            FType::F64 => write!(f, "f64"),
        }
    }
}

/// Represents any concrete type, i.e. a type a [`Value`](crate::value::Value) can actually have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimaryType {
    Nothing,
    Bool,
    Int(IType),
    Float(FType),
    Str,
    Sym,
}

macro_rules! primary_type_from {
    ($typ:ty, $lbl:ident) => {
        impl From<$typ> for PrimaryType {
            fn from(value: $typ) -> Self {
                PrimaryType::$lbl(value)
            }
        }
    };
}

primary_type_from! { IType, Int }
primary_type_from! { FType, Float }

impl std::fmt::Display for PrimaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimaryType::Nothing => write!(f, "nothing"),
            PrimaryType::Bool => write!(f, "bool"),
            PrimaryType::Int(itype) => write!(f, "{}", itype),
            PrimaryType::Float(ftype) => write!(f, "{}", ftype),
            PrimaryType::Str => write!(f, "str"),
            PrimaryType::Sym => write!(f, "sym"),
        }
    }
}
