//! The [`FrankenTuple`] type: a tuple whose elements are partly positional and
//! partly named.
//!
//! A `FrankenTuple` is the value-level counterpart of a call's argument list: an
//! ordered sequence of positional values followed by an ordered set of named
//! values, e.g. `(1, 2; a=3, b=4)`.
//!
//! All operations see the elements in *combined order*: positional values first,
//! then named values in insertion order. Integer indices and [`Key::Index`] are
//! 1-based over that combined order.
use std::{
    iter::{FusedIterator, Zip},
    ops::Range,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::EnumIs;

use crate::{
    named::NamedTuple,
    types::ValueType,
    utils::Error,
    value::{Name, Value},
};

/// An index into a [`FrankenTuple`]: a 1-based position in combined order, or the
/// name of an entry of the named part.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    Index(usize),
    Name(Name),
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value)
    }
}

impl From<Name> for Key {
    fn from(value: Name) -> Self {
        Key::Name(value)
    }
}

impl From<&Name> for Key {
    fn from(value: &Name) -> Self {
        Key::Name(value.clone())
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.into())
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => write!(f, "{:#}", name),
        }
    }
}

/// A partially-named tuple.
///
/// The positional part is accessed with [`FrankenTuple::positional`], the named part
/// with [`FrankenTuple::named`]. Values are immutable once built: operations like
/// [`FrankenTuple::tail`] return new tuples.
///
/// Example:
/// ```rust
/// # use ftuple::{FrankenTuple, NamedTuple, Value};
/// let ft = FrankenTuple::new(
///     vec![Value::I64(1), Value::I64(2)],
///     NamedTuple::new([("a", 1i64), ("b", 2i64)]).unwrap(),
/// );
/// assert_eq!(ft.to_string(), "FrankenTuple((1, 2), (a = 1, b = 2))");
/// assert_eq!(ft.positional(), &[Value::I64(1), Value::I64(2)]);
/// assert_eq!(ft.named().to_string(), "(a = 1, b = 2)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrankenTuple {
    positional: Vec<Value>,
    named: NamedTuple,
}

/// Construct a [`FrankenTuple`] from call-shaped positional and named arguments.
///
/// Fails with [`Error::DuplicateName`] if a name repeats in `kwargs`.
///
/// Example:
/// ```rust
/// # use ftuple::{ftuple, Value};
/// let ft = ftuple([1i64, 2], [("a", 3i64), ("b", 4i64)]).unwrap();
/// assert_eq!(ft.to_string(), "FrankenTuple((1, 2), (a = 3, b = 4))");
///
/// let positional_only = ftuple([1i64, 2], Vec::<(&str, Value)>::new()).unwrap();
/// assert_eq!(positional_only.to_string(), "FrankenTuple((1, 2), NamedTuple())");
/// ```
pub fn ftuple<A, N, V, I, K>(args: I, kwargs: K) -> Result<FrankenTuple, Error>
where
    A: Into<Value>,
    N: Into<Name>,
    V: Into<Value>,
    I: IntoIterator<Item = A>,
    K: IntoIterator<Item = (N, V)>,
{
    Ok(FrankenTuple::new(
        args.into_iter().map(Into::into).collect(),
        NamedTuple::new(kwargs)?,
    ))
}

impl FrankenTuple {
    /// Build a tuple from its positional part and its named part.
    pub fn new(positional: Vec<Value>, named: NamedTuple) -> Self {
        Self { positional, named }
    }

    /// The canonical empty tuple, `FrankenTuple((), NamedTuple())`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The unnamed part, in order.
    #[inline]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// The named part.
    #[inline]
    pub fn named(&self) -> &NamedTuple {
        &self.named
    }

    pub fn into_parts(self) -> (Vec<Value>, NamedTuple) {
        (self.positional, self.named)
    }

    /// Number of elements in both parts.
    #[inline]
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Returns `true` if neither part holds any element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// The first valid integer index, always `1`.
    #[inline]
    pub const fn first_index(&self) -> usize {
        1
    }

    /// The last valid integer index, i.e. [`Self::len`].
    #[inline]
    pub fn last_index(&self) -> usize {
        self.len()
    }

    /// Keys in combined order: `1..=positional().len()` then the names of the named
    /// part.
    ///
    /// Example:
    /// ```rust
    /// # use ftuple::{ftuple, Key};
    /// let ft = ftuple([1i64, 2], [("a", 3i64), ("b", 4i64)]).unwrap();
    /// let keys: Vec<String> = ft.keys().map(|k| k.to_string()).collect();
    /// assert_eq!(keys, ["1", "2", ":a", ":b"]);
    /// ```
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            indices: 1..self.positional.len() + 1,
            named: self.named.entries().iter(),
        }
    }

    /// Values in combined order.
    pub fn values(&self) -> Iter<'_> {
        self.iter()
    }

    /// Iterate over the values in combined order. Every call starts over.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            positional: self.positional.iter(),
            named: self.named.entries().iter(),
        }
    }

    /// `(key, value)` pairs in combined order.
    pub fn pairs(&self) -> Pairs<'_> {
        Pairs {
            inner: self.keys().zip(self.iter()),
        }
    }

    /// Retrieve a value by key.
    ///
    /// - [`Key::Index`]: 1-based position in combined order, failing with
    ///   [`Error::IndexOutOfBounds`] outside `[1, len()]`.
    /// - [`Key::Name`]: entry of the named part, failing with [`Error::KeyNotFound`].
    ///
    /// Example:
    /// ```rust
    /// # use ftuple::{ftuple, Value};
    /// let ft = ftuple([1i64, 2], [("a", 3i64), ("b", 4i64)]).unwrap();
    /// assert_eq!(ft.get(3usize).unwrap(), &Value::I64(3));
    /// assert_eq!(ft.get("a").unwrap(), &Value::I64(3));
    /// assert!(ft.get(5usize).unwrap_err().is_index_out_of_bounds());
    /// assert!(ft.get("c").unwrap_err().is_key_not_found());
    /// ```
    pub fn get(&self, key: impl Into<Key>) -> Result<&Value, Error> {
        match key.into() {
            Key::Index(index) => self.get_index(index),
            Key::Name(name) => self.named.get(name.as_str()).ok_or(Error::KeyNotFound { name }),
        }
    }

    fn get_index(&self, index: usize) -> Result<&Value, Error> {
        let length = self.len();
        if index < 1 || index > length {
            return Err(Error::IndexOutOfBounds { index, length });
        }

        let offset = index - 1;
        match self.positional.get(offset) {
            Some(value) => Ok(value),
            None => self
                .named
                .get_index(offset - self.positional.len())
                .map(|(_, value)| value)
                .ok_or(Error::IndexOutOfBounds { index, length }),
        }
    }

    /// The first value in combined order.
    pub fn first(&self) -> Result<&Value, Error> {
        self.iter().next().ok_or(Error::Empty { operation: "first" })
    }

    /// A new tuple with the first element (in combined order) removed.
    ///
    /// The element comes from the positional part unless it is empty, in which case
    /// the first named entry is dropped.
    ///
    /// Example:
    /// ```rust
    /// # use ftuple::ftuple;
    /// let ft = ftuple(Vec::<i64>::new(), [("a", 4i64), ("b", 5i64)]).unwrap();
    /// assert_eq!(ft.tail().unwrap().to_string(), "FrankenTuple((), (b = 5,))");
    /// ```
    pub fn tail(&self) -> Result<FrankenTuple, Error> {
        if self.is_empty() {
            return Err(Error::Empty { operation: "tail" });
        }

        if self.positional.is_empty() {
            Ok(Self::new(Vec::new(), self.named.without_first()))
        } else {
            Ok(Self::new(
                self.positional[1..].to_vec(),
                self.named.clone(),
            ))
        }
    }

    /// The narrowest common supertype of every contained value, or
    /// [`ValueType::Never`] for an empty tuple.
    ///
    /// Example:
    /// ```rust
    /// # use ftuple::{ftuple, types::ValueType, Value};
    /// let ints = ftuple([1i64, 2], [("a", 3i64)]).unwrap();
    /// assert_eq!(ints.element_type(), ValueType::I64);
    ///
    /// let mixed = ftuple([Value::U8(0), Value::I64(1)], Vec::<(&str, Value)>::new()).unwrap();
    /// assert_eq!(mixed.element_type(), ValueType::INTEGER);
    /// ```
    pub fn element_type(&self) -> ValueType {
        ValueType::join_all(self.iter().map(Value::ty))
    }

    /// The positional part rendered as a tuple, e.g. `(1,)`.
    pub(crate) fn fmt_positional(&self) -> impl std::fmt::Display + '_ {
        struct Fmt<'a>(&'a [Value]);

        impl std::fmt::Display for Fmt<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "(")?;
                for (i, value) in self.0.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                if self.0.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }

        Fmt(&self.positional)
    }

    /// Render the shape of a call, e.g. `(1::i64, 2::i64; a)`.
    pub(crate) fn fmt_call(&self) -> impl std::fmt::Display + '_ {
        struct Fmt<'a>(&'a FrankenTuple);

        impl std::fmt::Display for Fmt<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "(")?;
                for (i, value) in self.0.positional.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}::{}", value, value.ty())?;
                }
                if !self.0.named.is_empty() {
                    write!(f, "; ")?;
                    for (i, name) in self.0.named.names().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", name)?;
                    }
                }
                write!(f, ")")
            }
        }

        Fmt(self)
    }
}

/// The plain form shows both parts, `FrankenTuple((1, 2), (a = 3, b = 4))`. The
/// alternate form (`{:#}`) renders the tuple literal `(1, 2; a = 3, b = 4)`, which
/// [`parser::parse`](crate::parser) reads back.
impl std::fmt::Display for FrankenTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !f.alternate() {
            return write!(f, "FrankenTuple({}, {})", self.fmt_positional(), self.named);
        }

        write!(f, "(")?;
        for (i, value) in self.positional.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:#}", value)?;
        }
        if !self.named.is_empty() {
            write!(f, "; ")?;
            for (i, (name, value)) in self.named.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} = {:#}", name, value)?;
            }
        }
        write!(f, ")")
    }
}

impl<'a> IntoIterator for &'a FrankenTuple {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Value>> for FrankenTuple {
    fn from(value: Vec<Value>) -> Self {
        Self::new(value, NamedTuple::default())
    }
}

impl From<NamedTuple> for FrankenTuple {
    fn from(value: NamedTuple) -> Self {
        Self::new(Vec::new(), value)
    }
}

/// Iterator over the values of a [`FrankenTuple`] in combined order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    positional: std::slice::Iter<'a, Value>,
    named: std::slice::Iter<'a, (Name, Value)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.positional
            .next()
            .or_else(|| self.named.next().map(|(_, value)| value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }
}

impl FusedIterator for Iter<'_> {}

/// Iterator over the keys of a [`FrankenTuple`] in combined order.
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    indices: Range<usize>,
    named: std::slice::Iter<'a, (Name, Value)>,
}

impl Iterator for Keys<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices
            .next()
            .map(Key::Index)
            .or_else(|| self.named.next().map(|(name, _)| Key::Name(name.clone())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Keys<'_> {
    fn len(&self) -> usize {
        self.indices.len() + self.named.len()
    }
}

impl FusedIterator for Keys<'_> {}

/// Iterator over the `(key, value)` pairs of a [`FrankenTuple`].
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    inner: Zip<Keys<'a>, Iter<'a>>,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Pairs<'_> {}

impl FusedIterator for Pairs<'_> {}
