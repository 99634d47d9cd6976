//! Ordered mapping from unique names to values.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    utils::Error,
    value::{Name, Value},
};

/// The named part of a [`FrankenTuple`](crate::FrankenTuple).
///
/// Entries keep their insertion order and no name appears twice. Lookups are
/// linear; tuples are expected to carry a handful of names at most.
///
/// Example:
/// ```rust
/// # use ftuple::{NamedTuple, Value};
/// let nt = NamedTuple::new([("a", 1i64), ("b", 2i64)]).unwrap();
/// assert_eq!(nt.get("b"), Some(&Value::I64(2)));
/// assert!(NamedTuple::new([("a", 1i64), ("a", 2i64)]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedTuple {
    entries: Vec<(Name, Value)>,
}

impl NamedTuple {
    /// Build a named tuple from `(name, value)` pairs, preserving their order.
    ///
    /// Fails with [`Error::DuplicateName`] on the first repeated name.
    pub fn new<N, V, I>(entries: I) -> Result<Self, Error>
    where
        N: Into<Name>,
        V: Into<Value>,
        I: IntoIterator<Item = (N, V)>,
    {
        let mut nt = Self::default();
        for (name, value) in entries {
            nt.push(name.into(), value.into())?;
        }
        Ok(nt)
    }

    pub(crate) fn push(&mut self, name: Name, value: Value) -> Result<(), Error> {
        if self.contains(name.as_str()) {
            return Err(Error::DuplicateName { name });
        }
        self.entries.push((name, value));
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if an entry is keyed by `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Zero-based position of `name` in insertion order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n.as_str() == name)
    }

    /// Value associated with `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Entry at the zero-based position `index`.
    pub fn get_index(&self, index: usize) -> Option<(&Name, &Value)> {
        self.entries.get(index).map(|(n, v)| (n, v))
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &Name> + DoubleEndedIterator + Clone {
        self.entries.iter().map(|(n, _)| n)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> + DoubleEndedIterator + Clone {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(
        &self,
    ) -> impl ExactSizeIterator<Item = (&Name, &Value)> + DoubleEndedIterator + Clone {
        self.entries.iter().map(|(n, v)| (n, v))
    }

    /// A copy of `self` without its first entry. Empty stays empty.
    pub(crate) fn without_first(&self) -> Self {
        Self {
            entries: self.entries.iter().skip(1).cloned().collect(),
        }
    }

    pub(crate) fn entries(&self) -> &[(Name, Value)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(Name, Value)> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a NamedTuple {
    type Item = (&'a Name, &'a Value);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (Name, Value)>,
        fn(&'a (Name, Value)) -> (&'a Name, &'a Value),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(split_entry as fn(_) -> _)
    }
}

fn split_entry((name, value): &(Name, Value)) -> (&Name, &Value) {
    (name, value)
}

impl std::fmt::Display for NamedTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "NamedTuple()");
        }

        write!(f, "(")?;
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", name, value)?;
        }
        if self.entries.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
