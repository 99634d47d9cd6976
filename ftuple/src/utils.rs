use strum::EnumIs;
use thiserror::Error;

use crate::value::Name;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum Error {
    /// An integer index fell outside of `[1, length]`.
    #[error(
        "Index {index} is out of bounds for a tuple of length {length}. Valid indices are 1 through {length}."
    )]
    IndexOutOfBounds { index: usize, length: usize },

    /// A name was looked up that the named part does not contain.
    #[error("The name `{name}` is not present in the named part of the tuple.")]
    KeyNotFound { name: Name },

    /// An operation requiring at least one element was applied to an empty tuple.
    #[error("Cannot apply `{operation}` to an empty tuple; at least one element is required.")]
    Empty { operation: &'static str },

    /// The same name was given more than once while building the named part.
    #[error("The name `{name}` appears more than once. Names within a tuple must be unique.")]
    DuplicateName { name: Name },

    /// No signature of the callable accepts the given arguments.
    #[error("No signature of `{function}` matches the call `{function}{arguments}`.")]
    SignatureMismatch { function: String, arguments: String },

    /// Several signatures accept the given arguments and none is more specific than the others.
    #[error(
        "The call `{function}{arguments}` is ambiguous. The following signatures all match: {}.",
        .candidates.join(", ")
    )]
    AmbiguousCall {
        function: String,
        arguments: String,
        candidates: Vec<String>,
    },

    /// A callable body rejected its arguments.
    #[error("Error raised by `{function}`: {message}")]
    Function { function: String, message: String },

    /// The tuple literal could not be parsed.
    #[error("Invalid tuple literal:\n{}", .diagnostics.join("\n"))]
    Syntax { diagnostics: Vec<String> },
}
