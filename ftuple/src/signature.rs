//! Matching tuples against callable signatures.
//!
//! A [`FrankenTuple`] has the shape of an argument list, so it can stand in for a
//! prospective call: its positional part supplies positional arguments and its
//! named part supplies named (keyword) arguments. This module describes callables
//! through an explicit [`Signature`] descriptor and implements, on top of it:
//!
//! - [`has_matching_signature`]: does some signature accept the tuple?
//! - [`invoke`]: call the most specific accepting signature with the tuple.
//!
//! Matching rules:
//! - Positional values are matched by type: the type of each value must be a
//!   subtype of the declared parameter type (see [`ValueType::is_subtype`]).
//! - Named values are matched by name only. Their types never participate.
//! - The tuple's names must be a subset of the declared names, unless the signature
//!   accepts any named argument (a `kwargs...` catch-all), in which case the
//!   declared names must be a subset of the tuple's names.
//! - An empty named part never disqualifies a signature, so an all-positional
//!   tuple matches exactly like a plain tuple would.
use std::sync::Arc;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    named::NamedTuple,
    tuple::FrankenTuple,
    types::ValueType,
    utils::Error,
    value::{Name, Value},
};

/// Descriptor of the arguments accepted by one method of a callable.
///
/// Example:
/// ```rust
/// # use ftuple::{ftuple, signature::Signature, types::ValueType};
/// // f(x::i64; y=3, z=4)
/// let sig = Signature::new([ValueType::I64]).with_named(["y", "z"]);
/// assert!(sig.accepts(&ftuple([1i64], [("y", 0i64)]).unwrap()));
/// assert!(!sig.accepts(&ftuple([1i64], [("a", 0i64)]).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    /// Types of the fixed positional parameters, in order.
    pub positional: Vec<ValueType>,

    /// Type of the trailing variadic positional parameters, if any.
    pub variadic: Option<ValueType>,

    /// Declared named parameters, in declaration order.
    pub named: Vec<Name>,

    /// Whether arbitrary named arguments are accepted beyond the declared ones.
    pub accepts_any_named: bool,
}

impl Signature {
    /// A signature taking exactly the given positional parameter types.
    pub fn new<I>(positional: I) -> Self
    where
        I: IntoIterator<Item = ValueType>,
    {
        Self {
            positional: positional.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Accept any number of trailing positional arguments of type `ty`.
    pub fn with_variadic(mut self, ty: ValueType) -> Self {
        self.variadic = Some(ty);
        self
    }

    /// Declare named parameters.
    pub fn with_named<N, I>(mut self, names: I) -> Self
    where
        N: Into<Name>,
        I: IntoIterator<Item = N>,
    {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Accept arbitrary named arguments (a `kwargs...` catch-all).
    pub fn with_any_named(mut self) -> Self {
        self.accepts_any_named = true;
        self
    }

    /// Declared type of the positional parameter at zero-based `position`, or
    /// `None` past the last parameter of a non-variadic signature.
    pub fn parameter_type(&self, position: usize) -> Option<ValueType> {
        self.positional.get(position).copied().or(self.variadic)
    }

    /// Returns `true` if `args` can be passed positionally to this signature.
    pub fn accepts_positional(&self, args: &[Value]) -> bool {
        let arity_ok = match self.variadic {
            Some(_) => args.len() >= self.positional.len(),
            None => args.len() == self.positional.len(),
        };

        arity_ok
            && args.iter().enumerate().all(|(i, arg)| {
                self.parameter_type(i)
                    .is_some_and(|param| arg.ty().is_subtype(&param))
            })
    }

    /// Returns `true` if the names of `named` are acceptable to this signature.
    pub fn accepts_names(&self, named: &NamedTuple) -> bool {
        if named.is_empty() {
            return true;
        }

        if self.accepts_any_named {
            self.named.iter().all(|name| named.contains(name.as_str()))
        } else {
            named.names().all(|name| self.named.contains(name))
        }
    }

    /// Returns `true` if a call with `ft` as its argument list matches this signature.
    pub fn accepts(&self, ft: &FrankenTuple) -> bool {
        self.accepts_positional(ft.positional()) && self.accepts_names(ft.named())
    }

    /// Returns `true` if, for calls of `arity` positional arguments, every parameter
    /// type of `self` is a subtype of the matching parameter type of `other`.
    ///
    /// A fixed-arity signature is more specific than a variadic one when both
    /// apply.
    pub fn is_more_specific(&self, other: &Signature, arity: usize) -> bool {
        if self.variadic.is_some() && other.variadic.is_none() {
            return false;
        }

        (0..arity).all(|i| match (self.parameter_type(i), other.parameter_type(i)) {
            (Some(mine), Some(theirs)) => mine.is_subtype(&theirs),
            _ => false,
        })
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut params: Vec<String> = self.positional.iter().map(|ty| ty.to_string()).collect();
        if let Some(ty) = self.variadic {
            params.push(format!("{}...", ty));
        }

        write!(f, "({}", params.join(", "))?;

        if !self.named.is_empty() || self.accepts_any_named {
            let mut names: Vec<String> = self.named.iter().map(|n| n.to_string()).collect();
            if self.accepts_any_named {
                names.push("kwargs...".to_string());
            }
            write!(f, "; {}", names.join(", "))?;
        }

        write!(f, ")")
    }
}

/// Something that can be called with positional and named arguments, and that
/// describes the calls it accepts through one [`Signature`] per method.
pub trait Callable {
    /// Result of a successful call.
    type Output;

    /// Error raised by the callable. Matching failures are converted into it, so
    /// [`invoke`] can report both through the same channel.
    type Error: From<Error>;

    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Signatures of the methods of this callable. The position of a signature in
    /// this iterator is the `method` index passed to [`Callable::call`].
    fn signatures(&self) -> impl Iterator<Item = &Signature>;

    /// Call the method at index `method` with the given arguments.
    ///
    /// Callers are expected to have checked the arguments against the method's
    /// signature; [`invoke`] does so.
    fn call(
        &self,
        method: usize,
        positional: &[Value],
        named: &NamedTuple,
    ) -> Result<Self::Output, Self::Error>;
}

/// Returns `true` if some signature of `f` accepts `ft` as its argument list.
///
/// Example:
/// ```rust
/// # use ftuple::{ftuple, signature::{Function, Signature, has_matching_signature}, types::ValueType, Value};
/// // g(; a, b, kwargs...)
/// let g = Function::new("g").with_method(
///     Signature::default().with_named(["a", "b"]).with_any_named(),
///     |_, _| Ok(Value::Nothing),
/// );
/// let names = ftuple(Vec::<Value>::new(), [("a", 1i64), ("b", 2i64), ("c", 3i64), ("d", 4i64)]).unwrap();
/// assert!(has_matching_signature(&g, &names));
/// let missing_b = ftuple(Vec::<Value>::new(), [("a", 1i64), ("c", 3i64)]).unwrap();
/// assert!(!has_matching_signature(&g, &missing_b));
/// ```
pub fn has_matching_signature<F: Callable>(f: &F, ft: &FrankenTuple) -> bool {
    f.signatures().any(|sig| sig.accepts(ft))
}

/// Select the method of `f` that a call with `ft` dispatches to.
///
/// Among all accepting signatures, the one more specific than every other is
/// chosen; ties between identical signatures go to the first declared.
///
/// Fails with [`Error::SignatureMismatch`] if no signature accepts `ft`, and with
/// [`Error::AmbiguousCall`] if no accepting signature is more specific than all the
/// others.
pub fn resolve<'f, F: Callable>(
    f: &'f F,
    ft: &FrankenTuple,
) -> Result<(usize, &'f Signature), Error> {
    let candidates: Vec<(usize, &Signature)> = f
        .signatures()
        .enumerate()
        .filter(|(_, sig)| sig.accepts(ft))
        .collect();

    trace!(
        "{} candidate method(s) of `{}` accept {}",
        candidates.len(),
        f.name(),
        ft.fmt_call()
    );

    if candidates.is_empty() {
        return Err(Error::SignatureMismatch {
            function: f.name().to_string(),
            arguments: ft.fmt_call().to_string(),
        });
    }

    let arity = ft.positional().len();
    candidates
        .iter()
        .find(|(_, sig)| {
            candidates
                .iter()
                .all(|(_, other)| sig.is_more_specific(other, arity))
        })
        .copied()
        .ok_or_else(|| Error::AmbiguousCall {
            function: f.name().to_string(),
            arguments: ft.fmt_call().to_string(),
            candidates: candidates.iter().map(|(_, sig)| sig.to_string()).collect(),
        })
}

/// Call `f` with the positional part of `ft` as positional arguments and its named
/// part as named arguments.
///
/// Errors raised by `f` itself are returned unchanged. Dispatch failures (see
/// [`resolve`]) are converted into `F::Error`.
///
/// Example:
/// ```rust
/// # use ftuple::{ftuple, signature::{Function, Signature, invoke}, types::ValueType, Value};
/// let add = Function::new("add").with_method(
///     Signature::new([ValueType::I64, ValueType::I64]),
///     |args, _| match (&args[0], &args[1]) {
///         (Value::I64(a), Value::I64(b)) => Ok(Value::I64(a + b)),
///         _ => unreachable!(),
///     },
/// );
/// assert_eq!(invoke(&add, &ftuple([1i64, 2], Vec::<(&str, Value)>::new()).unwrap()).unwrap(), Value::I64(3));
/// assert!(invoke(&add, &ftuple([1i64], Vec::<(&str, Value)>::new()).unwrap()).unwrap_err().is_signature_mismatch());
/// ```
pub fn invoke<F: Callable>(f: &F, ft: &FrankenTuple) -> Result<F::Output, F::Error> {
    let (method, signature) = resolve(f, ft)?;
    debug!(
        "Dispatching `{}{}` to method #{} {}",
        f.name(),
        ft.fmt_call(),
        method,
        signature
    );
    f.call(method, ft.positional(), ft.named())
}

/// Body of a [`Method`].
pub type NativeFn = dyn Fn(&[Value], &NamedTuple) -> Result<Value, Error> + Send + Sync;

/// One method of a [`Function`]: a signature and the native code run for it.
#[derive(Clone)]
pub struct Method {
    pub signature: Signature,
    body: Arc<NativeFn>,
}

impl Method {
    pub fn new<B>(signature: Signature, body: B) -> Self
    where
        B: Fn(&[Value], &NamedTuple) -> Result<Value, Error> + Send + Sync + 'static,
    {
        Self {
            signature,
            body: Arc::new(body),
        }
    }
}

impl std::fmt::Debug for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Method")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A named, possibly overloaded, native function operating on [`Value`]s.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    methods: Vec<Method>,
}

impl Function {
    /// A function without any method. It matches nothing until methods are added.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Add a method.
    pub fn with_method<B>(mut self, signature: Signature, body: B) -> Self
    where
        B: Fn(&[Value], &NamedTuple) -> Result<Value, Error> + Send + Sync + 'static,
    {
        self.methods.push(Method::new(signature, body));
        self
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

impl Callable for Function {
    type Output = Value;
    type Error = Error;

    fn name(&self) -> &str {
        &self.name
    }

    fn signatures(&self) -> impl Iterator<Item = &Signature> {
        self.methods.iter().map(|m| &m.signature)
    }

    fn call(
        &self,
        method: usize,
        positional: &[Value],
        named: &NamedTuple,
    ) -> Result<Value, Error> {
        match self.methods.get(method) {
            Some(m) => (m.body)(positional, named),
            None => Err(Error::Function {
                function: self.name.clone(),
                message: format!(
                    "method #{} does not exist ({} method(s) declared)",
                    method,
                    self.methods.len()
                ),
            }),
        }
    }
}
