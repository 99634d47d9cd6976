//! Ftuple: partially-named tuples.
//!
//! A [`FrankenTuple`] holds an ordered positional part and an ordered named part,
//! the same shape as the arguments of a call `f(1, 2; a=3, b=4)`. It behaves like a
//! tuple over the concatenation of both parts (the *combined order*) while still
//! giving access to each part on its own.
//!
//! The crate is organised as follows:
//! - values and their types: [`value`] and [`types`]
//! - the named part: [`named`]
//! - the tuple itself, its keys and iterators: [`tuple`]
//! - construction from literals: the [`ftuple!`] macro and, with the `chumsky`
//!   feature, the text parser in [`parser`]
//! - using a tuple as an argument list: [`signature`]
//!
//! Examples
//! ```
//! use ftuple::{ftuple, Key, Value};
//!
//! let ft = ftuple!(1i64, 2i64; a = 3i64, b = 4i64).unwrap();
//! assert_eq!(ft.len(), 4);
//! assert_eq!(ft.get(3usize).unwrap(), &Value::I64(3));
//! assert_eq!(ft.get("b").unwrap(), &Value::I64(4));
//!
//! let keys: Vec<Key> = ft.keys().collect();
//! assert_eq!(keys, [Key::Index(1), Key::Index(2), Key::from("a"), Key::from("b")]);
//! assert_eq!(ft.tail().unwrap().to_string(), "FrankenTuple((2,), (a = 3, b = 4))");
//! ```

#[macro_use]
mod macros;
pub mod named;
#[cfg(feature = "chumsky")]
pub mod parser;
pub mod signature;
pub mod tuple;
pub mod types;
pub mod utils;
pub mod value;

pub use named::NamedTuple;
pub use signature::{Callable, Function, Signature, has_matching_signature, invoke};
pub use tuple::{FrankenTuple, Key, ftuple};
pub use utils::Error;
pub use value::{Name, Value};
