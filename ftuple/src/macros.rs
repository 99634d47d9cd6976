/// Build a [`FrankenTuple`](crate::FrankenTuple) from a literal list of items.
///
/// Items are expressions (positional) or `name = expr` (named), separated by `,`.
/// Like a call, the list may be sectioned with `;` to separate positional items
/// from named ones, but positional and named items may also be intermixed in any
/// order before it: each part keeps the relative order of its own items.
///
/// Values are converted with [`Value::from`](crate::Value), so an unsuffixed integer
/// literal becomes an `i32`.
///
/// Expands to a `Result<FrankenTuple, Error>`, which fails with
/// [`Error::DuplicateName`](crate::Error::DuplicateName) if a name repeats.
///
/// Examples
/// ```
/// use ftuple::ftuple;
///
/// let sectioned = ftuple!(1, 2; a = 3, b = 4).unwrap();
/// let intermixed = ftuple!(1, a = 3, 2, b = 4).unwrap();
/// assert_eq!(sectioned, intermixed);
/// assert_eq!(sectioned.to_string(), "FrankenTuple((1, 2), (a = 3, b = 4))");
///
/// let x = 10i64;
/// assert_eq!(ftuple!(x + 1, label = "eleven").unwrap().to_string(),
///            "FrankenTuple((11,), (label = \"eleven\",))");
/// assert!(ftuple!().unwrap().is_empty());
/// assert!(ftuple!(a = 1, a = 2).is_err());
/// ```
///
/// After `;` only named items are accepted:
/// ```compile_fail
/// let _ = ftuple::ftuple!(1; 2);
/// ```
///
/// Items must be separated by `,` or `;`:
/// ```compile_fail
/// let _ = ftuple::ftuple!(1 2);
/// ```
#[macro_export]
macro_rules! ftuple {
    // All items consumed
    (@done [$($p:tt)*] [$(($name:ident, $value:expr))*]) => {{
        let positional: ::std::vec::Vec<$crate::Value> =
            ::std::vec![$($crate::Value::from($p)),*];
        let named: ::std::vec::Vec<(&'static str, $crate::Value)> =
            ::std::vec![$((::core::stringify!($name), $crate::Value::from($value))),*];
        $crate::NamedTuple::new(named).map(|named| $crate::FrankenTuple::new(positional, named))
    }};

    // Intermixed section
    (@munch $p:tt $n:tt) => {
        $crate::ftuple!(@done $p $n)
    };
    (@munch $p:tt $n:tt , $($rest:tt)*) => {
        $crate::ftuple!(@munch $p $n $($rest)*)
    };
    (@munch $p:tt $n:tt ; $($rest:tt)*) => {
        $crate::ftuple!(@named $p $n $($rest)*)
    };
    (@munch $p:tt [$($n:tt)*] $name:ident = $value:expr , $($rest:tt)*) => {
        $crate::ftuple!(@munch $p [$($n)* ($name, $value)] $($rest)*)
    };
    (@munch $p:tt [$($n:tt)*] $name:ident = $value:expr ; $($rest:tt)*) => {
        $crate::ftuple!(@named $p [$($n)* ($name, $value)] $($rest)*)
    };
    (@munch $p:tt [$($n:tt)*] $name:ident = $value:expr) => {
        $crate::ftuple!(@done $p [$($n)* ($name, $value)])
    };
    (@munch [$($p:tt)*] $n:tt $value:expr , $($rest:tt)*) => {
        $crate::ftuple!(@munch [$($p)* ($value)] $n $($rest)*)
    };
    (@munch [$($p:tt)*] $n:tt $value:expr ; $($rest:tt)*) => {
        $crate::ftuple!(@named [$($p)* ($value)] $n $($rest)*)
    };
    (@munch [$($p:tt)*] $n:tt $value:expr) => {
        $crate::ftuple!(@done [$($p)* ($value)] $n)
    };
    (@munch $p:tt $n:tt $($rest:tt)*) => {
        ::core::compile_error!(::core::concat!(
            "expected `value` or `name = value` in `ftuple!`, found `",
            ::core::stringify!($($rest)*),
            "`"
        ))
    };

    // After `;`: named items only
    (@named $p:tt $n:tt) => {
        $crate::ftuple!(@done $p $n)
    };
    (@named $p:tt $n:tt , $($rest:tt)*) => {
        $crate::ftuple!(@named $p $n $($rest)*)
    };
    (@named $p:tt [$($n:tt)*] $name:ident = $value:expr , $($rest:tt)*) => {
        $crate::ftuple!(@named $p [$($n)* ($name, $value)] $($rest)*)
    };
    (@named $p:tt [$($n:tt)*] $name:ident = $value:expr) => {
        $crate::ftuple!(@done $p [$($n)* ($name, $value)])
    };
    (@named $p:tt $n:tt $($rest:tt)*) => {
        ::core::compile_error!(::core::concat!(
            "only `name = value` items may follow `;` in `ftuple!`, found `",
            ::core::stringify!($($rest)*),
            "`"
        ))
    };

    ($($items:tt)*) => {
        $crate::ftuple!(@munch [] [] $($items)*)
    };
}
