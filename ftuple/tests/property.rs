//! Property-based tests using proptest.
//!
//! These tests check the structural invariants of tuples (length, keys, lookups,
//! iteration) and that the literal form reads back through the parser.

use ftuple::parser::parse;
use ftuple::types::ValueType;
use ftuple::{FrankenTuple, Key, NamedTuple, Value};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Values whose literal form reads back to an equal value.
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nothing),
        any::<bool>().prop_map(Value::Bool),
        any::<i8>().prop_map(Value::I8),
        any::<i16>().prop_map(Value::I16),
        any::<i32>().prop_map(Value::I32),
        any::<i64>().prop_map(Value::I64),
        any::<u8>().prop_map(Value::U8),
        any::<u16>().prop_map(Value::U16),
        any::<u32>().prop_map(Value::U32),
        any::<u64>().prop_map(Value::U64),
        (-1.0e6f32..1.0e6f32).prop_map(Value::F32),
        prop::num::f64::NORMAL.prop_map(Value::F64),
        prop::string::string_regex("[a-z \"\\\\\n\t]{0,8}")
            .unwrap()
            .prop_map(Value::Str),
        name_strategy().prop_map(|name| Value::Sym(name.as_str().into())),
    ]
}

/// Identifier-like names that are not literal keywords.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,6}")
        .unwrap()
        .prop_filter("keywords are literals", |s| {
            !matches!(s.as_str(), "true" | "false" | "nothing")
        })
}

/// Tuples with up to 6 positional values and up to 6 uniquely named values.
fn tuple_strategy() -> impl Strategy<Value = FrankenTuple> {
    (
        prop::collection::vec(value_strategy(), 0..6),
        prop::collection::btree_map(name_strategy(), value_strategy(), 0..6),
    )
        .prop_map(|(positional, named)| {
            let named = NamedTuple::new(named).expect("map keys are unique");
            FrankenTuple::new(positional, named)
        })
}

// ============================================================================
// STRUCTURE PROPERTIES
// ============================================================================

proptest! {
    /// Property: length is the sum of both parts, and emptiness follows it.
    #[test]
    fn prop_length_sums_parts(ft in tuple_strategy()) {
        prop_assert_eq!(ft.len(), ft.positional().len() + ft.named().len());
        prop_assert_eq!(ft.is_empty(), ft.len() == 0);
        prop_assert_eq!(ft.last_index(), ft.len());
        prop_assert_eq!(ft.iter().len(), ft.len());
        prop_assert_eq!(FrankenTuple::empty().len(), 0);
    }

    /// Property: keys are the 1-based positions, then the names in order.
    #[test]
    fn prop_keys_follow_combined_order(ft in tuple_strategy()) {
        let keys: Vec<Key> = ft.keys().collect();
        prop_assert_eq!(keys.len(), ft.len());

        let n = ft.positional().len();
        for (i, key) in keys[..n].iter().enumerate() {
            prop_assert_eq!(key, &Key::Index(i + 1));
        }
        let names: Vec<Key> = ft.named().names().map(Key::from).collect();
        prop_assert_eq!(&keys[n..], names.as_slice());
    }

    /// Property: looking up every key reproduces the values in lock-step.
    #[test]
    fn prop_get_matches_values(ft in tuple_strategy()) {
        for (key, value) in ft.keys().zip(ft.values()) {
            prop_assert_eq!(ft.get(key).unwrap(), value);
        }
        for (index, value) in (1..=ft.len()).zip(ft.values()) {
            prop_assert_eq!(ft.get(index).unwrap(), value);
        }
        prop_assert!(ft.get(0usize).is_err());
        prop_assert!(ft.get(ft.len() + 1).is_err());
    }

    /// Property: pairs zip keys with values and restart on every call.
    #[test]
    fn prop_pairs_restart(ft in tuple_strategy()) {
        let first: Vec<_> = ft.pairs().collect();
        let second: Vec<_> = ft.pairs().collect();
        prop_assert_eq!(first.len(), ft.len());
        prop_assert_eq!(&first, &second);
    }

    /// Property: the tail drops exactly the first element in combined order.
    #[test]
    fn prop_tail_drops_first(ft in tuple_strategy()) {
        match ft.tail() {
            Ok(tail) => {
                prop_assert_eq!(tail.len(), ft.len() - 1);
                let rest: Vec<&Value> = ft.values().skip(1).collect();
                let tail_values: Vec<&Value> = tail.values().collect();
                prop_assert_eq!(rest, tail_values);
                prop_assert_eq!(ft.first().unwrap(), ft.get(1usize).unwrap());
            }
            Err(err) => {
                prop_assert!(err.is_empty());
                prop_assert!(ft.is_empty());
            }
        }
    }

    /// Property: the element type is a supertype of every contained type.
    #[test]
    fn prop_element_type_bounds_values(ft in tuple_strategy()) {
        let ty = ft.element_type();
        for value in &ft {
            prop_assert!(value.ty().is_subtype(&ty));
        }
        if ft.is_empty() {
            prop_assert_eq!(ty, ValueType::Never);
        }
    }
}

// ============================================================================
// LITERAL PROPERTIES
// ============================================================================

proptest! {
    /// Property: the literal form parses back to an equal tuple.
    #[test]
    fn prop_literal_reads_back(ft in tuple_strategy()) {
        let text = format!("{ft:#}");
        let parsed = parse(&text);
        prop_assert!(parsed.is_ok(), "{:?} did not parse: {:?}", text, parsed);
        prop_assert_eq!(parsed.unwrap(), ft);
    }

    /// Property: intermixing named items among positional ones does not change
    /// the parsed tuple.
    #[test]
    fn prop_intermixed_equals_sectioned(ft in tuple_strategy(), seed in any::<u64>()) {
        let mut positional: Vec<String> =
            ft.positional().iter().map(|v| format!("{v:#}")).collect();
        let mut named: Vec<String> = ft
            .named()
            .iter()
            .map(|(name, value)| format!("{name} = {value:#}"))
            .collect();

        // Deterministic interleaving driven by the seed bits
        let mut items = Vec::new();
        let mut bits = seed;
        positional.reverse();
        named.reverse();
        while !positional.is_empty() || !named.is_empty() {
            let take_named = !named.is_empty() && (positional.is_empty() || bits & 1 == 1);
            bits = bits.rotate_right(1);
            if take_named {
                items.extend(named.pop());
            } else {
                items.extend(positional.pop());
            }
        }

        let text = format!("({})", items.join(", "));
        prop_assert_eq!(parse(&text).unwrap(), ft);
    }
}
