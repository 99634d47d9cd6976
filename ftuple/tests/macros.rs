use ftuple::{FrankenTuple, NamedTuple, Value, ftuple};

#[test]
fn sectioned_and_intermixed_agree() {
    let sectioned = ftuple!(1i64, 2i64; a = 3i64, b = 4i64).unwrap();
    let intermixed = ftuple!(1i64, a = 3i64, 2i64, b = 4i64).unwrap();
    let leading = ftuple!(a = 3i64, 1i64, b = 4i64, 2i64).unwrap();
    assert_eq!(sectioned, intermixed);
    assert_eq!(sectioned, leading);
    assert_eq!(sectioned, ftuple([1i64, 2], [("a", 3i64), ("b", 4i64)]).unwrap());
}

#[test]
fn empty_and_single_items() {
    assert_eq!(ftuple!().unwrap(), FrankenTuple::empty());
    assert_eq!(ftuple!(;).unwrap(), FrankenTuple::empty());

    let one = ftuple!(7u8).unwrap();
    assert_eq!(one.positional(), &[Value::U8(7)]);
    assert!(one.named().is_empty());

    let named = ftuple!(; k = "v").unwrap();
    assert!(named.positional().is_empty());
    assert_eq!(named.named(), &NamedTuple::new([("k", "v")]).unwrap());

    assert_eq!(ftuple!(1, 2,).unwrap().len(), 2);
    assert_eq!(ftuple!(a = 1,).unwrap().len(), 1);
}

#[test]
fn items_are_arbitrary_expressions() {
    let base = 20i64;
    let label = String::from("label");
    let ft = ftuple!(base * 2, base == 20, label.clone(); offset = -base, tag = label).unwrap();
    assert_eq!(
        ft.positional(),
        &[Value::I64(40), Value::Bool(true), Value::Str("label".to_string())]
    );
    assert_eq!(ft.get("offset").unwrap(), &Value::I64(-20));
    assert_eq!(ft.get("tag").unwrap(), &Value::from("label"));
}

#[test]
fn literals_keep_their_rust_types() {
    let ft = ftuple!(1, 1.5, 'x' == 'x', "s", ()).unwrap();
    assert_eq!(
        ft.positional(),
        &[
            Value::I32(1),
            Value::F64(1.5),
            Value::Bool(true),
            Value::from("s"),
            Value::Nothing,
        ]
    );
}

#[test]
fn duplicate_names_fail() {
    let err = ftuple!(1, a = 1; a = 2).unwrap_err();
    assert!(err.is_duplicate_name());
}

#[test]
fn named_section_after_separator() {
    let ft = ftuple!(1i64, a = 2i64; b = 3i64, c = 4i64,).unwrap();
    assert_eq!(ft.positional(), &[Value::I64(1)]);
    let names: Vec<&str> = ft.named().names().map(|n| n.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);

    assert_eq!(ftuple!(1, 2;).unwrap().len(), 2);
    assert_eq!(ftuple!(x = 1; y = 2).unwrap().named().len(), 2);
    assert_eq!(
        ftuple!(1i64; a = 2i64).unwrap(),
        ftuple::parser::parse("(1; a = 2)").unwrap()
    );
}
