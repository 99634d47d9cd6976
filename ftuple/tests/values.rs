use ftuple::types::ValueType;
use ftuple::{Name, Value};

#[test]
fn names_display_plain_and_as_symbols() {
    let name = Name::from("alpha");
    assert_eq!(name.to_string(), "alpha");
    assert_eq!(format!("{name:#}"), ":alpha");
    assert_eq!(name, "alpha");
    assert_eq!(name, Name::new(String::from("alpha")));
}

#[test]
fn identifier_names() {
    assert!(Name::from("a").is_identifier());
    assert!(Name::from("_x1").is_identifier());
    assert!(!Name::from("1x").is_identifier());
    assert!(!Name::from("with space").is_identifier());
    assert!(!Name::from("").is_identifier());
    assert!(!Name::from("true").is_identifier());
    assert!(!Name::from("false").is_identifier());
    assert!(!Name::from("nothing").is_identifier());
    assert!(Name::from("nothings").is_identifier());
}

#[test]
fn value_display() {
    let rendered: Vec<String> = [
        Value::Nothing,
        Value::Bool(true),
        Value::I8(-1),
        Value::I64(42),
        Value::U8(1),
        Value::U16(0xab),
        Value::U32(1),
        Value::F32(1.5),
        Value::F64(2.0),
        Value::from("a\"b"),
        Value::Sym("s".into()),
    ]
    .iter()
    .map(Value::to_string)
    .collect();
    assert_eq!(
        rendered,
        [
            "nothing",
            "true",
            "-1",
            "42",
            "0x01",
            "0x00ab",
            "0x00000001",
            "1.5f32",
            "2.0",
            "\"a\\\"b\"",
            ":s"
        ]
    );
}

#[test]
fn value_types() {
    assert_eq!(Value::Nothing.ty(), ValueType::NOTHING);
    assert_eq!(Value::Bool(false).ty(), ValueType::BOOL);
    assert_eq!(Value::U16(0).ty(), ValueType::U16);
    assert_eq!(Value::F32(0.0).ty(), ValueType::F32);
    assert_eq!(Value::from("x").ty(), ValueType::STR);
    assert_eq!(Value::Sym("x".into()).ty(), ValueType::SYM);
    assert!(Value::I32(0).ty().is_concrete());
}

#[test]
fn numeric_views() {
    assert_eq!(Value::Bool(true).as_i128(), Some(1));
    assert_eq!(Value::U64(u64::MAX).as_i128(), Some(u64::MAX as i128));
    assert_eq!(Value::I8(-3).as_f64(), Some(-3.0));
    assert_eq!(Value::F32(0.5).as_f64(), Some(0.5));
    assert_eq!(Value::F64(0.5).as_i128(), None);
    assert_eq!(Value::from("1").as_f64(), None);
}

#[test]
fn variant_helpers() {
    let v = Value::from(true);
    assert!(v.is_bool());
    assert!(!v.is_nothing());
    assert_eq!(v.clone().try_as_bool(), Some(true));
    assert_eq!(Value::from("s").try_as_str_ref().map(String::as_str), Some("s"));
    assert_eq!(Value::from(()), Value::Nothing);
    assert_eq!(Value::from(&v), v);
}
