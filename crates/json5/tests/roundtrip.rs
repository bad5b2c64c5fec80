//! Integration tests for the testable properties of the codec: every
//! value the parser can produce must round-trip through the
//! formatter, formatting must be idempotent, and extra whitespace must
//! not change the parsed result.

use json5::Value;
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|i| Value::Int(i as i64)),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Value::Float),
        "[ -~]{0,20}".prop_map(Value::Str),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-zA-Z_][a-zA-Z0-9_]{0,8}", inner), 0..6).prop_map(|pairs| {
                let mut obj = json5::Object::new();
                for (k, v) in pairs {
                    obj.insert(k, v);
                }
                Value::Object(obj)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn test_round_trip_compact(value in arb_value()) {
        let text = json5::format(&value, None).unwrap();
        let parsed = json5::parse(&text).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn test_round_trip_indented(value in arb_value(), indent in prop_oneof![Just(0usize), Just(1), Just(2), Just(4), Just(8)]) {
        let text = json5::format(&value, Some(indent)).unwrap();
        let parsed = json5::parse(&text).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn test_idempotent_format(value in arb_value()) {
        let first = json5::format(&value, None).unwrap();
        let reparsed = json5::parse(&first).unwrap();
        let second = json5::format(&reparsed, None).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_whitespace_insensitivity_with_comments() {
    let tight = json5::parse(r#"{"a":1,"b":[1,2,3]}"#).unwrap();
    let loose = json5::parse(
        "{\n  \"a\" : 1 , // trailing\n  \"b\" : [ 1 , 2 , /* mid */ 3 ]\n}\n",
    )
    .unwrap();
    assert_eq!(tight, loose);
}

#[test]
fn test_last_key_wins() {
    let value = json5::parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(value.as_object().unwrap().get("a"), Some(&Value::Int(2)));
}

#[test]
fn test_error_position_within_offending_token() {
    let err = json5::parse("[1, 2, 3\n  4]").unwrap_err();
    assert_eq!(err.line, 2);
}

#[test]
fn test_nesting_512_levels_accepted() {
    let mut text = String::new();
    for _ in 0..512 {
        text.push('[');
    }
    text.push('0');
    for _ in 0..512 {
        text.push(']');
    }
    assert!(json5::parse(&text).is_ok());
}
