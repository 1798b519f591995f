//! Parsing documents into value trees.

use jstp::{DuplicateKeys, ParseErrorKind, ParseOptions, Value, ValueType, parse, parse_with_options};

use crate::setup;

#[test]
fn parse_nested_document() {
    setup();

    let (v, err) = Value::parse_or_undefined(r#"{"a":1,"b":[true,null,"x"]}"#);
    assert_eq!(err, "");
    assert_eq!(v.value_type(), ValueType::Object);
    assert_eq!(v.len(), 2);
    assert_eq!(v["a"].number_value(), 1.0);

    let b = v["b"].array_items();
    assert_eq!(b.len(), 3);
    assert!(b[0].bool_value());
    assert!(b[1].is_null());
    assert_eq!(b[2].string_value(), "x");
}

#[test]
fn negative_cases_yield_undefined_and_a_message() {
    setup();

    for input in ["", "{", "[1,]", "\"unterminated", "01"] {
        let (v, err) = Value::parse_or_undefined(input);
        assert!(v.is_undefined(), "input {input:?} produced {v:?}");
        assert!(!err.is_empty(), "input {input:?} produced no error");
    }
}

#[test]
fn error_kinds_for_malformed_input() {
    setup();

    let cases: &[(&str, &str)] = &[
        ("", "jstp::empty_input"),
        ("{", "jstp::unexpected_eof"),
        ("[1,]", "jstp::unexpected_token"),
        ("\"unterminated", "jstp::unexpected_eof"),
        ("01", "jstp::invalid_number"),
        ("1.", "jstp::invalid_number"),
        ("1E400", "jstp::invalid_number"),
        ("@", "jstp::unexpected_char"),
        ("nulll", "jstp::trailing_characters"),
        (r#""\x""#, "jstp::invalid_escape"),
        (r#""\ud800""#, "jstp::invalid_unicode_escape"),
        ("\"tab\there\"", "jstp::control_character"),
        (r#"{"k":1,"k":2}"#, "jstp::duplicate_key"),
        ("[] []", "jstp::trailing_characters"),
    ];

    for (input, code) in cases {
        let err = parse(input).unwrap_err();
        assert_eq!(err.kind().code(), *code, "input {input:?}: {err}");
    }
}

#[test]
fn strings_decode_escapes() {
    setup();

    let v = parse(r#""line\nbreak \"quoted\" \\ \/ é 😀""#).unwrap();
    assert_eq!(v.string_value(), "line\nbreak \"quoted\" \\ / é 😀");
}

#[test]
fn unicode_escapes_decode_to_characters() {
    setup();

    let v = parse(r#""caf\u00e9 \uD83D\uDE00""#).unwrap();
    assert_eq!(v.string_value(), "café 😀");
}

#[test]
fn raw_non_ascii_is_accepted() {
    setup();

    let v = parse(r#"{"ключ": "値"}"#).unwrap();
    assert_eq!(v["ключ"].string_value(), "値");
}

#[test]
fn numbers_follow_json_grammar() {
    setup();

    for (input, expected) in [
        ("0", 0.0),
        ("-0", 0.0),
        ("7", 7.0),
        ("-12", -12.0),
        ("3.25", 3.25),
        ("1e3", 1000.0),
        ("1E-2", 0.01),
        ("2.5e+1", 25.0),
    ] {
        assert_eq!(parse(input).unwrap().number_value(), expected, "{input}");
    }

    for input in ["+1", ".5", "00", "-", "1e", "0x10", "NaN", "Infinity"] {
        assert!(parse(input).is_err(), "{input} should be rejected");
    }
}

#[test]
fn undefined_literal_is_accepted() {
    setup();

    let v = parse("[undefined, null]").unwrap();
    assert!(v[0].is_undefined());
    assert!(v[1].is_null());
    // The element exists even though it holds undefined.
    assert_eq!(v.len(), 2);
}

#[test]
fn object_key_order_is_not_significant() {
    setup();

    let a = parse(r#"{"x": 1, "y": [2, 3]}"#).unwrap();
    let b = parse(r#"{"y": [2, 3], "x": 1}"#).unwrap();
    assert_eq!(a, b);

    let c = parse(r#"{"x": 1, "y": [3, 2]}"#).unwrap();
    assert_ne!(a, c);
}

#[test]
fn depth_guard_is_configurable() {
    setup();

    let nested = format!("{}1{}", "[".repeat(10), "]".repeat(10));

    let strict = ParseOptions::new().max_depth(9);
    let err = parse_with_options(&nested, &strict).unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::DepthLimitExceeded { max_depth: 9 });

    let exact = ParseOptions::new().max_depth(10);
    let v = parse_with_options(&nested, &exact).unwrap();
    let mut cursor = &v;
    for _ in 0..10 {
        cursor = &cursor[0];
    }
    assert_eq!(cursor.number_value(), 1.0);
}

#[test]
fn pathological_nesting_is_an_ordinary_error() {
    setup();

    let input = "[{\"a\":".repeat(50_000);
    let (v, err) = Value::parse_or_undefined(&input);
    assert!(v.is_undefined());
    assert!(err.contains("nesting depth"), "{err}");
}

#[test]
fn duplicate_keys_with_options() {
    setup();

    let input = r#"{"k": "first", "k": "second"}"#;
    assert!(parse(input).is_err());

    let first = ParseOptions::new().duplicate_keys(DuplicateKeys::FirstWins);
    assert_eq!(
        parse_with_options(input, &first).unwrap()["k"].string_value(),
        "first"
    );

    let last = ParseOptions::new().duplicate_keys(DuplicateKeys::LastWins);
    assert_eq!(
        parse_with_options(input, &last).unwrap()["k"].string_value(),
        "second"
    );
}

#[test]
fn same_input_same_result() {
    setup();

    let input = r#"{"a": [1, 2, {"b": "c"}]}"#;
    assert_eq!(parse(input).unwrap(), parse(input).unwrap());

    let bad = "[1, 2";
    assert_eq!(
        parse(bad).unwrap_err().to_string(),
        parse(bad).unwrap_err().to_string()
    );
}
