//! Serializing value trees back to text.

use insta::assert_snapshot;
use jstp::{Object, Value, parse, record};

use crate::setup;

#[test]
fn dump_array_of_numbers() {
    setup();

    let v = Value::from(vec![1.0, 2.0, 3.0]);
    assert_eq!(v.dump(), "[1,2,3]");
}

#[test]
fn dump_mixed_document() {
    setup();

    let v = record!({
        "name": "jstp",
        "version": 1,
        "ratio": 0.25,
        "tags": ["a", "b"],
        "extra": null,
        "missing": undefined,
        "nested": { "ok": true, "list": [] }
    });
    assert_snapshot!(v.dump(), @r#"{"extra":null,"missing":undefined,"name":"jstp","nested":{"list":[],"ok":true},"ratio":0.25,"tags":["a","b"],"version":1}"#);
}

#[test]
fn dump_normalizes_whitespace_and_key_order() {
    setup();

    let v = parse("{ \"b\" : [ 1 , 2 ] ,\n \"a\" : { } }").unwrap();
    assert_snapshot!(v.dump(), @r#"{"a":{},"b":[1,2]}"#);
}

#[test]
fn dump_escapes_strings() {
    setup();

    let v = Value::from("quote \" backslash \\ newline \n tab \t");
    assert_snapshot!(v.dump(), @r#""quote \" backslash \\ newline \n tab \t""#);
}

#[test]
fn dump_numbers() {
    setup();

    let v = Value::from(vec![0.5, -0.0, 100.0, 1e21, 123456.789, -1e-7]);
    assert_snapshot!(v.dump(), @"[0.5,-0,100,1e21,123456.789,-1e-7]");
}

#[test]
fn undefined_dumps_distinctly_from_null() {
    setup();

    assert_eq!(Value::UNDEFINED.dump(), "undefined");
    assert_eq!(Value::NULL.dump(), "null");
    assert_ne!(Value::UNDEFINED.dump(), Value::NULL.dump());
}

#[test]
fn dump_then_parse_round_trips() {
    setup();

    let v = record!({
        "s": "multi\nline \u{1} é",
        "n": [0, -1.5, 1e300, 5e-324],
        "u": [undefined, null, false]
    });
    let text = v.dump();
    let back = parse(&text).unwrap();
    assert_eq!(back, v);
    assert_eq!(back.dump(), text);
}

#[test]
fn composed_values_dump_shared_children_each_time() {
    setup();

    let child = Value::from(vec![1, 2]);
    let mut entries = Object::new();
    entries.insert("left".into(), child.clone());
    entries.insert("right".into(), child);
    let v = Value::object(entries);
    assert_snapshot!(v.dump(), @r#"{"left":[1,2],"right":[1,2]}"#);
}

#[test]
fn display_prints_the_dump() {
    setup();

    let v = record!(["x", 1]);
    assert_eq!(format!("value: {v}"), r#"value: ["x",1]"#);
}
