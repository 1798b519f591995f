//! Soft-failure accessors and lookups.

use jstp::{Object, Value, ValueType, parse, record};

use crate::setup;

fn one_of_each() -> Vec<Value> {
    vec![
        Value::undefined(),
        Value::null(),
        Value::bool(true),
        Value::number(4.5),
        Value::string("text"),
        Value::array(vec![Value::TRUE]),
        Value::object(Object::from([("k".to_string(), Value::NULL)])),
    ]
}

#[test]
fn every_variant_reports_its_type() {
    setup();

    let types: Vec<ValueType> = one_of_each().iter().map(Value::value_type).collect();
    assert_eq!(
        types,
        [
            ValueType::Undefined,
            ValueType::Null,
            ValueType::Bool,
            ValueType::Number,
            ValueType::String,
            ValueType::Array,
            ValueType::Object,
        ]
    );

    for v in one_of_each() {
        let flags = [
            v.is_undefined(),
            v.is_null(),
            v.is_bool(),
            v.is_number(),
            v.is_string(),
            v.is_array(),
            v.is_object(),
        ];
        assert_eq!(flags.iter().filter(|&&f| f).count(), 1, "{v:?}");
    }
}

#[test]
fn wrong_accessor_returns_zero_value() {
    setup();

    for v in one_of_each() {
        let t = v.value_type();
        if t != ValueType::Bool {
            assert!(!v.bool_value());
        }
        if t != ValueType::Number {
            assert_eq!(v.number_value(), 0.0);
        }
        if t != ValueType::String {
            assert_eq!(v.string_value(), "");
        }
        if t != ValueType::Array {
            assert!(v.array_items().is_empty());
        }
        if t != ValueType::Object {
            assert!(v.object_items().is_empty());
        }
    }
}

#[test]
fn indexing_a_non_array_yields_undefined() {
    setup();

    assert!(parse("null").unwrap()[0].is_undefined());
    for v in one_of_each() {
        if !v.is_array() {
            assert!(v[0].is_undefined(), "{v:?}");
        }
        if !v.is_object() {
            assert!(v["k"].is_undefined(), "{v:?}");
        }
    }
}

#[test]
fn out_of_range_and_missing_keys_yield_undefined() {
    setup();

    let v = record!({"list": [10, 20], "map": {"x": 1}});
    assert_eq!(v["list"][1].number_value(), 20.0);
    assert!(v["list"][2].is_undefined());
    assert!(v["list"][usize::MAX].is_undefined());
    assert!(v["map"]["y"].is_undefined());
    assert!(v["nope"]["deeper"][3].is_undefined());
}

#[test]
fn strict_accessors_distinguish_absence() {
    setup();

    let v = record!({"zero": 0, "flag": false});
    assert_eq!(v["zero"].as_number(), Some(0.0));
    assert_eq!(v["missing"].as_number(), None);
    assert_eq!(v["flag"].as_bool(), Some(false));
    assert_eq!(v.get_key("flag").and_then(Value::as_bool), Some(false));
    assert!(v.get_key("missing").is_none());
    assert!(v.get(0).is_none());
}

#[test]
fn object_items_iterate_in_key_order() {
    setup();

    let v = parse(r#"{"b": 2, "c": 3, "a": 1}"#).unwrap();
    let keys: Vec<&str> = v.object_items().keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b", "c"]);
}

#[test]
fn updating_a_field_builds_a_new_object() {
    setup();

    let original = record!({"big": [1, 2, 3], "n": 1});

    let mut entries = original.object_items().clone();
    entries.insert("n".into(), Value::from(2));
    let updated = Value::object(entries);

    assert_eq!(original["n"].number_value(), 1.0);
    assert_eq!(updated["n"].number_value(), 2.0);
    // The untouched child is shared, not copied.
    assert!(updated["big"].ptr_eq(&original["big"]));
}

#[test]
fn clones_are_shallow() {
    setup();

    let v = parse(r#"{"payload": "a long string value"}"#).unwrap();
    let copy = v.clone();
    assert!(copy.ptr_eq(&v));
    assert!(copy["payload"].ptr_eq(&v["payload"]));
}

#[test]
fn values_cross_threads() {
    setup();

    let v = record!({"shared": [1, 2, 3]});
    let handle = {
        let v = v.clone();
        std::thread::spawn(move || v["shared"].len())
    };
    assert_eq!(handle.join().unwrap(), 3);
}
