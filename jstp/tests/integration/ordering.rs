//! Total order over values.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use jstp::{Value, parse, record};

use crate::setup;

#[test]
fn object_order_follows_sorted_keys() {
    setup();

    // Keys iterate in lexicographic order, so the first differing pair
    // decides: "a" < "z".
    let z = record!({"z": 1});
    let a = record!({"a": 1});
    assert!(!(z < a));
    assert!(a < z);
    assert_eq!(z.cmp(&a), Ordering::Greater);
}

#[test]
fn object_with_fewer_pairs_sorts_first_on_common_prefix() {
    setup();

    let short = record!({"a": 1});
    let long = record!({"a": 1, "b": 0});
    assert!(short < long);
}

#[test]
fn array_order_is_element_order() {
    setup();

    assert!(record!([1, 2]) != record!([2, 1]));
    assert!(record!([1, 2]) < record!([2, 1]));
    assert!(record!([]) < record!([undefined]));
}

#[test]
fn cross_type_ranking() {
    setup();

    let ranked = parse(r#"[undefined, null, true, 0, "", [], {}]"#).unwrap();
    let items = ranked.array_items();
    for i in 0..items.len() {
        for j in 0..items.len() {
            assert_eq!(items[i].cmp(&items[j]), i.cmp(&j), "{i} vs {j}");
        }
    }
}

#[test]
fn trichotomy_on_a_sample() {
    setup();

    let sample = [
        record!(undefined),
        record!(null),
        record!(false),
        record!(true),
        record!(-1),
        record!(0),
        record!(-0.0),
        record!(2.5),
        record!(""),
        record!("a"),
        record!("b"),
        record!([]),
        record!([1]),
        record!([1, 2]),
        record!({}),
        record!({"a": 1}),
        record!({"a": 2}),
        record!({"b": 0}),
    ];

    for a in &sample {
        for b in &sample {
            let holds = [a < b, a == b, b < a];
            assert_eq!(
                holds.iter().filter(|&&h| h).count(),
                1,
                "{a:?} vs {b:?}: {holds:?}"
            );
        }
    }
}

#[test]
fn values_work_as_map_keys() {
    setup();

    let mut counts = BTreeMap::new();
    for text in ["1", "\"1\"", "1.0", "[1]", "{\"k\": 1}", "[1.0]"] {
        *counts.entry(parse(text).unwrap()).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 4);
    assert_eq!(counts[&record!(1)], 2);
    assert_eq!(counts[&record!([1])], 2);

    let keys: Vec<String> = counts.keys().map(Value::dump).collect();
    assert_eq!(keys, ["1", "\"1\"", "[1]", "{\"k\":1}"]);
}
