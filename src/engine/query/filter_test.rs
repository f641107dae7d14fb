use crate::engine::query::filter::Filter;
use serde_json::json;

#[test]
fn selector_serializes_in_store_dialect() {
    let f = Filter::equals("country", "us");
    assert_eq!(
        serde_json::to_value(&f).unwrap(),
        json!({"type": "selector", "dimension": "country", "value": "us"})
    );
}

#[test]
fn not_equals_wraps_selector_in_not() {
    let f = Filter::not_equals("country", "us");
    assert_eq!(
        serde_json::to_value(&f).unwrap(),
        json!({
            "type": "not",
            "field": {"type": "selector", "dimension": "country", "value": "us"}
        })
    );
}

#[test]
fn is_in_builds_or_of_selectors() {
    let f = Filter::is_in("device", ["ios", "android"]);
    assert_eq!(
        serde_json::to_value(&f).unwrap(),
        json!({
            "type": "or",
            "fields": [
                {"type": "selector", "dimension": "device", "value": "ios"},
                {"type": "selector", "dimension": "device", "value": "android"}
            ]
        })
    );
}

#[test]
fn all_of_one_clause_is_not_wrapped() {
    let only = Filter::equals("a", "1");
    assert_eq!(Filter::all(vec![only.clone()]), Some(only));
    assert_eq!(Filter::all(vec![]), None);
}

#[test]
fn all_of_many_clauses_is_and() {
    let f = Filter::all(vec![Filter::equals("a", "1"), Filter::equals("b", "2")]).unwrap();
    match f {
        Filter::And { fields } => assert_eq!(fields.len(), 2),
        other => panic!("Expected And, got {:?}", other),
    }
}

#[test]
fn columns_are_deduplicated_in_first_seen_order() {
    let f = Filter::all(vec![
        Filter::is_in("device", ["ios", "android"]),
        Filter::not_equals("country", "us"),
        Filter::equals("device", "web"),
    ])
    .unwrap();
    assert_eq!(f.columns(), vec!["device", "country"]);
}

#[test]
fn filter_deserializes_back() {
    let raw = json!({"type": "not", "field": {"type": "selector", "dimension": "x", "value": "1"}});
    let f: Filter = serde_json::from_value(raw).unwrap();
    assert_eq!(f, Filter::not_equals("x", "1"));
}
