//! Predicates and the find/update/remove family
//!
//! Patterns match partially: every pattern field must deep-equal the item's
//! field, extra item fields are ignored. Callbacks see the whole item.

use crate::*;
use siltdb::{json, CollectionOperator, Predicate};

#[test]
fn test_find_one_matches_partial_pattern() {
    let col = CollectionOperator::new(json!([
        { "id": "1", "name": "foo" },
        { "id": "2", "name": "bar" },
    ]))
    .unwrap();
    let found = col.find_one(json!({"name": "foo"}));
    assert_eq!(found.value(), &json!({ "id": "1", "name": "foo" }));
}

#[test]
fn test_find_one_takes_the_first_of_several_matches() {
    let found = creatures().find_one(json!({"height": 17}));
    assert_eq!(found.value()["name"], json!("tiger"));
}

#[test]
fn test_find_one_without_match_wraps_null() {
    let found = creatures().find_one(json!({"name": "dodo"}));
    assert!(found.is_scalar());
    assert!(found.value().is_null());
}

#[test]
fn test_find_one_callback_predicate() {
    let heavy = creatures().find_one(Predicate::callback(|item| {
        item["weight"].as_i64().unwrap_or(0) > 1000
    }));
    assert_eq!(heavy.value()["name"], json!("boar"));
}

#[test]
fn test_find_all_counts_agree_with_find_one() {
    let col = creatures();
    for pattern in [
        json!({"height": 17}),
        json!({"name": "whale"}),
        json!({"name": "dodo"}),
    ] {
        let all = col.find_all(pattern.clone());
        let expected = col
            .value()
            .as_array()
            .unwrap()
            .iter()
            .filter(|item| Predicate::pattern(pattern.clone()).matches(item))
            .count();
        assert_eq!(all.size(), expected);

        let first = col.find_one(pattern);
        match all.size() {
            0 => assert!(first.value().is_null()),
            _ => assert_eq!(first.value(), &all.value()[0]),
        }
    }
}

#[test]
fn test_find_all_keeps_collection_order() {
    let tall = creatures().find_all(Predicate::callback(|item| {
        item["height"].as_i64().unwrap_or(0) >= 16
    }));
    assert_eq!(names(&tall), ["tiger", "panther", "boar", "moose", "whale"]);
}

#[test]
fn test_find_all_and_update_leaves_non_matches_identical() {
    let col = creatures();
    let tagged = col.find_all_and_update(json!({"height": 17}), |item| {
        let mut next = item.clone();
        next["tagged"] = json!(true);
        next
    });

    let before = col.value().as_array().unwrap();
    let after = tagged.value().as_array().unwrap();
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after) {
        if b["height"] == json!(17) {
            assert_eq!(a["tagged"], json!(true));
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_find_all_and_remove_drops_every_match() {
    let col = CollectionOperator::new(json!([
        { "id": "1", "n": "A" },
        { "id": "2", "n": "B" },
        { "id": "3", "n": "A" },
    ]))
    .unwrap();
    let remaining = col.find_all_and_remove(json!({"n": "A"}));
    assert_eq!(remaining.value(), &json!([ { "id": "2", "n": "B" } ]));
}

#[test]
fn test_find_by_id_uses_deep_equality() {
    let col = CollectionOperator::new(json!([
        { "id": "7", "kind": "string id" },
        { "id": 7, "kind": "number id" },
    ]))
    .unwrap();
    assert_eq!(col.find_by_id("7").value()["kind"], json!("string id"));
    assert_eq!(col.find_by_id(7).value()["kind"], json!("number id"));
}

#[test]
fn test_find_by_id_and_update_only_touches_that_id() {
    let renamed = creatures().find_by_id_and_update(8, |item| {
        let mut next = item.clone();
        next["name"] = json!("orca");
        next
    });
    assert_eq!(renamed.size(), creatures().size());
    assert_eq!(renamed.find_by_id(8).value()["name"], json!("orca"));
    assert_eq!(renamed.find_by_id(5).value()["name"], json!("tiger"));
}

#[test]
fn test_find_by_id_and_remove_shrinks_by_the_matches() {
    let without = creatures().find_by_id_and_remove(1);
    assert_eq!(without.size(), 7);
    assert!(without.find_by_id(1).value().is_null());
}

#[test]
fn test_push_appends_at_the_end() {
    let grown = creatures().push(json!({ "id": 9, "name": "newt", "height": 1, "weight": 1 }));
    assert_eq!(grown.size(), 9);
    assert_eq!(grown.value()[8]["name"], json!("newt"));
}

#[test]
fn test_object_pattern_never_matches_scalar_items() {
    let col = CollectionOperator::new(json!(["a", "b", 3])).unwrap();
    assert_eq!(col.find_all(json!({"any": "field"})).size(), 0);
}

#[test]
fn test_whole_value_pattern_matches_scalar_items() {
    let col = CollectionOperator::new(json!(["a", "b", 3])).unwrap();
    assert_eq!(col.find_all(json!("b")).size(), 1);
    assert_eq!(col.find_one(json!(3)).value(), &json!(3));
}

#[test]
fn test_pattern_with_several_fields_requires_all_of_them() {
    let col = creatures();
    assert_eq!(col.find_all(json!({"height": 17, "weight": 795})).size(), 1);
    assert_eq!(col.find_all(json!({"height": 17, "weight": 1})).size(), 0);
}
