//! Operator construction, shape dispatch and immutability
//!
//! The factory is the single place that inspects a value's runtime shape.
//! These tests pin down the dispatch rules, the per-kind construction gates
//! and the no-mutation contract every operator method carries.

use crate::*;
use siltdb::{json, CollectionOperator, Error, Operator, ScalarOperator, SortSpec};

#[test]
fn test_factory_wraps_arrays_as_collections() {
    assert!(Operator::new(json!([1, 2, 3])).is_collection());
    assert!(Operator::new(json!([])).is_collection());
    assert!(Operator::new(json!([[1], [2]])).is_collection());
}

#[test]
fn test_factory_wraps_everything_else_as_scalars() {
    for value in [
        json!(null),
        json!(true),
        json!(7),
        json!(1.25),
        json!("text"),
        json!({"a": 1}),
    ] {
        assert!(Operator::new(value).is_scalar());
    }
}

#[test]
fn test_collection_gate_rejects_non_arrays() {
    let err = CollectionOperator::new(json!({"id": 1})).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "array",
            found: "object",
        }
    ));
}

#[test]
fn test_scalar_gate_rejects_arrays() {
    let err = ScalarOperator::new(json!([1])).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "scalar",
            found: "array",
        }
    ));
}

#[test]
fn test_narrowing_reports_the_offending_shape() {
    let err = Operator::new(json!("note")).into_collection().unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { found: "string", .. }));
    assert_eq!(
        err.to_string(),
        "Type mismatch: expected array, found string"
    );
}

/// Every collection method leaves the receiver's snapshot untouched.
#[test]
fn test_collection_methods_never_mutate_the_receiver() {
    let col = creatures();
    let before = col.value().clone();

    let _ = col.size();
    let _ = col.push(json!({"id": 9, "name": "newt"}));
    let _ = col.find_one(json!({"name": "tiger"}));
    let _ = col.find_all(json!({"height": 17}));
    let _ = col.find_all_and_update(json!({"height": 17}), |item| {
        let mut next = item.clone();
        next["height"] = json!(0);
        next
    });
    let _ = col.find_all_and_remove(json!({"height": 17}));
    let _ = col.find_by_id(5);
    let _ = col.sort(SortSpec::fields(["height"])).unwrap();
    let _ = col.page(2, 3);
    let _ = col.pick(&["name"]);

    assert_eq!(col.value(), &before);
}

#[test]
fn test_scalar_update_returns_a_new_operator() {
    let profile = ScalarOperator::new(json!({"name": "John Doe"})).unwrap();
    let renamed = profile.update(|_| json!({"name": "Jane Doe"})).unwrap();
    assert_eq!(renamed.value(), &json!({"name": "Jane Doe"}));
    // The receiver still holds its own snapshot
    assert_eq!(profile.value(), &json!({"name": "John Doe"}));
}

#[test]
fn test_scalar_update_never_widens_to_a_collection() {
    let op = ScalarOperator::new(json!({"tags": "none"})).unwrap();
    let err = op.update(|_| json!(["a", "b"])).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "scalar",
            found: "array",
        }
    ));
}

#[test]
fn test_operators_wrap_a_snapshot_not_the_source() {
    let mut source = json!([{"id": 1}]);
    let col = CollectionOperator::new(source.clone()).unwrap();
    source[0]["id"] = json!(99);
    assert_eq!(col.value()[0]["id"], json!(1));
}
