//! 1-based pagination over the current collection order

use crate::*;
use siltdb::{json, CollectionOperator, Predicate};

#[test]
fn test_page_slices_in_order() {
    let col = creatures();
    assert_eq!(names(&col.page(1, 3)), ["tiger", "panther", "boar"]);
    assert_eq!(names(&col.page(2, 3)), ["moose", "shrew", "lynx"]);
    // The final page may be short
    assert_eq!(names(&col.page(3, 3)), ["hare", "whale"]);
}

#[test]
fn test_page_after_sort_returns_the_lowest_slice() {
    let first_two = creatures().sort(["height"]).unwrap().page(1, 2);
    assert_eq!(names(&first_two), ["shrew", "hare"]);
}

#[test]
fn test_page_beyond_the_end_is_empty() {
    let col = creatures();
    assert_eq!(col.page(4, 3).size(), 0);
    assert_eq!(col.page(50, 8).size(), 0);
}

#[test]
fn test_page_zero_and_size_zero_are_empty() {
    let col = creatures();
    assert_eq!(col.page(0, 3).size(), 0);
    assert_eq!(col.page(1, 0).size(), 0);
    assert_eq!(col.page(0, 0).size(), 0);
}

#[test]
fn test_page_composes_with_filters() {
    let tall = creatures()
        .find_all(Predicate::callback(|item| {
            item["height"].as_i64().unwrap_or(0) >= 16
        }))
        .page(2, 2);
    assert_eq!(names(&tall), ["boar", "moose"]);
}

#[test]
fn test_every_item_appears_on_exactly_one_page() {
    let col = creatures();
    let mut seen = Vec::new();
    for page in 1usize.. {
        let slice = col.page(page, 3);
        if slice.size() == 0 {
            break;
        }
        seen.extend(names(&slice));
    }
    assert_eq!(seen, names(&col));
}

#[test]
fn test_page_size_covering_the_whole_collection() {
    let col = creatures();
    assert_eq!(col.page(1, 100).size(), col.size());
    assert_eq!(names(&col.page(1, 100)), names(&col));
}

#[test]
fn test_paging_an_empty_collection() {
    let empty = CollectionOperator::new(json!([])).unwrap();
    assert_eq!(empty.page(1, 5).size(), 0);
}
