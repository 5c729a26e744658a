//! Query Layer Comprehensive Test Suite
//!
//! End-to-end coverage of the chainable operator layer and the document
//! store facade around it:
//!
//! - `wrapping`: operator construction, shape dispatch and immutability
//! - `find`: predicates and the find/update/remove family
//! - `sorting`: field-list and comparator sorts, comparison failures
//! - `paging`: 1-based pagination over the current order
//! - `projection`: field projection on scalars and collections
//! - `end_to_end`: full read-query-write cycles against a real file
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test query_comprehensive
//!
//! # Run one module
//! cargo test --test query_comprehensive sorting::
//!
//! # Run with output
//! cargo test --test query_comprehensive -- --nocapture
//! ```

use siltdb::{CollectionOperator, Value};

pub mod find;
pub mod paging;
pub mod wrapping;

// =============================================================================
// SHARED FIXTURES
// =============================================================================

/// Eight creatures in deliberately scrambled input order. Tiger and panther
/// share a height, so field sorts have a tie to exercise; the weights are
/// pairwise distinct.
pub fn bestiary() -> Value {
    siltdb::json!([
        { "id": 5, "name": "tiger",   "height": 17,  "weight": 905 },
        { "id": 6, "name": "panther", "height": 17,  "weight": 795 },
        { "id": 4, "name": "boar",    "height": 16,  "weight": 1500 },
        { "id": 7, "name": "moose",   "height": 19,  "weight": 950 },
        { "id": 1, "name": "shrew",   "height": 1,   "weight": 1 },
        { "id": 3, "name": "lynx",    "height": 3,   "weight": 11 },
        { "id": 2, "name": "hare",    "height": 2,   "weight": 8 },
        { "id": 8, "name": "whale",   "height": 145, "weight": 3980 },
    ])
}

/// The bestiary wrapped in a collection operator.
pub fn creatures() -> CollectionOperator {
    CollectionOperator::new(bestiary()).unwrap()
}

/// Names of the collection's items, in collection order.
pub fn names(col: &CollectionOperator) -> Vec<String> {
    col.value()
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}
