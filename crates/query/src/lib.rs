//! Chainable operator layer over JSON snapshots
//!
//! An operator wraps one immutable JSON value and exposes query methods over
//! it. Every method returns a new operator; the wrapped snapshot is never
//! mutated in place, so intermediate results of a chain stay valid.
//!
//! [`Operator::new`] is the single place that inspects a value's runtime
//! shape: arrays become [`CollectionOperator`]s, everything else becomes a
//! [`ScalarOperator`].
//!
//! ```
//! use silt_query::Operator;
//! use serde_json::json;
//!
//! let posts = Operator::new(json!([
//!     { "id": 1, "title": "first", "views": 10 },
//!     { "id": 2, "title": "second", "views": 3 },
//! ]));
//!
//! let titles = posts
//!     .into_collection().unwrap()
//!     .sort(["views"]).unwrap()
//!     .pick(&["title"]);
//! assert_eq!(
//!     titles.value(),
//!     &json!([{ "title": "second" }, { "title": "first" }])
//! );
//! ```

pub mod collection;
pub mod operator;
pub mod scalar;
pub mod snapshot;
pub mod sort;

pub use collection::CollectionOperator;
pub use operator::Operator;
pub use scalar::ScalarOperator;
pub use snapshot::Snapshot;
pub use sort::SortSpec;
