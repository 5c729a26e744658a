//! SiltDB - Embedded single-file JSON document store with a chainable query layer
//!
//! SiltDB persists one JSON document to a single file and exposes it through
//! chainable operators: scalars support `update` and `pick`, collections
//! support `find_*`, `sort`, `page` and `pick`.
//!
//! # Quick Start
//!
//! ```
//! use siltdb::{json, Silt, SortSpec};
//!
//! fn main() -> siltdb::Result<()> {
//!     let dir = tempfile::tempdir()?;
//!     let db = Silt::connect(dir.path().join("db.json"))?;
//!
//!     // Seed the whole document
//!     db.seed(json!({
//!         "posts": [
//!             { "id": 1, "title": "hello", "views": 20 },
//!             { "id": 2, "title": "world", "views": 5 },
//!         ]
//!     }))?;
//!
//!     // Query with chainable operators
//!     let titles = db
//!         .get("posts")?
//!         .into_collection()?
//!         .sort(SortSpec::fields(["views"]))?
//!         .pick(&["title"]);
//!     assert_eq!(titles.value()[0]["title"], json!("world"));
//!
//!     // Write back at a path
//!     db.write("posts[0].views", json!(21))?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Silt`] facade, which reads and writes the
//! document via a connector that serializes writes through a background
//! worker. Query operators never touch the file; they work on snapshots.

// Re-export the public API from silt-api
pub use silt_api::*;
