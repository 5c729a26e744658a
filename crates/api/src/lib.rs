//! High-level document store facade
//!
//! [`Silt`] ties the layers together: one JSON document file behind a
//! [`Connector`], addressed with document paths, queried through the
//! operator layer.

pub mod facade;

pub use facade::Silt;

// Re-export the full public surface so downstream users need one import
pub use serde_json::{json, Value};
pub use silt_core::{DocPath, Error, PathSegment, Predicate, Result};
pub use silt_query::{CollectionOperator, Operator, ScalarOperator, Snapshot, SortSpec};
pub use silt_store::{ConnectOptions, Connector, DEFAULT_WRITE_TIMEOUT};
