//! Core types for the silt document store
//!
//! This crate defines the foundational types used throughout the system:
//! - Error: unified error type and `Result` alias
//! - DocPath / PathSegment: dotted/bracketed paths into a JSON document
//! - Predicate: collection filter, either a callback or a partial-object pattern
//! - type_name: runtime type names used in error messages

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod error;
pub mod path;
pub mod predicate;
pub mod value;

// Re-export commonly used types
pub use error::{Error, Result};
pub use path::{get_path, set_path, DocPath, PathError, PathParseError, PathSegment};
pub use predicate::Predicate;
pub use value::type_name;
