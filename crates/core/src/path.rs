//! Paths into a JSON document
//!
//! A document path addresses one location inside a JSON value using a
//! sequence of key and index segments. Paths parse from the dotted/bracketed
//! string syntax used across the public API (`"user.name"`, `"posts[1]"`,
//! `""` for the root) and drive the two document accessors, [`get_path`] and
//! [`set_path`].

use crate::value::type_name;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// DocPath and PathSegment
// =============================================================================

/// Error type for document path parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Empty key in path
    #[error("empty key in path at position {0}")]
    EmptyKey(usize),
    /// Unclosed bracket
    #[error("unclosed bracket starting at position {0}")]
    UnclosedBracket(usize),
    /// Invalid array index
    #[error("invalid array index at position {0}: {1}")]
    InvalidIndex(usize, String),
    /// Unexpected character
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
}

/// A segment in a document path
///
/// Paths are composed of key segments (object property access)
/// and index segments (array element access).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    /// Object key: `.foo`
    Key(String),
    /// Array index: `[0]`
    Index(usize),
}

/// A path into a JSON document
///
/// # Path Syntax
///
/// | Syntax | Meaning | Example |
/// |--------|---------|---------|
/// | `key` | Object property | `user` |
/// | `[n]` | Array index | `[0]` |
/// | `key1.key2` | Nested property | `user.name` |
/// | `key[n]` | Property then index | `items[0]` |
/// | (empty) | Root | `` |
///
/// A leading dot is tolerated, so `.user.name` and `user.name` are the same
/// path.
///
/// # Examples
///
/// ```
/// use silt_core::path::DocPath;
///
/// let root = DocPath::root();
/// assert!(root.is_root());
///
/// let user_name = DocPath::root().key("user").key("name");
/// let parsed: DocPath = "user.name".parse().unwrap();
/// assert_eq!(parsed, user_name);
///
/// let first_item: DocPath = "items[0]".parse().unwrap();
/// assert_eq!(first_item.to_string(), "items[0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DocPath {
    segments: Vec<PathSegment>,
}

impl DocPath {
    /// Create the root path (empty path)
    pub fn root() -> Self {
        DocPath {
            segments: Vec::new(),
        }
    }

    /// Create a path from a vector of segments
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        DocPath { segments }
    }

    /// Get the path segments
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a key segment (builder pattern)
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(key.into()));
        self
    }

    /// Append an index segment (builder pattern)
    pub fn index(mut self, idx: usize) -> Self {
        self.segments.push(PathSegment::Index(idx));
        self
    }
}

impl FromStr for DocPath {
    type Err = PathParseError;

    /// Parse a path from a string
    ///
    /// Supported syntax:
    /// - `foo` or `.foo` - object key
    /// - `[0]` - array index
    /// - `foo.bar` - nested keys
    /// - `foo[0]` - key then index
    /// - `foo[0].bar` - mixed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(DocPath::root());
        }

        let mut segments = Vec::new();
        let chars: Vec<char> = s.chars().collect();
        let mut i = 0;

        // Skip leading dot if present
        if i < chars.len() && chars[i] == '.' {
            i += 1;
        }

        while i < chars.len() {
            if chars[i] == '.' {
                // Start of a key segment
                i += 1;
                if i >= chars.len() {
                    return Err(PathParseError::EmptyKey(i));
                }
            }

            if chars[i] == '[' {
                // Array index segment
                let start = i;
                i += 1;
                let idx_start = i;

                // Find closing bracket
                while i < chars.len() && chars[i] != ']' {
                    i += 1;
                }

                if i >= chars.len() {
                    return Err(PathParseError::UnclosedBracket(start));
                }

                let idx_str: String = chars[idx_start..i].iter().collect();
                let idx = idx_str
                    .parse::<usize>()
                    .map_err(|_| PathParseError::InvalidIndex(idx_start, idx_str))?;

                segments.push(PathSegment::Index(idx));
                i += 1; // Skip closing bracket
            } else if chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '-' {
                // Key segment
                let key_start = i;
                while i < chars.len()
                    && (chars[i].is_alphanumeric() || chars[i] == '_' || chars[i] == '-')
                {
                    i += 1;
                }
                let key: String = chars[key_start..i].iter().collect();
                segments.push(PathSegment::Key(key));
            } else {
                return Err(PathParseError::UnexpectedChar(chars[i], i));
            }
        }

        Ok(DocPath { segments })
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(k) if i == 0 => write!(f, "{}", k)?,
                PathSegment::Key(k) => write!(f, ".{}", k)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

// =============================================================================
// Path Operations Error
// =============================================================================

/// Error type for path-based writes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Type mismatch during path traversal
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Expected type
        expected: &'static str,
        /// Actual type found
        found: &'static str,
    },

    /// Array index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The array length
        len: usize,
    },
}

// =============================================================================
// Path Operations
// =============================================================================

/// Get the value at a path within a JSON document
///
/// Traverses the document following the path segments, returning a reference
/// to the value at the specified location. Returns `None` when a key is
/// missing, an index is out of range, or a segment does not match the shape
/// of the value it lands on.
///
/// # Examples
///
/// ```
/// use silt_core::path::{get_path, DocPath};
/// use serde_json::json;
///
/// let doc = json!({
///     "user": { "name": "Alice", "scores": [100, 95, 88] }
/// });
///
/// let path: DocPath = "user.scores[1]".parse().unwrap();
/// assert_eq!(get_path(&doc, &path), Some(&json!(95)));
///
/// // Root path returns the entire document
/// assert_eq!(get_path(&doc, &DocPath::root()), Some(&doc));
///
/// let missing: DocPath = "user.email".parse().unwrap();
/// assert_eq!(get_path(&doc, &missing), None);
/// ```
pub fn get_path<'a>(value: &'a Value, path: &DocPath) -> Option<&'a Value> {
    let mut current = value;

    for segment in path.segments() {
        match (segment, current) {
            (PathSegment::Key(key), Value::Object(obj)) => {
                current = obj.get(key)?;
            }
            (PathSegment::Index(idx), Value::Array(arr)) => {
                current = arr.get(*idx)?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Set the value at a path within a JSON document
///
/// Creates intermediate objects and arrays as needed when the path doesn't
/// exist. The type of an intermediate container (object vs array) is
/// determined by the next segment in the path. An index segment must stay in
/// bounds while traversing; at the final segment an index equal to the array
/// length appends.
///
/// Setting at the root path replaces the whole document.
///
/// # Examples
///
/// ```
/// use silt_core::path::{get_path, set_path, DocPath};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// let path: DocPath = "user.profile.name".parse().unwrap();
/// set_path(&mut doc, &path, json!("Alice")).unwrap();
/// assert_eq!(get_path(&doc, &path), Some(&json!("Alice")));
/// ```
pub fn set_path(root: &mut Value, path: &DocPath, value: Value) -> Result<(), PathError> {
    // Root path replaces the entire value
    if path.is_root() {
        *root = value;
        return Ok(());
    }

    let segments = path.segments();
    let (parents, last) = segments.split_at(segments.len() - 1);
    let last = &last[0];

    // Navigate to the parent, creating intermediate containers as needed
    let mut current = root;
    for (i, segment) in parents.iter().enumerate() {
        let next = &segments[i + 1];

        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(obj)) => {
                obj.entry(key.clone()).or_insert_with(|| match next {
                    PathSegment::Key(_) => Value::Object(Map::new()),
                    PathSegment::Index(_) => Value::Array(Vec::new()),
                })
            }
            (PathSegment::Key(_), other) => {
                return Err(PathError::TypeMismatch {
                    expected: "object",
                    found: type_name(other),
                })
            }
            (PathSegment::Index(idx), Value::Array(arr)) => {
                let len = arr.len();
                arr.get_mut(*idx)
                    .ok_or(PathError::IndexOutOfBounds { index: *idx, len })?
            }
            (PathSegment::Index(_), other) => {
                return Err(PathError::TypeMismatch {
                    expected: "array",
                    found: type_name(other),
                })
            }
        };
    }

    // Set the value at the last segment
    match (last, current) {
        (PathSegment::Key(key), Value::Object(obj)) => {
            obj.insert(key.clone(), value);
            Ok(())
        }
        (PathSegment::Key(_), other) => Err(PathError::TypeMismatch {
            expected: "object",
            found: type_name(other),
        }),
        (PathSegment::Index(idx), Value::Array(arr)) => {
            if *idx < arr.len() {
                arr[*idx] = value;
                Ok(())
            } else if *idx == arr.len() {
                arr.push(value);
                Ok(())
            } else {
                Err(PathError::IndexOutOfBounds {
                    index: *idx,
                    len: arr.len(),
                })
            }
        }
        (PathSegment::Index(_), other) => Err(PathError::TypeMismatch {
            expected: "array",
            found: type_name(other),
        }),
    }
}
