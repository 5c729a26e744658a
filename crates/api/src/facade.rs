//! The document store facade

use serde_json::Value;
use silt_core::{get_path, set_path, DocPath, Result};
use silt_query::Operator;
use silt_store::{ConnectOptions, Connector};
use std::path::PathBuf;
use tracing::{debug, info};

/// A single-file JSON document store.
///
/// `get` wraps the value at a path in an [`Operator`] for chainable querying;
/// `write` and `seed` persist changes by replacing the whole document through
/// the connector's write worker.
///
/// Reads are not synchronized against writes: `write`, `update` and friends
/// read the current document, modify it in memory, and queue the full
/// replacement, so interleaved writers resolve to last-writer-wins.
///
/// ```
/// use silt_api::{json, Silt};
///
/// fn demo() -> silt_api::Result<()> {
///     let dir = tempfile::tempdir()?;
///     let db = Silt::connect(dir.path().join("db.json"))?;
///
///     db.seed(json!({ "users": [ { "id": 1, "name": "ana" } ] }))?;
///     db.write("users[1]", json!({ "id": 2, "name": "bo" }))?;
///
///     let users = db.get("users")?.into_collection()?;
///     assert_eq!(users.size(), 2);
///     assert_eq!(db.get("users[0].name")?.value(), &json!("ana"));
///     Ok(())
/// }
/// # demo().unwrap();
/// ```
pub struct Silt {
    connector: Connector,
}

impl Silt {
    /// Open the document file at `path` with default options.
    pub fn connect(path: impl Into<PathBuf>) -> Result<Self> {
        Self::connect_with(path, ConnectOptions::new())
    }

    /// Open the document file at `path` with explicit options.
    pub fn connect_with(path: impl Into<PathBuf>, options: ConnectOptions) -> Result<Self> {
        let connector = Connector::connect(path, options)?;
        debug!(path = %connector.path().display(), "document store ready");
        Ok(Silt { connector })
    }

    /// Wrap the value at `path` in an operator.
    ///
    /// The empty path addresses the whole document. A path that does not
    /// exist wraps null rather than failing, so callers can probe freely.
    pub fn get(&self, path: &str) -> Result<Operator> {
        let path: DocPath = path.parse()?;
        let document = self.connector.read()?;
        let value = get_path(&document, &path).cloned().unwrap_or(Value::Null);
        Ok(Operator::new(value))
    }

    /// Replace the whole document.
    pub fn seed(&self, document: impl Into<Value>) -> Result<u64> {
        info!("seeding document");
        self.connector.write(document.into())
    }

    /// Set the value at `path` and persist the document.
    ///
    /// Missing intermediate containers are created on the way; the whole
    /// updated document is then written back.
    pub fn write(&self, path: &str, value: impl Into<Value>) -> Result<u64> {
        let parsed: DocPath = path.parse()?;
        let mut document = self.connector.read()?;
        set_path(&mut document, &parsed, value.into())?;
        self.connector.write(document)
    }

    /// Transform the scalar value at `path` with `f` and persist the result.
    ///
    /// The value is narrowed through the scalar operator, so updating an
    /// array (or transforming into one) fails with `TypeMismatch`; use
    /// [`Self::write`] to replace collections.
    pub fn update(&self, path: &str, f: impl FnOnce(&Value) -> Value) -> Result<u64> {
        let updated = self.get(path)?.into_scalar()?.update(f)?;
        self.write(path, updated.into_value())
    }

    /// Number of items in the collection at `path`.
    pub fn size(&self, path: &str) -> Result<usize> {
        Ok(self.get(path)?.into_collection()?.size())
    }

    /// First item in the collection at `path` whose `id` field equals `id`.
    pub fn find_by_id(&self, path: &str, id: impl Into<Value>) -> Result<Operator> {
        Ok(self.get(path)?.into_collection()?.find_by_id(id))
    }
}
