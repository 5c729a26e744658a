//! File-backed document connector

use crate::worker::WriteWorker;
use serde_json::Value;
use silt_core::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Default bound on how long a write waits for its completion report.
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Options controlling how a connector opens its document file.
///
/// ```
/// use silt_store::ConnectOptions;
/// use std::time::Duration;
///
/// let options = ConnectOptions::new()
///     .bail_if_not_present(true)
///     .write_timeout(Duration::from_secs(2));
/// # let _ = options;
/// ```
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    bail_if_not_present: bool,
    write_timeout: Duration,
}

impl ConnectOptions {
    /// Options with the defaults: create a missing file, 10 second write
    /// timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `connect` when the document file does not exist instead of
    /// creating it seeded with an empty object.
    pub fn bail_if_not_present(mut self, bail: bool) -> Self {
        self.bail_if_not_present = bail;
        self
    }

    /// Bound on how long each write waits for the worker's completion
    /// report before returning `WriteTimeout`.
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }
}

impl Default for ConnectOptions {
    fn default() -> Self {
        ConnectOptions {
            bail_if_not_present: false,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
        }
    }
}

/// Owns one JSON document file.
///
/// Reads parse the whole file. Writes replace the whole file through the
/// connector's dedicated worker thread; they are serialized per handle and
/// each returns a monotonically increasing ticket. Reads are not
/// synchronized against in-flight writes: a concurrent read observes the old
/// or the new document, never a torn one, because the worker renames
/// complete files into place.
///
/// A write that outlives its timeout returns
/// [`Error::WriteTimeout`] and its outcome is unknown; the worker may still
/// complete it afterwards.
pub struct Connector {
    path: PathBuf,
    write_timeout: Duration,
    worker: WriteWorker,
}

impl Connector {
    /// Open the document file at `path`.
    ///
    /// An existing file is parsed eagerly so a corrupt document fails here
    /// rather than on first read. A missing file is created seeded with `{}`
    /// unless the options bail instead. A path that exists but is not a
    /// regular file fails with [`Error::NotAFile`].
    pub fn connect(path: impl Into<PathBuf>, options: ConnectOptions) -> Result<Self> {
        let path = path.into();

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                let bytes = fs::read(&path)?;
                serde_json::from_slice::<Value>(&bytes)?;
            }
            Ok(_) => return Err(Error::NotAFile(path)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                if options.bail_if_not_present {
                    return Err(Error::IoError(err));
                }
                fs::write(&path, b"{}")?;
                info!(path = %path.display(), "created empty document file");
            }
            Err(err) => return Err(Error::IoError(err)),
        }

        let worker = WriteWorker::spawn(path.clone())?;
        debug!(path = %path.display(), "connector ready");

        Ok(Connector {
            path,
            write_timeout: options.write_timeout,
            worker,
        })
    }

    /// The document file this connector owns.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the whole document.
    pub fn read(&self) -> Result<Value> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Replace the whole document on disk.
    ///
    /// Blocks until the worker reports completion or the configured timeout
    /// expires, and returns the write's ticket.
    pub fn write(&self, document: Value) -> Result<u64> {
        self.worker.submit(document, self.write_timeout)
    }
}
