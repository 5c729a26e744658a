//! Dedicated write worker
//!
//! One worker thread per connector drains a FIFO job channel, so writes for
//! a handle never overlap. Each job carries a ticket from a monotonically
//! increasing sequence and its own completion channel. A caller that stops
//! waiting (timeout) simply no longer listens; the worker finishes the write
//! regardless and logs the late completion.
//!
//! # Crash Safety
//!
//! Every write follows the write-fsync-rename pattern:
//! 1. Write the document to a temporary file next to the target
//! 2. fsync the temporary file
//! 3. Atomic rename over the target
//! 4. fsync the parent directory
//!
//! Either the complete new document is visible or the old one still is;
//! a torn file is never observable.

use parking_lot::Mutex;
use serde_json::Value;
use silt_core::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, warn};

struct WriteJob {
    ticket: u64,
    document: Value,
    completion: Sender<Result<()>>,
}

/// Handle to the worker thread serializing all writes for one target file.
pub(crate) struct WriteWorker {
    jobs: Mutex<Option<Sender<WriteJob>>>,
    sequence: AtomicU64,
    handle: Option<JoinHandle<()>>,
}

impl WriteWorker {
    /// Spawn the worker thread for `target`.
    ///
    /// Stale temporary files left behind by a crashed process are removed
    /// first so fresh tickets cannot collide with them.
    pub(crate) fn spawn(target: PathBuf) -> Result<Self> {
        match remove_stale_temp_files(&target) {
            Ok(0) => {}
            Ok(count) => debug!(count, "removed stale temporary files"),
            Err(err) => warn!(%err, "could not scan for stale temporary files"),
        }

        let (jobs_tx, jobs_rx) = mpsc::channel();
        let handle = std::thread::Builder::new()
            .name("silt-write-worker".to_string())
            .spawn(move || worker_loop(&target, jobs_rx))
            .map_err(Error::IoError)?;

        Ok(WriteWorker {
            jobs: Mutex::new(Some(jobs_tx)),
            sequence: AtomicU64::new(1),
            handle: Some(handle),
        })
    }

    /// Queue one whole-document write and wait up to `timeout` for the
    /// worker's completion report. Returns the write's ticket.
    ///
    /// On timeout the outcome is unknown: the job stays queued and the
    /// worker will still perform it.
    pub(crate) fn submit(&self, document: Value, timeout: Duration) -> Result<u64> {
        let ticket = self.sequence.fetch_add(1, Ordering::Relaxed);
        let (completion_tx, completion_rx) = mpsc::channel();
        let job = WriteJob {
            ticket,
            document,
            completion: completion_tx,
        };

        match &*self.jobs.lock() {
            Some(jobs) => jobs.send(job).map_err(|_| Error::WriterGone)?,
            None => return Err(Error::WriterGone),
        }

        match completion_rx.recv_timeout(timeout) {
            Ok(result) => result.map(|()| ticket),
            Err(RecvTimeoutError::Timeout) => Err(Error::WriteTimeout { ticket, timeout }),
            Err(RecvTimeoutError::Disconnected) => Err(Error::WriterGone),
        }
    }
}

impl Drop for WriteWorker {
    fn drop(&mut self) {
        // Dropping the sender closes the channel; the worker drains what is
        // queued and exits, then we join it.
        self.jobs.lock().take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("write worker panicked during shutdown");
            }
        }
    }
}

fn worker_loop(target: &Path, jobs: Receiver<WriteJob>) {
    while let Ok(job) = jobs.recv() {
        let result = persist(target, job.ticket, &job.document);
        match &result {
            Ok(()) => debug!(ticket = job.ticket, "write completed"),
            Err(err) => warn!(ticket = job.ticket, %err, "write failed"),
        }
        if job.completion.send(result).is_err() {
            warn!(
                ticket = job.ticket,
                "write finished after the caller stopped waiting"
            );
        }
    }
}

/// Crash-safe whole-document write (write-fsync-rename).
fn persist(target: &Path, ticket: u64, document: &Value) -> Result<()> {
    let bytes = serde_json::to_vec(document)?;
    let temp_path = temp_path(target, ticket);

    // Step 1: write to temporary file
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&temp_path)?;
    file.write_all(&bytes)?;

    // Step 2: fsync the file
    file.sync_all()?;
    drop(file);

    // Step 3: atomic rename over the target
    std::fs::rename(&temp_path, target)?;

    // Step 4: fsync parent directory
    if let Some(dir) = parent_dir(target) {
        File::open(dir)?.sync_all()?;
    }

    Ok(())
}

fn temp_path(target: &Path, ticket: u64) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.{}.tmp", name, ticket))
}

fn parent_dir(target: &Path) -> Option<&Path> {
    target.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Remove `.{name}.{ticket}.tmp` leftovers from a crashed run.
fn remove_stale_temp_files(target: &Path) -> io::Result<usize> {
    let dir = parent_dir(target).unwrap_or(Path::new("."));
    let name = match target.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Ok(0),
    };
    let prefix = format!(".{}.", name);

    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.starts_with(&prefix) && file_name.ends_with(".tmp") {
            std::fs::remove_file(entry.path())?;
            count += 1;
        }
    }

    Ok(count)
}
