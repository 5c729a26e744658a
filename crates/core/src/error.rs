//! Error types for the silt document store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::path::{PathError, PathParseError};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for silt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the silt document store
#[derive(Debug, Error)]
pub enum Error {
    /// A value of the wrong runtime shape was handed to an operator
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Shape the operator requires
        expected: &'static str,
        /// Runtime type actually supplied
        found: &'static str,
    },

    /// Two field values could not be ordered during a field-list sort
    #[error("Cannot compare {left} with {right} when sorting")]
    Comparison {
        /// Runtime type of the left-hand field
        left: &'static str,
        /// Runtime type of the right-hand field
        right: &'static str,
    },

    /// Path string failed to parse
    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathParseError),

    /// Path-based write could not be applied to the document
    #[error("Path write failed: {0}")]
    PathWrite(#[from] PathError),

    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Connect target exists but is not a regular file
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    /// A write did not report completion within the configured bound.
    /// The outcome is unknown: the worker may still complete it.
    #[error("Write {ticket} timed out after {timeout:?}")]
    WriteTimeout {
        /// Ticket identifying the write
        ticket: u64,
        /// Bound that expired
        timeout: Duration,
    },

    /// Write worker thread is no longer accepting jobs
    #[error("Write worker unavailable")]
    WriterGone,
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
