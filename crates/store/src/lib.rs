//! File persistence for the silt document store
//!
//! A [`Connector`] owns one JSON document file. Reads load and parse the
//! whole file. Writes replace the whole file through a dedicated worker
//! thread, at most one in flight per connector, each identified by a
//! monotonically increasing ticket and bounded by a completion timeout.

pub mod connector;
mod worker;

pub use connector::{ConnectOptions, Connector, DEFAULT_WRITE_TIMEOUT};
