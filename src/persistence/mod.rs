//! Durable snapshots of the catalog.
//!
//! The actor hands the full current state to a [`SnapshotWriter`] after every
//! successful mutation. How the snapshot is encoded is up to the writer.

mod json_file;
mod memory;

pub use json_file::JsonSnapshotFile;
pub use memory::MemorySnapshots;

use thiserror::Error;

/// Errors raised while writing or reading persisted state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// Receives the full state after each successful mutation.
///
/// Writes are synchronous and must either complete or return an error; the
/// caller surfaces the error rather than retrying.
pub trait SnapshotWriter<T>: Send + Sync {
    fn write_snapshot(&self, records: &[T]) -> Result<(), PersistenceError>;
}
