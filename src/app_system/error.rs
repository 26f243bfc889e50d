use thiserror::Error;

use crate::persistence::PersistenceError;
use crate::store::StoreError;

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to load or open persisted state: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Persisted snapshot is inconsistent: {0}")]
    Snapshot(#[from] StoreError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
