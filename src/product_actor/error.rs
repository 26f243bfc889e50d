use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::persistence::PersistenceError;
use crate::store::StoreError;

/// Errors returned by inventory operations.
///
/// The first four variants are the domain outcomes a caller is expected to
/// handle. `Persistence` means the change was applied in memory but could not
/// be made durable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product already exists: {0}")]
    AlreadyExists(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl InventoryError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::AlreadyExists(id) => Self::AlreadyExists(id),
        }
    }
}

impl From<PersistenceError> for InventoryError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<FrameworkError> for InventoryError {
    fn from(err: FrameworkError) -> Self {
        Self::ActorCommunication(err.to_string())
    }
}
