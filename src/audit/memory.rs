use std::sync::{Mutex, PoisonError};

use super::{AuditEntry, AuditSink};
use crate::persistence::PersistenceError;

/// In-memory audit sink for tests and embedding.
#[derive(Debug)]
pub struct MemoryAuditLog<E> {
    entries: Mutex<Vec<AuditEntry<E>>>,
}

impl<E> Default for MemoryAuditLog<E> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl<E: Clone> MemoryAuditLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditEntry<E>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<E: Clone + Send + Sync> AuditSink<E> for MemoryAuditLog<E> {
    fn record(&self, entry: &AuditEntry<E>) -> Result<(), PersistenceError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }
}
