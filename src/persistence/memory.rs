use std::sync::{Mutex, PoisonError};

use super::{PersistenceError, SnapshotWriter};

#[derive(Debug)]
struct MemorySnapshotState<T> {
    latest: Option<Vec<T>>,
    writes: usize,
    fail_writes: bool,
}

/// In-memory snapshot writer for tests and embedding.
#[derive(Debug)]
pub struct MemorySnapshots<T> {
    state: Mutex<MemorySnapshotState<T>>,
}

impl<T> Default for MemorySnapshots<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(MemorySnapshotState {
                latest: None,
                writes: 0,
                fail_writes: false,
            }),
        }
    }
}

impl<T: Clone> MemorySnapshots<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following write fail until switched off again.
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).fail_writes = fail;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).writes
    }

    pub fn latest(&self) -> Option<Vec<T>> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .latest
            .clone()
    }
}

impl<T: Clone + Send + Sync> SnapshotWriter<T> for MemorySnapshots<T> {
    fn write_snapshot(&self, records: &[T]) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.fail_writes {
            return Err(PersistenceError::Rejected("snapshot writes disabled".to_string()));
        }
        state.latest = Some(records.to_vec());
        state.writes += 1;
        Ok(())
    }
}
