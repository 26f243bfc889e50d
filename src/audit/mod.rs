//! Append-only audit trail of successful mutations.
//!
//! One [`AuditEntry`] is recorded per successful mutation. Failed operations
//! never reach the sink.

mod json_lines;
mod memory;

pub use json_lines::JsonLinesAuditLog;
pub use memory::MemoryAuditLog;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::persistence::PersistenceError;

/// A timestamped domain event.
///
/// The event's own fields are flattened next to `timestamp` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry<E> {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: E,
}

impl<E> AuditEntry<E> {
    pub fn now(event: E) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

pub trait AuditSink<E>: Send + Sync {
    fn record(&self, entry: &AuditEntry<E>) -> Result<(), PersistenceError>;
}
