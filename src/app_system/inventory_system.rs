use std::sync::Arc;

use tracing::{error, info, instrument};

use super::SystemError;
use crate::audit::{AuditSink, JsonLinesAuditLog};
use crate::clients::InventoryClient;
use crate::config::Config;
use crate::domain::Product;
use crate::persistence::{JsonSnapshotFile, SnapshotWriter};
use crate::product_actor::{InventoryEvent, InventoryService};
use crate::store::ProductStore;

/// The running inventory: one actor task plus the client used to reach it.
///
/// Responsible for loading persisted state, wiring collaborators into the
/// actor, and shutting it down.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Boots from configuration: reloads the catalog snapshot, opens the audit
    /// log and spawns the actor.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(config), fields(data_file = %config.data_file.display()))]
    pub fn start(config: &Config) -> Result<Self, SystemError> {
        let snapshot_file = JsonSnapshotFile::new(config.data_file.clone());
        let store = ProductStore::from_records(snapshot_file.load::<Product>()?)?;
        let audit = JsonLinesAuditLog::open(&config.audit_log)?;
        info!(products = store.len(), "Starting inventory system");

        Ok(Self::with_parts(
            store,
            Arc::new(snapshot_file),
            Arc::new(audit),
            config.channel_buffer,
        ))
    }

    /// Spawns the actor over an already-built store and collaborators.
    pub fn with_parts(
        store: ProductStore,
        snapshots: Arc<dyn SnapshotWriter<Product>>,
        audit: Arc<dyn AuditSink<InventoryEvent>>,
        buffer_size: usize,
    ) -> Self {
        let (service, resource_client) = InventoryService::new(buffer_size, store, snapshots, audit);
        let handle = tokio::spawn(service.run());

        Self {
            inventory_client: InventoryClient::new(resource_client),
            handle,
        }
    }

    /// Drops this system's client and waits for the actor to finish.
    ///
    /// The actor stops once every client clone is gone, so callers must drop
    /// their own clones first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(SystemError::ActorTask(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
