//! # Inventory Restock
//!
//! Lightweight stock bookkeeping: products are registered with a restock
//! policy, purchases draw stock down, and stock that falls below a product's
//! threshold is topped up automatically in the same step.
//!
//! ## Terminology Note
//!
//! - **Service** (e.g. [`InventoryService`]) = the actor that owns the catalog
//! - **Client** (e.g. [`InventoryClient`]) = a cloneable handle for sending it requests
//!
//! ## Ingredients
//!
//! - **Domain types** - [`Product`], [`ProductCreate`], [`Priority`], [`Category`]
//! - **Entity rules** - normalization on registration and purchase/restock logic,
//!   in `impl Entity for Product`
//! - **Store** - [`ProductStore`], the keyed catalog owned by the actor
//! - **Actor framework** - [`ResourceActor`] serializes every operation; after
//!   each successful mutation it writes a snapshot via a [`SnapshotWriter`] and
//!   records an [`AuditEntry`] via an [`AuditSink`]
//! - **System** - [`InventorySystem`] loads state, spawns the actor and shuts it down
//! - **Tracing** - [`setup_tracing`] configures structured logging once per process
//!
//! ## Example Usage
//!
//! ```ignore
//! let system = InventorySystem::start(&Config::from_env())?;
//! let client = &system.inventory_client;
//!
//! client
//!     .register_product("P001".into(), ProductCreate::new("Widget", 50, 5, 30, Priority::High))
//!     .await?;
//! let result = client.purchase("P001".into(), 45).await?;
//! assert!(result.restocked);
//!
//! system.shutdown().await?;
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod audit;
pub mod clients;
pub mod config;
pub mod domain;
pub mod persistence;
pub mod product_actor;
pub mod store;

#[cfg(test)]
mod mock_framework;

pub use actor_framework::{Entity, FrameworkError, ResourceActor, ResourceClient};
pub use app_system::{setup_tracing, InventorySystem, SystemError};
pub use audit::{AuditEntry, AuditSink, JsonLinesAuditLog, MemoryAuditLog};
pub use clients::InventoryClient;
pub use config::Config;
pub use domain::{Category, InventoryStatus, Priority, Product, ProductCreate, StockStatus};
pub use persistence::{JsonSnapshotFile, MemorySnapshots, PersistenceError, SnapshotWriter};
pub use product_actor::{InventoryError, InventoryEvent, InventoryService, ProductAction, PurchaseResult};
pub use store::{ProductStore, Store, StoreError};
