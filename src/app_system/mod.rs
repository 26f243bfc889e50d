//! System orchestration, startup, and shutdown logic.
//!
//! - [`InventorySystem`] loads persisted state, wires the collaborators and
//!   owns the actor task
//! - [`setup_tracing`] initializes logging for the whole process

pub mod error;
pub mod inventory_system;
pub mod telemetry;

pub use error::*;
pub use inventory_system::*;
pub use telemetry::*;
