//! Product-specific domain logic: registration normalization, purchases and
//! automatic restocking.

mod actions;
pub mod entity;
pub mod error;
mod events;

pub use actions::*;
pub use error::*;
pub use events::*;

use crate::actor_framework::ResourceActor;
use crate::domain::Product;

/// The actor that owns the product catalog and applies inventory rules.
pub type InventoryService = ResourceActor<Product>;
