use serde::{Deserialize, Serialize};

use crate::domain::{Category, Priority};

/// Domain events emitted once per successful mutation.
///
/// Serialized with a `kind` tag, e.g. `{"kind": "purchase_processed", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InventoryEvent {
    ProductRegistered {
        product_id: String,
        name: String,
        stock_quantity: u32,
        min_threshold: u32,
        restock_quantity: u32,
        priority: Priority,
        category: Category,
    },
    PurchaseProcessed {
        product_id: String,
        quantity: u32,
        stock_quantity: u32,
        restocked: bool,
        restock_amount: Option<u32>,
    },
}

impl InventoryEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            InventoryEvent::ProductRegistered { .. } => "product_registered",
            InventoryEvent::PurchaseProcessed { .. } => "purchase_processed",
        }
    }

    pub fn product_id(&self) -> &str {
        match self {
            InventoryEvent::ProductRegistered { product_id, .. }
            | InventoryEvent::PurchaseProcessed { product_id, .. } => product_id,
        }
    }
}
