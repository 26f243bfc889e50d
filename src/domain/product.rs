//! Product records tracked by the inventory.
//!
//! # Actor Framework
//! [`Product`] implements the [`Entity`](crate::actor_framework::Entity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
//!
//! `min_threshold` and `category` are normalized once when the product is
//! registered (see [`Entity::from_create`](crate::actor_framework::Entity::from_create))
//! and stored as-is afterwards.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::product_actor::InventoryError;

/// High-priority products never keep a threshold below this value.
pub const HIGH_PRIORITY_MIN_THRESHOLD: u32 = 10;

/// Restock sizes strictly above this count as high volume.
pub const HIGH_VOLUME_RESTOCK_QUANTITY: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "product_id")]
    pub id: String,
    pub name: String,
    pub stock_quantity: u32,
    pub min_threshold: u32,
    pub restock_quantity: u32,
    pub priority: Priority,
    pub category: Category,
}

impl Product {
    /// Units added by an automatic restock.
    ///
    /// High-priority products get 1.5x `restock_quantity`, rounded down.
    pub fn restock_amount(&self) -> u64 {
        let base = u64::from(self.restock_quantity);
        match self.priority {
            Priority::Normal => base,
            Priority::High => base * 3 / 2,
        }
    }

    pub fn is_below_threshold(&self) -> bool {
        self.stock_quantity < self.min_threshold
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.stock_quantity == 0 {
            StockStatus::OutOfStock
        } else if self.is_below_threshold() {
            StockStatus::BelowThreshold
        } else {
            StockStatus::Ok
        }
    }

    pub fn inventory_status(&self) -> InventoryStatus {
        InventoryStatus {
            product_id: self.id.clone(),
            stock_quantity: self.stock_quantity,
            status: self.stock_status(),
            priority: self.priority,
        }
    }
}

/// Registration payload for a product.
///
/// Quantities are raw signed values; range checks happen in `from_create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub stock_quantity: i64,
    pub min_threshold: i64,
    pub restock_quantity: i64,
    pub priority: Priority,
}

impl ProductCreate {
    pub fn new(
        name: impl Into<String>,
        stock_quantity: i64,
        min_threshold: i64,
        restock_quantity: i64,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            stock_quantity,
            min_threshold,
            restock_quantity,
            priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    #[serde(alias = "low")]
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "low" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            other => Err(InventoryError::InvalidInput(format!(
                "priority must be 'normal' or 'high', got '{}'",
                other
            ))),
        }
    }
}

/// Volume classification, fixed at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighVolume,
    LowVolume,
}

impl Category {
    pub fn for_restock_quantity(restock_quantity: u32) -> Self {
        if restock_quantity > HIGH_VOLUME_RESTOCK_QUANTITY {
            Category::HighVolume
        } else {
            Category::LowVolume
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::HighVolume => "high_volume",
            Category::LowVolume => "low_volume",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    BelowThreshold,
    Ok,
}

/// Read-only stock summary for a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStatus {
    pub product_id: String,
    pub stock_quantity: u32,
    pub status: StockStatus,
    pub priority: Priority,
}
