use serde::{Deserialize, Serialize};

/// Custom actions for Product entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond registration and lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Buys the given quantity, restocking automatically if the remaining
    /// stock drops below the product's threshold.
    ///
    /// # Errors
    /// Fails if the quantity is not positive or exceeds available stock.
    Purchase(i64),
}

/// Outcome of a successful [`ProductAction::Purchase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResult {
    pub product_id: String,
    pub quantity: u32,
    /// Stock level after the purchase and any restock.
    pub stock_quantity: u32,
    pub restocked: bool,
    pub restock_amount: Option<u32>,
}
