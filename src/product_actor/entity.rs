use tracing::debug;

use super::actions::{ProductAction, PurchaseResult};
use super::error::InventoryError;
use super::events::InventoryEvent;
use crate::actor_framework::Entity;
use crate::domain::{Category, Priority, Product, ProductCreate, HIGH_PRIORITY_MIN_THRESHOLD};

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Action = ProductAction;
    type ActionResult = PurchaseResult;
    type Event = InventoryEvent;
    type Error = InventoryError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Validates a registration and applies the one-time normalization.
    ///
    /// # Normalization
    /// 1. High-priority products get `min_threshold` raised to 10 if lower.
    /// 2. `category` is derived from `restock_quantity`.
    ///
    /// # Errors
    /// `InvalidInput` for an empty id, negative stock or threshold, a
    /// non-positive restock quantity, or a threshold and restock amount that
    /// together exceed `u32::MAX`.
    fn from_create(id: String, params: ProductCreate) -> Result<Self, InventoryError> {
        if id.trim().is_empty() {
            return Err(InventoryError::invalid("product_id must not be empty"));
        }
        let stock_quantity = non_negative(params.stock_quantity, "stock_quantity")?;
        let mut min_threshold = non_negative(params.min_threshold, "min_threshold")?;
        let restock_quantity = positive(params.restock_quantity, "restock_quantity")?;

        if params.priority == Priority::High && min_threshold < HIGH_PRIORITY_MIN_THRESHOLD {
            debug!(
                product_id = %id,
                requested = min_threshold,
                "Raising min_threshold for high-priority product"
            );
            min_threshold = HIGH_PRIORITY_MIN_THRESHOLD;
        }
        let category = Category::for_restock_quantity(restock_quantity);

        let product = Self {
            id,
            name: params.name,
            stock_quantity,
            min_threshold,
            restock_quantity,
            priority: params.priority,
            category,
        };
        // A restock only fires below min_threshold, so this bound keeps every
        // later restock within u32.
        if u64::from(product.min_threshold) + product.restock_amount() > u64::from(u32::MAX) {
            return Err(InventoryError::invalid(format!(
                "min_threshold {} plus a restock of {} units exceeds {}",
                product.min_threshold,
                product.restock_amount(),
                u32::MAX
            )));
        }
        Ok(product)
    }

    fn created_event(&self) -> InventoryEvent {
        InventoryEvent::ProductRegistered {
            product_id: self.id.clone(),
            name: self.name.clone(),
            stock_quantity: self.stock_quantity,
            min_threshold: self.min_threshold,
            restock_quantity: self.restock_quantity,
            priority: self.priority,
            category: self.category,
        }
    }

    fn validate_action(action: &ProductAction) -> Result<(), InventoryError> {
        match action {
            ProductAction::Purchase(quantity) if *quantity <= 0 => Err(InventoryError::invalid(
                format!("quantity must be positive, got {}", quantity),
            )),
            ProductAction::Purchase(_) => Ok(()),
        }
    }

    /// Handles product-specific actions.
    ///
    /// # Actions
    /// - `Purchase(quantity)`: decrements stock, then restocks once if the
    ///   remainder is below `min_threshold`.
    ///
    /// # Errors
    /// - `InvalidInput` if the quantity is not positive, or the restock would
    ///   overflow the stock counter (only possible for records loaded from an
    ///   edited snapshot).
    /// - `InsufficientStock` if the quantity exceeds current stock.
    fn handle_action(
        &mut self,
        action: ProductAction,
    ) -> Result<(PurchaseResult, InventoryEvent), InventoryError> {
        Self::validate_action(&action)?;
        match action {
            ProductAction::Purchase(quantity) => {
                let result = self.purchase(quantity)?;
                let event = InventoryEvent::PurchaseProcessed {
                    product_id: result.product_id.clone(),
                    quantity: result.quantity,
                    stock_quantity: result.stock_quantity,
                    restocked: result.restocked,
                    restock_amount: result.restock_amount,
                };
                Ok((result, event))
            }
        }
    }
}

impl Product {
    /// Expects a positive quantity; see [`Entity::validate_action`].
    fn purchase(&mut self, quantity: i64) -> Result<PurchaseResult, InventoryError> {
        if quantity > i64::from(self.stock_quantity) {
            return Err(InventoryError::InsufficientStock {
                requested: u32::try_from(quantity).unwrap_or(u32::MAX),
                available: self.stock_quantity,
            });
        }
        // Bounded by stock_quantity above
        let quantity = quantity as u32;

        let remaining = self.stock_quantity - quantity;
        let restock_amount = if remaining < self.min_threshold {
            let amount = self.restock_amount();
            if u64::from(remaining) + amount > u64::from(u32::MAX) {
                return Err(InventoryError::invalid(format!(
                    "restock of {} units would overflow stock for {}",
                    amount, self.id
                )));
            }
            // Bounded by the check above
            Some(amount as u32)
        } else {
            None
        };

        self.stock_quantity = remaining + restock_amount.unwrap_or(0);
        Ok(PurchaseResult {
            product_id: self.id.clone(),
            quantity,
            stock_quantity: self.stock_quantity,
            restocked: restock_amount.is_some(),
            restock_amount,
        })
    }
}

fn non_negative(value: i64, field: &str) -> Result<u32, InventoryError> {
    u32::try_from(value).map_err(|_| {
        if value < 0 {
            InventoryError::invalid(format!("{} must be non-negative, got {}", field, value))
        } else {
            InventoryError::invalid(format!("{} must not exceed {}, got {}", field, u32::MAX, value))
        }
    })
}

fn positive(value: i64, field: &str) -> Result<u32, InventoryError> {
    if value <= 0 {
        return Err(InventoryError::invalid(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    non_negative(value, field)
}
