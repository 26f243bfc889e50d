use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{InventoryStatus, Product, ProductCreate};
use crate::product_actor::{InventoryError, ProductAction, PurchaseResult};

/// Client for interacting with the inventory actor.
///
/// Cheap to clone; every clone talks to the same actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(InventoryClient, Product, get_product);

impl InventoryClient {
    /// Registers a new product and returns the stored, normalized record.
    #[instrument(skip(self))]
    pub async fn register_product(
        &self,
        id: String,
        params: ProductCreate,
    ) -> Result<Product, InventoryError> {
        debug!("Sending request");
        self.inner.create(id, params).await
    }

    #[instrument(skip(self))]
    pub async fn purchase(&self, id: String, quantity: i64) -> Result<PurchaseResult, InventoryError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ProductAction::Purchase(quantity))
            .await
    }

    #[instrument(skip(self))]
    pub async fn inventory_status(&self, id: String) -> Result<InventoryStatus, InventoryError> {
        debug!("Sending request");
        let product = self.inner.get(id).await?;
        Ok(product.inventory_status())
    }
}
