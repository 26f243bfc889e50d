//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it reads requests off the receiver and answers
/// through the oneshot responders, so success, failure and ordering are all
/// under its control.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::CreateParams, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { id, params, respond_to }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InventoryClient;
    use crate::domain::{Category, Priority, Product, ProductCreate, StockStatus};
    use crate::product_actor::{InventoryError, ProductAction, PurchaseResult};

    fn stored_product(stock_quantity: u32) -> Product {
        Product {
            id: "P001".to_string(),
            name: "Widget".to_string(),
            stock_quantity,
            min_threshold: 10,
            restock_quantity: 30,
            priority: Priority::High,
            category: Category::LowVolume,
        }
    }

    #[tokio::test]
    async fn test_register_sends_create() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = InventoryClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .register_product(
                    "P001".to_string(),
                    ProductCreate::new("Widget", 50, 5, 30, Priority::High),
                )
                .await
        });

        let (id, params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(id, "P001");
        assert_eq!(params.min_threshold, 5);
        responder.send(Ok(stored_product(50))).unwrap();

        let product = task.await.unwrap().unwrap();
        assert_eq!(product.min_threshold, 10);
    }

    #[tokio::test]
    async fn test_purchase_sends_action() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = InventoryClient::new(inner);

        let task = tokio::spawn(async move { client.purchase("P001".to_string(), 45).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "P001");
        assert_eq!(action, ProductAction::Purchase(45));
        let result = PurchaseResult {
            product_id: "P001".to_string(),
            quantity: 45,
            stock_quantity: 50,
            restocked: true,
            restock_amount: Some(45),
        };
        responder.send(Ok(result.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(result));
    }

    #[tokio::test]
    async fn test_purchase_passes_domain_errors_through() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = InventoryClient::new(inner);

        let task = tokio::spawn(async move { client.purchase("P001".to_string(), 60).await });

        let (_, _, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        let error = InventoryError::InsufficientStock { requested: 60, available: 50 };
        responder.send(Err(error.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Err(error));
    }

    #[tokio::test]
    async fn test_inventory_status_is_derived_from_get() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = InventoryClient::new(inner);

        let task = tokio::spawn(async move { client.inventory_status("P001".to_string()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "P001");
        responder.send(Ok(stored_product(4))).unwrap();

        let status = task.await.unwrap().unwrap();
        assert_eq!(status.status, StockStatus::BelowThreshold);
        assert_eq!(status.stock_quantity, 4);
        assert_eq!(status.priority, Priority::High);
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = InventoryClient::new(inner);

        let task = tokio::spawn(async move { client.get_product("P001".to_string()).await });

        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);

        assert!(matches!(
            task.await.unwrap(),
            Err(InventoryError::ActorCommunication(_))
        ));
    }
}
