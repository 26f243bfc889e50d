use inventory_restock::{setup_tracing, Config, InventorySystem, Priority, ProductCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    // Setup tracing once for the entire application
    setup_tracing(&config.default_log_filter);

    info!(data_file = %config.data_file.display(), "Starting inventory system");
    let system = InventorySystem::start(&config)?;
    let client = system.inventory_client.clone();

    let span = tracing::info_span!("registration");
    async {
        info!("Registering demo product");
        match client
            .register_product(
                "P001".to_string(),
                ProductCreate::new("Demo Widget", 50, 5, 30, Priority::High),
            )
            .await
        {
            Ok(product) => info!(
                product_id = %product.id,
                min_threshold = product.min_threshold,
                category = %product.category,
                "Product registered"
            ),
            // A previous run already registered it
            Err(e) => info!(error = %e, "Registration skipped"),
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("purchases");
    async {
        for quantity in [45, 60] {
            match client.purchase("P001".to_string(), quantity).await {
                Ok(result) => info!(
                    quantity = result.quantity,
                    stock_quantity = result.stock_quantity,
                    restocked = result.restocked,
                    "Purchase processed"
                ),
                Err(e) => error!(quantity, error = %e, "Purchase failed"),
            }
        }
    }
    .instrument(span)
    .await;

    let status = client.inventory_status("P001".to_string()).await?;
    info!(
        stock_quantity = status.stock_quantity,
        status = ?status.status,
        priority = %status.priority,
        "Inventory status"
    );

    // Shutdown system gracefully
    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
