use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn, Instrument};

use cart_store::adapters::{InMemoryCatalog, InMemoryStorage, JsonFileStorage, TracingNotifier};
use cart_store::{
    setup_tracing, AmountUpdate, CartConfig, CartStorage, CartSystem, CatalogProduct, Collaborators,
    MutationOutcome,
};

fn log_outcome(step: &str, outcome: &MutationOutcome) {
    match &outcome.rejection {
        None => info!(step, entries = outcome.cart.len(), total = outcome.cart.total_amount(), "Accepted"),
        Some(reason) => warn!(step, %reason, "Rejected"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = CartConfig::load_or_default(config_path.as_deref()).map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(&config.logging);

    info!("Starting cart store demo");

    let catalog = Arc::new(InMemoryCatalog::new());
    catalog.insert(
        CatalogProduct::new(1, "Tênis de Caminhada Leve Confortável", 179.9, "https://cdn.example/1.jpg"),
        5,
    );
    catalog.insert(
        CatalogProduct::new(2, "Tênis VR Caminhada Confortável", 139.9, "https://cdn.example/2.jpg"),
        2,
    );

    let storage: Arc<dyn CartStorage> = match &config.storage_dir {
        Some(dir) => Arc::new(JsonFileStorage::new(dir)),
        None => Arc::new(InMemoryStorage::new()),
    };

    let collaborators = Collaborators::new(catalog.clone(), catalog, storage, Arc::new(TracingNotifier));
    let system = CartSystem::start(&config, collaborators).await;
    let cart = &system.cart_client;

    let span = tracing::info_span!("cart_session");
    let result = async {
        log_outcome("add 1", &cart.add_product(1).await?);
        log_outcome("add 1 again", &cart.add_product(1).await?);
        log_outcome("add 2", &cart.add_product(2).await?);
        log_outcome("update 1 to 6", &cart.update_product_amount(AmountUpdate::new(1, 6)).await?);
        log_outcome("remove 2", &cart.remove_product(2).await?);
        log_outcome("remove 2 again", &cart.remove_product(2).await?);
        cart.cart().await
    }
    .instrument(span)
    .await;

    match result {
        Ok(final_cart) => info!(entries = final_cart.len(), total = final_cart.total_amount(), "Session finished"),
        Err(e) => error!(error = %e, "Cart session failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
