use tracing::{error, info, instrument};

use crate::actors::{persistence, CartService};
use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::error::ClientError;
use crate::ports::Collaborators;

/// Starts the cart actor and owns its task.
///
/// Restores the persisted cart first, so the actor begins from whatever the
/// previous session left behind.
pub struct CartSystem {
    pub cart_client: CartClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartSystem {
    #[instrument(name = "cart_system", skip_all, fields(storage_key = %config.storage_key))]
    pub async fn start(config: &CartConfig, collaborators: Collaborators) -> Self {
        info!("Starting cart system");

        let initial = persistence::load_or_default(collaborators.storage.as_ref(), &config.storage_key).await;

        let (cart_service, cart_client) = CartService::new(
            config.channel_capacity.max(1),
            initial,
            collaborators,
            config.storage_key.clone(),
        );
        let handles = vec![tokio::spawn(cart_service.run())];

        info!("Cart system started successfully");

        Self { cart_client, handles }
    }

    /// Stops the actor after the requests already queued and waits for it.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), ClientError> {
        info!("Shutting down cart system");

        let _ = self.cart_client.shutdown().await;
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                return Err(ClientError::ActorCommunication(format!("Actor task failed: {e}")));
            }
        }

        info!("Cart system shutdown complete");
        Ok(())
    }
}
