use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Cart, ProductId};
use crate::error::ClientError;
use crate::messages::{AmountUpdate, CartRequest, MutationOutcome};

/// Cloneable handle to the cart actor.
///
/// Operation failures (stock, missing entries, service errors) are not
/// errors here: they arrive as [`MutationOutcome::rejection`] and are already
/// reported to the notifier. `Err` only means the actor is gone.
#[derive(Clone, Debug)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    /// Asks the actor to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        debug!("Sending shutdown");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| ClientError::ActorCommunication("Actor closed".to_string()))
    }
}

client_method!(CartClient => fn cart() -> Cart as CartRequest::GetCart);
client_method!(CartClient => fn add_product(product_id: ProductId) -> MutationOutcome as CartRequest::AddProduct);
client_method!(CartClient => fn remove_product(product_id: ProductId) -> MutationOutcome as CartRequest::RemoveProduct);
client_method!(CartClient => fn update_product_amount(update: AmountUpdate) -> MutationOutcome as CartRequest::UpdateProductAmount);

#[cfg(test)]
client_method!(CartClient => fn persisted_snapshot() -> Cart as CartRequest::GetPersistedSnapshot);
