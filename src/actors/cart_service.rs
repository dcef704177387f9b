use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use super::{mutations, persistence};
use crate::clients::CartClient;
use crate::domain::{Cart, ProductId};
use crate::error::{CartError, CartOperation};
use crate::messages::{AmountUpdate, CartRequest, MutationOutcome, Responder};
use crate::ports::Collaborators;

/// Actor owning the cart.
///
/// Requests are handled one at a time in arrival order, so every mutation
/// sees the state the previous one committed.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    collaborators: Collaborators,
    storage_key: String,
    cart: Cart,
    /// Last value written to storage successfully.
    persisted: Cart,
}

impl CartService {
    /// Builds the actor around `initial`, which is assumed to be what storage
    /// already holds.
    pub fn new(
        buffer_size: usize,
        initial: Cart,
        collaborators: Collaborators,
        storage_key: impl Into<String>,
    ) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            collaborators,
            storage_key: storage_key.into(),
            persisted: initial.clone(),
            cart: initial,
        };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!(entries = self.cart.len(), "CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::GetCart { respond_to } => {
                    let _ = respond_to.send(self.cart.clone());
                }
                CartRequest::AddProduct { product_id, respond_to } => {
                    self.handle_add_product(product_id, respond_to).await;
                }
                CartRequest::RemoveProduct { product_id, respond_to } => {
                    self.handle_remove_product(product_id, respond_to).await;
                }
                CartRequest::UpdateProductAmount { update, respond_to } => {
                    self.handle_update_product_amount(update, respond_to).await;
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
                #[cfg(test)]
                CartRequest::GetPersistedSnapshot { respond_to } => {
                    let _ = respond_to.send(self.persisted.clone());
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_add_product(&mut self, product_id: ProductId, respond_to: Responder<MutationOutcome>) {
        debug!("Processing add_product request");
        let c = &self.collaborators;
        let result =
            mutations::add_product(&self.cart, product_id, c.inventory.as_ref(), c.catalog.as_ref()).await;
        let outcome = self.commit(CartOperation::Add, result).await;
        let _ = respond_to.send(outcome);
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_remove_product(&mut self, product_id: ProductId, respond_to: Responder<MutationOutcome>) {
        debug!("Processing remove_product request");
        let result = mutations::remove_product(&self.cart, product_id);
        let outcome = self.commit(CartOperation::Remove, result).await;
        let _ = respond_to.send(outcome);
    }

    #[instrument(fields(product_id = update.product_id, amount = update.amount), skip(self, update, respond_to))]
    async fn handle_update_product_amount(
        &mut self,
        update: AmountUpdate,
        respond_to: Responder<MutationOutcome>,
    ) {
        debug!("Processing update_product_amount request");
        let result =
            mutations::update_product_amount(&self.cart, update, self.collaborators.inventory.as_ref()).await;
        let outcome = self.commit(CartOperation::UpdateAmount, result).await;
        let _ = respond_to.send(outcome);
    }

    /// Applies a mutation result: replaces the cart or reports the failure,
    /// then writes to storage if the cart drifted from the persisted snapshot.
    ///
    /// Invalid amounts are ignored outright and never trigger a write, not
    /// even the retry of an earlier failed one.
    async fn commit(&mut self, operation: CartOperation, result: Result<Cart, CartError>) -> MutationOutcome {
        if let Err(e @ CartError::InvalidAmount(_)) = result {
            self.report(operation, &e);
            return MutationOutcome {
                cart: self.cart.clone(),
                changed: false,
                rejection: Some(e),
            };
        }

        let (changed, rejection) = match result {
            Ok(cart) => {
                let changed = cart != self.cart;
                self.cart = cart;
                info!(entries = self.cart.len(), changed, "Cart mutation accepted");
                (changed, None)
            }
            Err(e) => {
                self.report(operation, &e);
                (false, Some(e))
            }
        };

        if self.cart != self.persisted {
            self.persist().await;
        }

        MutationOutcome {
            cart: self.cart.clone(),
            changed,
            rejection,
        }
    }

    fn report(&self, operation: CartOperation, e: &CartError) {
        match e.user_message(operation) {
            Some(message) => {
                warn!(error = %e, ?operation, "Cart mutation rejected");
                self.collaborators.notifier.report_error(message);
            }
            None => debug!(error = %e, "Ignoring invalid request"),
        }
    }

    async fn persist(&mut self) {
        let storage = self.collaborators.storage.as_ref();
        match persistence::save(storage, &self.storage_key, &self.cart).await {
            Ok(()) => {
                debug!(entries = self.cart.len(), "Cart persisted");
                self.persisted = self.cart.clone();
            }
            // The in-memory cart stays authoritative; the next commit retries.
            Err(e) => error!(error = %e, "Failed to persist cart"),
        }
    }
}
