//! # Mock Framework
//!
//! Utilities for testing the cart store in isolation.
//!
//! Use [`create_mock_client`] to get a [`CartClient`] and the raw request
//! receiver, then helpers like [`expect_add_product`] to assert what the client
//! sent. For the service side, [`TestCollaborators`] bundles recording doubles
//! for every port.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::adapters::{InMemoryCatalog, InMemoryStorage};
use crate::clients::CartClient;
use crate::domain::{CatalogProduct, ProductId, Stock};
use crate::error::{ServiceError, StorageError};
use crate::messages::{AmountUpdate, CartRequest, MutationOutcome, Responder};
use crate::ports::{CartStorage, CatalogService, Collaborators, InventoryService, Notifier};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls, so it can inspect each
/// request and answer (or drop) the responder deterministically.
pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddProduct request
pub async fn expect_add_product(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(ProductId, Responder<MutationOutcome>)> {
    match receiver.recv().await {
        Some(CartRequest::AddProduct { product_id, respond_to }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateProductAmount request
pub async fn expect_update_product_amount(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(AmountUpdate, Responder<MutationOutcome>)> {
    match receiver.recv().await {
        Some(CartRequest::UpdateProductAmount { update, respond_to }) => Some((update, respond_to)),
        _ => None,
    }
}

/// Catalog with one "Tênis {id}" product per `(id, stock)` pair.
pub fn seeded_catalog(entries: &[(ProductId, i64)]) -> Arc<InMemoryCatalog> {
    let catalog = InMemoryCatalog::new();
    for &(id, stock) in entries {
        catalog.insert(
            CatalogProduct::new(id, format!("Tênis {id}"), 100.0 + id as f64, format!("https://cdn.example/{id}.jpg")),
            stock,
        );
    }
    Arc::new(catalog)
}

/// Wraps a catalog, counting calls and optionally failing stock or metadata lookups.
pub struct CountingCatalog {
    inner: Arc<InMemoryCatalog>,
    stock_calls: AtomicUsize,
    product_calls: AtomicUsize,
    fail_inventory: AtomicBool,
    fail_catalog: AtomicBool,
}

impl CountingCatalog {
    pub fn new(inner: Arc<InMemoryCatalog>) -> Self {
        Self {
            inner,
            stock_calls: AtomicUsize::new(0),
            product_calls: AtomicUsize::new(0),
            fail_inventory: AtomicBool::new(false),
            fail_catalog: AtomicBool::new(false),
        }
    }

    pub fn inner(&self) -> &InMemoryCatalog {
        &self.inner
    }

    pub fn fail_inventory(&self, fail: bool) {
        self.fail_inventory.store(fail, Ordering::SeqCst);
    }

    pub fn fail_catalog(&self, fail: bool) {
        self.fail_catalog.store(fail, Ordering::SeqCst);
    }

    pub fn stock_calls(&self) -> usize {
        self.stock_calls.load(Ordering::SeqCst)
    }

    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InventoryService for CountingCatalog {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        self.stock_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_inventory.load(Ordering::SeqCst) {
            return Err(ServiceError::Unavailable("connection refused".to_string()));
        }
        self.inner.get_stock(product_id).await
    }
}

#[async_trait]
impl CatalogService for CountingCatalog {
    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, ServiceError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_catalog.load(Ordering::SeqCst) {
            return Err(ServiceError::Unavailable("catalog timeout".to_string()));
        }
        self.inner.get_product(product_id).await
    }
}

/// In-memory storage that counts writes and can be told to fail them.
#[derive(Default)]
pub struct RecordingStorage {
    inner: InMemoryStorage,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        Self {
            inner: InMemoryStorage::with_value(key, value),
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }
}

#[async_trait]
impl CartStorage for RecordingStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.load(key).await
    }

    async fn save(&self, key: &str, value: String) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("disk full".to_string()));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(key, value).await
    }
}

/// Notifier that keeps every message it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn report_error(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Recording doubles for every port, sharing one seeded catalog.
pub struct TestCollaborators {
    pub catalog: Arc<CountingCatalog>,
    pub storage: Arc<RecordingStorage>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestCollaborators {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self::with_storage(catalog, RecordingStorage::new())
    }

    pub fn with_storage(catalog: Arc<InMemoryCatalog>, storage: RecordingStorage) -> Self {
        Self {
            catalog: Arc::new(CountingCatalog::new(catalog)),
            storage: Arc::new(storage),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new(
            self.catalog.clone(),
            self.catalog.clone(),
            self.storage.clone(),
            self.notifier.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_product(42).await });

        let (product_id, responder) = expect_add_product(&mut receiver).await.expect("Expected AddProduct request");
        assert_eq!(product_id, 42);
        drop(responder);

        assert!(add_task.await.unwrap().is_err());
    }

    #[tokio::test]
    async fn test_recording_storage_counts_successful_saves_only() {
        let storage = RecordingStorage::new();
        storage.save("k", "[]".into()).await.unwrap();
        storage.fail_saves(true);
        assert!(storage.save("k", "[1]".into()).await.is_err());

        assert_eq!(storage.save_count(), 1);
        assert_eq!(storage.stored("k").as_deref(), Some("[]"));
    }
}
