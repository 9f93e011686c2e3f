//! In-memory deliveries repository adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::checkout::Delivery;
use crate::domain::foundation::DeliveryId;
use crate::ports::{DeliveriesRepository, DeliveryRepositoryError};

/// In-memory delivery store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeliveriesRepository {
    deliveries: Arc<RwLock<HashMap<DeliveryId, Delivery>>>,
}

impl InMemoryDeliveriesRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored deliveries (useful in tests).
    pub async fn all(&self) -> Vec<Delivery> {
        self.deliveries.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl DeliveriesRepository for InMemoryDeliveriesRepository {
    async fn create(&self, delivery: &Delivery) -> Result<Delivery, DeliveryRepositoryError> {
        let mut deliveries = self.deliveries.write().await;
        if deliveries.contains_key(&delivery.id) {
            return Err(DeliveryRepositoryError::AlreadyExists);
        }
        deliveries.insert(delivery.id, delivery.clone());
        Ok(delivery.clone())
    }
}
