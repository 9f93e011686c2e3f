//! In-memory stock repository adapter.
//!
//! The decrement runs its read-check-write sequence inside a single
//! write-lock critical section, so concurrent decrements against the
//! same product serialize and stock can never go negative.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ProductId;
use crate::ports::{StockRepository, StockRepositoryError};

/// In-memory stock store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStockRepository {
    units: Arc<RwLock<HashMap<ProductId, i64>>>,
}

impl InMemoryStockRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(product id, units)` pairs.
    pub fn with_stock(stock: impl IntoIterator<Item = (ProductId, i64)>) -> Self {
        Self {
            units: Arc::new(RwLock::new(stock.into_iter().collect())),
        }
    }

    /// Set the unit count for a product.
    pub async fn set_units(&self, product_id: ProductId, units: i64) {
        self.units.write().await.insert(product_id, units);
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn get_units(&self, product_id: &ProductId) -> Option<i64> {
        self.units.read().await.get(product_id).copied()
    }

    async fn decrement(
        &self,
        product_id: &ProductId,
        by: i64,
    ) -> Result<(), StockRepositoryError> {
        // Check and write under one lock so races cannot overdraw.
        let mut units = self.units.write().await;

        let current = units
            .get_mut(product_id)
            .ok_or(StockRepositoryError::ProductNotFound)?;

        if *current < by {
            return Err(StockRepositoryError::InsufficientStock);
        }

        *current -= by;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with(units: i64) -> InMemoryStockRepository {
        InMemoryStockRepository::with_stock([(ProductId::new("product-1"), units)])
    }

    #[tokio::test]
    async fn decrement_subtracts_units() {
        let repo = repo_with(12);
        let id = ProductId::new("product-1");

        repo.decrement(&id, 1).await.unwrap();

        assert_eq!(repo.get_units(&id).await, Some(11));
    }

    #[tokio::test]
    async fn decrement_refuses_to_go_negative() {
        let repo = repo_with(1);
        let id = ProductId::new("product-1");

        repo.decrement(&id, 2).await.unwrap_err();

        assert_eq!(repo.get_units(&id).await, Some(1));
    }

    #[tokio::test]
    async fn decrement_unknown_product_fails() {
        let repo = InMemoryStockRepository::new();

        let result = repo.decrement(&ProductId::new("missing"), 1).await;

        assert_eq!(result.unwrap_err(), StockRepositoryError::ProductNotFound);
    }

    #[tokio::test]
    async fn concurrent_decrements_never_overdraw() {
        let repo = repo_with(10);
        let id = ProductId::new("product-1");

        // 25 racers against 10 units: exactly 10 may win.
        let mut handles = Vec::new();
        for _ in 0..25 {
            let repo = repo.clone();
            let id = id.clone();
            handles.push(tokio::spawn(
                async move { repo.decrement(&id, 1).await },
            ));
        }

        let mut won = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                won += 1;
            }
        }

        assert_eq!(won, 10);
        assert_eq!(repo.get_units(&id).await, Some(0));
    }
}
