//! In-memory product repository adapter.
//!
//! Backs the catalog with a plain map. Useful for tests and local
//! development; the store is constructed explicitly and injected, never
//! process-wide state.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::Product;
use crate::domain::foundation::ProductId;
use crate::ports::ProductRepository;

/// In-memory product store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given products.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect::<HashMap<_, _>>();
        Self {
            products: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace a product.
    pub async fn insert(&self, product: Product) {
        self.products.write().await.insert(product.id.clone(), product);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_by_id(&self, product_id: &ProductId) -> Option<Product> {
        self.products.read().await.get(product_id).cloned()
    }
}
