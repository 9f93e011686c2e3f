//! Stock repository port.
//!
//! Stock is a unit count per product. The only mutation is `decrement`,
//! which must be atomic with respect to concurrent decrements for the
//! same product: implementations either serialize (a write lock) or use
//! a conditional update, so stock can never go negative under races.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ProductId;

/// Errors from stock mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockRepositoryError {
    /// Fewer units on hand than the requested decrement.
    #[error("insufficient stock")]
    InsufficientStock,

    /// No stock record exists for the product.
    #[error("product not found")]
    ProductNotFound,

    /// The backing store failed.
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Repository port for stock levels.
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Current unit count for a product, or `None` when no stock record
    /// exists.
    async fn get_units(&self, product_id: &ProductId) -> Option<i64>;

    /// Atomically subtract `by` units from the product's stock.
    ///
    /// # Errors
    ///
    /// - `InsufficientStock` if the decrement would go below zero
    /// - `ProductNotFound` if no stock record exists
    /// - `DatabaseError` on persistence failure
    async fn decrement(&self, product_id: &ProductId, by: i64)
        -> Result<(), StockRepositoryError>;
}
