//! GetProductByIdHandler - Query handler for product + stock reads.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::catalog::Product;
use crate::domain::foundation::ProductId;
use crate::ports::{ProductRepository, StockRepository};

/// Query for a product with its current stock level.
#[derive(Debug, Clone)]
pub struct GetProductByIdQuery {
    pub product_id: ProductId,
}

/// A product joined with its current unit count.
#[derive(Debug, Clone)]
pub struct ProductWithStock {
    pub product: Product,
    pub stock: i64,
}

/// Errors that abort a product read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GetProductError {
    /// Either the product or its stock record is missing; a product
    /// without a stock record is not sellable and reads as absent.
    #[error("product not found")]
    ProductNotFound,
}

/// Handler for reading a product with stock.
pub struct GetProductByIdHandler {
    products: Arc<dyn ProductRepository>,
    stock: Arc<dyn StockRepository>,
}

impl GetProductByIdHandler {
    pub fn new(products: Arc<dyn ProductRepository>, stock: Arc<dyn StockRepository>) -> Self {
        Self { products, stock }
    }

    pub async fn handle(
        &self,
        query: GetProductByIdQuery,
    ) -> Result<ProductWithStock, GetProductError> {
        let product = self
            .products
            .get_by_id(&query.product_id)
            .await
            .ok_or(GetProductError::ProductNotFound)?;

        let stock = self
            .stock
            .get_units(&query.product_id)
            .await
            .ok_or(GetProductError::ProductNotFound)?;

        Ok(ProductWithStock { product, stock })
    }
}
