//! HTTP DTOs for product endpoints.

use serde::Serialize;

use crate::application::handlers::catalog::ProductWithStock;

/// Response for a product read: the product joined with its stock.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: i64,
}

impl From<ProductWithStock> for ProductResponse {
    fn from(value: ProductWithStock) -> Self {
        Self {
            id: value.product.id.to_string(),
            name: value.product.name,
            description: value.product.description,
            price: value.product.price,
            stock: value.stock,
        }
    }
}
