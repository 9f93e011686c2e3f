//! Axum router configuration for product endpoints.

use axum::routing::get;
use axum::Router;

use super::super::AppState;
use super::handlers::get_product;

/// Create the products API router.
///
/// # Routes
///
/// - `GET /:id` - Read a product with its current stock
pub fn products_routes() -> Router<AppState> {
    Router::new().route("/:id", get(get_product))
}
