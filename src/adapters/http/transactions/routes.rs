//! Axum router configuration for transaction endpoints.

use axum::routing::get;
use axum::Router;

use super::super::AppState;
use super::handlers::get_transaction;

/// Create the transactions API router.
///
/// # Routes
///
/// - `GET /:id` - Poll a transaction's status
pub fn transactions_routes() -> Router<AppState> {
    Router::new().route("/:id", get(get_transaction))
}
