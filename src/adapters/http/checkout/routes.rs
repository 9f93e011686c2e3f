//! Axum router configuration for checkout endpoints.

use axum::routing::post;
use axum::Router;

use super::super::AppState;
use super::handlers::{confirm_checkout, start_checkout};

/// Create the checkout API router.
///
/// # Routes
///
/// - `POST /start` - Open a checkout and create a PENDING transaction
/// - `POST /confirm` - Drive a transaction to its terminal state
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/start", post(start_checkout))
        .route("/confirm", post(confirm_checkout))
}
