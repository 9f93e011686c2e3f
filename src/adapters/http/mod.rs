//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own dto/handlers/routes module; they share
//! one [`AppState`] carrying the Arc'd ports and build their use-case
//! handlers on demand from it.

pub mod checkout;
pub mod products;
pub mod transactions;

mod error;

pub use error::ErrorResponse;

use std::sync::Arc;

use axum::Router;

use crate::application::handlers::catalog::GetProductByIdHandler;
use crate::application::handlers::checkout::{ConfirmCheckoutHandler, StartCheckoutHandler};
use crate::application::handlers::transactions::GetTransactionStatusHandler;
use crate::ports::{
    DeliveriesRepository, PaymentProvider, ProductRepository, StockRepository,
    TransactionsRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; all dependencies are Arc-wrapped for cheap
/// sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub stock: Arc<dyn StockRepository>,
    pub transactions: Arc<dyn TransactionsRepository>,
    pub deliveries: Arc<dyn DeliveriesRepository>,
    pub payment_provider: Arc<dyn PaymentProvider>,

    /// ISO 4217 code every payment settles in.
    pub settlement_currency: String,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn start_checkout_handler(&self) -> StartCheckoutHandler {
        StartCheckoutHandler::new(
            self.products.clone(),
            self.stock.clone(),
            self.transactions.clone(),
        )
    }

    pub fn confirm_checkout_handler(&self) -> ConfirmCheckoutHandler {
        ConfirmCheckoutHandler::new(
            self.transactions.clone(),
            self.payment_provider.clone(),
            self.stock.clone(),
            self.deliveries.clone(),
            self.settlement_currency.clone(),
        )
    }

    pub fn get_product_handler(&self) -> GetProductByIdHandler {
        GetProductByIdHandler::new(self.products.clone(), self.stock.clone())
    }

    pub fn get_transaction_status_handler(&self) -> GetTransactionStatusHandler {
        GetTransactionStatusHandler::new(self.transactions.clone())
    }
}

/// Create the complete API router.
///
/// # Example
///
/// ```ignore
/// let app = api_router(state);
/// axum::serve(listener, app).await?;
/// ```
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/checkout", checkout::checkout_routes())
        .nest("/products", products::products_routes())
        .nest("/transactions", transactions::transactions_routes())
        .with_state(state)
}
