//! StartCheckoutHandler - Command handler for opening a checkout attempt.
//!
//! Validates product and stock availability, fixes the price totals,
//! and creates the transaction in PENDING state. Availability is a
//! check only: no stock is reserved or decremented here.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::checkout::{CustomerInfo, Transaction};
use crate::domain::foundation::{ProductId, Timestamp, TransactionId};
use crate::ports::{ProductRepository, StockRepository, TransactionsRepository};

/// Command to start a checkout attempt.
///
/// Fees are supplied by the caller, not derived here; the server trusts
/// them as quoted.
#[derive(Debug, Clone)]
pub struct StartCheckoutCommand {
    pub product_id: ProductId,
    pub delivery_info: CustomerInfo,
    pub base_fee: i64,
    pub delivery_fee: i64,
}

/// Result of a successfully started checkout.
#[derive(Debug, Clone)]
pub struct StartCheckoutResult {
    pub transaction_id: TransactionId,
}

/// Errors that abort a start-checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartCheckoutError {
    #[error("product not found")]
    ProductNotFound,

    #[error("insufficient stock")]
    InsufficientStock,

    #[error("database error")]
    DatabaseError,
}

/// Handler for starting a checkout.
pub struct StartCheckoutHandler {
    products: Arc<dyn ProductRepository>,
    stock: Arc<dyn StockRepository>,
    transactions: Arc<dyn TransactionsRepository>,
}

impl StartCheckoutHandler {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        stock: Arc<dyn StockRepository>,
        transactions: Arc<dyn TransactionsRepository>,
    ) -> Self {
        Self {
            products,
            stock,
            transactions,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartCheckoutCommand,
    ) -> Result<StartCheckoutResult, StartCheckoutError> {
        // 1. The product must exist
        let product = self
            .products
            .get_by_id(&cmd.product_id)
            .await
            .ok_or(StartCheckoutError::ProductNotFound)?;

        // 2. Availability check only; nothing is reserved
        match self.stock.get_units(&cmd.product_id).await {
            Some(units) if units > 0 => {}
            _ => return Err(StartCheckoutError::InsufficientStock),
        }

        // 3-4. Fix the totals and build the PENDING transaction
        let transaction = Transaction::pending(
            TransactionId::new(),
            cmd.product_id,
            product.price,
            cmd.base_fee,
            cmd.delivery_fee,
            cmd.delivery_info,
            Timestamp::now(),
        );

        // 5. Create-if-absent; a collision means the id generator or the
        // store is in an unexpected state, so it maps to DatabaseError
        // like any other persistence failure.
        let created = self
            .transactions
            .create_pending(&transaction)
            .await
            .map_err(|_| StartCheckoutError::DatabaseError)?;

        tracing::info!(
            transaction_id = %created.id,
            product_id = %created.product_id,
            total = created.total,
            "checkout started"
        );

        Ok(StartCheckoutResult {
            transaction_id: created.id,
        })
    }
}
