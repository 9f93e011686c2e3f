//! GetTransactionStatusHandler - Query handler for transaction polling.
//!
//! The client polls this after a confirm call that came back still
//! PENDING (asynchronous settlement at the provider).

use std::sync::Arc;

use thiserror::Error;

use crate::domain::checkout::Transaction;
use crate::domain::foundation::TransactionId;
use crate::ports::TransactionsRepository;

/// Query for a transaction's current state.
#[derive(Debug, Clone)]
pub struct GetTransactionStatusQuery {
    pub transaction_id: TransactionId,
}

/// Errors that abort a transaction read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GetTransactionStatusError {
    #[error("transaction not found")]
    TransactionNotFound,

    #[error("database error")]
    DatabaseError,
}

/// Handler for reading a transaction.
pub struct GetTransactionStatusHandler {
    transactions: Arc<dyn TransactionsRepository>,
}

impl GetTransactionStatusHandler {
    pub fn new(transactions: Arc<dyn TransactionsRepository>) -> Self {
        Self { transactions }
    }

    pub async fn handle(
        &self,
        query: GetTransactionStatusQuery,
    ) -> Result<Transaction, GetTransactionStatusError> {
        self.transactions
            .get_by_id(&query.transaction_id)
            .await
            .map_err(|_| GetTransactionStatusError::DatabaseError)?
            .ok_or(GetTransactionStatusError::TransactionNotFound)
    }
}
