//! Transactions repository port (write side).
//!
//! Persists the Transaction aggregate. `create_pending` is
//! create-if-absent, the at-most-once creation guarantee the checkout
//! flow relies on; `get_by_id` treats absence as a plain empty result,
//! never an error.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::checkout::Transaction;
use crate::domain::foundation::TransactionId;

/// Errors from transaction persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionRepositoryError {
    /// A transaction with this id already exists (`create_pending`).
    #[error("transaction already exists")]
    AlreadyExists,

    /// No transaction with this id exists (`update`).
    #[error("transaction not found")]
    NotFound,

    /// The backing store failed.
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Repository port for Transaction persistence.
#[async_trait]
pub trait TransactionsRepository: Send + Sync {
    /// Persist a freshly created PENDING transaction.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the id is already present
    /// - `DatabaseError` on persistence failure
    async fn create_pending(
        &self,
        transaction: &Transaction,
    ) -> Result<Transaction, TransactionRepositoryError>;

    /// Persist the current state of an existing transaction.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the transaction does not exist
    /// - `DatabaseError` on persistence failure
    async fn update(
        &self,
        transaction: &Transaction,
    ) -> Result<Transaction, TransactionRepositoryError>;

    /// Fetch a transaction by id.
    ///
    /// Absence is not an error: returns `Ok(None)` for an unknown id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on lookup failure
    async fn get_by_id(
        &self,
        id: &TransactionId,
    ) -> Result<Option<Transaction>, TransactionRepositoryError>;
}
