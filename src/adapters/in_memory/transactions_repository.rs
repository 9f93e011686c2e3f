//! In-memory transactions repository adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::checkout::Transaction;
use crate::domain::foundation::TransactionId;
use crate::ports::{TransactionRepositoryError, TransactionsRepository};

/// In-memory transaction store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionsRepository {
    transactions: Arc<RwLock<HashMap<TransactionId, Transaction>>>,
}

impl InMemoryTransactionsRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transactions (useful in tests).
    pub async fn count(&self) -> usize {
        self.transactions.read().await.len()
    }
}

#[async_trait]
impl TransactionsRepository for InMemoryTransactionsRepository {
    async fn create_pending(
        &self,
        transaction: &Transaction,
    ) -> Result<Transaction, TransactionRepositoryError> {
        let mut transactions = self.transactions.write().await;
        if transactions.contains_key(&transaction.id) {
            return Err(TransactionRepositoryError::AlreadyExists);
        }
        transactions.insert(transaction.id, transaction.clone());
        Ok(transaction.clone())
    }

    async fn update(
        &self,
        transaction: &Transaction,
    ) -> Result<Transaction, TransactionRepositoryError> {
        let mut transactions = self.transactions.write().await;
        if !transactions.contains_key(&transaction.id) {
            return Err(TransactionRepositoryError::NotFound);
        }
        transactions.insert(transaction.id, transaction.clone());
        Ok(transaction.clone())
    }

    async fn get_by_id(
        &self,
        id: &TransactionId,
    ) -> Result<Option<Transaction>, TransactionRepositoryError> {
        Ok(self.transactions.read().await.get(id).cloned())
    }
}
