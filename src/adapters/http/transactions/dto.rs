//! HTTP DTOs for transaction endpoints.

use serde::Serialize;

use crate::domain::checkout::{Transaction, TransactionStatus};

/// Response for a transaction status poll.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusResponse {
    pub transaction_id: String,
    pub status: TransactionStatus,
    pub total: i64,
    pub failure_reason: Option<String>,
}

impl From<Transaction> for TransactionStatusResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            transaction_id: transaction.id.to_string(),
            status: transaction.status,
            total: transaction.total,
            failure_reason: transaction.failure_reason,
        }
    }
}
