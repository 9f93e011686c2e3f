//! Transaction aggregate - the record of one checkout attempt.
//!
//! A transaction is created PENDING by StartCheckout and driven to a
//! terminal SUCCESS or FAILED exactly once by ConfirmCheckout. Terminal
//! transactions never change again; transactions are never deleted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProductId, Timestamp, TransactionId};

/// Name of the payment backend recorded on every transaction.
pub const PAYMENT_BACKEND: &str = "SANDBOX";

/// Lifecycle status of a transaction.
///
/// PENDING is the only non-terminal state. SUCCESS and FAILED are
/// terminal and mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

impl TransactionStatus {
    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionStatus::Success | TransactionStatus::Failed)
    }
}

/// Customer delivery details captured at checkout start.
///
/// Snapshot data: immutable once the transaction is created, and copied
/// onto the delivery record on the success path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

/// The record of one checkout attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub product_id: ProductId,
    pub status: TransactionStatus,

    /// Product price at checkout start, minor currency units.
    pub amount: i64,
    pub base_fee: i64,
    pub delivery_fee: i64,

    /// amount + base_fee + delivery_fee, computed once at creation.
    pub total: i64,

    /// Payment backend this transaction settles through.
    pub provider: String,

    /// The provider's id for the payment, set once it responds.
    pub provider_transaction_id: Option<String>,

    /// Populated only when the transaction is FAILED.
    pub failure_reason: Option<String>,

    pub customer: CustomerInfo,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Transaction {
    /// Creates a new PENDING transaction for a checkout attempt.
    ///
    /// `amount` is the product price; the total is fixed here and never
    /// recomputed.
    pub fn pending(
        id: TransactionId,
        product_id: ProductId,
        amount: i64,
        base_fee: i64,
        delivery_fee: i64,
        customer: CustomerInfo,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            product_id,
            status: TransactionStatus::Pending,
            amount,
            base_fee,
            delivery_fee,
            total: amount + base_fee + delivery_fee,
            provider: PAYMENT_BACKEND.to_string(),
            provider_transaction_id: None,
            failure_reason: None,
            customer,
            created_at: now,
            updated_at: now,
        }
    }

    /// True once the transaction has reached SUCCESS or FAILED.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Transitions to FAILED, recording why.
    ///
    /// `provider_transaction_id` is present when the provider responded
    /// with a business decline, absent on port-level failures.
    pub fn mark_failed(
        &mut self,
        reason: impl Into<String>,
        provider_transaction_id: Option<String>,
        now: Timestamp,
    ) {
        self.status = TransactionStatus::Failed;
        self.failure_reason = Some(reason.into());
        if provider_transaction_id.is_some() {
            self.provider_transaction_id = provider_transaction_id;
        }
        self.updated_at = now;
    }

    /// Transitions to SUCCESS, recording the provider's transaction id.
    pub fn mark_success(&mut self, provider_transaction_id: impl Into<String>, now: Timestamp) {
        self.status = TransactionStatus::Success;
        self.provider_transaction_id = Some(provider_transaction_id.into());
        self.updated_at = now;
    }
}
