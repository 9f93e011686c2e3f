//! Delivery record created on the checkout success path.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DeliveryId, ProductId, TransactionId};

use super::Transaction;

/// Status of a delivery record. CREATED is the only value checkout
/// produces; downstream fulfillment owns later states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Created,
}

/// A delivery order for a successfully paid transaction.
///
/// Created at most once per transaction, only after payment succeeded
/// and stock was decremented. Customer fields are copied from the
/// transaction's snapshot at the moment of creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: DeliveryId,
    pub transaction_id: TransactionId,
    pub product_id: ProductId,
    pub status: DeliveryStatus,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub full_name: String,
}

impl Delivery {
    /// Builds the delivery record for a transaction, with a fresh id.
    pub fn for_transaction(id: DeliveryId, transaction: &Transaction) -> Self {
        Self {
            id,
            transaction_id: transaction.id,
            product_id: transaction.product_id.clone(),
            status: DeliveryStatus::Created,
            address: transaction.customer.address.clone(),
            city: transaction.customer.city.clone(),
            phone: transaction.customer.phone.clone(),
            full_name: transaction.customer.full_name.clone(),
        }
    }
}
