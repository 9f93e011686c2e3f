//! Checkout domain - transactions and deliveries.

mod delivery;
mod transaction;

pub use delivery::{Delivery, DeliveryStatus};
pub use transaction::{CustomerInfo, Transaction, TransactionStatus, PAYMENT_BACKEND};
