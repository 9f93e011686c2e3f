//! Foundation value objects shared across the domain.

mod ids;
mod timestamp;

pub use ids::{DeliveryId, ProductId, TransactionId};
pub use timestamp::Timestamp;
