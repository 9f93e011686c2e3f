//! Deliveries repository port (write side).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::checkout::Delivery;

/// Errors from delivery persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryRepositoryError {
    /// A delivery with this id already exists. Defensive: delivery ids
    /// are generated fresh, so this indicates a generator or store
    /// problem.
    #[error("delivery already exists")]
    AlreadyExists,

    /// The backing store failed.
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Repository port for Delivery persistence.
#[async_trait]
pub trait DeliveriesRepository: Send + Sync {
    /// Persist a new delivery record.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if the id is already present
    /// - `DatabaseError` on persistence failure
    async fn create(&self, delivery: &Delivery) -> Result<Delivery, DeliveryRepositoryError>;
}
